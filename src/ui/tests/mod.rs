//! UI module tests
//!
//! - Customization scenarios (which controls exist, in which order)
//! - Assembler behaviour (structure, atomicity, listener wiring)
//! - Layout adjustment
//! - Controller lifecycle (re-configuration, release)
//! - Renderings
//! - Config file watching

use crate::core::{Document, NodeId, Tag};

#[cfg(test)]
mod render_tests;

/// Helper: `body > container > video`, as a page embedding one player
fn player() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let container = doc.create_element(Tag::Div);
    let video = doc.create_video_element();
    doc.append_child(doc.body(), container).unwrap();
    doc.append_child(container, video).unwrap();
    (doc, container, video)
}
