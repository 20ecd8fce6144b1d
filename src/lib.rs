// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Media Panel Builder
//!
//! Declarative assembly of media-player control panels. Callers describe
//! which controls they want, in which order, and whether a seek bar is
//! shown; the crate builds the matching element subtree under a player's
//! container and keeps its layout consistent with that description.
//!
//! # Features
//!
//! - **Element Registry:** Maps element ids to factories; checked up front
//! - **Configuration Resolver:** Merges partial configurations over defaults
//! - **Panel Assembler:** Builds off-tree, attaches in one step, rolls back on failure
//! - **Layout Adjuster:** Lowers floating menus when there is no seek bar
//! - **Live Reload:** Watches a JSON configuration file and re-assembles
//! - **GTK4 Preview:** Optional (`gui` feature)
//!
//! # Architecture
//!
//! - **`core`:** Element ids, class names, the element tree and the registry
//! - **`config`:** Configuration model, resolution, overrides and file I/O
//! - **`ui`:** Standard components, assembler, layout, controller, rendering
//!
//! # Examples
//!
//! ## Assembling a panel
//!
//! ```
//! use media_panel_builder::config::{ConfigResolver, PartialConfiguration};
//! use media_panel_builder::core::{classes, Document, Tag};
//! use media_panel_builder::ui::{components::standard_registry, PanelAssembler};
//!
//! let mut doc = Document::new();
//! let container = doc.create_element(Tag::Div);
//! let video = doc.create_video_element();
//! doc.append_child(doc.body(), container)?;
//! doc.append_child(container, video)?;
//!
//! let registry = standard_registry()?;
//! let partial = PartialConfiguration::new()
//!     .control_panel_elements(["mute", "overflow_menu"])
//!     .overflow_menu_buttons(["cast"])
//!     .add_seek_bar(false);
//! let config = ConfigResolver::new(registry).resolve(&partial)?;
//!
//! let panel = PanelAssembler::new(registry).assemble(&mut doc, container, video, &config)?;
//! let menu = panel.overflow_menu().expect("overflow menu configured");
//! assert!(doc.has_class(menu, classes::LOW_POSITION));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Rendering
//!
//! ```no_run
//! # use media_panel_builder::core::Document;
//! use media_panel_builder::ui::render::render_outline;
//!
//! # let doc = Document::new();
//! println!("{}", render_outline(&doc, doc.body()));
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::config::{ConfigResolver, Configuration, PartialConfiguration};
pub use crate::core::{Document, ElementId, ElementRegistry, NodeId};
pub use crate::ui::{AssembledPanel, Controller, PanelAssembler};
