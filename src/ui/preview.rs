// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! GTK4 preview of an assembled panel
//!
//! Maps each node onto a widget and copies its classes across as CSS
//! classes, so the same `shaka-*` selectors style both renderings:
//!
//! ```text
//! div    → gtk4::Box (horizontal for the button row, vertical otherwise)
//! button → gtk4::Button
//! span   → gtk4::Label
//! input  → gtk4::Scale
//! video  → placeholder gtk4::Label
//! ```
//!
//! Nodes carrying `shaka-hidden` start invisible.

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider, Orientation, Widget};
use log::warn;
use std::rc::Rc;

use crate::core::{classes, events, Document, NodeId, Tag};

/// Owned snapshot of a subtree, detached from the document
#[derive(Clone, Debug)]
pub struct PreviewNode {
    tag: Tag,
    classes: Vec<String>,
    text: Option<String>,
    range: Option<(f64, f64)>,
    children: Vec<PreviewNode>,
}

impl PreviewNode {
    /// Copies `root` and its descendants out of `document`
    pub fn snapshot(document: &Document, root: NodeId) -> Option<Self> {
        let node = document.node(root)?;

        let range = (node.tag() == Tag::Input).then(|| {
            let read = |name: &str| {
                node.attribute(name)
                    .and_then(|v| v.parse::<f64>().ok())
                    .unwrap_or(0.0)
            };
            (read(events::ATTR_VALUE), read(events::ATTR_MAX))
        });

        Some(Self {
            tag: node.tag(),
            classes: node.classes().to_vec(),
            text: node.text().map(str::to_string),
            range,
            children: node
                .children()
                .iter()
                .filter_map(|&child| Self::snapshot(document, child))
                .collect(),
        })
    }

    fn build_widget(&self) -> Widget {
        let widget: Widget = match self.tag {
            Tag::Button => gtk4::Button::with_label(self.text.as_deref().unwrap_or("")).upcast(),
            Tag::Span => gtk4::Label::new(self.text.as_deref()).upcast(),
            Tag::Video => gtk4::Label::new(Some("[video]")).upcast(),
            Tag::Input => {
                let (value, max) = self.range.unwrap_or((0.0, 0.0));
                let scale = gtk4::Scale::with_range(Orientation::Horizontal, 0.0, max.max(1.0), 1.0);
                scale.set_value(value);
                scale.set_hexpand(true);
                scale.upcast()
            }
            Tag::Body | Tag::Div => {
                let orientation = if self.classes.iter().any(|c| c == classes::CONTROLS_BUTTON_PANEL) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let container = gtk4::Box::new(orientation, 4);
                for child in &self.children {
                    container.append(&child.build_widget());
                }
                container.upcast()
            }
        };

        for class in &self.classes {
            widget.add_css_class(class);
        }
        if self.classes.iter().any(|c| c == classes::HIDDEN) {
            widget.set_visible(false);
        }

        widget
    }
}

/// Opens a window showing `root`; blocks until it is closed
pub fn run_preview(document: &Document, root: NodeId, title: &str) -> glib::ExitCode {
    let Some(snapshot) = PreviewNode::snapshot(document, root) else {
        warn!("Nothing to preview: node {} does not exist", root);
        return glib::ExitCode::FAILURE;
    };
    let snapshot = Rc::new(snapshot);
    let title = title.to_string();

    let app = Application::builder()
        .application_id("io.github.media_panel_builder.Preview")
        .build();

    app.connect_activate(move |app| {
        load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(title.as_str())
            .default_width(640)
            .default_height(160)
            .build();

        window.set_child(Some(&snapshot.build_widget()));
        window.present();
    });

    app.run_with_args::<&str>(&[])
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_string(include_str!("preview.css"));

    match gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("No display available; preview styles not loaded"),
    }
}
