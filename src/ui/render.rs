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

//! Text renderings of a document subtree
//!
//! Two formats:
//! - **Outline**: one line per node, `tag.class.class "text" [attr=value]`,
//!   indented two spaces per level. Used by the CLI and handy in test output.
//! - **HTML**: a static snapshot with the same class names, suitable for
//!   dropping next to a stylesheet.

use std::fmt::Write;

use crate::core::{Document, NodeId, Tag};

/// Renders `root` and its descendants as an indented outline
///
/// # Example
///
/// ```
/// use media_panel_builder::core::{Document, Tag};
/// use media_panel_builder::ui::render::render_outline;
///
/// let mut doc = Document::new();
/// let panel = doc.create_element_with_classes(Tag::Div, &["shaka-controls-button-panel"]);
/// let button = doc.create_element_with_classes(Tag::Button, &["shaka-mute-button"]);
/// doc.set_text(button, "volume_up")?;
/// doc.append_child(panel, button)?;
///
/// assert_eq!(
///     render_outline(&doc, panel),
///     "div.shaka-controls-button-panel\n  button.shaka-mute-button \"volume_up\"\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_outline(document: &Document, root: NodeId) -> String {
    let mut out = String::new();
    outline_node(document, root, 0, &mut out);
    out
}

fn outline_node(document: &Document, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = document.node(id) else {
        return;
    };

    out.push_str(&"  ".repeat(depth));
    out.push_str(node.tag().as_str());
    for class in node.classes() {
        out.push('.');
        out.push_str(class);
    }
    if let Some(text) = node.text() {
        let _ = write!(out, " {:?}", text);
    }
    if !node.attributes().is_empty() {
        let attrs: Vec<String> = node
            .attributes()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        let _ = write!(out, " [{}]", attrs.join(" "));
    }
    out.push('\n');

    for &child in node.children() {
        outline_node(document, child, depth + 1, out);
    }
}

/// Renders `root` and its descendants as indented HTML
pub fn render_html(document: &Document, root: NodeId) -> String {
    let mut out = String::new();
    html_node(document, root, 0, &mut out);
    out
}

fn html_node(document: &Document, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = document.node(id) else {
        return;
    };

    let indent = "  ".repeat(depth);
    let tag = node.tag().as_str();

    let _ = write!(out, "{}<{}", indent, tag);
    if !node.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&node.class_name()));
    }
    for (name, value) in node.attributes() {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }

    // Void element: no content, no closing tag
    if node.tag() == Tag::Input {
        out.push_str(">\n");
        return;
    }

    let text = node.text().map(escape).unwrap_or_default();
    if node.children().is_empty() {
        let _ = writeln!(out, ">{}</{}>", text, tag);
        return;
    }

    out.push_str(">\n");
    if !text.is_empty() {
        let _ = writeln!(out, "{}  {}", indent, text);
    }
    for &child in node.children() {
        html_node(document, child, depth + 1, out);
    }
    let _ = writeln!(out, "{}</{}>", indent, tag);
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
