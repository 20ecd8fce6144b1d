use super::player;
use crate::config::Configuration;
use crate::core::{classes, Document, ElementId, Tag};
use crate::ui::builders::PanelAssembler;
use crate::ui::components::standard_registry;
use crate::ui::render::{render_html, render_outline};

#[test]
fn test_outline_of_small_panel() {
    let (mut doc, container, video) = player();
    let config = Configuration {
        control_panel_elements: vec![ElementId::Fullscreen],
        overflow_menu_buttons: vec![],
        add_seek_bar: false,
    };
    let panel = PanelAssembler::new(standard_registry().unwrap())
        .assemble(&mut doc, container, video, &config)
        .unwrap();

    let outline = render_outline(&doc, panel.root().unwrap());
    assert_eq!(
        outline,
        concat!(
            "div.shaka-controls-container\n",
            "  div.shaka-bottom-controls\n",
            "    div.shaka-controls-button-panel\n",
            "      button.shaka-fullscreen-button \"fullscreen\"\n",
        )
    );
}

#[test]
fn test_outline_shows_attributes() {
    let mut doc = Document::new();
    let video = doc.create_video_element();

    assert_eq!(
        render_outline(&doc, video),
        "video [current-time=0 duration=0 volume=1]\n"
    );
}

#[test]
fn test_html_rendering() {
    let mut doc = Document::new();
    let root = doc.create_element_with_classes(Tag::Div, &[classes::OVERFLOW_MENU, classes::HIDDEN]);
    let button = doc.create_element_with_classes(Tag::Button, &[classes::CAST_BUTTON]);
    let input = doc.create_element_with_classes(Tag::Input, &[classes::SEEK_BAR]);
    doc.set_text(button, "Cast <tv> & more").unwrap();
    doc.set_attribute(input, "type", "range").unwrap();
    doc.append_child(root, button).unwrap();
    doc.append_child(root, input).unwrap();

    assert_eq!(
        render_html(&doc, root),
        concat!(
            "<div class=\"shaka-overflow-menu shaka-hidden\">\n",
            "  <button class=\"shaka-cast-button\">Cast &lt;tv&gt; &amp; more</button>\n",
            "  <input class=\"shaka-seek-bar\" type=\"range\">\n",
            "</div>\n",
        )
    );
}

#[test]
fn test_rendering_missing_node_is_empty() {
    let mut doc = Document::new();
    let gone = doc.create_element(Tag::Div);
    doc.remove(gone).unwrap();

    assert!(render_outline(&doc, gone).is_empty());
    assert!(render_html(&doc, gone).is_empty());
}
