use crate::core::{
    classes,
    events::{self, format_time, is_muted, ATTR_CURRENT_TIME, ATTR_DURATION, ATTR_FULLSCREEN, ATTR_MAX, ATTR_VALUE},
    Document, DomEvent, NodeId, Reaction, Tag,
};

fn player() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let container = doc.create_element(Tag::Div);
    let video = doc.create_video_element();
    doc.append_child(doc.body(), container).unwrap();
    doc.append_child(container, video).unwrap();
    (doc, container, video)
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(9.9), "0:09");
    assert_eq!(format_time(75.0), "1:15");
    assert_eq!(format_time(3599.0), "59:59");
    assert_eq!(format_time(3600.0), "1:00:00");
    assert_eq!(format_time(3725.0), "1:02:05");
    assert_eq!(format_time(-4.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
}

#[test]
fn test_toggle_mute_notifies_listeners() {
    let (mut doc, _container, video) = player();
    let button = doc.create_element(Tag::Button);
    doc.add_listener(button, DomEvent::Click, button, Reaction::ToggleMute { media: video })
        .unwrap();
    doc.add_listener(video, DomEvent::VolumeChange, button, Reaction::SyncMuteIcon { media: video })
        .unwrap();

    doc.click(button).unwrap();
    assert!(is_muted(&doc, video));
    assert_eq!(doc.text(button), Some(events::ICON_VOLUME_OFF));

    doc.click(button).unwrap();
    assert!(!is_muted(&doc, video));
    assert_eq!(doc.text(button), Some(events::ICON_VOLUME_UP));
}

#[test]
fn test_sync_volume_reads_zero_when_muted() {
    let (mut doc, _container, video) = player();
    let bar = doc.create_element(Tag::Input);
    doc.set_attribute(video, "volume", "0.5").unwrap();

    events::apply(&mut doc, bar, Reaction::SyncVolume { media: video }).unwrap();
    assert_eq!(doc.attribute(bar, ATTR_VALUE), Some("0.5"));

    doc.set_attribute(video, events::ATTR_MUTED, "").unwrap();
    events::apply(&mut doc, bar, Reaction::SyncVolume { media: video }).unwrap();
    assert_eq!(doc.attribute(bar, ATTR_VALUE), Some("0"));
}

#[test]
fn test_sync_time_and_seek_bar() {
    let (mut doc, _container, video) = player();
    let label = doc.create_element(Tag::Div);
    let bar = doc.create_element(Tag::Input);
    doc.add_listener(video, DomEvent::TimeUpdate, label, Reaction::SyncTime { media: video })
        .unwrap();
    doc.add_listener(video, DomEvent::TimeUpdate, bar, Reaction::SyncSeekBar { media: video })
        .unwrap();

    doc.set_attribute(video, ATTR_CURRENT_TIME, "65").unwrap();
    doc.set_attribute(video, ATTR_DURATION, "3700").unwrap();
    assert_eq!(doc.dispatch(video, DomEvent::TimeUpdate), Ok(2));

    assert_eq!(doc.text(label), Some("1:05 / 1:01:40"));
    assert_eq!(doc.attribute(bar, ATTR_VALUE), Some("65"));
    assert_eq!(doc.attribute(bar, ATTR_MAX), Some("3700"));
}

#[test]
fn test_garbage_media_attributes_read_as_zero() {
    let (mut doc, _container, video) = player();
    let label = doc.create_element(Tag::Div);
    doc.set_attribute(video, ATTR_CURRENT_TIME, "soon").unwrap();
    doc.set_attribute(video, ATTR_DURATION, "-10").unwrap();

    events::apply(&mut doc, label, Reaction::SyncTime { media: video }).unwrap();
    assert_eq!(doc.text(label), Some("0:00 / 0:00"));
}

#[test]
fn test_toggle_fullscreen() {
    let (mut doc, container, _video) = player();
    let button = doc.create_element(Tag::Button);
    doc.add_listener(button, DomEvent::Click, button, Reaction::ToggleFullscreen { container })
        .unwrap();

    doc.click(button).unwrap();
    assert!(doc.attribute(container, ATTR_FULLSCREEN).is_some());
    assert_eq!(doc.text(button), Some(events::ICON_FULLSCREEN_EXIT));

    doc.click(button).unwrap();
    assert!(doc.attribute(container, ATTR_FULLSCREEN).is_none());
    assert_eq!(doc.text(button), Some(events::ICON_FULLSCREEN));
}

#[test]
fn test_menu_and_submenu_visibility() {
    let mut doc = Document::new();
    let menu = doc.create_element_with_classes(Tag::Div, &[classes::OVERFLOW_MENU, classes::HIDDEN]);
    let submenu = doc.create_element_with_classes(Tag::Div, &[classes::RESOLUTIONS, classes::HIDDEN]);
    let open = doc.create_element(Tag::Button);
    let quality = doc.create_element(Tag::Button);
    doc.add_listener(open, DomEvent::Click, open, Reaction::ToggleMenu { menu })
        .unwrap();
    doc.add_listener(
        quality,
        DomEvent::Click,
        quality,
        Reaction::OpenSubmenu { overflow_menu: menu, submenu },
    )
    .unwrap();

    doc.click(open).unwrap();
    assert!(!doc.has_class(menu, classes::HIDDEN));

    doc.click(quality).unwrap();
    assert!(doc.has_class(menu, classes::HIDDEN));
    assert!(!doc.has_class(submenu, classes::HIDDEN));
}
