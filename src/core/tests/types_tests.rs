use crate::core::{classes, ElementId, ParseElementIdError, Placement};

#[test]
fn test_element_id_display() {
    assert_eq!(format!("{}", ElementId::TimeAndDuration), "time_and_duration");
    assert_eq!(format!("{}", ElementId::OverflowMenu), "overflow_menu");
    assert_eq!(format!("{}", ElementId::Quality), "quality");
}

#[test]
fn test_element_id_parses_every_token() {
    for id in ElementId::ALL {
        assert_eq!(id.as_str().parse::<ElementId>(), Ok(id));
    }
}

#[test]
fn test_unknown_token_rejected() {
    let err = "Foo".parse::<ElementId>().unwrap_err();
    assert_eq!(err, ParseElementIdError("Foo".to_string()));
    assert_eq!(err.to_string(), "Unknown element id 'Foo'");

    // Tokens are case-sensitive
    assert!("Mute".parse::<ElementId>().is_err());
}

#[test]
fn test_placements() {
    assert_eq!(ElementId::Mute.placement(), Placement::ControlPanel);
    assert_eq!(ElementId::OverflowMenu.placement(), Placement::ControlPanel);
    assert_eq!(ElementId::Cast.placement(), Placement::OverflowMenu);
    assert_eq!(ElementId::Language.placement(), Placement::OverflowMenu);
    assert_eq!(Placement::OverflowMenu.to_string(), "overflow menu");
}

#[test]
fn test_class_names_are_distinct() {
    let mut names: Vec<&str> = ElementId::ALL.iter().map(|id| id.class_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ElementId::ALL.len());
}

#[test]
fn test_submenu_classes() {
    assert_eq!(ElementId::Quality.submenu_class(), Some(classes::RESOLUTIONS));
    assert_eq!(ElementId::Language.submenu_class(), Some(classes::AUDIO_LANGUAGES));
    assert_eq!(ElementId::Captions.submenu_class(), Some(classes::TEXT_LANGUAGES));
    assert_eq!(ElementId::Cast.submenu_class(), None);
    assert_eq!(ElementId::Mute.submenu_class(), None);
}

#[test]
fn test_serde_uses_wire_tokens() {
    let json = serde_json::to_string(&[ElementId::TimeAndDuration, ElementId::Cast]).unwrap();
    assert_eq!(json, r#"["time_and_duration","cast"]"#);

    let back: Vec<ElementId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![ElementId::TimeAndDuration, ElementId::Cast]);
}
