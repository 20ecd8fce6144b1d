use serde_json::json;

use crate::config::{ConfigError, ConfigResolver, Configuration, PartialConfiguration};
use crate::core::{DomError, Element, ElementId, ElementRegistry, FactoryContext, Tag};
use crate::ui::components::standard_registry;

fn resolve(partial: &PartialConfiguration) -> Result<Configuration, ConfigError> {
    ConfigResolver::new(standard_registry().unwrap()).resolve(partial)
}

fn field_of(err: &ConfigError) -> &str {
    match err {
        ConfigError::InvalidConfig { field, .. } => field,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_empty_partial_yields_defaults() {
    let config = resolve(&PartialConfiguration::new()).unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(
        config.control_panel_elements,
        vec![
            ElementId::TimeAndDuration,
            ElementId::Mute,
            ElementId::Volume,
            ElementId::Fullscreen,
            ElementId::OverflowMenu,
        ]
    );
    assert_eq!(
        config.overflow_menu_buttons,
        vec![ElementId::Captions, ElementId::Quality, ElementId::Language, ElementId::Cast]
    );
    assert!(config.add_seek_bar);
}

#[test]
fn test_omitted_fields_inherit_defaults() {
    let partial = PartialConfiguration::new().control_panel_elements(["mute"]);
    let config = resolve(&partial).unwrap();

    assert_eq!(config.control_panel_elements, vec![ElementId::Mute]);
    assert_eq!(config.overflow_menu_buttons, Configuration::default().overflow_menu_buttons);
    assert!(config.add_seek_bar);
}

#[test]
fn test_order_is_preserved() {
    let partial = PartialConfiguration::new().control_panel_elements(["fullscreen", "mute", "time_and_duration"]);
    let config = resolve(&partial).unwrap();

    assert_eq!(
        config.control_panel_elements,
        vec![ElementId::Fullscreen, ElementId::Mute, ElementId::TimeAndDuration]
    );
}

#[test]
fn test_empty_lists_are_kept_empty() {
    let partial = PartialConfiguration::new()
        .control_panel_elements(Vec::<String>::new())
        .overflow_menu_buttons(Vec::<String>::new());
    let config = resolve(&partial).unwrap();

    assert!(config.control_panel_elements.is_empty());
    assert!(config.overflow_menu_buttons.is_empty());
    assert!(!config.has_overflow_menu());
}

#[test]
fn test_unknown_id_rejected() {
    let partial = PartialConfiguration::new().control_panel_elements(["Foo"]);
    let err = resolve(&partial).unwrap_err();

    assert!(err.is_invalid_config());
    assert_eq!(field_of(&err), "controlPanelElements");
    assert!(err.to_string().contains("Foo"));
}

#[test]
fn test_id_in_wrong_list_rejected() {
    let err = resolve(&PartialConfiguration::new().control_panel_elements(["cast"])).unwrap_err();
    assert_eq!(field_of(&err), "controlPanelElements");

    let err = resolve(&PartialConfiguration::new().overflow_menu_buttons(["mute"])).unwrap_err();
    assert_eq!(field_of(&err), "overflowMenuButtons");
}

#[test]
fn test_duplicates_allowed() {
    let partial = PartialConfiguration::new().control_panel_elements(["mute", "mute"]);
    let config = resolve(&partial).unwrap();
    assert_eq!(config.control_panel_elements, vec![ElementId::Mute, ElementId::Mute]);
}

#[test]
fn test_custom_registry_rejects_unregistered_ids() {
    fn button(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
        Ok(Element::new(ctx.document.create_element(Tag::Button)))
    }

    let registry = ElementRegistry::builder()
        .register(ElementId::Mute, button)
        .unwrap()
        .build();
    let resolver = ConfigResolver::new(&registry);

    let partial = PartialConfiguration::new()
        .control_panel_elements(["mute"])
        .overflow_menu_buttons(Vec::<String>::new());
    assert!(resolver.resolve(&partial).is_ok());

    let partial = PartialConfiguration::new()
        .control_panel_elements(["mute", "volume"])
        .overflow_menu_buttons(Vec::<String>::new());
    let err = resolver.resolve(&partial).unwrap_err();
    assert!(err.to_string().contains("not registered"));

    // Defaults are checked as well
    let err = resolver.resolve(&PartialConfiguration::new()).unwrap_err();
    assert_eq!(field_of(&err), "controlPanelElements");
}

#[test]
fn test_merge_prefers_later_fields() {
    let base = PartialConfiguration::new()
        .control_panel_elements(["mute"])
        .add_seek_bar(false);
    let over = PartialConfiguration::new().add_seek_bar(true);

    let merged = base.merge(over);
    assert_eq!(merged.control_panel_elements, Some(vec!["mute".to_string()]));
    assert_eq!(merged.add_seek_bar, Some(true));
    assert_eq!(merged.overflow_menu_buttons, None);
}

#[test]
fn test_from_value_reads_known_keys() {
    let value = json!({
        "controlPanelElements": ["mute", "overflow_menu"],
        "addSeekBar": false,
        "somethingElse": 42
    });

    let partial = PartialConfiguration::from_value(&value).unwrap();
    assert_eq!(
        partial.control_panel_elements,
        Some(vec!["mute".to_string(), "overflow_menu".to_string()])
    );
    assert_eq!(partial.overflow_menu_buttons, None);
    assert_eq!(partial.add_seek_bar, Some(false));
}

#[test]
fn test_from_value_rejects_bad_shapes() {
    let err = PartialConfiguration::from_value(&json!({ "addSeekBar": "no" })).unwrap_err();
    assert_eq!(field_of(&err), "addSeekBar");

    let err = PartialConfiguration::from_value(&json!({ "controlPanelElements": "mute" })).unwrap_err();
    assert_eq!(field_of(&err), "controlPanelElements");

    let err = PartialConfiguration::from_value(&json!({ "overflowMenuButtons": ["cast", 3] })).unwrap_err();
    assert_eq!(field_of(&err), "overflowMenuButtons");
    assert!(err.to_string().contains("entry 1"));

    let err = PartialConfiguration::from_value(&json!(["mute"])).unwrap_err();
    assert_eq!(field_of(&err), "<root>");
}

#[test]
fn test_configuration_json_uses_camel_case() {
    let json = Configuration::default().to_json_pretty().unwrap();
    assert!(json.contains("\"controlPanelElements\""));
    assert!(json.contains("\"overflowMenuButtons\""));
    assert!(json.contains("\"addSeekBar\": true"));
    assert!(json.contains("\"time_and_duration\""));
}

#[test]
fn test_check_placement_on_hand_built_configuration() {
    assert!(Configuration::default().check_placement().is_ok());

    let config = Configuration {
        overflow_menu_buttons: vec![ElementId::Cast, ElementId::Mute],
        ..Configuration::default()
    };
    match config.check_placement() {
        Err(ConfigError::InvalidConfig { field, reason }) => {
            assert_eq!(field, "overflowMenuButtons");
            assert!(reason.contains("entry 1"));
        }
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}
