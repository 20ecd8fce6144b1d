use crate::core::{
    Document, DomError, Element, ElementId, ElementRegistry, FactoryContext, RegistryError, Tag,
};

fn button_factory(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    Ok(Element::new(ctx.document.create_element(Tag::Button)))
}

#[test]
fn test_empty_registry() {
    let registry = ElementRegistry::builder().build();
    assert!(registry.is_empty());
    assert!(registry.ids().is_empty());
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = ElementRegistry::builder()
        .register(ElementId::Mute, button_factory)
        .and_then(|b| b.register(ElementId::Mute, button_factory));

    assert_eq!(result.err(), Some(RegistryError::DuplicateId(ElementId::Mute)));
}

#[test]
fn test_ids_in_canonical_order() {
    let registry = ElementRegistry::builder()
        .register(ElementId::Cast, button_factory)
        .unwrap()
        .register(ElementId::Mute, button_factory)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.ids(), vec![ElementId::Mute, ElementId::Cast]);
}

#[test]
fn test_check_reports_first_missing_id() {
    let registry = ElementRegistry::builder()
        .register(ElementId::Mute, button_factory)
        .unwrap()
        .build();

    assert!(registry.check(&[ElementId::Mute]).is_ok());
    assert_eq!(
        registry.check(&[ElementId::Mute, ElementId::Volume, ElementId::Cast]),
        Err(RegistryError::UnknownId(ElementId::Volume))
    );
}

#[test]
fn test_create_calls_factory() {
    let registry = ElementRegistry::builder()
        .register(ElementId::Mute, button_factory)
        .unwrap()
        .build();

    let mut doc = Document::new();
    let container = doc.create_element(Tag::Div);
    let media = doc.create_video_element();
    let mut ctx = FactoryContext {
        document: &mut doc,
        container,
        media,
        overflow_menu: None,
    };

    let element = registry.create(ElementId::Mute, &mut ctx).unwrap();
    assert_eq!(element.submenu, None);
    assert_eq!(doc.node(element.node).unwrap().tag(), Tag::Button);
}

#[test]
fn test_create_unknown_id() {
    let registry = ElementRegistry::builder().build();
    let mut doc = Document::new();
    let container = doc.create_element(Tag::Div);
    let media = doc.create_video_element();
    let mut ctx = FactoryContext {
        document: &mut doc,
        container,
        media,
        overflow_menu: None,
    };

    assert_eq!(
        registry.create(ElementId::Cast, &mut ctx),
        Err(RegistryError::UnknownId(ElementId::Cast))
    );
}

#[test]
fn test_factory_errors_are_wrapped() {
    let registry = ElementRegistry::builder()
        .register(ElementId::Fullscreen, |ctx| {
            let node = ctx.document.create_element(Tag::Button);
            ctx.document.remove(node)?;
            ctx.document.set_text(node, "never")?;
            Ok(Element::new(node))
        })
        .unwrap()
        .build();

    let mut doc = Document::new();
    let container = doc.create_element(Tag::Div);
    let media = doc.create_video_element();
    let mut ctx = FactoryContext {
        document: &mut doc,
        container,
        media,
        overflow_menu: None,
    };

    let err = registry.create(ElementId::Fullscreen, &mut ctx).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Factory { id: ElementId::Fullscreen, source: DomError::NodeNotFound(_) }
    ));
}
