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

//! Overflow menu buttons
//!
//! Captions, quality and language buttons each come with a settings submenu
//! (text languages, resolutions, audio languages). The submenu starts hidden;
//! clicking the button hides the overflow menu and reveals it.

use crate::core::{
    classes, events::DomEvent, DomError, Element, ElementId, FactoryContext, Reaction, Tag,
};

/// Captions button with the text language submenu
pub fn captions(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    settings_button(ctx, ElementId::Captions, "Captions")
}

/// Quality button with the resolutions submenu
pub fn quality(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    settings_button(ctx, ElementId::Quality, "Resolution")
}

/// Language button with the audio language submenu
pub fn language(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    settings_button(ctx, ElementId::Language, "Language")
}

/// Cast button (no submenu)
pub fn cast(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let node = ctx
        .document
        .create_element_with_classes(Tag::Button, &[ElementId::Cast.class_name()]);
    ctx.document.set_text(node, "Cast...")?;
    Ok(Element::new(node))
}

fn settings_button(
    ctx: &mut FactoryContext<'_>,
    id: ElementId,
    label: &str,
) -> Result<Element, DomError> {
    let overflow_menu = ctx.overflow_menu;
    let doc = &mut *ctx.document;

    let button = doc.create_element_with_classes(Tag::Button, &[id.class_name()]);
    doc.set_text(button, label)?;

    let Some(submenu_class) = id.submenu_class() else {
        return Ok(Element::new(button));
    };

    let submenu = doc.create_element_with_classes(
        Tag::Div,
        &[submenu_class, classes::SETTINGS_MENU, classes::HIDDEN],
    );

    if let Some(overflow_menu) = overflow_menu {
        doc.add_listener(
            button,
            DomEvent::Click,
            button,
            Reaction::OpenSubmenu {
                overflow_menu,
                submenu,
            },
        )?;
    }

    Ok(Element::with_submenu(button, submenu))
}
