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

//! Control panel elements
//!
//! Factories for everything that can sit in the control-panel row. Each one
//! creates a detached node, wires its listeners through the factory context
//! and syncs its initial state from the media element.

use crate::core::{
    classes,
    events::{self, DomEvent, Reaction, ATTR_MAX, ATTR_VALUE, ICON_FULLSCREEN},
    DomError, Element, ElementId, FactoryContext, Tag,
};

const ICON_MORE: &str = "more_horiz";

/// Current time / duration display
pub fn time_and_duration(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let media = ctx.media;
    let doc = &mut *ctx.document;
    let node = doc.create_element_with_classes(Tag::Div, &[ElementId::TimeAndDuration.class_name()]);

    let reaction = Reaction::SyncTime { media };
    doc.add_listener(media, DomEvent::TimeUpdate, node, reaction)?;
    doc.add_listener(media, DomEvent::DurationChange, node, reaction)?;
    events::apply(doc, node, reaction)?;

    Ok(Element::new(node))
}

/// Mute toggle
pub fn mute(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let media = ctx.media;
    let doc = &mut *ctx.document;
    let node = doc.create_element_with_classes(Tag::Button, &[ElementId::Mute.class_name()]);

    doc.add_listener(node, DomEvent::Click, node, Reaction::ToggleMute { media })?;
    doc.add_listener(media, DomEvent::VolumeChange, node, Reaction::SyncMuteIcon { media })?;
    events::apply(doc, node, Reaction::SyncMuteIcon { media })?;

    Ok(Element::new(node))
}

/// Volume slider
pub fn volume(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let media = ctx.media;
    let doc = &mut *ctx.document;
    let node = doc.create_element_with_classes(Tag::Input, &[ElementId::Volume.class_name()]);

    doc.set_attribute(node, "type", "range")?;
    doc.set_attribute(node, "min", "0")?;
    doc.set_attribute(node, ATTR_MAX, "1")?;
    doc.set_attribute(node, "step", "any")?;
    doc.set_attribute(node, ATTR_VALUE, "1")?;

    doc.add_listener(media, DomEvent::VolumeChange, node, Reaction::SyncVolume { media })?;
    events::apply(doc, node, Reaction::SyncVolume { media })?;

    Ok(Element::new(node))
}

/// Fullscreen toggle; fullscreen state lives on the host container
pub fn fullscreen(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let container = ctx.container;
    let doc = &mut *ctx.document;
    let node = doc.create_element_with_classes(Tag::Button, &[ElementId::Fullscreen.class_name()]);

    doc.set_text(node, ICON_FULLSCREEN)?;
    doc.add_listener(node, DomEvent::Click, node, Reaction::ToggleFullscreen { container })?;

    Ok(Element::new(node))
}

/// Button opening the overflow menu
///
/// Without an overflow menu in the context the button is inert.
pub fn overflow_menu(ctx: &mut FactoryContext<'_>) -> Result<Element, DomError> {
    let menu = ctx.overflow_menu;
    let doc = &mut *ctx.document;
    let node = doc.create_element_with_classes(Tag::Button, &[classes::OVERFLOW_MENU_BUTTON]);
    doc.set_text(node, ICON_MORE)?;

    if let Some(menu) = menu {
        doc.add_listener(node, DomEvent::Click, node, Reaction::ToggleMenu { menu })?;
    }

    Ok(Element::new(node))
}
