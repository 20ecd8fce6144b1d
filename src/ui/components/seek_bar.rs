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

//! Seek bar
//!
//! Not a registry element: the seek bar is toggled by the `addSeekBar`
//! flag rather than listed by id.

use crate::core::{
    classes,
    events::{self, DomEvent, Reaction},
    DomError, FactoryContext, NodeId, Tag,
};

/// Nodes making up the seek bar
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeekBar {
    /// Slot wrapper placed in the bottom controls
    pub container: NodeId,
    /// The range input itself
    pub bar: NodeId,
}

/// Creates a detached seek bar bound to the media element's position
pub fn create_seek_bar(ctx: &mut FactoryContext<'_>) -> Result<SeekBar, DomError> {
    let media = ctx.media;
    let doc = &mut *ctx.document;

    let container = doc.create_element_with_classes(Tag::Div, &[classes::SEEK_BAR_CONTAINER]);
    let bar = doc.create_element_with_classes(Tag::Input, &[classes::SEEK_BAR]);
    doc.set_attribute(bar, "type", "range")?;
    doc.set_attribute(bar, "min", "0")?;
    doc.set_attribute(bar, "step", "any")?;
    doc.append_child(container, bar)?;

    let reaction = Reaction::SyncSeekBar { media };
    doc.add_listener(media, DomEvent::TimeUpdate, bar, reaction)?;
    doc.add_listener(media, DomEvent::DurationChange, bar, reaction)?;
    events::apply(doc, bar, reaction)?;

    Ok(SeekBar { container, bar })
}
