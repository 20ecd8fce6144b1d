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

//! Events and listener reactions
//!
//! The media element keeps its playback state in attributes (`muted`,
//! `volume`, `current-time`, `duration`). Controls subscribe to media events
//! and re-render themselves from that state when the events fire.

use crate::core::{
    classes,
    dom::{Document, DomError, NodeId},
};

pub const ATTR_MUTED: &str = "muted";
pub const ATTR_VOLUME: &str = "volume";
pub const ATTR_CURRENT_TIME: &str = "current-time";
pub const ATTR_DURATION: &str = "duration";
pub const ATTR_FULLSCREEN: &str = "fullscreen";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_MAX: &str = "max";

// Material icon names used as button text
pub const ICON_VOLUME_UP: &str = "volume_up";
pub const ICON_VOLUME_OFF: &str = "volume_off";
pub const ICON_FULLSCREEN: &str = "fullscreen";
pub const ICON_FULLSCREEN_EXIT: &str = "fullscreen_exit";

/// Events a listener can subscribe to
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DomEvent {
    Click,
    VolumeChange,
    TimeUpdate,
    DurationChange,
}

/// What a listener does when its event fires
///
/// The listener's owner is the node being updated unless the variant
/// names a different node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reaction {
    /// Flip the media `muted` flag and announce a volume change
    ToggleMute { media: NodeId },
    /// Re-render the mute icon from the media state
    SyncMuteIcon { media: NodeId },
    /// Mirror the media volume into the owner's `value`
    SyncVolume { media: NodeId },
    /// Render "current / duration" as the owner's text
    SyncTime { media: NodeId },
    /// Mirror position and duration into the owner's `value` / `max`
    SyncSeekBar { media: NodeId },
    /// Flip the container's fullscreen state and the owner's icon
    ToggleFullscreen { container: NodeId },
    /// Show or hide a menu
    ToggleMenu { menu: NodeId },
    /// Hide the overflow menu and reveal a settings submenu
    OpenSubmenu { overflow_menu: NodeId, submenu: NodeId },
}

/// Runs `reaction` on behalf of `owner`
pub fn apply(doc: &mut Document, owner: NodeId, reaction: Reaction) -> Result<(), DomError> {
    match reaction {
        Reaction::ToggleMute { media } => {
            if is_muted(doc, media) {
                doc.remove_attribute(media, ATTR_MUTED)?;
            } else {
                doc.set_attribute(media, ATTR_MUTED, "")?;
            }
            doc.dispatch(media, DomEvent::VolumeChange)?;
        }
        Reaction::SyncMuteIcon { media } => {
            let icon = if is_muted(doc, media) {
                ICON_VOLUME_OFF
            } else {
                ICON_VOLUME_UP
            };
            doc.set_text(owner, icon)?;
        }
        Reaction::SyncVolume { media } => {
            let volume = if is_muted(doc, media) {
                0.0
            } else {
                read_number(doc, media, ATTR_VOLUME)
            };
            doc.set_attribute(owner, ATTR_VALUE, &volume.to_string())?;
        }
        Reaction::SyncTime { media } => {
            let text = format!(
                "{} / {}",
                format_time(read_number(doc, media, ATTR_CURRENT_TIME)),
                format_time(read_number(doc, media, ATTR_DURATION)),
            );
            doc.set_text(owner, text)?;
        }
        Reaction::SyncSeekBar { media } => {
            let current = read_number(doc, media, ATTR_CURRENT_TIME);
            let duration = read_number(doc, media, ATTR_DURATION);
            doc.set_attribute(owner, ATTR_VALUE, &current.to_string())?;
            doc.set_attribute(owner, ATTR_MAX, &duration.to_string())?;
        }
        Reaction::ToggleFullscreen { container } => {
            let entering = doc.attribute(container, ATTR_FULLSCREEN).is_none();
            if entering {
                doc.set_attribute(container, ATTR_FULLSCREEN, "")?;
                doc.set_text(owner, ICON_FULLSCREEN_EXIT)?;
            } else {
                doc.remove_attribute(container, ATTR_FULLSCREEN)?;
                doc.set_text(owner, ICON_FULLSCREEN)?;
            }
        }
        Reaction::ToggleMenu { menu } => {
            doc.toggle_class(menu, classes::HIDDEN)?;
        }
        Reaction::OpenSubmenu {
            overflow_menu,
            submenu,
        } => {
            doc.add_class(overflow_menu, classes::HIDDEN)?;
            doc.remove_class(submenu, classes::HIDDEN)?;
        }
    }

    Ok(())
}

/// `muted` is a boolean attribute: present means muted
pub fn is_muted(doc: &Document, media: NodeId) -> bool {
    doc.attribute(media, ATTR_MUTED).is_some()
}

fn read_number(doc: &Document, media: NodeId, name: &str) -> f64 {
    doc.attribute(media, name)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour up
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
