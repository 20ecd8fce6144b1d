//! src/core/types.rs
//!
//! Core type definitions for panel assembly
//!
//! This module defines the fundamental identifiers used throughout the crate:
//! - `ElementId`: The closed set of creatable controls
//! - `Placement`: Which list (control panel or overflow menu) an element belongs to
//!
//! Element ids are parsed from their wire tokens (`"mute"`, `"time_and_duration"`)
//! exactly once, at configuration time. Everything downstream works with the enum.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::core::classes;

/// Where an element may be placed
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Placement {
    /// The always-visible row of playback buttons
    ControlPanel,
    /// The secondary menu opened from the overflow button
    OverflowMenu,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::ControlPanel => write!(f, "control panel"),
            Placement::OverflowMenu => write!(f, "overflow menu"),
        }
    }
}

/// Identifier of one creatable UI element
///
/// Serialises to its snake_case wire token, which is also what
/// `Display` and `FromStr` use.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    /// Current time / duration display
    TimeAndDuration,
    /// Mute toggle button
    Mute,
    /// Volume slider
    Volume,
    /// Fullscreen toggle button
    Fullscreen,
    /// Button that opens the overflow menu
    OverflowMenu,
    /// Captions button (opens the text language menu)
    Captions,
    /// Cast button
    Cast,
    /// Quality button (opens the resolutions menu)
    Quality,
    /// Language button (opens the audio language menu)
    Language,
}

impl ElementId {
    /// Every element id, in registry order
    pub const ALL: [ElementId; 9] = [
        ElementId::TimeAndDuration,
        ElementId::Mute,
        ElementId::Volume,
        ElementId::Fullscreen,
        ElementId::OverflowMenu,
        ElementId::Captions,
        ElementId::Cast,
        ElementId::Quality,
        ElementId::Language,
    ];

    /// Wire token used in configurations
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::TimeAndDuration => "time_and_duration",
            ElementId::Mute => "mute",
            ElementId::Volume => "volume",
            ElementId::Fullscreen => "fullscreen",
            ElementId::OverflowMenu => "overflow_menu",
            ElementId::Captions => "captions",
            ElementId::Cast => "cast",
            ElementId::Quality => "quality",
            ElementId::Language => "language",
        }
    }

    /// The list this element is allowed to appear in
    pub fn placement(self) -> Placement {
        match self {
            ElementId::TimeAndDuration
            | ElementId::Mute
            | ElementId::Volume
            | ElementId::Fullscreen
            | ElementId::OverflowMenu => Placement::ControlPanel,
            ElementId::Captions | ElementId::Cast | ElementId::Quality | ElementId::Language => {
                Placement::OverflowMenu
            }
        }
    }

    /// Class carried by the element's root node
    pub fn class_name(self) -> &'static str {
        match self {
            ElementId::TimeAndDuration => classes::CURRENT_TIME,
            ElementId::Mute => classes::MUTE_BUTTON,
            ElementId::Volume => classes::VOLUME_BAR,
            ElementId::Fullscreen => classes::FULLSCREEN_BUTTON,
            ElementId::OverflowMenu => classes::OVERFLOW_MENU_BUTTON,
            ElementId::Captions => classes::CAPTION_BUTTON,
            ElementId::Cast => classes::CAST_BUTTON,
            ElementId::Quality => classes::RESOLUTION_BUTTON,
            ElementId::Language => classes::LANGUAGE_BUTTON,
        }
    }

    /// Class of the settings submenu this element opens, if any
    pub fn submenu_class(self) -> Option<&'static str> {
        match self {
            ElementId::Captions => Some(classes::TEXT_LANGUAGES),
            ElementId::Quality => Some(classes::RESOLUTIONS),
            ElementId::Language => Some(classes::AUDIO_LANGUAGES),
            _ => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token did not name any known element
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Unknown element id '{0}'")]
pub struct ParseElementIdError(pub String);

impl FromStr for ElementId {
    type Err = ParseElementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseElementIdError(s.to_string()))
    }
}
