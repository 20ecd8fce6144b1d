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

//! Public class names
//!
//! Stylesheets and external inspection locate elements by these names, so
//! they are part of the crate's interface. Renaming one is a breaking change.

// Structure
pub const CONTROLS_CONTAINER: &str = "shaka-controls-container";
pub const BOTTOM_CONTROLS: &str = "shaka-bottom-controls";
pub const CONTROLS_BUTTON_PANEL: &str = "shaka-controls-button-panel";
pub const SEEK_BAR_CONTAINER: &str = "shaka-seek-bar-container";
pub const SEEK_BAR: &str = "shaka-seek-bar";
pub const OVERFLOW_MENU: &str = "shaka-overflow-menu";
pub const SETTINGS_MENU: &str = "shaka-settings-menu";

// Control panel elements
pub const CURRENT_TIME: &str = "shaka-current-time";
pub const MUTE_BUTTON: &str = "shaka-mute-button";
pub const VOLUME_BAR: &str = "shaka-volume-bar";
pub const FULLSCREEN_BUTTON: &str = "shaka-fullscreen-button";
pub const OVERFLOW_MENU_BUTTON: &str = "shaka-overflow-menu-button";

// Overflow menu buttons
pub const CAPTION_BUTTON: &str = "shaka-caption-button";
pub const CAST_BUTTON: &str = "shaka-cast-button";
pub const RESOLUTION_BUTTON: &str = "shaka-resolution-button";
pub const LANGUAGE_BUTTON: &str = "shaka-language-button";

// Settings submenus
pub const RESOLUTIONS: &str = "shaka-resolutions";
pub const AUDIO_LANGUAGES: &str = "shaka-audio-languages";
pub const TEXT_LANGUAGES: &str = "shaka-text-languages";

// State
pub const LOW_POSITION: &str = "shaka-low-position";
pub const HIDDEN: &str = "shaka-hidden";

/// Menus floating above the control row, shifted down when no seek bar is present
pub const LAYOUT_SENSITIVE: [&str; 4] = [OVERFLOW_MENU, RESOLUTIONS, AUDIO_LANGUAGES, TEXT_LANGUAGES];
