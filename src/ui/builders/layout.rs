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

//! Layout adjuster
//!
//! One global rule, applied after assembly: without a seek bar there is
//! more vertical room, so every menu floating above the control row (the
//! overflow menu and the resolution, audio language and text language
//! submenus) moves down by carrying `shaka-low-position`.

use log::debug;

use crate::config::Configuration;
use crate::core::{classes, Document, DomError};
use crate::ui::builders::AssembledPanel;

/// Whether floating menus sit in the lowered position for `config`
pub fn is_lowered(config: &Configuration) -> bool {
    !config.add_seek_bar
}

/// Applies the lowered-position rule to every layout-sensitive menu in `panel`
///
/// Idempotent: the class is set or cleared, never toggled.
///
/// # Returns
///
/// Number of layout-sensitive elements found
pub fn adjust_layout(
    document: &mut Document,
    panel: &AssembledPanel,
    config: &Configuration,
) -> Result<usize, DomError> {
    let Some(root) = panel.root() else {
        return Ok(0);
    };

    let lowered = is_lowered(config);
    let mut adjusted = 0;

    for class in classes::LAYOUT_SENSITIVE {
        for node in document.elements_by_class_name(root, class) {
            if lowered {
                document.add_class(node, classes::LOW_POSITION)?;
            } else {
                document.remove_class(node, classes::LOW_POSITION)?;
            }
            adjusted += 1;
        }
    }

    debug!("Layout: {} menu(s) {}", adjusted, if lowered { "lowered" } else { "raised" });
    Ok(adjusted)
}
