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

//! Panel configuration
//!
//! Callers describe the panel they want with a `PartialConfiguration`: any
//! subset of `controlPanelElements`, `overflowMenuButtons` and `addSeekBar`.
//! `ConfigResolver` merges it over the defaults and validates every id
//! against an element registry, producing a complete `Configuration`.
//!
//! Resolution happens before any document mutation, so a bad configuration
//! never leaves a half-built panel behind.
//!
//! # Example
//!
//! ```
//! use media_panel_builder::config::{ConfigResolver, PartialConfiguration};
//! use media_panel_builder::ui::components::standard_registry;
//!
//! let registry = standard_registry()?;
//! let partial = PartialConfiguration::new().add_seek_bar(false);
//! let config = ConfigResolver::new(registry).resolve(&partial)?;
//!
//! assert!(!config.add_seek_bar);
//! assert!(!config.control_panel_elements.is_empty()); // inherited default
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod overrides;

pub use error::ConfigError;
pub use overrides::{apply_overrides, parse_override, Override, OverrideValue};

use atomic_write_file::AtomicWriteFile;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::{ElementId, ElementRegistry, Placement};

pub const KEY_CONTROL_PANEL_ELEMENTS: &str = "controlPanelElements";
pub const KEY_OVERFLOW_MENU_BUTTONS: &str = "overflowMenuButtons";
pub const KEY_ADD_SEEK_BAR: &str = "addSeekBar";

/// Fully resolved panel configuration
///
/// Build one through `ConfigResolver::resolve`. Hand-built values are
/// re-checked by `check_placement` before assembly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Control-panel row, in display order
    pub control_panel_elements: Vec<ElementId>,
    /// Overflow menu buttons, in display order
    pub overflow_menu_buttons: Vec<ElementId>,
    /// Whether the seek bar is created
    pub add_seek_bar: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            control_panel_elements: vec![
                ElementId::TimeAndDuration,
                ElementId::Mute,
                ElementId::Volume,
                ElementId::Fullscreen,
                ElementId::OverflowMenu,
            ],
            overflow_menu_buttons: vec![
                ElementId::Captions,
                ElementId::Quality,
                ElementId::Language,
                ElementId::Cast,
            ],
            add_seek_bar: true,
        }
    }
}

impl Configuration {
    /// Whether an overflow menu will be built for this configuration
    pub fn has_overflow_menu(&self) -> bool {
        self.control_panel_elements.contains(&ElementId::OverflowMenu)
    }

    /// Every configured id, control panel first
    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.control_panel_elements
            .iter()
            .chain(self.overflow_menu_buttons.iter())
    }

    /// Verifies that every id sits in the list it belongs to
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidConfig` naming the first misplaced entry
    pub fn check_placement(&self) -> Result<(), ConfigError> {
        let lists = [
            (KEY_CONTROL_PANEL_ELEMENTS, &self.control_panel_elements, Placement::ControlPanel),
            (KEY_OVERFLOW_MENU_BUTTONS, &self.overflow_menu_buttons, Placement::OverflowMenu),
        ];

        for (field, ids, placement) in lists {
            if let Some((index, id)) = ids.iter().enumerate().find(|(_, id)| id.placement() != placement) {
                return Err(ConfigError::invalid(
                    field,
                    format!("entry {}: '{}' belongs in the {}, not the {}", index, id, id.placement(), placement),
                ));
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Caller-supplied configuration; omitted fields inherit defaults
///
/// Ids are kept as raw tokens until resolution so that every problem is
/// reported by `ConfigResolver`, with the offending field named.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_panel_elements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_menu_buttons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_seek_bar: Option<bool>,
}

impl PartialConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control_panel_elements<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.control_panel_elements = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn overflow_menu_buttons<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overflow_menu_buttons = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_seek_bar(mut self, add: bool) -> Self {
        self.add_seek_bar = Some(add);
        self
    }

    /// True when every field is left to its default
    pub fn is_empty(&self) -> bool {
        self.control_panel_elements.is_none()
            && self.overflow_menu_buttons.is_none()
            && self.add_seek_bar.is_none()
    }

    /// Field-wise override: fields set in `over` replace ours entirely
    pub fn merge(self, over: PartialConfiguration) -> Self {
        Self {
            control_panel_elements: over.control_panel_elements.or(self.control_panel_elements),
            overflow_menu_buttons: over.overflow_menu_buttons.or(self.overflow_menu_buttons),
            add_seek_bar: over.add_seek_bar.or(self.add_seek_bar),
        }
    }

    /// Reads a partial configuration from a JSON value
    ///
    /// The root must be an object. Recognised keys are type-checked;
    /// unrecognised keys are logged and ignored.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidConfig` naming the offending field when a value
    /// has the wrong shape.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::invalid("<root>", format!("expected an object, found {}", kind_of(value))))?;

        let mut partial = Self::default();
        for (key, value) in object {
            match key.as_str() {
                KEY_CONTROL_PANEL_ELEMENTS => {
                    partial.control_panel_elements = Some(string_list(key, value)?);
                }
                KEY_OVERFLOW_MENU_BUTTONS => {
                    partial.overflow_menu_buttons = Some(string_list(key, value)?);
                }
                KEY_ADD_SEEK_BAR => {
                    let flag = value.as_bool().ok_or_else(|| {
                        ConfigError::invalid(key, format!("expected a boolean, found {}", kind_of(value)))
                    })?;
                    partial.add_seek_bar = Some(flag);
                }
                other => warn!("Ignoring unrecognised configuration key '{}'", other),
            }
        }

        Ok(partial)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }
}

fn string_list(field: &str, value: &Value) -> Result<Vec<String>, ConfigError> {
    let items = value.as_array().ok_or_else(|| {
        ConfigError::invalid(field, format!("expected a sequence of element ids, found {}", kind_of(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ConfigError::invalid(
                    field,
                    format!("entry {} must be a string, found {}", index, kind_of(item)),
                )
            })
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

/// Merges partial configurations over defaults and validates them
pub struct ConfigResolver<'r> {
    registry: &'r ElementRegistry,
}

impl<'r> ConfigResolver<'r> {
    pub fn new(registry: &'r ElementRegistry) -> Self {
        Self { registry }
    }

    /// Produces a complete configuration from `partial`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if any token is unknown, sits in
    /// the wrong list, or is not registered in this resolver's registry.
    pub fn resolve(&self, partial: &PartialConfiguration) -> Result<Configuration, ConfigError> {
        let defaults = Configuration::default();

        let control_panel_elements = match &partial.control_panel_elements {
            Some(tokens) => self.resolve_list(KEY_CONTROL_PANEL_ELEMENTS, tokens, Placement::ControlPanel)?,
            None => self.check_defaults(KEY_CONTROL_PANEL_ELEMENTS, defaults.control_panel_elements)?,
        };
        let overflow_menu_buttons = match &partial.overflow_menu_buttons {
            Some(tokens) => self.resolve_list(KEY_OVERFLOW_MENU_BUTTONS, tokens, Placement::OverflowMenu)?,
            None => self.check_defaults(KEY_OVERFLOW_MENU_BUTTONS, defaults.overflow_menu_buttons)?,
        };
        let add_seek_bar = partial.add_seek_bar.unwrap_or(defaults.add_seek_bar);

        let config = Configuration {
            control_panel_elements,
            overflow_menu_buttons,
            add_seek_bar,
        };
        debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }

    fn resolve_list(
        &self,
        field: &str,
        tokens: &[String],
        placement: Placement,
    ) -> Result<Vec<ElementId>, ConfigError> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let id: ElementId = token
                    .parse()
                    .map_err(|e| ConfigError::invalid(field, format!("entry {}: {}", index, e)))?;

                if id.placement() != placement {
                    return Err(ConfigError::invalid(
                        field,
                        format!("'{}' belongs in the {}, not the {}", id, id.placement(), placement),
                    ));
                }
                if !self.registry.contains(id) {
                    return Err(ConfigError::invalid(field, format!("'{}' is not registered", id)));
                }

                Ok(id)
            })
            .collect()
    }

    // Defaults are validated too: a trimmed custom registry may lack them
    fn check_defaults(&self, field: &str, ids: Vec<ElementId>) -> Result<Vec<ElementId>, ConfigError> {
        match ids.iter().find(|id| !self.registry.contains(**id)) {
            Some(id) => Err(ConfigError::invalid(
                field,
                format!("default element '{}' is not registered", id),
            )),
            None => Ok(ids),
        }
    }
}

/// Expands a leading `~` in `path`
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::invalid("path", "path is not valid UTF-8"))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Loads a JSON partial configuration from disk
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Parse` for malformed JSON and `ConfigError::InvalidConfig`
/// for values of the wrong shape.
pub fn load_config_file(path: &Path) -> Result<PartialConfiguration, ConfigError> {
    let path = expand_path(path)?;
    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    debug!("Loaded {} bytes of configuration from {}", content.len(), path.display());
    PartialConfiguration::from_json_str(&content)
}

/// Writes `content` to `path` atomically (all-or-nothing)
pub fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let path = expand_path(path)?;

    let mut file = AtomicWriteFile::options()
        .open(&path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}

/// Saves a resolved configuration as pretty-printed JSON
pub fn save_config_file(path: &Path, config: &Configuration) -> Result<(), ConfigError> {
    let mut json = config.to_json_pretty()?;
    json.push('\n');
    write_atomically(path, &json)
}

#[cfg(test)]
mod tests;
