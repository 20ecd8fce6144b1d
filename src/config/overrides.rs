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

//! Command-line configuration overrides
//!
//! Parses `key=value` overrides layered on top of a configuration file:
//!
//! ```text
//! addSeekBar=false
//! controlPanelElements=mute,time_and_duration
//! overflow_menu_buttons = [cast, captions]
//! overflowMenuButtons=[]
//! ```
//!
//! Keys are accepted in camelCase or snake_case. Lists are either bare
//! comma-separated tokens or bracketed; booleans are `true` / `false`.
//!
//! # Architecture
//! The parser uses nom combinators and only structures the text. Whether a
//! token names a real element is decided later by `ConfigResolver`.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, eof, map, value},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, terminated},
    IResult, Parser,
};

use crate::config::{
    ConfigError, PartialConfiguration, KEY_ADD_SEEK_BAR, KEY_CONTROL_PANEL_ELEMENTS,
    KEY_OVERFLOW_MENU_BUTTONS,
};

/// Right-hand side of an override
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OverrideValue {
    Flag(bool),
    List(Vec<String>),
}

/// A single parsed `key=value` override
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Override {
    pub key: String,
    pub value: OverrideValue,
}

/// Parses one override
///
/// # Errors
///
/// `ConfigError::InvalidConfig` if the text is not `key=value` with a
/// boolean or list value.
pub fn parse_override(input: &str) -> Result<Override, ConfigError> {
    let trimmed = input.trim();
    match all_consuming(override_line).parse(trimmed) {
        Ok((_, (key, value))) => Ok(Override {
            key: key.to_string(),
            value,
        }),
        Err(e) => Err(ConfigError::invalid(
            trimmed,
            format!("expected key=value with a boolean or list value ({:?})", e),
        )),
    }
}

/// Applies overrides, in order, on top of `partial`
///
/// # Errors
///
/// `ConfigError::InvalidConfig` for syntax errors, unknown keys, or a value
/// of the wrong type for its key.
pub fn apply_overrides<S: AsRef<str>>(
    mut partial: PartialConfiguration,
    overrides: &[S],
) -> Result<PartialConfiguration, ConfigError> {
    for raw in overrides {
        let Override { key, value } = parse_override(raw.as_ref())?;
        let canonical = canonical_key(&key)
            .ok_or_else(|| ConfigError::invalid(&key, "unknown configuration key"))?;

        match (canonical, value) {
            (KEY_CONTROL_PANEL_ELEMENTS, OverrideValue::List(items)) => {
                partial.control_panel_elements = Some(items);
            }
            (KEY_OVERFLOW_MENU_BUTTONS, OverrideValue::List(items)) => {
                partial.overflow_menu_buttons = Some(items);
            }
            (KEY_ADD_SEEK_BAR, OverrideValue::Flag(flag)) => {
                partial.add_seek_bar = Some(flag);
            }
            (KEY_ADD_SEEK_BAR, OverrideValue::List(_)) => {
                return Err(ConfigError::invalid(canonical, "expected a boolean, found a sequence"));
            }
            (_, _) => {
                return Err(ConfigError::invalid(canonical, "expected a sequence of element ids, found a boolean"));
            }
        }
    }

    Ok(partial)
}

/// Maps camelCase or snake_case keys onto the JSON key names
pub fn canonical_key(key: &str) -> Option<&'static str> {
    match key {
        "controlPanelElements" | "control_panel_elements" => Some(KEY_CONTROL_PANEL_ELEMENTS),
        "overflowMenuButtons" | "overflow_menu_buttons" => Some(KEY_OVERFLOW_MENU_BUTTONS),
        "addSeekBar" | "add_seek_bar" => Some(KEY_ADD_SEEK_BAR),
        _ => None,
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse an identifier-like token (keys and element ids)
fn token(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char).parse(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0).parse(input)
}

/// Parse `[a, b]` (possibly empty)
fn bracketed_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        (char('['), multispace0),
        separated_list0(separator, token),
        (multispace0, char(']')),
    )
    .parse(input)
}

/// Parse `a,b` (at least one token)
fn bare_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(separator, token).parse(input)
}

/// Parse `true` / `false` as the whole value
fn flag(input: &str) -> IResult<&str, OverrideValue> {
    terminated(
        alt((
            value(OverrideValue::Flag(true), tag("true")),
            value(OverrideValue::Flag(false), tag("false")),
        )),
        eof,
    )
    .parse(input)
}

fn to_list(items: Vec<&str>) -> OverrideValue {
    OverrideValue::List(items.into_iter().map(str::to_string).collect())
}

/// Parse `key = value`
fn override_line(input: &str) -> IResult<&str, (&str, OverrideValue)> {
    let (input, key) = token(input)?;
    let (input, _) = (multispace0, char('='), multispace0).parse(input)?;
    let (input, value) = alt((
        map(bracketed_list, to_list),
        flag,
        map(bare_list, to_list),
    ))
    .parse(input)?;

    Ok((input, (key, value)))
}
