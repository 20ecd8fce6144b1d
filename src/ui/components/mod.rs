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

//! Standard UI components
//!
//! Concrete factories for every `ElementId`, plus the seek bar. The standard
//! registry is built on first use and shared, read-only, for the rest of the
//! process.

pub mod controls;
pub mod overflow;
pub mod seek_bar;

pub use seek_bar::{create_seek_bar, SeekBar};

use std::sync::OnceLock;

use crate::core::{ElementId, ElementRegistry, RegistryError};

static STANDARD_REGISTRY: OnceLock<Result<ElementRegistry, RegistryError>> = OnceLock::new();

/// Builds a registry containing every standard element
///
/// # Errors
///
/// `RegistryError::DuplicateId` if an id were registered twice.
pub fn build_standard_registry() -> Result<ElementRegistry, RegistryError> {
    Ok(ElementRegistry::builder()
        .register(ElementId::TimeAndDuration, controls::time_and_duration)?
        .register(ElementId::Mute, controls::mute)?
        .register(ElementId::Volume, controls::volume)?
        .register(ElementId::Fullscreen, controls::fullscreen)?
        .register(ElementId::OverflowMenu, controls::overflow_menu)?
        .register(ElementId::Captions, overflow::captions)?
        .register(ElementId::Cast, overflow::cast)?
        .register(ElementId::Quality, overflow::quality)?
        .register(ElementId::Language, overflow::language)?
        .build())
}

/// Process-wide standard registry, built once on first call
pub fn standard_registry() -> Result<&'static ElementRegistry, RegistryError> {
    STANDARD_REGISTRY
        .get_or_init(build_standard_registry)
        .as_ref()
        .map_err(|e| e.clone())
}
