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

//! src/core/mod.rs
//!
//! Core building blocks
//!
//! This module contains the fundamental data structures for panel assembly:
//! - Element identifiers and their placement rules
//! - The public class-name contract
//! - An in-memory element tree with declarative event listeners
//! - The element registry mapping ids to factories
//!
//! Nothing here knows about concrete controls or configuration files, which
//! keeps it testable without a display server.

pub mod classes;
pub mod dom;
pub mod events;
pub mod registry;
pub mod types;

pub use dom::{Document, DomError, ListenerId, Mark, Node, NodeId, Tag};
pub use events::{DomEvent, Reaction};
pub use registry::{Element, ElementFactory, ElementRegistry, FactoryContext, RegistryBuilder, RegistryError};
pub use types::*;

#[cfg(test)]
mod tests;
