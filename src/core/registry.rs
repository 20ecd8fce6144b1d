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

//! src/core/registry.rs
//!
//! Element registry
//!
//! Maps each `ElementId` to the factory that builds it. A registry is
//! assembled once through `RegistryBuilder` and is immutable afterwards,
//! so a single instance can be shared by every assembly in the process.
//!
//! # Example
//! ```
//! use media_panel_builder::core::{Element, ElementId, ElementRegistry, Tag};
//!
//! let registry = ElementRegistry::builder()
//!     .register(ElementId::Cast, |ctx| {
//!         Ok(Element::new(ctx.document.create_element(Tag::Button)))
//!     })?
//!     .build();
//!
//! assert!(registry.contains(ElementId::Cast));
//! assert!(!registry.contains(ElementId::Mute));
//! # Ok::<(), media_panel_builder::core::RegistryError>(())
//! ```

use std::{collections::HashMap, fmt};
use thiserror::Error;

use crate::core::{
    dom::{Document, DomError, NodeId},
    types::ElementId,
};

/// Registry errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RegistryError {
    /// A factory for this id was registered twice
    #[error("Element '{0}' is already registered")]
    DuplicateId(ElementId),

    /// No factory exists for this id
    #[error("Element '{0}' is not registered")]
    UnknownId(ElementId),

    /// A factory failed while wiring its element into the document
    #[error("Failed to create element '{id}': {source}")]
    Factory { id: ElementId, source: DomError },
}

/// Shared state handed to every factory
pub struct FactoryContext<'a> {
    /// Document the element is created in
    pub document: &'a mut Document,
    /// Host container the panel will be attached to
    pub container: NodeId,
    /// Media element the controls drive
    pub media: NodeId,
    /// Overflow menu node, when one is part of this assembly
    pub overflow_menu: Option<NodeId>,
}

/// Output of one factory call
///
/// `node` is detached; the assembler decides where it goes. Settings
/// buttons also produce the `submenu` they open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Element {
    pub node: NodeId,
    pub submenu: Option<NodeId>,
}

impl Element {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            submenu: None,
        }
    }

    pub fn with_submenu(node: NodeId, submenu: NodeId) -> Self {
        Self {
            node,
            submenu: Some(submenu),
        }
    }
}

/// Factory producing one element
pub type ElementFactory =
    Box<dyn Fn(&mut FactoryContext<'_>) -> Result<Element, DomError> + Send + Sync>;

/// Immutable id → factory table
pub struct ElementRegistry {
    entries: HashMap<ElementId, ElementFactory>,
}

impl ElementRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Registered ids in `ElementId::ALL` order
    pub fn ids(&self) -> Vec<ElementId> {
        ElementId::ALL
            .into_iter()
            .filter(|id| self.contains(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fails with the first id in `ids` that has no factory
    pub fn check<'a>(&self, ids: impl IntoIterator<Item = &'a ElementId>) -> Result<(), RegistryError> {
        match ids.into_iter().find(|id| !self.contains(**id)) {
            Some(id) => Err(RegistryError::UnknownId(*id)),
            None => Ok(()),
        }
    }

    /// Builds a fresh element for `id`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownId` if no factory is registered, or
    /// `RegistryError::Factory` if the factory could not wire its element.
    pub fn create(&self, id: ElementId, ctx: &mut FactoryContext<'_>) -> Result<Element, RegistryError> {
        let factory = self.entries.get(&id).ok_or(RegistryError::UnknownId(id))?;
        factory(ctx).map_err(|source| RegistryError::Factory { id, source })
    }
}

impl fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

/// Collects registrations before freezing them into an `ElementRegistry`
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<ElementId, ElementFactory>,
}

impl RegistryBuilder {
    /// Registers `factory` under `id`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateId` if `id` already has a factory.
    pub fn register<F>(mut self, id: ElementId, factory: F) -> Result<Self, RegistryError>
    where
        F: Fn(&mut FactoryContext<'_>) -> Result<Element, DomError> + Send + Sync + 'static,
    {
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.entries.insert(id, Box::new(factory));
        Ok(self)
    }

    pub fn build(self) -> ElementRegistry {
        ElementRegistry {
            entries: self.entries,
        }
    }
}
