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

//! src/core/dom.rs
//!
//! In-memory element tree
//!
//! A small arena-backed document model: every node has a tag, an ordered
//! class list, attributes, optional text and parent/child links. Nodes are
//! addressed by `NodeId`; removing a node frees its whole subtree and drops
//! every event listener owned by (or targeting) a freed node.
//!
//! Freed slots are recycled. A `NodeId` carries the generation of its slot,
//! so a stale handle never resolves to the node that later reuses the slot.
//!
//! # Listeners
//! Listeners are plain data - `(target, event, owner, reaction)` - rather
//! than closures. This keeps the document `Send`, lets teardown reason about
//! ownership, and makes wiring inspectable in tests.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};
use thiserror::Error;

use crate::core::events::{self, DomEvent, Reaction};

/// Handle to a node in a `Document`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}.{}", self.index, self.generation)
        }
    }
}

/// Creation-order watermark; see `Document::mark`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mark(u64);

/// Handle to a registered listener
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

/// Element tag
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tag {
    Body,
    Div,
    Span,
    Button,
    Input,
    Video,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Button => "button",
            Tag::Input => "input",
            Tag::Video => "video",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document mutation errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DomError {
    /// Node was never created or has been removed
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    /// Insertion would make a node its own ancestor
    #[error("Cannot insert node {child} under {parent}: it would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Reference node for an insertion is not a child of the parent
    #[error("Node {reference} is not a child of {parent}")]
    NotAChild { parent: NodeId, reference: NodeId },
}

/// A single element
#[derive(Clone, Debug)]
pub struct Node {
    tag: Tag,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Space-separated class list, as `className` would report it
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    /// Creation sequence number of the current occupant
    created: u64,
    node: Option<Node>,
}

#[derive(Clone, Copy, Debug)]
struct Listener {
    id: ListenerId,
    target: NodeId,
    event: DomEvent,
    owner: NodeId,
    reaction: Reaction,
}

/// Arena-backed element tree rooted at a `body` node
#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    next_seq: u64,
    listeners: Vec<Listener>,
    next_listener: u64,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only `body`
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                created: 0,
                node: Some(Node::new(Tag::Body)),
            }],
            free: Vec::new(),
            live: 1,
            next_seq: 1,
            listeners: Vec::new(),
            next_listener: 0,
            body: NodeId { index: 0, generation: 0 },
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates a detached element, reusing a freed slot when one exists
    pub fn create_element(&mut self, tag: Tag) -> NodeId {
        let created = self.next_seq;
        self.next_seq += 1;
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.created = created;
            slot.node = Some(Node::new(tag));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            created,
            node: Some(Node::new(tag)),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Creates a detached element carrying the given classes
    pub fn create_element_with_classes(&mut self, tag: Tag, classes: &[&str]) -> NodeId {
        let id = self.create_element(tag);
        if let Ok(node) = self.node_mut(id) {
            for class in classes {
                if !node.has_class(class) {
                    node.classes.push((*class).to_string());
                }
            }
        }
        id
    }

    /// Creates a detached media element with neutral playback state
    pub fn create_video_element(&mut self) -> NodeId {
        let id = self.create_element(Tag::Video);
        if let Ok(node) = self.node_mut(id) {
            node.attributes.insert(events::ATTR_VOLUME.to_string(), "1".to_string());
            node.attributes.insert(events::ATTR_CURRENT_TIME.to_string(), "0".to_string());
            node.attributes.insert(events::ATTR_DURATION.to_string(), "0".to_string());
        }
        id
    }

    /// Watermark for `created_since`; every node created later is after it
    pub fn mark(&self) -> Mark {
        Mark(self.next_seq)
    }

    /// Live nodes created at or after `mark`, in creation order
    pub fn created_since(&self, mark: Mark) -> Vec<NodeId> {
        let mut found: Vec<(u64, NodeId)> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.node.is_some() && slot.created >= mark.0)
            .map(|(index, slot)| {
                (
                    slot.created,
                    NodeId {
                        index,
                        generation: slot.generation,
                    },
                )
            })
            .collect();
        found.sort_unstable_by_key(|&(created, _)| created);
        found.into_iter().map(|(_, id)| id).collect()
    }

    /// Number of allocated slots, live or free
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(DomError::NodeNotFound(id))
    }

    /// Returns true if the node exists (has not been removed)
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live nodes, including `body`
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Returns true if `node` is `ancestor` or lies beneath it
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Appends `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insertion(parent, child)?;
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Inserts `child` into `parent` directly before `reference`
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<(), DomError> {
        if child == reference {
            return Ok(());
        }
        self.check_insertion(parent, child)?;
        if self.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild { parent, reference });
        }

        self.detach(child)?;
        let parent_node = self.node_mut(parent)?;
        let index = parent_node
            .children
            .iter()
            .position(|&c| c == reference)
            .ok_or(DomError::NotAChild { parent, reference })?;
        parent_node.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.is_alive(parent) {
            return Err(DomError::NodeNotFound(parent));
        }
        if !self.is_alive(child) {
            return Err(DomError::NodeNotFound(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    /// Unlinks a node from its parent without freeing it
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let parent = self.node_mut(id)?.parent.take();
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Detaches and frees a node and its whole subtree
    ///
    /// Listeners owned by or targeting any freed node are dropped with it.
    ///
    /// # Returns
    ///
    /// Number of nodes freed
    pub fn remove(&mut self, id: NodeId) -> Result<usize, DomError> {
        if id == self.body {
            return Err(DomError::HierarchyRequest {
                parent: self.body,
                child: id,
            });
        }
        self.detach(id)?;

        let freed: HashSet<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for node in &freed {
            if let Some(slot) = self.slots.get_mut(node.index) {
                slot.node = None;
                self.free.push(node.index);
            }
        }
        self.live -= freed.len();

        self.listeners
            .retain(|l| !freed.contains(&l.owner) && !freed.contains(&l.target));

        Ok(freed.len())
    }

    /// All descendants of `root` in document (pre-)order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }

        out
    }

    /// Descendants of `root` carrying `class`, like `getElementsByClassName`
    pub fn elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.has_class(class))
    }

    /// Adds a class; returns false if it was already present
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        let node = self.node_mut(id)?;
        if node.has_class(class) {
            return Ok(false);
        }
        node.classes.push(class.to_string());
        Ok(true)
    }

    /// Removes a class; returns false if it was not present
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        let node = self.node_mut(id)?;
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        Ok(node.classes.len() != before)
    }

    /// Flips a class; returns whether it is present afterwards
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        if self.has_class(id, class) {
            self.remove_class(id, class)?;
            Ok(false)
        } else {
            self.add_class(id, class)?;
            Ok(true)
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attribute(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.node_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.node_mut(id)?.attributes.remove(name).is_some())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::text)
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.node_mut(id)?.text = Some(text.into());
        Ok(())
    }

    /// Registers a listener on `target` whose lifetime is tied to `owner`
    pub fn add_listener(
        &mut self,
        target: NodeId,
        event: DomEvent,
        owner: NodeId,
        reaction: Reaction,
    ) -> Result<ListenerId, DomError> {
        if !self.is_alive(target) {
            return Err(DomError::NodeNotFound(target));
        }
        if !self.is_alive(owner) {
            return Err(DomError::NodeNotFound(owner));
        }

        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener {
            id,
            target,
            event,
            owner,
            reaction,
        });
        Ok(id)
    }

    /// Unregisters a listener; returns false if it was already gone
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Number of listeners registered on `target`
    pub fn listener_count(&self, target: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.target == target).count()
    }

    /// Number of listeners owned by `owner`
    pub fn owned_listener_count(&self, owner: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.owner == owner).count()
    }

    /// Fires `event` at `target`, running every matching reaction
    ///
    /// # Returns
    ///
    /// Number of listeners that ran
    pub fn dispatch(&mut self, target: NodeId, event: DomEvent) -> Result<usize, DomError> {
        if !self.is_alive(target) {
            return Err(DomError::NodeNotFound(target));
        }

        // Snapshot first: reactions may dispatch further events
        let matching: Vec<(NodeId, Reaction)> = self
            .listeners
            .iter()
            .filter(|l| l.target == target && l.event == event)
            .map(|l| (l.owner, l.reaction))
            .collect();

        for (owner, reaction) in &matching {
            events::apply(self, *owner, *reaction)?;
        }

        Ok(matching.len())
    }

    /// Simulates a user click on `id`
    pub fn click(&mut self, id: NodeId) -> Result<usize, DomError> {
        self.dispatch(id, DomEvent::Click)
    }
}
