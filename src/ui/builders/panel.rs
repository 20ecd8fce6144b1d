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

//! Panel builder
//!
//! Turns a resolved `Configuration` into an element subtree under the host
//! container:
//!
//! ```text
//! div.shaka-controls-container
//!   div.shaka-bottom-controls
//!     div.shaka-seek-bar-container      (addSeekBar)
//!     div.shaka-controls-button-panel   (controlPanelElements, in order)
//!   div.shaka-overflow-menu             (overflow_menu configured)
//!   div.shaka-resolutions / ...         (settings submenus)
//! ```
//!
//! # Atomicity
//! Everything is built off-tree and attached to the container in a single
//! step at the end. If anything fails first, the staging guard frees every
//! node created so far (and their listeners), leaving the container exactly
//! as it was.
//!
//! Factories may create nodes that never end up under the controls
//! container (listener owners, for instance). The panel keeps track of them
//! and frees them on release along with the rest of the panel.

use log::{debug, info, warn};

use crate::config::Configuration;
use crate::core::{
    classes, Document, DomError, ElementRegistry, FactoryContext, Mark, NodeId, Tag,
};
use crate::ui::builders::{layout::adjust_layout, AssemblyError};
use crate::ui::components::create_seek_bar;

/// Handle to an assembled panel
///
/// Dropping the handle does not touch the document; call `release` to tear
/// the panel down.
#[derive(Debug)]
pub struct AssembledPanel {
    root: Option<NodeId>,
    container: NodeId,
    button_panel: NodeId,
    overflow_menu: Option<NodeId>,
    seek_bar: Option<NodeId>,
    /// Staged nodes left outside the controls container
    outside: Vec<NodeId>,
}

impl AssembledPanel {
    /// Controls container, or `None` once released
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The control-panel row
    pub fn button_panel(&self) -> NodeId {
        self.button_panel
    }

    pub fn overflow_menu(&self) -> Option<NodeId> {
        self.overflow_menu
    }

    /// The seek bar input, when one was created
    pub fn seek_bar(&self) -> Option<NodeId> {
        self.seek_bar
    }

    pub fn is_released(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes created during assembly that live outside the controls container
    pub fn outside_nodes(&self) -> &[NodeId] {
        &self.outside
    }

    /// Detaches and frees every node of the panel
    ///
    /// Listeners registered by the panel's elements, including those bound
    /// to the media element, are removed with them. Calling this again is a
    /// no-op.
    ///
    /// # Returns
    ///
    /// Number of nodes freed (0 on repeated calls)
    pub fn release(&mut self, document: &mut Document) -> usize {
        let Some(root) = self.root.take() else {
            return 0;
        };

        let mut freed = match document.remove(root) {
            Ok(freed) => freed,
            Err(e) => {
                // Already freed along with an ancestor
                debug!("Panel {} was already gone: {}", root, e);
                0
            }
        };

        for id in self.outside.drain(..) {
            // Nested helpers go with their parent
            if document.is_alive(id) {
                freed += document.remove(id).unwrap_or(0);
            }
        }

        info!("Released panel {} ({} nodes)", root, freed);
        freed
    }
}

/// Builds panels from configurations using one element registry
pub struct PanelAssembler<'r> {
    registry: &'r ElementRegistry,
}

impl<'r> PanelAssembler<'r> {
    pub fn new(registry: &'r ElementRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ElementRegistry {
        self.registry
    }

    /// Assembles the panel described by `config` under `container`
    ///
    /// # Arguments
    ///
    /// * `document` - Document holding the container and media element
    /// * `container` - Host container; the panel is appended as its last child
    /// * `media` - Media element inside `container` that the controls drive
    /// * `config` - Resolved configuration
    ///
    /// # Errors
    ///
    /// - `AssemblyError::Dom` if the container or media element is missing
    /// - `AssemblyError::MediaNotInContainer` if the media element is elsewhere
    /// - `AssemblyError::Config` if an id sits in the wrong list
    /// - `AssemblyError::Registry` if an id has no factory or a factory fails
    ///
    /// On error the document is left unchanged.
    pub fn assemble(
        &self,
        document: &mut Document,
        container: NodeId,
        media: NodeId,
        config: &Configuration,
    ) -> Result<AssembledPanel, AssemblyError> {
        // Step 1: Validate everything before creating a single node
        if !document.is_alive(container) {
            return Err(DomError::NodeNotFound(container).into());
        }
        if !document.is_alive(media) {
            return Err(DomError::NodeNotFound(media).into());
        }
        if media == container || !document.is_inclusive_ancestor(container, media) {
            return Err(AssemblyError::MediaNotInContainer { media, container });
        }
        config.check_placement()?;
        self.registry.check(config.element_ids())?;

        // Step 2: Stage the skeleton off-tree
        let mut staged = StagedPanel::begin(document);
        let root = staged.root;
        let doc = staged.document();

        let bottom_controls = doc.create_element_with_classes(Tag::Div, &[classes::BOTTOM_CONTROLS]);
        doc.append_child(root, bottom_controls)?;

        let button_panel = doc.create_element_with_classes(Tag::Div, &[classes::CONTROLS_BUTTON_PANEL]);
        doc.append_child(bottom_controls, button_panel)?;

        let overflow_menu = if config.has_overflow_menu() {
            let menu = doc.create_element_with_classes(Tag::Div, &[classes::OVERFLOW_MENU, classes::HIDDEN]);
            doc.append_child(root, menu)?;
            Some(menu)
        } else {
            None
        };

        // Step 3: Control-panel row, in the exact order given
        for &id in &config.control_panel_elements {
            let element = self
                .registry
                .create(id, &mut staged.context(container, media, overflow_menu))?;

            let doc = staged.document();
            doc.append_child(button_panel, element.node)?;
            if let Some(submenu) = element.submenu {
                doc.append_child(root, submenu)?;
            }
        }

        // Step 4: Overflow menu buttons (and the submenus they open)
        match overflow_menu {
            Some(menu) => {
                for &id in &config.overflow_menu_buttons {
                    let element = self
                        .registry
                        .create(id, &mut staged.context(container, media, overflow_menu))?;

                    let doc = staged.document();
                    doc.append_child(menu, element.node)?;
                    if let Some(submenu) = element.submenu {
                        doc.append_child(root, submenu)?;
                    }
                }
            }
            None if !config.overflow_menu_buttons.is_empty() => {
                debug!(
                    "No overflow menu configured; skipping {} overflow button(s)",
                    config.overflow_menu_buttons.len()
                );
            }
            None => {}
        }

        // Step 5: Seek bar sits above the button row
        let seek_bar = if config.add_seek_bar {
            let seek_bar = create_seek_bar(&mut staged.context(container, media, overflow_menu))?;
            staged
                .document()
                .insert_before(bottom_controls, seek_bar.container, button_panel)?;
            Some(seek_bar.bar)
        } else {
            None
        };

        let mut panel = AssembledPanel {
            root: Some(root),
            container,
            button_panel,
            overflow_menu,
            seek_bar,
            outside: Vec::new(),
        };

        // Step 6: Layout runs once every node exists
        adjust_layout(staged.document(), &panel, config)?;

        // Step 7: Make it visible in one step
        panel.outside = staged.commit(container)?;

        info!(
            "Assembled panel {} with {} control(s), {} overflow button(s), seek bar: {}",
            root,
            config.control_panel_elements.len(),
            if overflow_menu.is_some() { config.overflow_menu_buttons.len() } else { 0 },
            config.add_seek_bar
        );

        Ok(panel)
    }
}

/// Off-tree staging area with automatic rollback
///
/// Every node created in the document after `begin()` belongs to the
/// staging area. Unless `commit()` succeeds, dropping the guard frees them.
struct StagedPanel<'d> {
    document: &'d mut Document,
    root: NodeId,
    watermark: Mark,
    committed: bool,
}

impl<'d> StagedPanel<'d> {
    fn begin(document: &'d mut Document) -> Self {
        let watermark = document.mark();
        let root = document.create_element_with_classes(Tag::Div, &[classes::CONTROLS_CONTAINER]);

        Self {
            document,
            root,
            watermark,
            committed: false,
        }
    }

    fn document(&mut self) -> &mut Document {
        &mut *self.document
    }

    fn context(
        &mut self,
        container: NodeId,
        media: NodeId,
        overflow_menu: Option<NodeId>,
    ) -> FactoryContext<'_> {
        FactoryContext {
            document: &mut *self.document,
            container,
            media,
            overflow_menu,
        }
    }

    /// Attaches the staged root to `container`
    ///
    /// # Returns
    ///
    /// Staged nodes that are not part of the root's subtree
    fn commit(mut self, container: NodeId) -> Result<Vec<NodeId>, DomError> {
        self.document.append_child(container, self.root)?;
        self.committed = true;

        let outside: Vec<NodeId> = self
            .document
            .created_since(self.watermark)
            .into_iter()
            .filter(|&id| !self.document.is_inclusive_ancestor(self.root, id))
            .collect();
        if !outside.is_empty() {
            debug!("{} staged node(s) live outside the panel root", outside.len());
        }

        Ok(outside)
    }
}

impl Drop for StagedPanel<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        let staged = self.document.created_since(self.watermark);
        let mut freed = 0;
        for id in staged {
            if self.document.is_alive(id) {
                freed += self.document.remove(id).unwrap_or(0);
            }
        }
        warn!("Assembly failed; rolled back {} staged node(s)", freed);
    }
}
