//! Controller - owns one UI instance (a container plus its media element)
//!
//! # Responsibilities
//!
//! - Resolve caller configurations against the element registry
//! - Assemble the panel for the current configuration
//! - Swap panels on re-configuration without ever leaving the container empty
//!   or half-built
//! - Tear everything down on `release`
//!
//! # Architecture
//!
//! The Controller holds a shared handle to the document but knows nothing
//! about how it is presented; the renderer and the GTK preview read the same
//! document through `document()`.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info};

use crate::config::{ConfigResolver, Configuration, PartialConfiguration};
use crate::core::{Document, ElementRegistry, NodeId};
use crate::ui::builders::{AssembledPanel, AssemblyError, PanelAssembler};

/// Coordinates configuration, assembly and teardown for one player
pub struct Controller<'r> {
    /// Document shared with renderers
    document: Rc<RefCell<Document>>,
    /// Host container
    container: NodeId,
    /// Media element driven by the controls
    media: NodeId,
    registry: &'r ElementRegistry,
    /// Configuration the current panel was built from
    config: RefCell<Configuration>,
    /// Current panel (None before the first build and after release)
    panel: RefCell<Option<AssembledPanel>>,
}

impl<'r> Controller<'r> {
    /// Creates a Controller and builds the initial panel
    ///
    /// # Arguments
    ///
    /// * `document` - Shared document holding `container` and `media`
    /// * `container` - Host container for the panel
    /// * `media` - Media element inside `container`
    /// * `registry` - Element registry used for every assembly
    /// * `initial` - Initial caller configuration (may be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(Controller)` - Panel assembled and attached
    /// * `Err(AssemblyError)` - Configuration invalid or document unusable;
    ///   the container is untouched
    ///
    /// # Example
    ///
    /// ```
    /// use std::{cell::RefCell, rc::Rc};
    /// use media_panel_builder::config::PartialConfiguration;
    /// use media_panel_builder::core::{Document, Tag};
    /// use media_panel_builder::ui::{components::standard_registry, Controller};
    ///
    /// let mut doc = Document::new();
    /// let container = doc.create_element(Tag::Div);
    /// let video = doc.create_video_element();
    /// doc.append_child(doc.body(), container)?;
    /// doc.append_child(container, video)?;
    ///
    /// let document = Rc::new(RefCell::new(doc));
    /// let controller = Controller::new(
    ///     document,
    ///     container,
    ///     video,
    ///     standard_registry()?,
    ///     &PartialConfiguration::new(),
    /// )?;
    /// assert!(controller.panel().is_some());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        document: Rc<RefCell<Document>>,
        container: NodeId,
        media: NodeId,
        registry: &'r ElementRegistry,
        initial: &PartialConfiguration,
    ) -> Result<Self, AssemblyError> {
        let controller = Self {
            document,
            container,
            media,
            registry,
            config: RefCell::new(Configuration::default()),
            panel: RefCell::new(None),
        };

        controller.configure(initial)?;
        Ok(controller)
    }

    /// Applies a new configuration
    ///
    /// The new panel is assembled first and the old one released only once
    /// that succeeded, so a rejected configuration keeps the current panel
    /// (and its configuration) intact.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - New panel attached, old panel released
    /// * `Err(AssemblyError)` - Nothing changed
    pub fn configure(&self, partial: &PartialConfiguration) -> Result<(), AssemblyError> {
        let config = ConfigResolver::new(self.registry).resolve(partial)?;

        let mut document = self.document.borrow_mut();
        let new_panel =
            PanelAssembler::new(self.registry).assemble(&mut document, self.container, self.media, &config)?;

        if let Some(mut old) = self.panel.borrow_mut().replace(new_panel) {
            let freed = old.release(&mut document);
            debug!("Replaced previous panel ({} nodes freed)", freed);
        }
        *self.config.borrow_mut() = config;

        Ok(())
    }

    /// Tears the panel down
    ///
    /// Safe to call repeatedly; later calls free nothing.
    ///
    /// # Returns
    ///
    /// Number of nodes freed
    pub fn release(&self) -> usize {
        let Some(mut panel) = self.panel.borrow_mut().take() else {
            return 0;
        };

        let freed = panel.release(&mut self.document.borrow_mut());
        info!("Controller released container {}", self.container);
        freed
    }

    pub fn is_released(&self) -> bool {
        self.panel.borrow().is_none()
    }

    /// Returns the current panel, if one is attached
    pub fn panel(&self) -> Option<Ref<'_, AssembledPanel>> {
        Ref::filter_map(self.panel.borrow(), Option::as_ref).ok()
    }

    /// Root of the current panel
    pub fn panel_root(&self) -> Option<NodeId> {
        self.panel.borrow().as_ref().and_then(AssembledPanel::root)
    }

    /// Configuration the current panel was built from
    pub fn config(&self) -> Configuration {
        self.config.borrow().clone()
    }

    pub fn document(&self) -> Rc<RefCell<Document>> {
        Rc::clone(&self.document)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn media(&self) -> NodeId {
        self.media
    }

    pub fn registry(&self) -> &'r ElementRegistry {
        self.registry
    }
}
