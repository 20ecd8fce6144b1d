//! UI builder modules
//!
//! Contains the builders that turn a configuration into a control panel:
//! - Panel assembly (registry lookups, ordering, off-tree staging)
//! - Layout adjustment (lowered menus when there is no seek bar)

pub mod layout;
pub mod panel;

pub use layout::{adjust_layout, is_lowered};
pub use panel::{AssembledPanel, PanelAssembler};

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::{DomError, NodeId, RegistryError};

/// Errors that abort an assembly
///
/// Whatever the variant, the host container is left as it was found.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry miss or failing factory
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Container or media element missing, or an invalid tree operation
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    /// The media element must live inside the container
    #[error("Media element {media} is not inside container {container}")]
    MediaNotInContainer { media: NodeId, container: NodeId },
}
