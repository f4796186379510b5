//! Error types for the zoom/pan controller.
//!
//! The gesture core has no failure modes of its own: odd input is a silent
//! no-op. Errors only come from collaborators (an unknown layer group) and
//! from loading settings.

use thiserror::Error;

/// Errors surfaced by the controller and its settings layer
#[derive(Error, Debug)]
pub enum ZoomPanError {
    /// The event addressed a layer group the application does not know
    #[error("Layer group not found: {group_id}")]
    LayerGroupNotFound { group_id: String },

    /// The layer group exists but has no active view layer
    #[error("Layer group {group_id} has no active view layer")]
    NoActiveViewLayer { group_id: String },

    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for controller operations
pub type ZoomPanResult<T> = Result<T, ZoomPanError>;

impl ZoomPanError {
    pub(crate) fn group_not_found(group_id: &str) -> Self {
        Self::LayerGroupNotFound {
            group_id: group_id.to_string(),
        }
    }

    pub(crate) fn no_active_layer(group_id: &str) -> Self {
        Self::NoActiveViewLayer {
            group_id: group_id.to_string(),
        }
    }
}
