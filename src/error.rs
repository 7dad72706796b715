//! Error types.
//!
//! Geometry manipulation never fails: out-of-range requests are clamped and
//! signalled through the alert blink. Errors only arise while loading
//! configuration or when a scene is asked about an item it does not own.

use crate::item::ItemId;

/// Error returned while loading or validating an [`crate::config::ItemConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A palette entry is not a `#rgb`, `#rrggbb` or `#rrggbbaa` colour.
    #[error("invalid colour for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// A numeric setting is negative, zero where it must be positive, or not finite.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Error returned by [`crate::scene::Scene`] operations addressed by id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// No item with this id is in the scene.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// The requested parent is not in the scene.
    #[error("unknown parent: {0}")]
    UnknownParent(ItemId),

    /// Re-parenting would make the item its own ancestor.
    #[error("parent cycle through item {0}")]
    CyclicParent(ItemId),
}
