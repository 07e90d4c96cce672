//! Order customization details.

use serde::{Deserialize, Serialize};

/// Per-item order customization collected by the order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Requested size
    pub size: String,

    /// Number of units; expected positive
    pub quantity: u32,

    /// Requested colour
    pub color: String,

    /// Free-text instructions for the purchasing agent
    pub special_instructions: String,

    /// Name of an attached custom-measurements file, if any
    pub custom_measurements: Option<String>,
}
