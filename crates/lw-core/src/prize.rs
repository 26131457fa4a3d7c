//! Prize entries shown on the wheel

use serde::{Deserialize, Serialize};

/// One sector of the wheel.
///
/// `weight` is carried for the host's bookkeeping only. Spins always land on
/// an explicitly requested id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prize {
    /// Identifier used to target a spin (compared as a string)
    pub id: String,
    /// Text drawn along the sector's arc
    #[serde(alias = "title")]
    pub label: String,
    /// Opaque weight/rate string, never read by selection
    #[serde(default, alias = "rate")]
    pub weight: String,
}

impl Prize {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight: String::new(),
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Blank entry used before real data arrives
    pub fn placeholder() -> Self {
        Self::default()
    }
}
