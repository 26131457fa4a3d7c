//! Wheel configuration loaded from JSON or YAML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::prize::Prize;
use crate::spin::{SpinProfile, SpinSettings};
use crate::style::WheelStyle;

/// Complete wheel configuration
///
/// ```yaml
/// profile: Turbo
/// style:
///   text_size: 18.0
/// prizes:
///   - { id: "1", label: "Coupon" }
///   - { id: "2", label: "Mug" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Preset applied before `spin` overrides
    pub profile: Option<SpinProfile>,
    /// Explicit spin bounds; wins over `profile`
    pub spin: Option<SpinSettings>,
    pub style: WheelStyle,
    /// Empty keeps the blank placeholder wheel
    pub prizes: Vec<Prize>,
}

impl WheelConfig {
    /// Load from a file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&text)?,
            Some("json") => Self::from_json(&text)?,
            other => {
                return Err(WheelError::Parse(format!(
                    "Unsupported config extension: {other:?}"
                )));
            }
        };
        log::info!(
            "Loaded wheel config from {} ({} prizes)",
            path.display(),
            config.prizes.len()
        );
        Ok(config)
    }

    pub fn from_json(text: &str) -> WheelResult<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| WheelError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> WheelResult<Self> {
        let config: Self = serde_yml::from_str(text).map_err(|e| WheelError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> WheelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WheelError::Parse(e.to_string()))
    }

    /// Spin settings after applying profile and overrides
    pub fn spin_settings(&self) -> SpinSettings {
        match (&self.spin, self.profile) {
            (Some(spin), _) => spin.clone(),
            (None, Some(profile)) => SpinSettings::from_profile(profile),
            (None, None) => SpinSettings::default(),
        }
    }

    pub fn validate(&self) -> WheelResult<()> {
        if let Some(spin) = &self.spin {
            spin.validate()?;
        }
        if self.style.text_size.is_nan() || self.style.text_size < 0.0 {
            return Err(WheelError::Parse(format!(
                "text_size must be non-negative, got {}",
                self.style.text_size
            )));
        }
        if self.style.default_side.is_nan() || self.style.default_side <= 0.0 {
            return Err(WheelError::Parse(format!(
                "default_side must be positive, got {}",
                self.style.default_side
            )));
        }
        Ok(())
    }
}
