//! Chart computation settings.

use std::path::Path;

use saju_base::MidnightPolicy;
use saju_time::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Settings shared by every chart request.
///
/// Loaded from TOML by the CLI; all fields are optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Assignment of the 23:00–23:59 window.
    pub midnight_policy: MidnightPolicy,
    /// Reference meridian for true local time, degrees east. `None` uses the
    /// standard meridian of the birthplace's zone.
    pub reference_meridian_deg: Option<f64>,
    /// Location used when the resolver cannot find the birth place. `None`
    /// makes an unresolved place a hard error.
    pub fallback_location: Option<GeoLocation>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            midnight_policy: MidnightPolicy::EarlyRollover,
            reference_meridian_deg: None,
            fallback_location: None,
        }
    }
}

impl ChartConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, SajuError> {
        let config: Self =
            toml::from_str(text).map_err(|e| SajuError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, SajuError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SajuError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SajuError> {
        if let Some(m) = self.reference_meridian_deg {
            if !m.is_finite() || m.abs() > 180.0 {
                return Err(SajuError::InvalidConfig(
                    "reference_meridian_deg must be within [-180, 180]".into(),
                ));
            }
        }
        if let Some(loc) = &self.fallback_location {
            loc.validate()
                .map_err(|e| SajuError::InvalidConfig(format!("fallback_location: {e}")))?;
        }
        Ok(())
    }
}
