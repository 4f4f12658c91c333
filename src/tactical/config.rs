//! Tactical configuration
//!
//! Range profiles are not derivable from template stats, so they are
//! supplied here per unit kind. Everything the renderer may tune lives in
//! this struct; fixed scale constants live in `tactical::constants`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticalError};
use crate::tactical::constants::DEFAULT_MARKER_SCALE;
use crate::tactical::units::RangeProfile;

/// Configuration for stack construction and view layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticalConfig {
    /// Fraction of a cell covered by a group marker
    ///
    /// At 0.8 a marker leaves a 20% gap so neighbouring groups stay
    /// distinguishable.
    pub marker_scale: f32,

    /// Ranges used for any kind without its own entry in `ranges`
    pub default_ranges: RangeProfile,

    /// Per-kind range profiles, keyed by template name
    pub ranges: BTreeMap<String, RangeProfile>,
}

impl Default for TacticalConfig {
    fn default() -> Self {
        Self {
            marker_scale: DEFAULT_MARKER_SCALE,
            default_ranges: RangeProfile::default(),
            ranges: BTreeMap::new(),
        }
    }
}

impl TacticalConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse_toml(&content)?;
        tracing::info!(
            "Loaded tactical config from {} ({} range profiles)",
            path.display(),
            config.ranges.len()
        );
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: TacticalConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Range profile for a unit kind, falling back to `default_ranges`
    pub fn ranges_for(&self, kind: &str) -> RangeProfile {
        match self.ranges.get(kind) {
            Some(profile) => *profile,
            None => {
                tracing::warn!("No range profile for '{}', using defaults", kind);
                self.default_ranges
            }
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.marker_scale > 0.0 && self.marker_scale <= 1.0) {
            return Err(TacticalError::InvalidConfig(format!(
                "marker_scale ({}) must be in (0, 1]",
                self.marker_scale
            )));
        }

        let profiles = std::iter::once(("default_ranges", &self.default_ranges))
            .chain(self.ranges.iter().map(|(k, v)| (k.as_str(), v)));
        for (kind, profile) in profiles {
            if !profile.is_valid() {
                return Err(TacticalError::InvalidConfig(format!(
                    "range profile '{}' has a negative or non-finite range",
                    kind
                )));
            }
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<TacticalConfig> = OnceLock::new();

/// Get the global tactical config (initializes with defaults if not set)
pub fn config() -> &'static TacticalConfig {
    CONFIG.get_or_init(TacticalConfig::default)
}

/// Set the global tactical config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: TacticalConfig) -> std::result::Result<(), TacticalConfig> {
    CONFIG.set(config)
}
