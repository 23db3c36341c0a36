//! Library configuration
//!
//! Supports multiple profiles (debug, release) with different settings.
//! Classification thresholds and haptic policy are configuration, not
//! constants baked into call sites.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::dispatch::HapticStyle;

/// Device classifier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Largest screen dimension (CSS px) at which a mobile-matching
    /// user agent still classifies as a phone; above it, tablet.
    pub tablet_min_dimension: f64,
    /// Long/short edge ratio below which a touch-capable mobile or tablet
    /// is treated as an unfolded foldable panel.
    pub foldable_max_aspect: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tablet_min_dimension: 900.0,
            foldable_max_aspect: 1.25,
        }
    }
}

/// Haptic dispatch policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// Style applied to impact haptics when the caller gives none.
    pub default_impact_style: HapticStyle,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            default_impact_style: HapticStyle::Medium,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrataConfig {
    /// The active profile (debug, release, etc.)
    #[serde(default)]
    pub profile: String,
    /// Classifier thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Haptic policy
    #[serde(default)]
    pub haptics: HapticsConfig,
}

impl StrataConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{profile}.toml (profile-specific overrides)
    /// 3. Environment variables with prefix STRATA_ (e.g.
    ///    STRATA_CLASSIFIER__TABLET_MIN_DIMENSION=1024)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            // Use __ as separator for nested fields
            .add_source(
                Environment::with_prefix("STRATA")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration using the STRATA_PROFILE environment variable,
    /// defaulting to "debug" if not set
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("STRATA_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = StrataConfig::default();
        assert!(config.classifier.tablet_min_dimension > 0.0);
        assert!(config.classifier.foldable_max_aspect >= 1.0);
        assert_eq!(config.haptics.default_impact_style, HapticStyle::Medium);
    }
}
