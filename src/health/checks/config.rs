//! Configuration system health check

use crate::config::StrataConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that configuration can be loaded for all profiles and that the
/// loaded thresholds are usable
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    /// Creates a config check with custom profiles
    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failures = 0;

        for profile in &self.profiles {
            match StrataConfig::load(profile) {
                Ok(config) => {
                    if config.classifier.tablet_min_dimension <= 0.0
                        || config.classifier.foldable_max_aspect < 1.0
                    {
                        failures += 1;
                        details.push(format!(
                            "  ✗ Profile '{}': loaded but thresholds are out of range",
                            profile
                        ));
                    } else {
                        details.push(format!(
                            "  ✓ Profile '{}': tablet threshold {} px",
                            profile, config.classifier.tablet_min_dimension
                        ));
                    }
                }
                Err(e) => {
                    failures += 1;
                    details.push(format!("  ✗ Profile '{}': {}", profile, e));
                }
            }
        }

        let result = if failures == 0 {
            CheckResult::pass(format!("{} profiles load cleanly", self.profiles.len()))
        } else {
            CheckResult::fail(format!("{} of {} profiles failed", failures, self.profiles.len()))
        };
        result.with_details(details.join("\n"))
    }
}
