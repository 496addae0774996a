//! Configuration health check

use crate::config::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::knob::{KnobArea, KnobEnvironment};

/// Checks that every profile loads and yields a knob that accepts its preset
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

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
        Some("Loads each profile and builds a knob from its preset")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = false;

        for profile in &self.profiles {
            let config = match AppConfig::load(profile) {
                Ok(config) => config,
                Err(e) => {
                    details.push(format!("  ✗ Profile '{profile}': failed to load - {e}"));
                    failed = true;
                    continue;
                }
            };

            let props = config.knob.to_props();
            match KnobArea::new(KnobEnvironment::headless(|| [0.0, 0.0]), &props) {
                Ok(knob) => details.push(format!(
                    "  ✓ Profile '{profile}': {}..{} step {} (value {}, angle {})",
                    props.min,
                    props.max,
                    props.step,
                    knob.value(),
                    knob.angle()
                )),
                Err(e) => {
                    details.push(format!("  ✗ Profile '{profile}': invalid knob preset - {e}"));
                    failed = true;
                }
            }
        }

        let details = details.join("\n");
        if failed {
            CheckResult::fail("One or more profiles are unusable").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
