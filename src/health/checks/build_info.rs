//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Reports build metadata; warns when built outside a git checkout
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reports build metadata (git, rustc, target)")
    }

    fn check(&self) -> CheckResult {
        let details = build_info::detailed_info()
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        if build_info::git_sha().is_none() {
            CheckResult::warn("Built without git metadata").with_details(details)
        } else {
            CheckResult::pass(build_info::version_string()).with_details(details)
        }
    }
}
