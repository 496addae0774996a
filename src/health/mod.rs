//! Self-checks for the knob subsystem
//!
//! Used by the `knob --health` command and by CI to confirm that configured
//! presets produce valid knobs and that the dial mapping behaves.
//!
//! # Example
//!
//! ```no_run
//! use knob_area::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(ScaleCheck::from_env())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("Knob presets are valid");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::ScaleCheck::from_env())
        .add_check(checks::BuildInfoCheck::new())
        .run()
}
