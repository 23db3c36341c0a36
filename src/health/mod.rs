//! Health check system for validating initialization and status
//!
//! Useful for validating embedder setup, CI health checks, and debugging
//! a misbehaving platform integration.
//!
//! # Example
//!
//! ```no_run
//! use strata::health::{HealthCheckRunner, checks::*};
//! use strata::input::ActionBindings;
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(ProviderCheck::default())
//!     .add_check(BindingsCheck::new(ActionBindings::new()))
//!     .add_check(SystemInfoCheck::new())
//!     .run();
//!
//! assert!(report.is_healthy());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

use crate::input::ActionBindings;

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::ProviderCheck::default())
        .add_check(checks::BindingsCheck::new(ActionBindings::new()))
        .add_check(checks::SystemInfoCheck::new())
        .run()
}
