//! Runner orchestrating a suite of health checks

use std::time::Instant;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Aggregated results of one suite run
#[derive(Debug)]
pub struct HealthCheckReport {
    /// (subsystem name, result) in registration order
    pub results: Vec<(String, CheckResult)>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl HealthCheckReport {
    /// No failures; warnings do not make a report unhealthy
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Process exit code: 0 all pass, 1 any failure, 2 warnings only
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

/// Collects checks and runs them in registration order
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs every registered check, timing each one
    pub fn run(self) -> HealthCheckReport {
        let results: Vec<(String, CheckResult)> = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check().with_duration(start.elapsed());
                (check.name().to_string(), result)
            })
            .collect();

        let count =
            |status: CheckStatus| results.iter().filter(|(_, r)| r.status == status).count();
        HealthCheckReport {
            total: results.len(),
            passed: count(CheckStatus::Pass),
            warned: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
            results,
        }
    }
}

impl Default for HealthCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
