//! System information health check

use sysinfo::System;

use crate::health::check::{CheckResult, SystemCheck};

/// Checks that system information can be gathered
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates OS, CPU, and memory information gathering")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
        let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());
        let cpus = sys.cpus().len();
        let total_memory_mb = sys.total_memory() / (1024 * 1024);

        if cpus == 0 {
            return CheckResult::warn("no CPU information available");
        }

        CheckResult::pass(format!("{} {}", os_name, os_version)).with_details(format!(
            "  CPUs: {}\n  Memory: {} MB",
            cpus, total_memory_mb
        ))
    }
}
