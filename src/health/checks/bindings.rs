//! Action binding table health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::input::ActionBindings;

/// Checks that the binding table is non-trivial and every action has at
/// least one physical trigger
pub struct BindingsCheck {
    bindings: ActionBindings,
}

impl BindingsCheck {
    pub fn new(bindings: ActionBindings) -> Self {
        Self { bindings }
    }
}

impl SystemCheck for BindingsCheck {
    fn name(&self) -> &'static str {
        "Action Bindings"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the logical action to physical trigger table")
    }

    fn check(&self) -> CheckResult {
        if self.bindings.is_empty() {
            return CheckResult::warn("binding table is empty; every action will resolve false");
        }

        let unbound: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, binding)| binding.is_empty())
            .map(|(name, _)| name)
            .collect();

        if unbound.is_empty() {
            CheckResult::pass(format!("{} actions bound", self.bindings.len()))
        } else {
            CheckResult::warn(format!(
                "{} actions have no physical trigger",
                unbound.len()
            ))
            .with_details(format!("  unbound: {}", unbound.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::bindings::ActionBinding;
    use crate::input::KeyCode;

    #[test]
    fn test_empty_table_warns() {
        let result = BindingsCheck::new(ActionBindings::new()).check();
        assert!(result.status.is_ok());
        assert!(!matches!(result.status, crate::health::CheckStatus::Pass));
    }

    #[test]
    fn test_bound_table_passes() {
        let bindings = ActionBindings::new().with_action(
            "jump",
            ActionBinding::builder().keys(vec![KeyCode::Space]).build(),
        );
        let result = BindingsCheck::new(bindings).check();
        assert!(matches!(result.status, crate::health::CheckStatus::Pass));
    }
}
