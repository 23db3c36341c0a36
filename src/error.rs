//! Error types for provider and dispatcher boundaries

use thiserror::Error;

/// Failure reported by a capability provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The platform cannot perform the requested effect (no vibration API,
    /// no orientation lock primitive, ...). The dispatcher swallows this
    /// variant: the call completes successfully with no physical effect.
    #[error("capability not supported: {0}")]
    Unsupported(&'static str),

    /// A provider/bridge call failed unexpectedly. Surfaced to callers of
    /// the imperative dispatcher operations; profile and snapshot
    /// computation retains the previous valid value instead.
    #[error("provider call failed: {0}")]
    Transient(String),
}

impl ProviderError {
    /// Returns true for capability-absent failures
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ProviderError::Unsupported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_classification() {
        assert!(ProviderError::Unsupported("vibration").is_unsupported());
        assert!(!ProviderError::Transient("bridge down".into()).is_unsupported());
    }
}
