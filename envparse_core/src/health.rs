//! Status words that count as healthy.
//!
//! Matching is exact and case-sensitive: `Ok` on an NX-OS power supply is not
//! the same token as `ok`.

/// Healthy power-supply status words, shared by every dialect.
pub const POWER_STATUS_HEALTHY: [&str; 3] = ["Normal", "good", "ok"];

/// Healthy module power state (NX-OS power usage table).
pub const POWER_USAGE_HEALTHY: &str = "powered-up";

#[must_use]
pub fn is_status_healthy(status: &str) -> bool {
    POWER_STATUS_HEALTHY.contains(&status)
}

#[must_use]
pub fn is_usage_healthy(state: &str) -> bool {
    state == POWER_USAGE_HEALTHY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens() {
        assert!(is_status_healthy("Normal"));
        assert!(is_status_healthy("good"));
        assert!(is_status_healthy("ok"));
        assert!(!is_status_healthy("Ok"));
        assert!(!is_status_healthy("normal"));
        assert!(!is_status_healthy("failed"));
        assert!(!is_status_healthy(""));
    }

    #[test]
    fn usage_token() {
        assert!(is_usage_healthy("powered-up"));
        assert!(!is_usage_healthy("powered-dn"));
        assert!(!is_usage_healthy("Powered-up"));
    }
}
