//! Network constants for the NiceHash SDK.

use std::time::Duration;

/// Default REST API base URL for NiceHash.
pub const DEFAULT_API_URL: &str = "https://api.nicehash.com/api";

/// Default per-request timeout.
///
/// Deliberately short: calls that routinely take longer will fail with a
/// timeout error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Value of the `user-agent` header sent with every request.
pub const USER_AGENT: &str = concat!(
    "NiceHashRs/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version_and_url() {
        assert!(USER_AGENT.starts_with("NiceHashRs/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
        assert!(USER_AGENT.ends_with("(https://github.com/dannychua/nicehashjs)"));
    }

    #[test]
    fn test_default_timeout_is_one_second() {
        assert_eq!(DEFAULT_TIMEOUT.as_millis(), 1000);
    }
}
