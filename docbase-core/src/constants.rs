//! Wire-level constants for the DocBase API.

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("docbase-rs/", env!("CARGO_PKG_VERSION"));

/// Public DocBase API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.docbase.io";

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "X-DocBaseToken";

/// Header selecting the API version.
pub const API_VERSION_HEADER: &str = "X-Api-Version";

/// API version requested when none is configured.
pub const DEFAULT_API_VERSION: &str = "2";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Responses with a status at or above this value are API errors.
pub const FAILURE_STATUS_THRESHOLD: u16 = 400;

/// Environment variables consulted by `AppConfig::apply_env_overrides`.
pub mod env {
    pub const TEAM: &str = "DOCBASE_TEAM";
    pub const TOKEN: &str = "DOCBASE_TOKEN";
    pub const API_VERSION: &str = "DOCBASE_API_VERSION";
    pub const BASE_URL: &str = "DOCBASE_BASE_URL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("docbase-rs/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
