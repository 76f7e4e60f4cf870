use crate::config::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL, DEFAULT_TOKEN_ENV};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_SERVER_URL.to_string()
    }

    pub fn default_token_env() -> Option<String> {
        Some(DEFAULT_TOKEN_ENV.to_string())
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    /// Same truthy set the server accepts for `SYNOLOGY_CHAT_VERIFY_SSL`.
    pub fn parse_env_flag(value: &str) -> bool {
        matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
    }

    /// Stored verify-SSL flag: absent means verify, otherwise only "true" does.
    pub fn parse_stored_flag(value: Option<&str>) -> bool {
        value.map_or(true, |raw| raw.eq_ignore_ascii_case("true"))
    }
}
