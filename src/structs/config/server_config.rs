use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: Option<String>,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            token_env: ConfigHelper::default_token_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Bearer token read from the environment variable named by `token_env`.
    pub fn api_token(&self) -> Option<String> {
        self.token_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|token| !token.trim().is_empty())
    }
}
