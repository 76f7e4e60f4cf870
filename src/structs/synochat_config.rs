use serde::{Deserialize, Serialize};

/// Webhook channel settings as edited by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynochatConfig {
    pub webhook: String,
    pub verify_ssl: bool,
}

impl Default for SynochatConfig {
    fn default() -> Self {
        Self {
            webhook: String::new(),
            verify_ssl: true,
        }
    }
}

/// Partial update; only `Some` fields are written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynochatConfigUpdate {
    pub webhook: Option<String>,
    pub verify_ssl: Option<bool>,
}

impl SynochatConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.webhook.is_none() && self.verify_ssl.is_none()
    }
}

impl From<&SynochatConfig> for SynochatConfigUpdate {
    fn from(config: &SynochatConfig) -> Self {
        Self {
            webhook: Some(config.webhook.clone()),
            verify_ssl: Some(config.verify_ssl),
        }
    }
}
