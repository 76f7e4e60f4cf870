use chrono::{DateTime, Utc};
use crate::structs::send_result::SendResult;
use crate::structs::synochat_config::SynochatConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynochatState {
    pub config: SynochatConfig,
    pub loading: bool,
    pub testing: bool,
    pub last_test_result: Option<SendResult>,
    pub last_test_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl SynochatState {
    pub fn print_summary(&self) {
        println!("📮 Webhook:    {}", if self.config.webhook.is_empty() { "<not set>" } else { self.config.webhook.as_str() });
        println!("🔒 Verify SSL: {}", self.config.verify_ssl);

        if let Some(result) = &self.last_test_result {
            let icon = if result.is_success() { "✅" } else { "❌" };
            match self.last_test_time {
                Some(at) => println!("{} Last test:  {} at {}", icon, result, at.format("%Y-%m-%d %H:%M:%S")),
                None => println!("{} Last test:  {}", icon, result),
            }
        }

        if let Some(error) = &self.error {
            println!("⚠️ {}", error);
        }
    }
}
