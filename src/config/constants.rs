use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8001/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOKEN_ENV: &str = "SYNOCHAT_API_TOKEN";
pub const SERVER_URL_ENV: &str = "SYNOCHAT_SERVER_URL";
pub const CONFIG_DIR_NAME: &str = "synochat";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const WEBHOOK_KEY: &str = "notify.synochat.webhook";
pub const VERIFY_SSL_KEY: &str = "notify.synochat.verify_ssl";
pub const ENABLED_KEY: &str = "notify.synochat.enabled";

pub const CONFIGS_PATH: &str = "/wx/configs";
pub const TEST_PATH: &str = "/wx/synochat/test";

pub const BOOTSTRAP_WEBHOOK_ENV: &str = "SYNOLOGY_CHAT_WEBHOOK";
pub const BOOTSTRAP_VERIFY_SSL_ENV: &str = "SYNOLOGY_CHAT_VERIFY_SSL";

/// Minimum interval between two test notifications from the same controller.
pub const COOLING_PERIOD: Duration = Duration::from_secs(10);

pub const SEND_TIMEOUT_SECS: u64 = 10;
pub const SNIPPET_MAX_CHARS: usize = 200;
pub const MESSAGE_HEADER: &str = "**WeRSS 更新公众号**";
pub const TEST_MESSAGE_FEED: &str = "测试通道连通性";

pub const COOLDOWN_MESSAGE: &str = "请等待10秒后再试";
pub const EMPTY_WEBHOOK_MESSAGE: &str = "Webhook地址不能为空";
pub const TEST_FAILED_PREFIX: &str = "测试失败";
pub const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save configuration";

pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn test_failed_message(snippet: &str) -> String {
    format!("{}: {}", TEST_FAILED_PREFIX, snippet)
}
