use crate::config::constants::{BOOTSTRAP_VERIFY_SSL_ENV, BOOTSTRAP_WEBHOOK_ENV, ENABLED_KEY, VERIFY_SSL_KEY, WEBHOOK_KEY};
use crate::errors::SynochatResult;
use crate::helpers::config_helper::ConfigHelper;
use crate::services::synochat_sender::SynochatSender;
use crate::traits::settings_api::SettingsApi;

/// Seeds the store from `SYNOLOGY_CHAT_WEBHOOK`/`SYNOLOGY_CHAT_VERIFY_SSL`.
pub async fn init_from_env_if_missing(api: &dyn SettingsApi) -> SynochatResult<bool> {
    let webhook = std::env::var(BOOTSTRAP_WEBHOOK_ENV).ok();
    let verify_ssl = std::env::var(BOOTSTRAP_VERIFY_SSL_ENV).ok();
    init_if_missing(api, webhook.as_deref(), verify_ssl.as_deref()).await
}

/// Writes the channel settings once, when no webhook is stored yet.
/// Returns whether anything was written.
pub async fn init_if_missing(api: &dyn SettingsApi, webhook: Option<&str>, verify_ssl: Option<&str>) -> SynochatResult<bool> {
    let Some(webhook) = webhook.filter(|w| !w.trim().is_empty()) else {
        log::debug!("{} not set, nothing to bootstrap", BOOTSTRAP_WEBHOOK_ENV);
        return Ok(false);
    };

    let stored = api.get_config_value(WEBHOOK_KEY).await?;
    if stored.is_some() {
        log::info!("Synology Chat webhook already configured, skipping bootstrap");
        return Ok(false);
    }

    log::info!("Initializing Synology Chat configuration from environment variables");
    let verify_ssl = verify_ssl.map_or(true, ConfigHelper::parse_env_flag);

    api.put_config_value(ENABLED_KEY, "false").await?;
    api.put_config_value(WEBHOOK_KEY, webhook).await?;
    api.put_config_value(VERIFY_SSL_KEY, &verify_ssl.to_string()).await?;

    log::info!("Synology Chat configuration initialized for {}", SynochatSender::mask_url(webhook));
    Ok(true)
}
