use crate::config::constants::{VERIFY_SSL_KEY, WEBHOOK_KEY};
use crate::errors::{SynochatError, SynochatResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::synochat_sender::SynochatSender;
use crate::structs::send_result::SendResult;
use crate::traits::settings_api::SettingsApi;

/// Sends a titled message, filling in the webhook and verify-SSL flag from the
/// settings store when they are not given.
pub async fn send_synology_message(
    api: &dyn SettingsApi,
    webhook: Option<&str>,
    title: &str,
    text: &str,
    verify_ssl: Option<bool>,
) -> SynochatResult<SendResult> {
    let content = if title.is_empty() {
        text.to_string()
    } else {
        format!("{}\n{}", title, text)
    };

    let webhook = match webhook.filter(|w| !w.trim().is_empty()) {
        Some(webhook) => webhook.to_string(),
        None => resolve_webhook(api).await?,
    };

    let verify_ssl = match verify_ssl {
        Some(flag) => flag,
        None => resolve_verify_ssl(api).await,
    };

    log::info!("Sending Synology Chat message to {}", SynochatSender::mask_url(&webhook));
    let result = SynochatSender::send(&content, &webhook, verify_ssl).await;

    if !result.is_success() {
        return Err(SynochatError::network_error(
            "sending Synology Chat message",
            Some(&SynochatSender::mask_url(&webhook)),
            Some(result.status_code),
            &result.snippet,
        ));
    }

    Ok(result)
}

async fn resolve_webhook(api: &dyn SettingsApi) -> SynochatResult<String> {
    match api.get_config_value(WEBHOOK_KEY).await {
        Ok(Some(webhook)) if !webhook.trim().is_empty() => {
            log::debug!("Using stored webhook {}", SynochatSender::mask_url(&webhook));
            Ok(webhook)
        }
        Ok(_) => Err(SynochatError::config_error(
            "webhook URL is not configured and none was provided",
            Some(WEBHOOK_KEY),
            Some("Run 'synochat set --webhook <url>' or pass --webhook"),
        )),
        Err(e) => {
            log::error!("Failed to read webhook configuration: {}", e);
            Err(SynochatError::settings_error(WEBHOOK_KEY, "read", &e.to_string()))
        }
    }
}

async fn resolve_verify_ssl(api: &dyn SettingsApi) -> bool {
    match api.get_config_value(VERIFY_SSL_KEY).await {
        Ok(value) => ConfigHelper::parse_stored_flag(value.as_deref()),
        Err(e) => {
            log::error!("Failed to read SSL configuration, verifying certificates: {}", e);
            true
        }
    }
}
