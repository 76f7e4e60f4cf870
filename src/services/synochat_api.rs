use futures::future::{self, BoxFuture, FutureExt};

use crate::config::constants::{VERIFY_SSL_KEY, WEBHOOK_KEY};
use crate::enums::test_error::TestError;
use crate::errors::{SynochatError, SynochatResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::send_result::SendResult;
use crate::structs::synochat_config::{SynochatConfig, SynochatConfigUpdate};
use crate::structs::synochat_test_request::SynochatTestRequest;
use crate::traits::settings_api::SettingsApi;

/// Reads both settings concurrently. A failed or missing read on either key
/// collapses to the defaults.
pub async fn get_synochat_config(api: &dyn SettingsApi) -> SynochatConfig {
    let (webhook, verify_ssl) = futures::join!(
        api.get_config_value(WEBHOOK_KEY),
        api.get_config_value(VERIFY_SSL_KEY),
    );

    match (webhook, verify_ssl) {
        (Ok(Some(webhook)), Ok(Some(verify_ssl))) => SynochatConfig {
            webhook,
            verify_ssl: ConfigHelper::parse_stored_flag(Some(&verify_ssl)),
        },
        (webhook, verify_ssl) => {
            for (key, read) in [(WEBHOOK_KEY, webhook), (VERIFY_SSL_KEY, verify_ssl)] {
                match read {
                    Err(error) => log::error!("Failed to fetch Synochat config: {}", error),
                    Ok(None) => log::error!("Failed to fetch Synochat config: {} is not stored", key),
                    Ok(Some(_)) => {}
                }
            }
            SynochatConfig::default()
        }
    }
}

/// Writes the provided fields concurrently. Every write runs to completion;
/// nothing is rolled back when one of them fails.
pub async fn update_synochat_config(api: &dyn SettingsApi, update: &SynochatConfigUpdate) -> SynochatResult<()> {
    let mut writes: Vec<BoxFuture<'_, SynochatResult<()>>> = Vec::new();

    if let Some(webhook) = &update.webhook {
        writes.push(api.put_config_value(WEBHOOK_KEY, webhook).boxed());
    }

    if let Some(verify_ssl) = update.verify_ssl {
        let value = verify_ssl.to_string();
        writes.push(async move { api.put_config_value(VERIFY_SSL_KEY, &value).await }.boxed());
    }

    let failures: Vec<SynochatError> = future::join_all(writes)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect();

    match SynochatError::from_batch(failures, "saving Synochat config") {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub async fn test_synochat_connection(api: &dyn SettingsApi, webhook: &str, verify_ssl: bool) -> Result<SendResult, TestError> {
    let request = SynochatTestRequest {
        webhook: webhook.to_string(),
        verify_ssl,
    };

    api.test_synochat(request).await
}
