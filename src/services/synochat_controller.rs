use std::sync::Arc;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::config::constants::{test_failed_message, COOLDOWN_MESSAGE, COOLING_PERIOD, EMPTY_WEBHOOK_MESSAGE, SAVE_FAILED_MESSAGE};
use crate::services::synochat_api::{get_synochat_config, test_synochat_connection, update_synochat_config};
use crate::structs::send_result::SendResult;
use crate::structs::synochat_config::SynochatConfigUpdate;
use crate::structs::synochat_state::SynochatState;
use crate::traits::settings_api::SettingsApi;

pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Owns the editing state of the Synochat settings screen.
///
/// The controller is the only writer of its state; observers get snapshots
/// through [`SynochatController::subscribe`].
pub struct SynochatController {
    api: Arc<dyn SettingsApi>,
    state: watch::Sender<SynochatState>,
    clock: Clock,
}

impl SynochatController {
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        let (state, _) = watch::channel(SynochatState::default());

        Self {
            api,
            state,
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn state(&self) -> SynochatState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SynochatState> {
        self.state.subscribe()
    }

    pub fn set_webhook(&mut self, webhook: impl Into<String>) {
        let webhook = webhook.into();
        self.state.send_modify(|s| s.config.webhook = webhook);
    }

    pub fn set_verify_ssl(&mut self, verify_ssl: bool) {
        self.state.send_modify(|s| s.config.verify_ssl = verify_ssl);
    }

    pub async fn load_config(&mut self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let config = get_synochat_config(self.api.as_ref()).await;

        self.state.send_modify(|s| {
            s.config = config;
            s.loading = false;
        });
    }

    pub async fn save_config(&mut self) -> bool {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let update = SynochatConfigUpdate::from(&self.state.borrow().config);
        let outcome = update_synochat_config(self.api.as_ref(), &update).await;

        self.state.send_modify(|s| {
            s.loading = false;
            if let Err(e) = &outcome {
                s.error = Some(format!("{}: {}", SAVE_FAILED_MESSAGE, e));
            }
        });

        match outcome {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save Synochat config: {}", e.technical_details());
                false
            }
        }
    }

    /// Sends a test notification through the server.
    ///
    /// Returns `None` without touching the network while the cooldown is
    /// active or the webhook is blank. Otherwise the outcome, success or not,
    /// becomes the last test result.
    pub async fn test_connection(&mut self) -> Option<SendResult> {
        let now = (self.clock)();
        let (webhook, verify_ssl, last_test_time) = {
            let state = self.state.borrow();
            (state.config.webhook.clone(), state.config.verify_ssl, state.last_test_time)
        };

        if last_test_time.is_some_and(|last| Self::within_cooldown(last, now)) {
            self.state.send_modify(|s| s.error = Some(COOLDOWN_MESSAGE.to_string()));
            return None;
        }

        if webhook.trim().is_empty() {
            self.state.send_modify(|s| s.error = Some(EMPTY_WEBHOOK_MESSAGE.to_string()));
            return None;
        }

        self.state.send_modify(|s| {
            s.testing = true;
            s.error = None;
        });

        let (result, error) = match test_synochat_connection(self.api.as_ref(), &webhook, verify_ssl).await {
            Ok(result) => {
                let error = result.is_failure().then(|| test_failed_message(&result.snippet));
                (result, error)
            }
            Err(e) => {
                log::warn!("Synochat test call failed: {}", e);
                let result = e.into_send_result();
                let error = Some(test_failed_message(&result.snippet));
                (result, error)
            }
        };

        self.state.send_modify(|s| {
            s.last_test_result = Some(result.clone());
            s.last_test_time = Some(now);
            s.error = error;
            s.testing = false;
        });

        Some(result)
    }

    pub fn clear_error(&mut self) {
        self.state.send_modify(|s| s.error = None);
    }

    pub fn clear_test_result(&mut self) {
        self.state.send_modify(|s| {
            s.last_test_result = None;
            s.last_test_time = None;
        });
    }

    fn within_cooldown(last: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A clock that moved backwards keeps the gate closed.
        (now - last).to_std().map_or(true, |elapsed| elapsed < COOLING_PERIOD)
    }
}
