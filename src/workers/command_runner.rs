use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::TEST_MESSAGE_FEED;
use crate::enums::commands::Commands;
use crate::enums::message_type::MessageType;
use crate::errors::{SynochatError, SynochatResult};
use crate::services::bootstrap;
use crate::services::notifier::send_synology_message;
use crate::services::synochat_api::{get_synochat_config, update_synochat_config};
use crate::services::synochat_controller::SynochatController;
use crate::services::synochat_sender::SynochatSender;
use crate::services::wx_client::WxApiClient;
use crate::structs::config::config::Config;
use crate::structs::synochat_config::SynochatConfigUpdate;
use crate::traits::settings_api::SettingsApi;
use crate::workers::interactive_session::InteractiveSession;

pub struct CommandRunner {
    server_override: Option<String>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(server_override: Option<String>) -> Self {
        Self {
            server_override,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SynochatResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Show => self.show_command().await,
            Commands::Set { webhook, verify_ssl } => self.set_command(webhook, verify_ssl).await,
            Commands::Test => self.test_command().await,
            Commands::Send { title, text, feeds, webhook, insecure } => {
                self.send_command(title, text, feeds, webhook, insecure).await
            }
            Commands::Bootstrap => self.bootstrap_command().await,
            Commands::MessageTypes => {
                self.message_types_command();
                Ok(())
            }
            Commands::Interactive => self.interactive_command().await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> SynochatResult<Config> {
        let mut config = ConfigManager::load()?;
        if let Some(server) = &self.server_override {
            config.server.base_url = server.clone();
        }
        Ok(config)
    }

    fn api(&self) -> SynochatResult<Arc<dyn SettingsApi>> {
        let config = self.load_config()?;
        log::debug!("Using settings API at {}", config.server.base_url);
        Ok(Arc::new(WxApiClient::from_config(&config.server)?))
    }

    fn init_command(&self) -> SynochatResult<()> {
        let path = ConfigManager::default_path();
        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Edit {} to point at your WeRSS server.", path.display());
        log::info!("🔧 Run 'synochat validate' to check it.");
        Ok(())
    }

    fn validate_command(&self) -> SynochatResult<()> {
        let config = self.load_config()?;
        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        if result.is_valid() {
            Ok(())
        } else {
            Err(SynochatError::config_error(
                &format!("{} problem(s) found", result.errors.len()),
                None,
                Some("Fix the entries listed above"),
            ))
        }
    }

    async fn show_command(&self) -> SynochatResult<()> {
        let api = self.api()?;
        let config = get_synochat_config(api.as_ref()).await;

        if config.webhook.is_empty() {
            println!("📮 Webhook:    <not set>");
        } else {
            println!("📮 Webhook:    {}", SynochatSender::mask_url(&config.webhook));
        }
        println!("🔒 Verify SSL: {}", config.verify_ssl);
        Ok(())
    }

    async fn set_command(&self, webhook: Option<String>, verify_ssl: Option<bool>) -> SynochatResult<()> {
        let update = SynochatConfigUpdate { webhook, verify_ssl };
        if update.is_empty() {
            return Err(SynochatError::validation_error(
                "set",
                "",
                "at least one of --webhook or --verify-ssl",
                Some("synochat set --webhook <url> --verify-ssl true"),
            ));
        }

        let api = self.api()?;
        update_synochat_config(api.as_ref(), &update).await?;
        log::info!("✅ Settings saved");
        Ok(())
    }

    async fn test_command(&self) -> SynochatResult<()> {
        let mut controller = SynochatController::new(self.api()?);
        controller.load_config().await;

        log::info!("📨 Sending test notification...");
        let result = controller.test_connection().await;
        let state = controller.state();

        match (result, state.error) {
            (Some(result), None) => {
                println!("✅ {}", result);
                Ok(())
            }
            (result, Some(error)) => Err(SynochatError::network_error(
                "testing Synology Chat",
                None,
                result.map(|r| r.status_code),
                &error,
            )),
            (None, None) => Ok(()),
        }
    }

    async fn send_command(
        &self,
        title: String,
        text: Option<String>,
        feeds: Vec<String>,
        webhook: Option<String>,
        insecure: bool,
    ) -> SynochatResult<()> {
        let feeds = if feeds.is_empty() { vec![TEST_MESSAGE_FEED.to_string()] } else { feeds };
        let text = text.unwrap_or_else(|| SynochatSender::build_text(&feeds));
        let verify_ssl = if insecure { Some(false) } else { None };

        let api = self.api()?;
        let result = send_synology_message(api.as_ref(), webhook.as_deref(), &title, &text, verify_ssl).await?;
        println!("✅ {}", result);
        Ok(())
    }

    async fn bootstrap_command(&self) -> SynochatResult<()> {
        let api = self.api()?;
        if bootstrap::init_from_env_if_missing(api.as_ref()).await? {
            log::info!("✅ Synology Chat settings seeded from the environment");
        } else {
            log::info!("ℹ️ Nothing to bootstrap");
        }
        Ok(())
    }

    fn message_types_command(&self) {
        for message_type in MessageType::ALL {
            println!("{:>2}  {:<14} {}", message_type.code(), message_type.label(), message_type.color());
        }
    }

    async fn interactive_command(&self) -> SynochatResult<()> {
        let controller = SynochatController::new(self.api()?);
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        InteractiveSession::new(controller).run(stdin).await
    }
}
