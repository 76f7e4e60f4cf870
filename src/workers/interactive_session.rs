use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::enums::session_command::SessionCommand;
use crate::errors::SynochatResult;
use crate::services::synochat_controller::SynochatController;

/// Line-driven front end over a [`SynochatController`]; the controller's
/// state, cooldown included, lives as long as the session.
pub struct InteractiveSession {
    controller: SynochatController,
}

impl InteractiveSession {
    pub fn new(controller: SynochatController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &SynochatController {
        &self.controller
    }

    pub async fn run<R>(&mut self, input: R) -> SynochatResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.controller.load_config().await;
        self.controller.state().print_summary();
        println!("Type 'help' for commands.");

        let mut lines = input.lines();
        loop {
            print!("synochat> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match SessionCommand::parse(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.execute(command).await,
                Err(message) => println!("❓ {}", message),
            }
        }

        Ok(())
    }

    pub async fn execute(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Show => self.controller.state().print_summary(),
            SessionCommand::Webhook(url) => self.controller.set_webhook(url),
            SessionCommand::VerifySsl(flag) => self.controller.set_verify_ssl(flag),
            SessionCommand::Save => {
                if self.controller.save_config().await {
                    println!("✅ Settings saved");
                }
            }
            SessionCommand::Reload => {
                self.controller.load_config().await;
                self.controller.state().print_summary();
            }
            SessionCommand::Test => {
                println!("📨 Sending test notification...");
                if let Some(result) = self.controller.test_connection().await {
                    let icon = if result.is_success() { "✅" } else { "❌" };
                    println!("{} {}", icon, result);
                }
            }
            SessionCommand::ClearError => self.controller.clear_error(),
            SessionCommand::ClearResult => self.controller.clear_test_result(),
            SessionCommand::Help => println!("{}", SessionCommand::HELP),
            SessionCommand::Quit => {}
        }

        if let Some(error) = self.controller.state().error {
            println!("⚠️ {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::config::constants::COOLDOWN_MESSAGE;
    use crate::services::test_support::MockSettingsApi;
    use crate::structs::send_result::SendResult;

    #[tokio::test]
    async fn session_keeps_cooldown_between_commands() {
        let mut api = MockSettingsApi::new();
        api.expect_get_config_value().returning(|_| Ok(None));
        api.expect_test_synochat()
            .times(1)
            .returning(|_| Ok(SendResult { status_code: 200, snippet: "ok".to_string() }));

        let mut session = InteractiveSession::new(SynochatController::new(Arc::new(api)));
        let script = "webhook https://nas/hook\ntest\ntest\nquit\ntest\n";
        session.run(script.as_bytes()).await.unwrap();

        let state = session.controller().state();
        assert_eq!(state.config.webhook, "https://nas/hook");
        assert_eq!(state.error.as_deref(), Some(COOLDOWN_MESSAGE));
    }
}
