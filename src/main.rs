use clap::Parser;
use env_logger::Env;
use synochat_cli::errors::ErrorHandler;
use synochat_cli::structs::cli::Cli;
use synochat_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.server);

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
