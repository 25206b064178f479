//! PushCourier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use push_courier::cli::{
    app::{load_merged_config, run_listen, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, DispatchOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
    signing_cmd::handle_signing_command,
};
use push_courier::domain::config::AppConfig;
use push_courier::infrastructure::{DisplayKind, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Signing { properties }) => {
            if let Err(e) = handle_signing_command(&properties, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: cli.app_name.clone(),
        icon: cli.icon.clone(),
        display: cli.display.map(|d| DisplayKind::from(d).to_string()),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Resolve the display backend
    let display = match config.display_or_default().parse::<DisplayKind>() {
        Ok(kind) => kind,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = DispatchOptions {
        app_name: config.app_name_or_default().to_string(),
        icon: config.icon_or_default().to_string(),
        display,
        payload: cli.payload.clone(),
    };

    // Route to appropriate handler
    if cli.listen {
        run_listen(options).await
    } else {
        run_oneshot(options).await
    }
}
