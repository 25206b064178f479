//! Dispatch runners for one-shot and listen modes

use std::path::Path;
use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::application::ports::{ConfigStore, PayloadSource, SourceError};
use crate::application::DispatchUseCase;
use crate::domain::config::AppConfig;
use crate::domain::push::PushPayload;
use crate::infrastructure::{create_display, JsonLinesSource, XdgConfigStore};

use super::args::DispatchOptions;
use super::presenter::Presenter;
use super::signals::ShutdownListener;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a single dispatch: one payload in, one notification request out
pub async fn run_oneshot(options: DispatchOptions) -> ExitCode {
    let presenter = Presenter::new();

    let json = match read_payload_input(options.payload.as_deref()).await {
        Ok(json) => json,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let payload = match PushPayload::from_json(&json) {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let display = create_display(options.display, &options.app_name);
    let use_case = DispatchUseCase::new(display, options.icon);

    match use_case.dispatch(&payload).await {
        Ok(request) => {
            presenter.dispatched(&request);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run listen mode: dispatch newline-delimited payloads from stdin
/// until EOF or a shutdown signal.
pub async fn run_listen(options: DispatchOptions) -> ExitCode {
    let presenter = Presenter::new();

    let mut shutdown = match ShutdownListener::new() {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let display = create_display(options.display, &options.app_name);
    let use_case = DispatchUseCase::new(display, options.icon);
    let mut source = JsonLinesSource::stdin();

    presenter.info("Listening for payloads on stdin (Ctrl-C to stop)");

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                presenter.info("Shutting down");
                break;
            }
            next = source.next() => match next {
                Ok(Some(payload)) => match use_case.dispatch(&payload).await {
                    Ok(request) => presenter.dispatched(&request),
                    // Per-event failure: report on the host side, keep the stream
                    Err(e) => presenter.warn(&e.to_string()),
                },
                Ok(None) => break,
                Err(SourceError::Malformed(message)) => {
                    presenter.warn(&format!("Skipping malformed payload: {}", message));
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_ERROR);
                }
            },
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Read the raw payload document from a file or stdin
async fn read_payload_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read payload file {}: {}", path.display(), e)),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .map_err(|e| format!("Failed to read payload from stdin: {}", e))?;
            Ok(input)
        }
    }
}

/// Load and merge configuration from file and CLI.
///
/// Env vars (`PUSH_COURIER_ICON`, `PUSH_COURIER_DISPLAY`) arrive inside
/// `cli_config` already: clap fills absent flags from them, and an explicit
/// flag still wins over the env var.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < env < cli (the last two come in together)
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn read_payload_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let json = read_payload_input(Some(file.path())).await.unwrap();
        assert_eq!(json, "{}");
    }

    #[tokio::test]
    async fn load_merged_config_fills_every_field() {
        let merged = load_merged_config(AppConfig::empty()).await;
        assert!(merged.app_name.is_some());
        assert!(merged.icon.is_some());
        assert!(merged.display.is_some());
    }

    #[tokio::test]
    async fn load_merged_config_cli_takes_precedence() {
        let cli_config = AppConfig {
            display: Some("noop".to_string()),
            ..Default::default()
        };
        let merged = load_merged_config(cli_config).await;
        assert_eq!(merged.display, Some("noop".to_string()));
    }

    #[tokio::test]
    async fn read_payload_input_missing_file() {
        let err = read_payload_input(Some(Path::new("/nonexistent/event.json")))
            .await
            .unwrap_err();
        assert!(err.contains("Failed to read payload file"));
    }
}
