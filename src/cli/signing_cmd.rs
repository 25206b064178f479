//! Signing command handler

use std::path::Path;

use crate::domain::error::SigningError;
use crate::domain::signing::SigningConfig;
use crate::infrastructure::resolve_signing;

use super::presenter::Presenter;

/// Handle the signing subcommand: resolve and report the signing choice
pub async fn handle_signing_command(
    properties: &Path,
    presenter: &Presenter,
) -> Result<(), SigningError> {
    let config = resolve_signing(properties).await?;

    match &config {
        SigningConfig::Release(props) => {
            presenter.output(config.label());
            presenter.info(&format!(
                "Signing with key '{}' from {}",
                props.key_alias,
                props.store_file.display()
            ));
        }
        SigningConfig::Debug => {
            presenter.output(config.label());
            presenter.info(&format!(
                "No keystore at {}, falling back to debug signing",
                properties.display()
            ));
        }
    }

    Ok(())
}
