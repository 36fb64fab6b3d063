//! Interactive setup wizard
//!
//! Asks for the drop zone mode, the accept filter, the layout variant and
//! an optional publishable key, then saves the result.

use super::InspectorConfig;
use crate::ui::Variant;
use crate::ui::input::UserInput;
use config::ConfigError;
use std::path::Path;

fn input_error(e: impl std::fmt::Display) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

fn cancelled() -> ConfigError {
    ConfigError::Message("Setup cancelled".to_string())
}

/// Run the wizard, starting from `current`, and save to `path`
///
/// Blank answers for the accept filter and the key clear them.
///
/// # Errors
///
/// Returns `ConfigError` if input cannot be read, the user backs out, or
/// the configuration cannot be saved.
pub fn first_time_setup(
    input: &dyn UserInput,
    current: &InspectorConfig,
    path: &Path,
) -> Result<InspectorConfig, ConfigError> {
    let mut config = current.clone();

    config.dropzone.multiple = input
        .prompt_confirm("Allow dropping several files at once?", config.dropzone.multiple)
        .map_err(input_error)?
        .ok_or_else(cancelled)?;

    let accept = input
        .prompt_text(
            "Accepted file types (e.g. .png,image/*, blank for any)",
            config.dropzone.accept.as_deref(),
            true,
        )
        .map_err(input_error)?
        .ok_or_else(cancelled)?;
    config.set("dropzone.accept", &accept)?;

    let names: Vec<&str> = Variant::ALL.iter().map(Variant::as_str).collect();
    let current_variant = Variant::ALL
        .iter()
        .position(|v| *v == config.layout.variant)
        .unwrap_or_default();
    let choice = input
        .prompt_select("Layout variant", &names, current_variant)
        .map_err(input_error)?
        .ok_or_else(cancelled)?;
    config.layout.variant = Variant::ALL.get(choice).copied().unwrap_or_default();

    let key = input
        .prompt_text(
            "Clerk publishable key (blank to skip)",
            config.auth.publishable_key.as_deref(),
            true,
        )
        .map_err(input_error)?
        .ok_or_else(cancelled)?;
    config.set("auth.publishable_key", &key)?;

    config.save_to(path)?;
    log::info!("saved configuration to {}", path.display());

    Ok(config)
}
