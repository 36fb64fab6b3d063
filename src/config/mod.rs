//! Configuration module for inspector
//!
//! Settings for the drop zone, the main layout and the identity provider.
//! Stored as TOML in the user's config directory and layered under
//! environment overrides (`INSPECTOR_` prefix, `__` between sections, e.g.
//! `INSPECTOR_LAYOUT__VARIANT=neon`).

mod setup;

pub use setup::first_time_setup;

use crate::auth::AuthSettings;
use crate::selection::{AcceptFilter, SelectionConfig};
use crate::ui::Variant;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Drop zone settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DropzoneSettings {
    /// Keep every dropped file (false keeps only the first)
    pub multiple: bool,
    /// `accept` descriptor for the picker
    pub accept: Option<String>,
}

impl Default for DropzoneSettings {
    fn default() -> Self {
        Self {
            multiple: true,
            accept: None,
        }
    }
}

impl DropzoneSettings {
    /// Construction parameters for a selection manager
    #[must_use]
    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig::default()
            .with_multiple(self.multiple)
            .with_accept(AcceptFilter::from_option(self.accept.as_deref()))
    }
}

/// Main layout settings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LayoutSettings {
    /// Visual variant
    pub variant: Variant,
    /// Fill the available height
    pub fixed: bool,
    /// Use the full width instead of a centred column
    pub fluid: bool,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Drop zone behaviour
    #[serde(default)]
    pub dropzone: DropzoneSettings,

    /// Main layout appearance
    #[serde(default)]
    pub layout: LayoutSettings,

    /// Identity provider
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Keys understood by `config get` / `config set`
pub const KEYS: [&str; 13] = [
    "quiet",
    "dropzone.multiple",
    "dropzone.accept",
    "layout.variant",
    "layout.fixed",
    "layout.fluid",
    "auth.publishable_key",
    "auth.app_url",
    "auth.sign_in_url",
    "auth.sign_up_url",
    "auth.after_sign_out_url",
    "auth.sign_in_fallback_redirect_url",
    "auth.sign_up_fallback_redirect_url",
];

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::Message(format!(
            "Invalid value for {key}: '{value}' (expected true or false)"
        ))),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl InspectorConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("inspector").join("config.toml"))
    }

    /// Environment source for overrides
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix("INSPECTOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from the default path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            log::info!("created default config at {}", config_path.display());
        }

        Self::load_from(&config_path, Self::environment())
    }

    /// Load configuration from `path` with the given environment layered on top
    ///
    /// A missing file counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a setting by dotted key
    ///
    /// Unset optional values read as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "quiet" => self.quiet.to_string(),
            "dropzone.multiple" => self.dropzone.multiple.to_string(),
            "dropzone.accept" => self.dropzone.accept.clone().unwrap_or_default(),
            "layout.variant" => self.layout.variant.to_string(),
            "layout.fixed" => self.layout.fixed.to_string(),
            "layout.fluid" => self.layout.fluid.to_string(),
            "auth.publishable_key" => self.auth.publishable_key.clone().unwrap_or_default(),
            "auth.app_url" => self.auth.app_url.clone(),
            "auth.sign_in_url" => self.auth.sign_in_url.clone(),
            "auth.sign_up_url" => self.auth.sign_up_url.clone(),
            "auth.after_sign_out_url" => self.auth.after_sign_out_url.clone(),
            "auth.sign_in_fallback_redirect_url" => self.auth.sign_in_fallback_redirect_url.clone(),
            "auth.sign_up_fallback_redirect_url" => self.auth.sign_up_fallback_redirect_url.clone(),
            _ => return Err(Self::unknown_key(key)),
        };
        Ok(value)
    }

    /// Change a setting by dotted key (does not save)
    ///
    /// An empty value clears optional settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an invalid value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => self.quiet = parse_bool(key, value)?,
            "dropzone.multiple" => self.dropzone.multiple = parse_bool(key, value)?,
            "dropzone.accept" => self.dropzone.accept = optional(value),
            "layout.variant" => {
                self.layout.variant = value
                    .parse()
                    .map_err(|e: crate::ui::UiError| ConfigError::Message(e.to_string()))?;
            }
            "layout.fixed" => self.layout.fixed = parse_bool(key, value)?,
            "layout.fluid" => self.layout.fluid = parse_bool(key, value)?,
            "auth.publishable_key" => self.auth.publishable_key = optional(value),
            "auth.app_url" => self.auth.app_url = value.trim().to_string(),
            "auth.sign_in_url" => self.auth.sign_in_url = value.trim().to_string(),
            "auth.sign_up_url" => self.auth.sign_up_url = value.trim().to_string(),
            "auth.after_sign_out_url" => self.auth.after_sign_out_url = value.trim().to_string(),
            "auth.sign_in_fallback_redirect_url" => {
                self.auth.sign_in_fallback_redirect_url = value.trim().to_string();
            }
            "auth.sign_up_fallback_redirect_url" => {
                self.auth.sign_up_fallback_redirect_url = value.trim().to_string();
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    fn unknown_key(key: &str) -> ConfigError {
        ConfigError::Message(format!(
            "Unknown configuration key '{key}'. Known keys: {}",
            KEYS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        InspectorConfig::environment().source(Some(map))
    }

    #[test]
    fn test_default_config() {
        let config = InspectorConfig::default();
        assert!(!config.quiet);
        assert!(config.dropzone.multiple);
        assert!(config.dropzone.accept.is_none());
        assert_eq!(config.layout.variant, Variant::Glassmorphism);
        assert!(!config.layout.fixed);
        assert!(!config.layout.fluid);
        assert!(config.auth.publishable_key.is_none());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = InspectorConfig::load_from(&dir.path().join("none.toml"), env(&[])).unwrap();
        assert_eq!(config, InspectorConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = InspectorConfig::default();
        config.dropzone.multiple = false;
        config.dropzone.accept = Some(".png,.jpg".to_string());
        config.layout.variant = Variant::Neon;
        config.save_to(&path).unwrap();

        let loaded = InspectorConfig::load_from(&path, env(&[])).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\nvariant = \"particles\"\n").unwrap();

        let config = InspectorConfig::load_from(&path, env(&[])).unwrap();
        assert_eq!(config.layout.variant, Variant::Particles);
        assert!(config.dropzone.multiple);
        assert_eq!(config.auth.sign_in_url, "/clerk/sign-in");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dropzone]\nmultiple = true\n").unwrap();

        let config = InspectorConfig::load_from(
            &path,
            env(&[
                ("INSPECTOR_DROPZONE__MULTIPLE", "false"),
                ("INSPECTOR_AUTH__PUBLISHABLE_KEY", "pk_test_abc"),
            ]),
        )
        .unwrap();

        assert!(!config.dropzone.multiple);
        assert_eq!(config.auth.publishable_key.as_deref(), Some("pk_test_abc"));
    }

    #[test]
    fn test_invalid_variant_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\nvariant = \"sparkles\"\n").unwrap();

        assert!(InspectorConfig::load_from(&path, env(&[])).is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = InspectorConfig::default();

        config.set("dropzone.multiple", "no").unwrap();
        config.set("dropzone.accept", "image/*").unwrap();
        config.set("layout.variant", "gradient").unwrap();

        assert_eq!(config.get("dropzone.multiple").unwrap(), "false");
        assert_eq!(config.get("dropzone.accept").unwrap(), "image/*");
        assert_eq!(config.get("layout.variant").unwrap(), "gradient");

        config.set("dropzone.accept", "").unwrap();
        assert!(config.dropzone.accept.is_none());
    }

    #[test]
    fn test_get_and_set_redirect_routes() {
        let mut config = InspectorConfig::default();
        assert_eq!(config.get("auth.after_sign_out_url").unwrap(), "/clerk/sign-in");
        assert_eq!(
            config.get("auth.sign_in_fallback_redirect_url").unwrap(),
            "/clerk/user-management"
        );

        config.set("auth.after_sign_out_url", " /bye ").unwrap();
        config.set("auth.sign_in_fallback_redirect_url", "/home").unwrap();
        config.set("auth.sign_up_fallback_redirect_url", "/welcome").unwrap();

        assert_eq!(config.auth.after_sign_out_url, "/bye");
        assert_eq!(config.get("auth.sign_in_fallback_redirect_url").unwrap(), "/home");
        assert_eq!(config.get("auth.sign_up_fallback_redirect_url").unwrap(), "/welcome");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = InspectorConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("layout.variant", "sparkles").is_err());
        assert!(config.set("nope", "1").is_err());
        assert!(config.get("nope").is_err());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = InspectorConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_ok(), "{key} should be readable");
        }
    }

    #[test]
    fn test_selection_config_from_settings() {
        let settings = DropzoneSettings {
            multiple: false,
            accept: Some(".pdf".to_string()),
        };
        let selection = settings.selection_config();
        assert!(!selection.multiple);
        assert_eq!(selection.accept.descriptor(), Some(".pdf"));
    }
}
