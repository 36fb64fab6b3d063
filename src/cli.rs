//! Command-line interface definitions and parsing
//!
//! This module defines the CLI for inspector using the `clap` crate.
//!
//! # Commands
//!
//! - **drop**: Drop zone screen, returns the final selection (default)
//! - **coming-soon**: Placeholder page
//! - **auth**: Identity provider gate
//! - **config**: Show, query and edit the configuration
//! - **completions**: Shell completion scripts
//!
//! The drop zone flags are accepted without the subcommand, so
//! `inspector --single --accept .png` and `inspector drop --single
//! --accept .png` are the same.
//!
//! # Examples
//!
//! ```
//! use inspector::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["inspector", "--single", "--json"]);
//! match cli.get_command() {
//!     Commands::Drop(args) => assert!(args.single && args.json),
//!     _ => unreachable!(),
//! }
//! ```

use crate::InspectorError;
use crate::config::InspectorConfig;
use crate::ui::Variant;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Drop zone options
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DropArgs {
    /// Keep only the first dropped file
    #[arg(long = "single")]
    pub single: bool,

    /// Accepted file types for the picker (e.g. ".png,.jpg,image/*")
    #[arg(long = "accept", value_name = "DESC")]
    pub accept: Option<String>,

    /// Layout variant (overrides config)
    #[arg(long = "variant", value_enum, value_name = "VARIANT")]
    pub variant: Option<Variant>,

    /// Fill the terminal height
    #[arg(long = "fixed")]
    pub fixed: bool,

    /// Use the full terminal width
    #[arg(long = "fluid")]
    pub fluid: bool,

    /// Directory the picker opens in (defaults to the current directory)
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print the final selection as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl DropArgs {
    /// Apply the flags on top of the loaded configuration
    pub fn apply(&self, config: &mut InspectorConfig) {
        if self.single {
            config.dropzone.multiple = false;
        }
        if let Some(accept) = &self.accept {
            config.dropzone.accept = Some(accept.clone());
        }
        if let Some(variant) = self.variant {
            config.layout.variant = variant;
        }
        config.layout.fixed |= self.fixed;
        config.layout.fluid |= self.fluid;
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key (e.g., layout.variant)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., dropzone.multiple=false)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Print the config file location
    Path,

    /// Run the interactive setup wizard
    Init,
}

impl ConfigCommands {
    /// Split a `key=value` setting
    ///
    /// # Errors
    ///
    /// Returns `InspectorError::InvalidInput` if there is no `=` or the key is empty.
    pub fn parse_setting(setting: &str) -> Result<(&str, &str), InspectorError> {
        match setting.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
            _ => Err(InspectorError::InvalidInput(
                "Invalid format. Use: inspector config set key=value".into(),
            )),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the drop zone and print the selected files on exit (default)
    #[command(visible_alias = "d")]
    Drop(DropArgs),

    /// Show the placeholder page
    ComingSoon,

    /// Show the identity provider gate
    Auth {
        /// Open the hosted sign-in page in the browser instead
        #[arg(long = "open")]
        open: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inspector command line
#[derive(Parser, Debug)]
#[command(name = "inspector")]
#[command(about = "Pick files by dropping them onto the terminal", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub drop: DropArgs,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Drop with the top-level flags
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Drop(self.drop.clone()))
    }
}

/// Write a completion script for `shell`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
