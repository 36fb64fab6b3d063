//! Inspector CLI application entry point
//!
//! Opens the drop zone in the terminal and prints the files the user
//! picked when they quit, so the result can be piped into other tools.
//!
//! # Usage
//!
//! ```bash
//! # Drop zone (default command)
//! inspector
//! inspector drop --single --accept ".png,image/*"
//!
//! # Selection as JSON
//! inspector --json > selection.json
//!
//! # Other screens
//! inspector coming-soon
//! inspector auth
//! inspector auth --open
//!
//! # Configuration
//! inspector config show
//! inspector config set layout.variant=neon
//! inspector config init
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory (`~/.config/inspector/config.toml`
//! on Linux). Environment variables prefixed with `INSPECTOR_` override it,
//! e.g. `INSPECTOR_DROPZONE__MULTIPLE=false`.
//!
//! # Logging
//!
//! Diagnostics go to stderr through `env_logger`; set `RUST_LOG=debug` to
//! trace drag, drop and picker events.

use colored::Colorize;
use inspector::{
    InspectorError, Result,
    auth::AuthGate,
    cli::{Cli, Commands, ConfigCommands, DropArgs, generate_completions},
    config::{InspectorConfig, first_time_setup},
    selection::SelectedFile,
    ui::{AppState, DialoguerInput, InspectorApp, OutputWriter, Screen, StdoutWriter},
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Resolve the auth gate for a TUI session
///
/// A malformed key only fails the auth screen itself; elsewhere it is
/// logged and the gate falls back to the setup instructions.
fn resolve_gate(config: &InspectorConfig, screen: Screen) -> Result<AuthGate> {
    match AuthGate::from_env(&config.auth) {
        Ok(gate) => Ok(gate),
        Err(e) if screen != Screen::Auth => {
            log::warn!("ignoring publishable key: {e}");
            Ok(AuthGate::MissingKey)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_tui(config: &InspectorConfig, screen: Screen, dir: Option<PathBuf>) -> Result<Vec<SelectedFile>> {
    let gate = resolve_gate(config, screen)?;
    let root = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    log::debug!(
        "starting on {screen:?} (multiple: {}, variant: {})",
        config.dropzone.multiple,
        config.layout.variant
    );

    let state = AppState::new(config.dropzone.selection_config(), config.layout, gate, root)
        .with_screen(screen);
    Ok(InspectorApp::new().run(state)?)
}

fn handle_drop_command(mut config: InspectorConfig, args: &DropArgs, quiet: bool) -> Result<()> {
    args.apply(&mut config);
    let files = run_tui(&config, Screen::Dropzone, args.dir.clone())?;

    if args.json {
        let json = serde_json::to_string_pretty(&files).map_err(io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    if files.is_empty() {
        if !quiet {
            StdoutWriter::new().info("No files selected");
        }
        return Ok(());
    }

    for file in &files {
        println!("{}", file.handle.display());
    }
    Ok(())
}

fn handle_auth_command(config: &InspectorConfig, open: bool, quiet: bool) -> Result<()> {
    if !open {
        run_tui(config, Screen::Auth, None)?;
        return Ok(());
    }

    match AuthGate::from_env(&config.auth)? {
        AuthGate::Mounted(provider) => {
            let url = provider.open_sign_in()?;
            if !quiet {
                StdoutWriter::new().success(&format!("Opened {url}"));
            }
            Ok(())
        }
        AuthGate::MissingKey => Err(InspectorError::InvalidInput(
            "No publishable key configured. Set CLERK_PUBLISHABLE_KEY or run 'inspector config init'".into(),
        )),
    }
}

fn handle_config_command(mut config: InspectorConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    let output = StdoutWriter::new();
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| InspectorError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = ConfigCommands::parse_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                output.success(&format!("Set {key} = {}", config.get(key)?));
            }
        }
        ConfigCommands::Path => {
            println!("{}", InspectorConfig::config_path()?.display());
        }
        ConfigCommands::Init => {
            let path = InspectorConfig::config_path()?;
            first_time_setup(&DialoguerInput::new(), &config, &path)?;
            if !quiet {
                output.success(&format!("Saved configuration to {}", path.display()));
            }
        }
    }
    Ok(())
}

/// Load the configuration and settle the effective quiet flag
fn load_config(cli: &Cli) -> Result<(InspectorConfig, bool)> {
    let config = InspectorConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    Ok((config, quiet))
}

fn run(cli: &Cli) -> Result<()> {
    match cli.get_command() {
        // Completions never touch the config file
        Commands::Completions { shell } => {
            generate_completions(shell, &mut io::stdout());
            Ok(())
        }
        Commands::Drop(args) => {
            let (config, quiet) = load_config(cli)?;
            handle_drop_command(config, &args, quiet)
        }
        Commands::ComingSoon => {
            let (config, _) = load_config(cli)?;
            run_tui(&config, Screen::ComingSoon, None).map(|_| ())
        }
        Commands::Auth { open } => {
            let (config, quiet) = load_config(cli)?;
            handle_auth_command(&config, open, quiet)
        }
        Commands::Config { command } => {
            let (config, quiet) = load_config(cli)?;
            handle_config_command(config, &command, quiet)
        }
    }
}

/// Main entry point for the inspector application
fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_completions_dispatch_without_config() {
        let cli = Cli::parse_from(["inspector", "completions", "bash"]);
        assert!(run(&cli).is_ok());
    }
}
