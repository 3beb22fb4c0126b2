// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand starts the TUI. Subcommands:
// - summarize [FILE] [--copy]: Summarize once without the TUI
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// precis - summarize text from your terminal
#[derive(Parser)]
#[command(name = "precis")]
#[command(version = VERSION)]
#[command(about = "Summarize text from your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a file (or stdin) and print the result
    Summarize {
        /// File to read; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Also copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle `precis config ...`
pub fn handle_config(show: bool, reset: bool, edit: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else if edit {
        handle_config_edit();
    } else {
        println!("Usage: precis config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
    }
}

fn require_config_path() -> PathBuf {
    match Config::config_path() {
        Some(path) => path,
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_path() {
    println!("{}", require_config_path().display());
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!();
    println!("[engine]");
    println!("provider = {:?}", config.engine.provider.as_str());
    println!("model = {:?}", config.engine.model);
    match &config.engine.api_base {
        Some(base) => println!("api_base = {:?}", base),
        None => println!("# api_base = (default)"),
    }
    println!(
        "# api_key = {}",
        if config.engine.has_api_key() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    println!("timeout_secs = {}", config.engine.timeout_secs);
    println!("min_length = {}", config.engine.min_length);
    println!("max_length = {}", config.engine.max_length);
    println!("max_sentences = {}", config.engine.max_sentences);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!();
    println!("[ui]");
    println!("tick_ms = {}", config.ui.tick_ms);
    println!("show_logs = {}", config.ui.show_logs);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn confirm(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

fn handle_config_reset() {
    let path = require_config_path();

    if path.exists()
        && !confirm(&format!(
            "Config file exists at {}. Overwrite?",
            path.display()
        ))
    {
        println!("Aborted.");
        return;
    }

    if let Err(e) = Config::write_default(&path) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let path = require_config_path();

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["precis"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_summarize_args() {
        let cli = Cli::try_parse_from(["precis", "summarize", "notes.txt", "--copy"]).unwrap();
        match cli.command {
            Some(Commands::Summarize { file, copy }) => {
                assert_eq!(file, Some(PathBuf::from("notes.txt")));
                assert!(copy);
            }
            _ => panic!("expected summarize"),
        }

        let cli = Cli::try_parse_from(["precis", "summarize"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Summarize {
                file: None,
                copy: false
            })
        ));
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::try_parse_from(["precis", "config", "--show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, .. })
        ));
    }
}
