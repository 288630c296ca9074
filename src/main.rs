//! Command-line lookup of translated messages.
//!
//! ```text
//! lingo [--root DIR] [--locale TAG | --accept-language HEADER] KEY [ARG...]
//! ```

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lingo::TranslationStore;
use lingo::config::{
    ConfigError,
    LingoSettings,
};
use lingo::input::LoadError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors surfaced to the command line.
#[derive(Error, Debug)]
enum CliError {
    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Catalogs could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Resolve a message key against the workspace catalogs.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "lingo", version)]
struct Args {
    /// Workspace root holding `.lingo.json`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
    /// Resolve in this locale.
    #[arg(long, value_name = "TAG", conflicts_with = "accept_language")]
    locale: Option<String>,
    /// Negotiate the locale from an `Accept-Language` value.
    #[arg(long, value_name = "HEADER")]
    accept_language: Option<String>,
    /// Message key, e.g. `error.404`.
    key: String,
    /// Values for the message placeholders, in order.
    #[arg(trailing_var_arg = true)]
    values: Vec<String>,
}

/// Loads the store described by the workspace settings and resolves the key.
fn run(args: &Args) -> Result<String, CliError> {
    let settings = LingoSettings::load(&args.root)?;
    let store = TranslationStore::from_settings(&settings, Some(&args.root))?;

    let view = match (&args.locale, &args.accept_language) {
        (Some(locale), _) => store.view_for(locale),
        (None, Some(header)) => store.view_for_header(header),
        (None, None) => store.view_for(store.default_locale()),
    };
    tracing::debug!(locale = %view.locale(), key = args.key.as_str(), "Resolving message");

    let values: Vec<&dyn Display> = args.values.iter().map(|v| -> &dyn Display { v }).collect();
    Ok(view.value_with(&args.key, &values))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(text) => {
            if writeln!(std::io::stdout().lock(), "{text}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            let _ = writeln!(std::io::stderr().lock(), "{e}");
            ExitCode::FAILURE
        }
    }
}
