//! # Mona Server
//!
//! Startup entry point of a Mona deployment. It loads the layered configuration, installs
//! logging, and refuses to continue when the deployment contract is not met.
//!
//! The `compose` command runs the landing page pipeline against JSON fixtures and prints the
//! resulting model, which is what the page template receives.
//!
//! ## Example
//! ```no_run
//! use clap::Parser;
//! use mona_server::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     mona_server::run(Cli::parse_from(["mona", "check", "--config", "mona.toml"]))
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mona::domain::config::AppConfig;
use mona::domain::landing::LandingPageModel;
use mona::domain::subscription::Subscription;
use mona::kernel::config::load_app_config;
use mona::kernel::security::claims::Claims;
use mona::landing::LandingPageComposer;
use mona_logger::Logger;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Command line of the `mona` binary.
#[derive(Debug, Parser)]
#[command(name = "mona", version, about = "Mona SaaS deployment and landing page tooling")]
pub struct Cli {
    /// Configuration file; `MONA__*` environment variables override its values.
    #[arg(long, short, global = true, default_value = "mona.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the deployment configuration and exit.
    Check,
    /// Compose a landing page model and print it as JSON.
    Compose(ComposeArgs),
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// JSON claims of the signed-in user (list of `{type, value}` or a map). Anonymous if omitted.
    #[arg(long)]
    pub claims: Option<PathBuf>,
    /// JSON subscription as returned by the marketplace.
    #[arg(long)]
    pub subscription: Option<PathBuf>,
    /// Render the page in its failure state with this code.
    #[arg(long)]
    pub error_code: Option<String>,
}

/// Runs the parsed command.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the deployment is invalid,
/// logging cannot be installed, or composing the landing page fails.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_app_config(Some(&cli.config)).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?.init()?;

    let config = mona::ensure_valid(config).inspect_err(|e| {
        error!("Refusing to start: {e}");
    })?;

    match cli.command {
        Command::Check => {
            info!(deployment = %config.deployment.name, "Deployment is ready");
            Ok(())
        },
        Command::Compose(args) => {
            let model = compose(&config, &args)?;
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &model)?;
            writeln!(stdout)?;
            Ok(())
        },
    }
}

/// Reads the compose inputs and runs them through the landing page pipeline.
///
/// # Errors
/// Returns an error if an input file cannot be read or parsed, or if composition fails.
pub fn compose(config: &AppConfig, args: &ComposeArgs) -> Result<LandingPageModel> {
    let claims: Option<Claims> = args.claims.as_deref().map(read_json).transpose()?;
    let subscription: Option<Subscription> =
        args.subscription.as_deref().map(read_json).transpose()?;

    compose_landing_page(config, claims.as_ref(), subscription.as_ref(), args.error_code.as_deref())
}

/// Composes a landing page the way a request handler does: user, offer, subscription,
/// deployment, then the optional error code.
///
/// # Errors
/// Returns an error if the subscription lacks a party or the error code is empty.
pub fn compose_landing_page(
    config: &AppConfig,
    claims: Option<&Claims>,
    subscription: Option<&Subscription>,
    error_code: Option<&str>,
) -> Result<LandingPageModel> {
    let mut composer = LandingPageComposer::new()
        .with_current_user_information(claims)
        .with_offer_information(Some(&config.offer))?;

    if subscription.is_some() {
        composer = composer.with_subscription_information(subscription)?;
    }

    composer = composer.with_deployment_information(Some(&config.deployment))?;

    if error_code.is_some() {
        composer = composer.with_error_code(error_code)?;
    }

    Ok(composer.build())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
