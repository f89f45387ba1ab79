//! `hisi-tui`: terminal storefront and back office for Hisi Studio.
//!
//! Three screens, reachable with number keys: Home (hero and featured
//! product carousels), Orders (paginated admin order list with status
//! updates) and Settings (admin preferences, including font scale and
//! high contrast that restyle the whole UI).
//!
//! Logs go to a file (default `/tmp/hisi-tui.log`) so they never corrupt
//! the terminal. Connection settings come from the same profiles the
//! `hisi` CLI uses; flags override them.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use secrecy::SecretString;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hisi_core::{AdminConsole, ClientConfig, PreferencesContext, Storefront};

use crate::app::{App, Services};

/// Terminal storefront and back office for Hisi Studio.
#[derive(Parser, Debug)]
#[command(name = "hisi-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short, long, env = "HISI_PROFILE")]
    profile: Option<String>,

    /// Backend base URL (overrides the profile)
    #[arg(short = 'u', long, env = "HISI_API_URL")]
    api_url: Option<String>,

    /// Admin bearer token (overrides keyring and profile)
    #[arg(short = 't', long, env = "HISI_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/hisi-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing only: anything on stdout/stderr would corrupt the
/// TUI. Hold the returned guard until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("hisi_tui={log_level},hisi_core={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("hisi-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Profile settings with the flags layered on top. A broken config file
/// is not fatal: the storefront still works against the default backend.
fn build_client_config(cli: &Cli) -> Result<(ClientConfig, u32)> {
    let config = hisi_config::load_config().unwrap_or_else(|e| {
        warn!(error = %e, "config unreadable, using defaults");
        hisi_config::Config::default()
    });
    let (name, profile) = config.profile(cli.profile.as_deref())?;

    let url = match cli.api_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(raw) => hisi_config::parse_api_url(raw)?,
        None => hisi_config::parse_api_url(&hisi_config::effective_api_url(&profile))?,
    };

    let mut client = ClientConfig::new(url);
    client.timeout = Duration::from_secs(profile.timeout.unwrap_or(config.defaults.timeout));

    let token = cli
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| SecretString::from(t.to_owned()))
        .or_else(|| hisi_config::resolve_token(&profile, &name));
    if let Some(token) = token {
        client = client.with_token(token);
    }

    info!(profile = %name, api_url = %client.api_url, "resolved connection");
    Ok((client, config.defaults.per_page))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks before the terminal enters raw mode.
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);
    info!(version = env!("CARGO_PKG_VERSION"), "starting hisi-tui");

    let (client, per_page) = build_client_config(&cli)?;
    let storefront = Storefront::from_config(&client)?;
    let admin = match AdminConsole::from_config(&client) {
        Ok(admin) => Some(admin),
        Err(e) => {
            info!(reason = %e, "admin screens disabled");
            None
        }
    };

    let mut app = App::new(Services {
        storefront,
        admin,
        preferences: PreferencesContext::default(),
        per_page,
    });
    app.run().await?;

    Ok(())
}
