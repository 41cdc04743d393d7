//! Fetch command implementation
//!
//! Drives the whole pipeline for every query subcommand: resolve the mode,
//! perform the request, normalize the payload, and route the outcome
//! through the [`Screen`] so exactly one of loading/content/error is ever
//! visible.

use crate::cli::FetchArgs;
use crate::client::UfClient;
use crate::config::{LogFormat, LoggingConfig, ValorufConfig};
use crate::query::QueryMode;
use crate::series::{normalize, Normalized};
use crate::view::{table, Screen, ViewState};
use chrono::Local;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing based on configuration.
///
/// Logs go to stderr. Repeat initialization (several handlers in one
/// process, as under test) is a no-op rather than an error.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}

/// Resolve effective configuration for a fetch command.
///
/// A missing config file silently falls back to defaults; an explicit
/// `--base-url` wins over everything.
fn effective_config(args: &FetchArgs) -> Result<ValorufConfig, Box<dyn std::error::Error>> {
    let mut config = ValorufConfig::load(Some(&args.config))
        .unwrap_or_else(|_| ValorufConfig::default())
        .with_env_overrides();
    if let Some(url) = &args.base_url {
        config.api.base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Handle any fetch command: returns the rendered output for stdout, or the
/// presenter's error message as the handler error.
pub async fn handle_fetch(
    mode: QueryMode,
    args: &FetchArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = effective_config(args)?;
    init_tracing(&config.logging);

    let client = UfClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )?;

    let mut screen = Screen::new();
    let token = screen.begin();
    eprintln!("{}", screen.render());

    let today = Local::now().date_naive();
    let outcome: Result<Normalized, Box<dyn std::error::Error>> = match mode.resolve(today) {
        Ok(target) => client
            .fetch(&target)
            .await
            .map(normalize)
            .map_err(Into::into),
        Err(e) => Err(e.into()),
    };

    match outcome {
        Ok(data) => {
            screen.succeed(token, data);
            if args.json {
                let rows = match screen.state() {
                    ViewState::Content(rows) => rows.as_slice(),
                    _ => &[],
                };
                Ok(table::render_json(rows))
            } else {
                Ok(screen.render())
            }
        }
        Err(e) => {
            screen.fail(token, &e);
            Err(screen.render().into())
        }
    }
}
