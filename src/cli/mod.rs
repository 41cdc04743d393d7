//! CLI module for the Valoruf client
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `value` - Fetch the UF value for one date
//! - `range` - Fetch UF values for an inclusive date range
//! - `today` - Fetch today's UF value
//! - `last-week` - Fetch the last seven days of values
//! - `cached` - Dump everything the backend has cached
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # One date, rendered as a table
//! valoruf value 2024-01-01
//!
//! # A range, as JSON, against a non-default backend
//! valoruf range 2024-01-01 2024-01-31 --json --base-url http://uf.example.cl/api/uf
//!
//! # Generate shell completions
//! valoruf completions bash > ~/.bash_completion.d/valoruf
//! ```

pub mod completions;
pub mod config;
pub mod fetch;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use fetch::handle_fetch;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Valoruf - UF series client
#[derive(Parser, Debug)]
#[command(
    name = "valoruf",
    version,
    about = "Query and display daily UF values from a Valoruf series backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the UF value for a single date
    Value(ValueArgs),
    /// Fetch UF values for an inclusive date range
    Range(RangeArgs),
    /// Fetch today's UF value
    Today(FetchArgs),
    /// Fetch the last seven days of UF values
    LastWeek(FetchArgs),
    /// Dump every value currently cached by the backend
    Cached(FetchArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every fetch command.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the API base URL (including the /api/uf prefix)
    #[arg(long, env = "VALORUF_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "valoruf.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Date to query (YYYY-MM-DD)
    pub date: String,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// First date of the range (YYYY-MM-DD)
    pub start: String,

    /// Last date of the range (YYYY-MM-DD)
    pub end: String,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "valoruf.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
