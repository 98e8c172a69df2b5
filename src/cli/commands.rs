use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "provision-status")]
#[command(about = "Live status dashboard for account provisioning")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Backend base URL, overrides `api.base_url`
    #[arg(short, long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI dashboard (default)
    Tui,

    /// Fetch the account list once and print it
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
