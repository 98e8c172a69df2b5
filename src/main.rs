use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{error, info};

use provision_status::{
    api::AccountsClient,
    cli::{Cli, Commands, OutputFormat},
    config::Config,
    logging,
    tui::run_tui,
    utils,
    view::{status_badge, ApiKeyCell, TimestampFormatter},
};

const COLUMN_WIDTHS: [usize; 4] = [32, 30, 20, 20];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config, cli.url.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            std::process::exit(1);
        }
    };

    let dashboard = matches!(cli.command, None | Some(Commands::Tui));
    if dashboard {
        if let Err(e) = logging::init_file(&config.logging) {
            eprintln!("{}", format!("Failed to open log file: {}", e).red());
            std::process::exit(1);
        }
    } else {
        logging::init_stderr();
    }

    let result = match cli.command {
        None | Some(Commands::Tui) => run_tui(config).await,

        Some(Commands::List { format }) => {
            info!("Fetching account list from {}", config.api.base_url);
            list_accounts(&config, format).await
        }

        Some(Commands::Config) => show_config(&config),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn list_accounts(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = AccountsClient::new(&config.api.base_url, config.request_timeout())?;
    let formatter = TimestampFormatter::new(&config.display.timestamp_format)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("GET {}", client.endpoint()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = client.fetch_accounts().await;
    spinner.finish_and_clear();
    let accounts = fetched?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    if accounts.is_empty() {
        println!("{}", "No accounts found".yellow());
        return Ok(());
    }

    let total_width = COLUMN_WIDTHS.iter().sum::<usize>() + 2 * COLUMN_WIDTHS.len();
    utils::print_table_border(total_width);
    utils::print_table_row(&["Email", "Status", "API Key", "Created"], &COLUMN_WIDTHS);
    utils::print_table_border(total_width);

    for account in &accounts {
        let badge = status_badge(&account.status);
        let key = ApiKeyCell::new(account.api_key(), config.display.key_preview_chars);
        let created = formatter.format(account.created_at());

        let key_text = utils::pad_display(key.text(), COLUMN_WIDTHS[2]);
        let key_text = match key {
            ApiKeyCell::Available { .. } => key_text.normal(),
            ApiKeyCell::NotAvailable => key_text.dimmed(),
        };
        let email = utils::truncate_display(&account.gmail, COLUMN_WIDTHS[0]);

        println!(
            "{}  {}  {}  {}",
            utils::pad_display(&email, COLUMN_WIDTHS[0]),
            utils::colorize_badge(&badge, COLUMN_WIDTHS[1]),
            key_text,
            created,
        );
    }
    utils::print_table_border(total_width);
    println!("{} account(s)", accounts.len());

    Ok(())
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
