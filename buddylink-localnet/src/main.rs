use anyhow::{Context, Result};
use buddylink_localnet_config::{load, RootConfig};
use clap::{Parser, Subcommand, ValueEnum};
use log::*;

/// Inspect the localnet configuration handed to the test harness.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the configuration document.
    Show {
        #[arg(long, short, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the `solana-test-validator` arguments, one per line.
    Args,
    /// Check account labels and ids for duplicates.
    Check,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
enum Format {
    Json,
    Toml,
}

fn init_logger() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let config = load().context("Failed to load localnet config")?;
    debug!("Ledger directory: {}", config.validator.ledger_dir.display());

    match cli.command {
        Command::Show { format } => println!("{}", render(&config, format)?),
        Command::Args => {
            let args = config
                .validator
                .test_validator_args()
                .context("Failed to derive validator arguments")?;
            for arg in args {
                println!("{arg}");
            }
        }
        Command::Check => {
            config.validate().context("Invalid localnet config")?;
            let summary = check_summary(&config);
            info!("{summary}");
            println!("{summary}");
        }
    }
    Ok(())
}

fn render(config: &RootConfig, format: Format) -> Result<String> {
    match format {
        Format::Json => config
            .to_json_pretty()
            .context("Failed to render config as JSON"),
        Format::Toml => Ok(config.to_string()),
    }
}

fn check_summary(config: &RootConfig) -> String {
    format!(
        "Config is valid: {} program accounts, {} data accounts",
        config.validator.program_accounts().count(),
        config.validator.data_accounts().count()
    )
}
