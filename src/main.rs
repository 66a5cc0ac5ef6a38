use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conversor::{RateSheet, RateTable};
use log::{debug, warn};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "conversor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Converts amounts between BRL, EUR and USD", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currency codes
    Currencies,
    /// Check whether a currency code is supported
    Supports {
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Convert an amount between two currencies
    Convert {
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
        #[arg(value_name = "FROM")]
        from: String,
        #[arg(value_name = "TO")]
        to: String,
    },
    /// Print the rate table as XML
    Sheet,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let table = RateTable::new();

    match cli.command {
        Commands::Currencies => {
            for code in table.get_currencies() {
                println!("{}", code);
            }
        }
        Commands::Supports { code } => {
            println!("{}", table.supports(&normalize_code(&code)));
        }
        Commands::Convert { amount, from, to } => {
            let amount = parse_amount(&amount)?;
            println!("{}", convert(&table, amount, &from, &to));
        }
        Commands::Sheet => {
            println!("{}", RateSheet::from_table(&table).to_xml()?);
        }
    }

    Ok(())
}

fn convert(table: &RateTable, amount: Decimal, from: &str, to: &str) -> Decimal {
    let from = normalize_code(from);
    let to = normalize_code(to);

    for code in [&from, &to] {
        if !table.supports(code) {
            warn!("Currency {} is not supported", code);
        }
    }

    let converted = table.convert(amount, &from, &to);
    debug!("{} {} -> {} {}", amount, from, converted, to);
    converted
}

fn parse_amount(s: &str) -> Result<Decimal> {
    let normalized_string = normalize_decimal_string(s.trim());
    Decimal::from_str(&normalized_string).with_context(|| format!("Invalid amount: {}", s))
}

fn normalize_decimal_string(s: &str) -> String {
    s.replace(',', ".")
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
