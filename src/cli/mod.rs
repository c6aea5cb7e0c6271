pub mod booth;
pub mod coins;
pub mod quote;
pub mod shared;

use booth::booth;
use clap::{Parser, Subcommand};
use coins::coins;
use quote::quote;

use crate::services::market_data::cryptocompare::DEFAULT_TOP_LIMIT;

#[derive(Parser, Debug)]
struct Args {
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Interactive session: pick a pair, fetch quotes (default)
    Booth {},
    /// Fetch one quote and exit
    Quote {
        #[arg(short, long)]
        crypto: String,
        #[arg(short, long)]
        fiat: String,
    },
    /// List the top coins by market cap
    Coins {
        #[arg(short, long)]
        limit: Option<u8>,
    },
}

pub async fn cli() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.cmd.unwrap_or(Command::Booth {}) {
        Command::Booth {} => {
            booth().await?;
        }
        Command::Quote { crypto, fiat } => {
            quote(&crypto, &fiat).await?;
        }
        Command::Coins { limit } => {
            coins(limit.unwrap_or(DEFAULT_TOP_LIMIT)).await?;
        }
    }
    Ok(())
}
