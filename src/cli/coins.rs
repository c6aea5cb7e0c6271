use spinners_rs::{Spinner, Spinners};

use crate::cli::shared::coin_table;
use crate::services::market_data::cryptocompare::CryptoCompareClient;

pub async fn coins(limit: u8) -> anyhow::Result<()> {
    let client = CryptoCompareClient::new();
    let mut sp = Spinner::new(Spinners::Dots, "Loading coin list...");
    sp.start();
    let listings = client.fetch_top_coins(limit).await?;
    sp.stop();
    println!();

    println!("{}", coin_table(&listings));
    Ok(())
}
