use spinners_rs::{Spinner, Spinners};

use crate::cli::shared::print_region;
use crate::form::surface::ResultRegion;
use crate::services::market_data::cryptocompare::CryptoCompareClient;

/// One-shot variant of the booth's submit: fetch and render a single quote
/// without a session.
pub async fn quote(crypto: &str, fiat: &str) -> anyhow::Result<()> {
    let crypto = crypto.trim().to_uppercase();
    let fiat = fiat.trim().to_uppercase();

    let client = CryptoCompareClient::new();
    let mut sp = Spinner::new(Spinners::Dots, "Fetching quote...");
    sp.start();
    let quote = client.fetch_display_quote(&crypto, &fiat).await?;
    sp.stop();
    println!();

    let mut region = ResultRegion::default();
    region.render_quote(&quote);
    print_region(&region);

    Ok(())
}
