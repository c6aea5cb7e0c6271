use owo_colors::{OwoColorize, Style};
use tabled::{Table, Tabled};

use crate::form::surface::{Node, ResultRegion, PRICE_LABEL};
use crate::services::market_data::cryptocompare::CoinListing;

#[derive(Debug, Tabled)]
struct CoinRow {
    code: String,
    name: String,
}

pub fn coin_table(listings: &[CoinListing]) -> String {
    let rows: Vec<CoinRow> = listings
        .iter()
        .map(|listing| CoinRow {
            code: listing.code.clone(),
            name: listing.full_name.clone(),
        })
        .collect();

    Table::new(&rows).to_string()
}

pub fn print_alert(message: &str) {
    let alert_style = Style::new().red().bold();
    println!("{}", message.style(alert_style));
}

/// Projects the region's node list onto stdout. The loading node is not
/// printed here; the booth drives an animated spinner while it is up.
pub fn print_region(region: &ResultRegion) {
    let price_style = Style::new().black().on_white().bold();
    for node in region.nodes() {
        match node {
            Node::Loading => {}
            Node::Label { label, value } => {
                if *label == PRICE_LABEL {
                    println!("{}: {}", label, value.style(price_style));
                } else {
                    println!("{}: {}", label, value);
                }
            }
            Node::Notice(text) => println!("{}", text.dimmed()),
        }
    }
}
