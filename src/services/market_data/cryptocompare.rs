use std::collections::HashMap;

use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;

use crate::services::shared::env::get_env_variable;

pub const CRYPTOCOMPARE_URL: &str = "https://min-api.cryptocompare.com";

// Top coins by market cap, quoted against USD.
pub const DEFAULT_TOP_LIMIT: u8 = 10;
const TOP_LIST_QUOTE_CURRENCY: &str = "USD";

/// One entry of the reference list: ticker code plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinListing {
    pub code: String,
    pub full_name: String,
}

/// The pre-formatted quote strings CryptoCompare serves in its DISPLAY section.
/// Rendered as-is; nothing here is ever parsed into numbers.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayQuote {
    #[serde(rename = "PRICE")]
    pub price: String,
    #[serde(rename = "HIGHDAY")]
    pub high_day: String,
    #[serde(rename = "LOWDAY")]
    pub low_day: String,
    #[serde(rename = "CHANGEPCT24HOUR")]
    pub change_pct_24h: String,
    #[serde(rename = "LASTUPDATE")]
    pub last_update: String,
}

#[derive(Deserialize, Debug)]
struct TopListResponse {
    #[serde(rename = "Data")]
    data: Vec<TopListItem>,
}

#[derive(Deserialize, Debug)]
struct TopListItem {
    #[serde(rename = "CoinInfo")]
    coin_info: CoinInfo,
}

#[derive(Deserialize, Debug)]
struct CoinInfo {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "FullName")]
    full_name: String,
}

#[derive(Deserialize, Debug)]
struct PriceMultiFullResponse {
    #[serde(rename = "DISPLAY")]
    display: HashMap<String, HashMap<String, DisplayQuote>>,
}

#[derive(Clone)]
pub struct CryptoCompareClient {
    client: Client,
    base_url: String,
}

impl CryptoCompareClient {
    pub fn new() -> Self {
        let base_url =
            get_env_variable("COINBOOTH_API_URL").unwrap_or_else(|| CRYPTOCOMPARE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn top_list_url(&self, limit: u8) -> String {
        format!(
            "{}/data/top/mktcapfull?limit={}&tsym={}",
            self.base_url, limit, TOP_LIST_QUOTE_CURRENCY
        )
    }

    pub fn quote_url(&self, crypto: &str, fiat: &str) -> String {
        format!(
            "{}/data/pricemultifull?fsyms={}&tsyms={}",
            self.base_url, crypto, fiat
        )
    }

    /// Fetches the top coins by market cap, in the order the API returns them.
    pub async fn fetch_top_coins(&self, limit: u8) -> anyhow::Result<Vec<CoinListing>> {
        let body = self
            .client
            .get(self.top_list_url(limit))
            .send()
            .await?
            .text()
            .await?;

        coin_listings_from_payload(&body)
    }

    /// Fetches the live quote for one crypto/fiat pair.
    pub async fn fetch_display_quote(
        &self,
        crypto: &str,
        fiat: &str,
    ) -> anyhow::Result<DisplayQuote> {
        let body = self
            .client
            .get(self.quote_url(crypto, fiat))
            .send()
            .await?
            .text()
            .await?;

        display_quote_from_payload(&body, crypto, fiat)
    }
}

impl Default for CryptoCompareClient {
    fn default() -> Self {
        Self::new()
    }
}

fn coin_listings_from_payload(body: &str) -> anyhow::Result<Vec<CoinListing>> {
    let response = serde_json::from_str::<TopListResponse>(body)?;

    Ok(response
        .data
        .into_iter()
        .map(|item| CoinListing {
            code: item.coin_info.name,
            full_name: item.coin_info.full_name,
        })
        .collect())
}

// The DISPLAY section is keyed [crypto][fiat]; a pair the API does not quote simply
// has no branch, which surfaces here as an error rather than a panic.
fn display_quote_from_payload(
    body: &str,
    crypto: &str,
    fiat: &str,
) -> anyhow::Result<DisplayQuote> {
    let response = serde_json::from_str::<PriceMultiFullResponse>(body)?;

    response
        .display
        .get(crypto)
        .and_then(|per_fiat| per_fiat.get(fiat))
        .cloned()
        .ok_or_else(|| anyhow!("no {}/{} quote in the response", crypto, fiat))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_LIST_PAYLOAD: &str = r#"{
        "Message": "Success",
        "Data": [
            {"CoinInfo": {"Name": "BTC", "FullName": "Bitcoin", "Internal": "BTC"}},
            {"CoinInfo": {"Name": "ETH", "FullName": "Ethereum", "Internal": "ETH"}},
            {"CoinInfo": {"Name": "XRP", "FullName": "XRP", "Internal": "XRP"}}
        ]
    }"#;

    const QUOTE_PAYLOAD: &str = r#"{
        "RAW": {"BTC": {"USD": {"PRICE": 50000.0, "MARKET": "CCCAGG"}}},
        "DISPLAY": {
            "BTC": {
                "USD": {
                    "PRICE": "$50,000",
                    "HIGHDAY": "$51,000",
                    "LOWDAY": "$49,000",
                    "CHANGEPCT24HOUR": "1.5",
                    "LASTUPDATE": "Just now",
                    "MARKET": "CCCAGG"
                }
            }
        }
    }"#;

    #[test]
    fn top_list_keeps_payload_order() {
        let listings = coin_listings_from_payload(TOP_LIST_PAYLOAD).unwrap();

        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].code, "BTC");
        assert_eq!(listings[0].full_name, "Bitcoin");
        assert_eq!(listings[1].code, "ETH");
        assert_eq!(listings[2].code, "XRP");
    }

    #[test]
    fn top_list_rejects_malformed_payload() {
        assert!(coin_listings_from_payload("not json").is_err());
        assert!(coin_listings_from_payload(r#"{"Data": "nope"}"#).is_err());
    }

    #[test]
    fn quote_extracts_the_requested_pair() {
        let quote = display_quote_from_payload(QUOTE_PAYLOAD, "BTC", "USD").unwrap();

        assert_eq!(quote.price, "$50,000");
        assert_eq!(quote.high_day, "$51,000");
        assert_eq!(quote.low_day, "$49,000");
        assert_eq!(quote.change_pct_24h, "1.5");
        assert_eq!(quote.last_update, "Just now");
    }

    #[test]
    fn quote_missing_pair_is_an_error() {
        assert!(display_quote_from_payload(QUOTE_PAYLOAD, "ETH", "USD").is_err());
        assert!(display_quote_from_payload(QUOTE_PAYLOAD, "BTC", "EUR").is_err());
    }

    #[test]
    fn urls_interpolate_both_codes() {
        let client = CryptoCompareClient::with_base_url("https://example.test");

        assert_eq!(
            client.quote_url("BTC", "USD"),
            "https://example.test/data/pricemultifull?fsyms=BTC&tsyms=USD"
        );
        assert_eq!(
            client.top_list_url(10),
            "https://example.test/data/top/mktcapfull?limit=10&tsym=USD"
        );
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn live_top_list() {
        let client = CryptoCompareClient::new();
        let listings = client.fetch_top_coins(DEFAULT_TOP_LIMIT).await.unwrap();

        assert_eq!(listings.len(), usize::from(DEFAULT_TOP_LIMIT));
        assert!(listings.iter().all(|listing| !listing.code.is_empty()));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn live_quote() {
        let client = CryptoCompareClient::new();
        let quote = client.fetch_display_quote("BTC", "USD").await.unwrap();

        assert!(!quote.price.is_empty());
        assert!(!quote.last_update.is_empty());
    }
}
