use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use owo_colors::OwoColorize;
use spinners_rs::{Spinner, Spinners};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error};

use crate::cli::shared::{coin_table, print_alert, print_region};
use crate::form::alert::AlertNotifier;
use crate::form::event::{parse_event, FormEvent};
use crate::form::selection::{Selection, SelectionField};
use crate::form::surface::ResultRegion;
use crate::form::workflow::{apply_quote_response, submit, Submission, MISSING_SELECTION_MESSAGE};
use crate::form::FIAT_OPTIONS;
use crate::services::market_data::cryptocompare::{
    CryptoCompareClient, DisplayQuote, DEFAULT_TOP_LIMIT,
};

type QuoteResponse = (u64, anyhow::Result<DisplayQuote>);
type QuoteFuture = Pin<Box<dyn Future<Output = QuoteResponse>>>;

/// The interactive booth session: load the coin list once, print the form,
/// then loop over stdin lines, resolving quote requests and the alert timer.
pub async fn booth() -> anyhow::Result<()> {
    let client = CryptoCompareClient::new();

    let mut sp = Spinner::new(Spinners::Dots, "Loading coin list...");
    sp.start();
    // A failed reference load is logged and the session continues with an
    // empty option list; there is no retry within the session.
    let coins = match client.fetch_top_coins(DEFAULT_TOP_LIMIT).await {
        Ok(coins) => coins,
        Err(err) => {
            error!("could not load the coin list: {:#}", err);
            vec![]
        }
    };
    sp.stop();
    println!();

    if !coins.is_empty() {
        println!("{}", coin_table(&coins));
    }
    println!("Fiat options: {}", FIAT_OPTIONS.join(", "));
    print_help();

    let mut selection = Selection::default();
    let mut notifier = AlertNotifier::default();
    let mut region = ResultRegion::default();
    let mut generation: u64 = 0;

    let mut lines = BufReader::new(stdin()).lines();
    let mut in_flight: FuturesUnordered<QuoteFuture> = FuturesUnordered::new();
    let mut spinner: Option<Spinner> = None;

    loop {
        let alert_deadline = notifier.deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_event(&line) {
                    Some(FormEvent::Quit) => break,
                    Some(FormEvent::Help) => print_help(),
                    Some(FormEvent::Set(field, value)) => {
                        let label = match field {
                            SelectionField::Fiat => "fiat",
                            SelectionField::Crypto => "crypto",
                        };
                        println!("{}", format!("{} set to {}", label, value).dimmed());
                        selection.set(field, value);
                    }
                    Some(FormEvent::Submit) => {
                        match submit(&selection, &mut notifier, &mut region, &mut generation) {
                            Submission::Blocked { alert_shown } => {
                                if alert_shown {
                                    print_alert(MISSING_SELECTION_MESSAGE);
                                }
                            }
                            Submission::Dispatched { generation } => {
                                let client = client.clone();
                                let crypto = selection.crypto.clone();
                                let fiat = selection.fiat.clone();
                                in_flight.push(Box::pin(async move {
                                    (generation, client.fetch_display_quote(&crypto, &fiat).await)
                                }));
                                if spinner.is_none() {
                                    let mut sp = Spinner::new(Spinners::Dots, "Fetching quote...");
                                    sp.start();
                                    spinner = Some(sp);
                                }
                            }
                        }
                    }
                    None => println!("Unrecognized command, type 'help' for the command list."),
                }
            }
            Some((response_generation, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                if apply_quote_response(&mut region, generation, response_generation, outcome) {
                    if let Some(mut sp) = spinner.take() {
                        sp.stop();
                        println!();
                    }
                    print_region(&region);
                }
            }
            _ = sleep_until(alert_deadline.unwrap_or_else(Instant::now)), if alert_deadline.is_some() => {
                notifier.expire();
                debug!("alert dismissed");
            }
        }
    }

    if let Some(mut sp) = spinner.take() {
        sp.stop();
        println!();
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  crypto <CODE>   pick the cryptocurrency (e.g. crypto BTC)");
    println!("  fiat <CODE>     pick the fiat currency (e.g. fiat USD)");
    println!("  go              fetch the quote for the current pair");
    println!("  help            show this list again");
    println!("  quit            end the session");
}
