use tracing::{debug, error};

use crate::form::alert::AlertNotifier;
use crate::form::selection::Selection;
use crate::form::surface::ResultRegion;
use crate::services::market_data::cryptocompare::DisplayQuote;

pub const MISSING_SELECTION_MESSAGE: &str = "Both fields are required";
pub const QUOTE_FAILED_NOTICE: &str = "Quote lookup failed, pick a pair and try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Blocked { alert_shown: bool },
    Dispatched { generation: u64 },
}

/// The submit gate: no request leaves the form unless both selections are
/// present. A dispatched submission bumps the generation counter so a response
/// can later be told apart from one belonging to a superseded submission.
pub fn submit(
    selection: &Selection,
    notifier: &mut AlertNotifier,
    region: &mut ResultRegion,
    generation: &mut u64,
) -> Submission {
    if !selection.is_complete() {
        let alert_shown = notifier.show(MISSING_SELECTION_MESSAGE);
        return Submission::Blocked { alert_shown };
    }

    *generation += 1;
    region.show_loading();
    Submission::Dispatched {
        generation: *generation,
    }
}

/// Applies one resolved quote request to the region. A response from a
/// superseded submission is dropped, so a slow earlier request can never
/// overwrite the newest render. Returns whether the region changed.
pub fn apply_quote_response(
    region: &mut ResultRegion,
    current_generation: u64,
    generation: u64,
    outcome: anyhow::Result<DisplayQuote>,
) -> bool {
    if generation != current_generation {
        debug!(
            "dropping stale quote response (generation {}, current {})",
            generation, current_generation
        );
        return false;
    }

    match outcome {
        Ok(quote) => region.render_quote(&quote),
        Err(err) => {
            error!("quote request failed: {:#}", err);
            region.show_notice(QUOTE_FAILED_NOTICE);
        }
    }
    true
}
