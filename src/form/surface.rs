use crate::services::market_data::cryptocompare::DisplayQuote;

pub const PRICE_LABEL: &str = "Price";

/// The five quote blocks, labeled, in their fixed render order.
pub const QUOTE_LABELS: [&str; 5] = [
    PRICE_LABEL,
    "Day high",
    "Day low",
    "Change 24h (%)",
    "Last updated",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Loading,
    Label { label: &'static str, value: String },
    Notice(String),
}

/// The single output region. Every rendering operation replaces whatever was
/// there before; the terminal printout is a pure projection of this node list.
#[derive(Debug, Default)]
pub struct ResultRegion {
    nodes: Vec<Node>,
}

impl ResultRegion {
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn show_loading(&mut self) {
        self.clear();
        self.nodes.push(Node::Loading);
    }

    pub fn render_quote(&mut self, quote: &DisplayQuote) {
        self.clear();

        let values = [
            &quote.price,
            &quote.high_day,
            &quote.low_day,
            &quote.change_pct_24h,
            &quote.last_update,
        ];
        for (label, value) in QUOTE_LABELS.into_iter().zip(values) {
            self.nodes.push(Node::Label {
                label,
                value: value.clone(),
            });
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.clear();
        self.nodes.push(Node::Notice(text.into()));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.nodes.as_slice(), [Node::Loading])
    }
}
