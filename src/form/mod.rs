pub mod alert;
pub mod event;
pub mod selection;
pub mod surface;
pub mod workflow;

// The fiat codes the form offers. This list is what gets printed as options;
// it is never used to validate what the user actually picked.
pub const FIAT_OPTIONS: [&str; 4] = ["USD", "MXN", "EUR", "GBP"];
