use crate::form::selection::SelectionField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Set(SelectionField, String),
    Submit,
    Help,
    Quit,
}

/// Maps one input line to a form event. Codes are trimmed and upper-cased
/// here, the same canonicalization a select control applies before handing a
/// value to its change handler; membership is not checked at this boundary.
pub fn parse_event(line: &str) -> Option<FormEvent> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();

    match (command.as_str(), words.next()) {
        ("crypto" | "asset", Some(code)) => {
            Some(FormEvent::Set(SelectionField::Crypto, code.to_uppercase()))
        }
        ("fiat", Some(code)) => Some(FormEvent::Set(SelectionField::Fiat, code.to_uppercase())),
        ("go" | "submit", None) => Some(FormEvent::Submit),
        ("help", None) => Some(FormEvent::Help),
        ("quit" | "exit", None) => Some(FormEvent::Quit),
        _ => None,
    }
}
