/// Which of the two selection inputs a change event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Fiat,
    Crypto,
}

/// The user's current (fiat, crypto) choice. Both fields start empty and every
/// update overwrites unconditionally, so the last change always wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub fiat: String,
    pub crypto: String,
}

impl Selection {
    pub fn set(&mut self, field: SelectionField, value: String) {
        match field {
            SelectionField::Fiat => self.fiat = value,
            SelectionField::Crypto => self.crypto = value,
        }
    }

    /// Presence is the only check the form performs; whether the codes are
    /// actually quotable is left to the quote endpoint.
    pub fn is_complete(&self) -> bool {
        !self.fiat.is_empty() && !self.crypto.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_incomplete() {
        let selection = Selection::default();

        assert!(selection.fiat.is_empty());
        assert!(selection.crypto.is_empty());
        assert!(!selection.is_complete());
    }

    #[test]
    fn one_field_is_not_enough() {
        let mut selection = Selection::default();
        selection.set(SelectionField::Crypto, "BTC".to_string());

        assert!(!selection.is_complete());

        selection.set(SelectionField::Fiat, "USD".to_string());
        assert!(selection.is_complete());
    }

    #[test]
    fn last_write_wins() {
        let mut selection = Selection::default();
        selection.set(SelectionField::Fiat, "USD".to_string());
        selection.set(SelectionField::Fiat, "EUR".to_string());

        assert_eq!(selection.fiat, "EUR");
    }
}
