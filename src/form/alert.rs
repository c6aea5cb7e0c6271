use tokio::time::{Duration, Instant};

pub const ALERT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub expires_at: Instant,
}

/// At most one alert is visible at a time; a second request while one is up is
/// dropped, not queued and not replacing. Visibility is answered by this flag,
/// never by scanning what happens to be on screen.
#[derive(Debug, Default)]
pub struct AlertNotifier {
    current: Option<Alert>,
}

impl AlertNotifier {
    /// Shows an alert unless one is already visible. Returns whether the
    /// message was actually taken.
    pub fn show(&mut self, message: &str) -> bool {
        if self.current.is_some() {
            return false;
        }

        self.current = Some(Alert {
            message: message.to_string(),
            expires_at: Instant::now() + ALERT_DISMISS_AFTER,
        });
        true
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|alert| alert.message.as_str())
    }

    /// When the currently visible alert should auto-dismiss, if any. There is
    /// no way to dismiss one earlier.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|alert| alert.expires_at)
    }

    pub fn expire(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_alert_is_dropped_while_one_is_visible() {
        let mut notifier = AlertNotifier::default();

        assert!(notifier.show("first"));
        assert!(!notifier.show("second"));
        assert_eq!(notifier.message(), Some("first"));
    }

    #[test]
    fn expiry_clears_the_alert_and_allows_a_new_one() {
        let mut notifier = AlertNotifier::default();
        notifier.show("first");
        notifier.expire();

        assert!(!notifier.is_visible());
        assert_eq!(notifier.deadline(), None);
        assert!(notifier.show("second"));
    }

    #[test]
    fn deadline_sits_a_fixed_delay_after_show() {
        let mut notifier = AlertNotifier::default();
        let before = Instant::now();
        notifier.show("missing fields");
        let after = Instant::now();

        let deadline = notifier.deadline().unwrap();
        assert!(deadline >= before + ALERT_DISMISS_AFTER);
        assert!(deadline <= after + ALERT_DISMISS_AFTER);
    }
}
