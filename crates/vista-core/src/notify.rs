//! Notification surface

use vista_navigation::Alert;

/// Presents alerts to the user. Fire and forget.
pub trait Notifier {
    fn show_alert(&self, alert: &Alert);
}
