//! Browser platform implementations

use crate::ports::outbound::NotifierPort;

/// Notifier backed by `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserNotifier;

impl NotifierPort for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window available for alert: {}", message);
            return;
        };

        if let Err(e) = window.alert_with_message(message) {
            tracing::error!("Failed to show alert: {:?}", e);
        }
    }
}
