//! Native platform implementations
//!
//! The desktop renderer is a webview, so a notification is the page's own
//! `alert()` evaluated inside it. The evaluation is asynchronous: unlike the
//! browser's `window.alert`, the caller does not wait for the user to dismiss
//! it, so a reset after success lands while the alert is still open.

use dioxus::prelude::{document, spawn};

use internhub_client::ports::outbound::NotifierPort;

/// Notifier that raises `alert()` inside the desktop webview
#[derive(Clone, Copy, Default)]
pub struct WebviewNotifier;

impl NotifierPort for WebviewNotifier {
    fn alert(&self, message: &str) {
        match alert_script(message) {
            Ok(script) => {
                let eval = document::eval(&script);
                spawn(async move {
                    if let Err(e) = eval.await {
                        tracing::error!("Failed to show alert in webview: {}", e);
                    }
                });
            }
            Err(e) => tracing::error!("Failed to encode alert message: {}", e),
        }
    }
}

/// JavaScript that alerts `message`, with the message embedded as a JSON
/// string literal
fn alert_script(message: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(message)?;
    Ok(format!("alert({literal});"))
}
