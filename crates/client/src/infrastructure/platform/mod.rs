//! Platform-specific implementations
//!
//! Browser builds alert through `window.alert`. Native builds render inside a
//! webview, so their notifier lives with the UI that owns it.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserNotifier;
