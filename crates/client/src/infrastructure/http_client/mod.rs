//! HTTP adapters for the submission API
//!
//! The correct adapter is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
