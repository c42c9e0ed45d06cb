//! InternHub web client.
//!
//! UI and native platform adapters. The composition root lives in `main.rs`.

#[cfg(not(target_arch = "wasm32"))]
pub mod platform;
pub mod ui;

pub use ui::{app, Services};
