//! InternHub client.
//!
//! The submission use case, the ports it talks through, and the adapters that
//! implement those ports. Multi-platform support is provided via compile-time
//! `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::SubmitInternship;
pub use infrastructure::ClientConfig;
