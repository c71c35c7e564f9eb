//! Core domain models and state transitions for the EcoSplash sign-in flow

#[cfg(feature = "ssr")]
pub mod config;
mod flow;
mod reveal;
mod role;

pub use flow::*;
pub use reveal::*;
pub use role::*;
