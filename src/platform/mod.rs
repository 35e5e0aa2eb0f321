//! Platform glue
//!
//! Failures that can only happen while wiring the game to a browser
//! window and a GPU. The simulation itself cannot fail.

use thiserror::Error;

/// Startup failure in the platform shell
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document in window")]
    NoDocument,
    #[error("canvas element `{0}` not found")]
    NoCanvas(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("failed to register {0} listener")]
    Listener(&'static str),
}
