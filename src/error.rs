//! Startup error types

use ggez::GameError;
use thiserror::Error;

/// Errors that can abort startup before the event loop takes over
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("platform initialization failed: {0}")]
    Init(#[from] GameError),
    #[error("failed to load asset {path}: {source}")]
    AssetLoad {
        path: String,
        #[source]
        source: GameError,
    },
}
