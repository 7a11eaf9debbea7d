//! CLI errors.

use oriel_engine::EngineError;

/// Errors that can occur while driving a game from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The engine could not produce a move.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
