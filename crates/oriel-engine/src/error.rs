//! Engine errors.

/// Errors surfaced by the search driver and the evaluation registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Every legal root action would recreate a recorded game position.
    #[error("no legal moves: every action repeats a recorded position")]
    NoLegalMoves,

    /// An evaluation plugin was registered under an unusable name.
    #[error("invalid evaluation plugin name: {name:?}")]
    InvalidPlugin {
        /// The rejected name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", EngineError::NoLegalMoves),
            "no legal moves: every action repeats a recorded position"
        );
        let err = EngineError::InvalidPlugin {
            name: String::new(),
        };
        assert_eq!(format!("{err}"), "invalid evaluation plugin name: \"\"");
    }
}
