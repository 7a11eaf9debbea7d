//! Adversarial search for the sliding-window three-in-a-row game.

pub mod eval;
pub mod search;

mod error;

pub use error::EngineError;
pub use eval::{DEFAULT_EVAL, EvalRegistry, Evaluator, POSITIONAL_EVAL};
pub use search::{
    DepthReport, EngineReport, RootEvaluation, SearchStats, choose_best_action,
    engine_evaluations, engine_evaluations_deepening,
};
