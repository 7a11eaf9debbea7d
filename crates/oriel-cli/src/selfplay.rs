//! Computer-vs-computer driver.

use std::fmt;

use tracing::info;

use oriel_core::{GameState, Player};
use oriel_engine::{EngineError, Evaluator, choose_best_action, engine_evaluations_deepening};

use crate::render::{render_board, render_depth_report};

/// Why a self-play run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A side completed a line inside the window.
    Win(Player),
    /// The board filled with no winner.
    Draw,
    /// Every action for the side to move would repeat a position.
    NoLegalMoves(Player),
    /// The configured turn budget ran out.
    MaxTurns,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Win(player) => write!(f, "{player} wins"),
            Termination::Draw => write!(f, "draw"),
            Termination::NoLegalMoves(player) => {
                write!(f, "{player} has no legal moves")
            }
            Termination::MaxTurns => write!(f, "terminated by max turns"),
        }
    }
}

/// Configuration for one self-play run.
pub struct SelfPlayParams {
    /// Stop after this many committed turns; `None` plays to the end.
    pub max_turns: Option<u32>,
    /// Search depth for both sides.
    pub depth: u8,
    /// Ranked lines to print per depth; 0 or less disables reports.
    pub multi_pv: i32,
    /// Render the board and moves as the game runs.
    pub render: bool,
}

/// Result of a completed self-play run.
#[derive(Debug, Clone)]
pub struct SelfPlayReport {
    /// Why the run stopped.
    pub termination: Termination,
    /// Turns committed before stopping.
    pub turns: u32,
    /// The last position.
    pub final_state: GameState,
}

/// Play the engine against itself, each side with its own evaluator.
pub fn run_self_play(
    params: &SelfPlayParams,
    eval_x: &Evaluator,
    eval_o: &Evaluator,
) -> SelfPlayReport {
    let mut game = crate::game::Game::new();
    let mut turns: u32 = 0;

    let termination = loop {
        if params.render {
            render_board(&game.state);
        }

        if let Some(winner) = game.state.winner() {
            break Termination::Win(winner);
        }
        if game.state.is_draw() {
            break Termination::Draw;
        }
        if let Some(max_turns) = params.max_turns {
            if turns >= max_turns {
                break Termination::MaxTurns;
            }
        }

        let side = game.to_move;
        let evaluator = match side {
            Player::X => eval_x,
            Player::O => eval_o,
        };

        let action = if params.multi_pv > 0 {
            let report = engine_evaluations_deepening(
                &game.state,
                side,
                &game.history,
                params.depth,
                params.multi_pv as usize,
                evaluator,
                render_depth_report,
            );
            match report.evaluations.first() {
                Some(evaluation) => evaluation.action,
                None => break Termination::NoLegalMoves(side),
            }
        } else {
            match choose_best_action(&game.state, side, &game.history, params.depth, evaluator)
            {
                Ok(action) => action,
                Err(EngineError::NoLegalMoves) => break Termination::NoLegalMoves(side),
                Err(_) => break Termination::NoLegalMoves(side),
            }
        };

        if params.render {
            println!("{side} plays {action}");
        }
        if game.try_play(action).is_err() {
            // The driver's history filter should make this unreachable.
            break Termination::NoLegalMoves(side);
        }
        turns += 1;
    };

    info!(%termination, turns, "self-play finished");

    SelfPlayReport {
        termination,
        turns,
        final_state: game.state,
    }
}
