//! The interactive game loop.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use oriel_core::{
    Action, ActionError, GameState, Player, StateKey, apply_action, state_key,
};
use oriel_engine::{EvalRegistry, choose_best_action, engine_evaluations_deepening};

use crate::error::CliError;
use crate::options::Options;
use crate::render::{clear_screen, render_board, render_depth_report};

/// A game in progress: position, side to move, and reached positions.
pub(crate) struct Game {
    pub(crate) state: GameState,
    pub(crate) to_move: Player,
    pub(crate) history: HashSet<StateKey>,
}

/// Why a submitted action was refused.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PlayRefusal {
    /// The action is illegal in the current position.
    Illegal(ActionError),
    /// The action would recreate a position already reached.
    WouldRepeat,
}

impl Game {
    /// Start a fresh game with X to move. The initial position counts as
    /// reached.
    pub(crate) fn new() -> Game {
        let state = GameState::initial();
        let mut history = HashSet::new();
        history.insert(state_key(&state, Player::X));
        Game {
            state,
            to_move: Player::X,
            history,
        }
    }

    /// Apply `action` for the side to move, enforcing the repetition
    /// rule, and record the new position.
    pub(crate) fn try_play(&mut self, action: Action) -> Result<(), PlayRefusal> {
        let next = apply_action(&self.state, action, self.to_move)
            .map_err(PlayRefusal::Illegal)?;
        let next_side = self.to_move.flip();
        let next_key = state_key(&next, next_side);
        if self.history.contains(&next_key) {
            return Err(PlayRefusal::WouldRepeat);
        }
        self.state = next;
        self.to_move = next_side;
        self.history.insert(next_key);
        Ok(())
    }
}

/// Drive a human-vs-engine game on stdin/stdout.
pub fn run_interactive(
    options: &Options,
    registry: &EvalRegistry,
    human: Player,
) -> Result<(), CliError> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("You play {human}. Enter actions like `place b2`, `move a1 c3`,");
    println!("or `shift 1 0`; `quit` leaves the game.");

    loop {
        clear_screen();
        render_board(&game.state);

        if let Some(winner) = game.state.winner() {
            if winner == human {
                println!("{winner} wins — congratulations!");
            } else {
                println!("{winner} wins.");
            }
            return Ok(());
        }
        if game.state.is_draw() {
            println!("Draw: the board is full.");
            return Ok(());
        }

        if game.to_move == human {
            if !human_turn(&mut game, &mut input)? {
                return Ok(());
            }
        } else if !engine_turn(&mut game, options, registry)? {
            println!("The engine has no legal moves: every action would repeat");
            println!("an earlier position. The game ends here.");
            return Ok(());
        }
    }
}

/// Prompt until the human plays a legal, non-repeating action.
///
/// Returns `Ok(false)` when the human quits or stdin closes.
fn human_turn(game: &mut Game, input: &mut impl BufRead) -> Result<bool, CliError> {
    loop {
        print!("{}> ", game.to_move);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("stdin closed, leaving game");
            return Ok(false);
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Ok(false);
        }

        let action: Action = match line.parse() {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match game.try_play(action) {
            Ok(()) => return Ok(true),
            Err(PlayRefusal::Illegal(err)) => println!("illegal action: {err}"),
            Err(PlayRefusal::WouldRepeat) => {
                println!("that would repeat an earlier position; pick another action");
            }
        }
    }
}

/// Let the engine pick and play an action.
///
/// Returns `Ok(false)` when every engine action would repeat a reached
/// position.
fn engine_turn(
    game: &mut Game,
    options: &Options,
    registry: &EvalRegistry,
) -> Result<bool, CliError> {
    let side = game.to_move;
    let evaluator = registry.get(options.evaluator_name(side));
    debug!(side = %side, eval = evaluator.name(), "engine to move");

    let action = if options.multi_pv > 0 {
        let report = engine_evaluations_deepening(
            &game.state,
            side,
            &game.history,
            options.engine_depth,
            options.multi_pv as usize,
            &evaluator,
            render_depth_report,
        );
        match report.evaluations.first() {
            Some(evaluation) => evaluation.action,
            None => return Ok(false),
        }
    } else {
        match choose_best_action(
            &game.state,
            side,
            &game.history,
            options.engine_depth,
            &evaluator,
        ) {
            Ok(action) => action,
            Err(oriel_engine::EngineError::NoLegalMoves) => return Ok(false),
            Err(err) => return Err(err.into()),
        }
    };

    println!("{side} (engine) plays {action}");
    if let Err(refusal) = game.try_play(action) {
        // The driver filtered repeats and enumerated legally; anything
        // else is an engine bug worth surfacing loudly.
        warn!(?refusal, %action, "engine produced an unplayable action");
        return Ok(false);
    }
    Ok(true)
}
