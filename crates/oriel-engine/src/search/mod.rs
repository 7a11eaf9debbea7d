//! Search driver: multi-PV ranking and iterative deepening.

pub mod minimax;
pub mod ordering;
pub mod tt;

use std::collections::HashSet;

use tracing::debug;

use oriel_core::{Action, GameState, Player, StateKey, apply_action, legal_actions, state_key};

use crate::error::EngineError;
use crate::eval::Evaluator;
use minimax::{INF, SearchContext, search};
use tt::TranspositionTable;

/// Counters accumulated over one search invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included.
    pub nodes_visited: u64,
    /// Exact transposition-table answers.
    pub cache_hits: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

/// One ranked root action with its line.
#[derive(Debug, Clone)]
pub struct RootEvaluation {
    /// The root action.
    pub action: Action,
    /// Score in the AI side's frame.
    pub score: i32,
    /// Principal variation; its head is `action`.
    pub pv: Vec<Action>,
}

/// The ranked result of one search invocation.
#[derive(Debug, Clone)]
pub struct EngineReport {
    /// Root evaluations, best first.
    pub evaluations: Vec<RootEvaluation>,
    /// Accumulated counters.
    pub stats: SearchStats,
}

/// Progress snapshot published after each completed depth.
#[derive(Debug, Clone)]
pub struct DepthReport {
    /// The depth just completed.
    pub depth: u8,
    /// The final depth the deepening run will reach.
    pub max_depth: u8,
    /// Counters for this depth alone.
    pub stats: SearchStats,
    /// Ranked evaluations at this depth.
    pub evaluations: Vec<RootEvaluation>,
    /// Name of the evaluation plugin in use.
    pub eval_name: String,
}

/// Rank the AI side's root actions by a full-width search to `max_depth`.
///
/// Root actions whose successor recreates a position in `history` are
/// dropped before searching. All surviving actions share one
/// transposition table; the payoff of searching siblings against warm
/// entries is the driver's main speed-up. `multi_pv` bounds the returned
/// list; zero means "return all".
pub fn engine_evaluations(
    state: &GameState,
    ai: Player,
    history: &HashSet<StateKey>,
    max_depth: u8,
    multi_pv: usize,
    evaluator: &Evaluator,
) -> EngineReport {
    let mut stats = SearchStats::default();
    let opponent = ai.flip();

    let root_actions: Vec<(Action, GameState)> = legal_actions(state, ai)
        .into_iter()
        .map(|action| {
            let next =
                apply_action(state, action, ai).expect("enumerated action must apply");
            (action, next)
        })
        .filter(|(_, next)| !history.contains(&state_key(next, opponent)))
        .collect();

    if root_actions.is_empty() {
        return EngineReport {
            evaluations: Vec::new(),
            stats,
        };
    }

    let root_key = state_key(state, ai);
    let mut tt = TranspositionTable::new();
    let mut path: HashSet<StateKey> = HashSet::new();
    path.insert(root_key);

    let mut evaluations = Vec::with_capacity(root_actions.len());
    for (action, next) in root_actions {
        let mut ctx = SearchContext {
            ai,
            max_depth,
            evaluator,
            tt: &mut tt,
            path: &mut path,
            history,
            stats: &mut stats,
        };
        let outcome = search(&next, opponent, 1, -INF, INF, &mut ctx);

        let mut pv = Vec::with_capacity(outcome.pv.len() + 1);
        pv.push(action);
        pv.extend(outcome.pv);
        evaluations.push(RootEvaluation {
            action,
            score: outcome.score,
            pv,
        });
    }

    // Stable: equal scores keep the enumeration order.
    evaluations.sort_by(|a, b| b.score.cmp(&a.score));
    if multi_pv > 0 {
        evaluations.truncate(multi_pv);
    }

    EngineReport { evaluations, stats }
}

/// Run [`engine_evaluations`] at depths 1..=`max_depth`, publishing a
/// [`DepthReport`] after each depth and before starting the next.
///
/// Each depth runs with fresh counters and a fresh transposition table,
/// keeping every iteration's bounds trivially sound. Returns the final
/// depth's report.
pub fn engine_evaluations_deepening<F>(
    state: &GameState,
    ai: Player,
    history: &HashSet<StateKey>,
    max_depth: u8,
    multi_pv: usize,
    evaluator: &Evaluator,
    mut on_depth: F,
) -> EngineReport
where
    F: FnMut(&DepthReport),
{
    let mut last = EngineReport {
        evaluations: Vec::new(),
        stats: SearchStats::default(),
    };

    for depth in 1..=max_depth {
        let report = engine_evaluations(state, ai, history, depth, multi_pv, evaluator);
        debug!(
            depth,
            nodes = report.stats.nodes_visited,
            hits = report.stats.cache_hits,
            cutoffs = report.stats.cutoffs,
            "depth complete"
        );
        on_depth(&DepthReport {
            depth,
            max_depth,
            stats: report.stats,
            evaluations: report.evaluations.clone(),
            eval_name: evaluator.name().to_string(),
        });
        last = report;
    }

    last
}

/// Return the best action for `ai`, searching to `max_depth`.
///
/// Fails with [`EngineError::NoLegalMoves`] when every legal action
/// would recreate a recorded position.
pub fn choose_best_action(
    state: &GameState,
    ai: Player,
    history: &HashSet<StateKey>,
    max_depth: u8,
    evaluator: &Evaluator,
) -> Result<Action, EngineError> {
    let report = engine_evaluations(state, ai, history, max_depth, 1, evaluator);
    report
        .evaluations
        .first()
        .map(|evaluation| evaluation.action)
        .ok_or(EngineError::NoLegalMoves)
}
