//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always expressed in the AI side's frame: the node for the
//! side equal to the AI maximises, the other side minimises. The path set
//! guards against shift/move cycles inside the search; the history set
//! carries the game's repetition rule and filters successor positions.

use std::collections::HashSet;

use oriel_core::{
    Action, GameState, Player, StateKey, apply_action, legal_actions, state_key,
};

use crate::eval::Evaluator;
use crate::search::SearchStats;
use crate::search::ordering::action_priority;
use crate::search::tt::{Bound, TranspositionTable, TtEntry};

/// Score beyond any evaluation's reach.
pub const INF: i32 = 1_000_000;

/// Shared search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// The side the engine maximises for.
    pub ai: Player,
    /// Depth at which heuristic evaluation replaces recursion.
    pub max_depth: u8,
    /// Scoring plugin.
    pub evaluator: &'a Evaluator,
    /// Transposition table shared across the whole invocation.
    pub tt: &'a mut TranspositionTable,
    /// Keys on the current recursion path (cycle guard).
    pub path: &'a mut HashSet<StateKey>,
    /// Keys of real game positions already reached (repetition rule).
    pub history: &'a HashSet<StateKey>,
    /// Node, cache-hit, and cutoff counters.
    pub stats: &'a mut SearchStats,
}

/// Result of searching one node.
#[derive(Debug, Clone)]
pub(super) struct SearchOutcome {
    /// Score in the AI side's frame.
    pub score: i32,
    /// The action achieving the score, when the node chose one.
    pub best_action: Option<Action>,
    /// Principal variation from this node to the evaluated leaf.
    pub pv: Vec<Action>,
}

impl SearchOutcome {
    /// A leaf result: a bare score with no action.
    fn leaf(score: i32) -> SearchOutcome {
        SearchOutcome {
            score,
            best_action: None,
            pv: Vec::new(),
        }
    }

    /// A result rebuilt from a cached entry.
    fn cached(entry: TtEntry) -> SearchOutcome {
        SearchOutcome {
            score: entry.score,
            best_action: entry.best_action,
            pv: entry.best_action.into_iter().collect(),
        }
    }
}

/// A legal action paired with its successor.
struct Successor {
    action: Action,
    state: GameState,
}

/// Search `state` with `to_move` to act, `depth` plies below the root.
pub(super) fn search(
    state: &GameState,
    to_move: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> SearchOutcome {
    ctx.stats.nodes_visited += 1;

    // Bound classification at the end compares against the window this
    // node was entered with, not the TT-narrowed one.
    let (alpha0, beta0) = (alpha, beta);

    // Terminal and horizon returns.
    if let Some(winner) = state.winner() {
        return SearchOutcome::leaf(ctx.evaluator.score(state, Some(winner), ctx.ai, depth));
    }
    if state.is_draw() {
        return SearchOutcome::leaf(ctx.evaluator.score(state, None, ctx.ai, depth));
    }
    if depth >= ctx.max_depth {
        return SearchOutcome::leaf(ctx.evaluator.score(state, None, ctx.ai, depth));
    }

    // Cycle guard: revisiting a position on the current recursion path
    // would recurse forever through shift/move loops.
    let key = state_key(state, to_move);
    if ctx.path.contains(&key) {
        return SearchOutcome::leaf(ctx.evaluator.score(state, None, ctx.ai, depth));
    }

    // TT probe. An entry searched at least as deep as we have remaining
    // can answer outright or narrow the window.
    let remaining = ctx.max_depth - depth;
    let mut tt_action: Option<Action> = None;
    if let Some(entry) = ctx.tt.probe(key) {
        tt_action = entry.best_action;
        if entry.depth >= remaining {
            match entry.bound {
                Bound::Exact => {
                    ctx.stats.cache_hits += 1;
                    return SearchOutcome::cached(entry);
                }
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                ctx.stats.cutoffs += 1;
                return SearchOutcome::cached(entry);
            }
        }
    }

    ctx.path.insert(key);

    // Generate successors, dropping any that recreate a real game
    // position. An empty list means every continuation repeats; score
    // the node heuristically.
    let opponent = to_move.flip();
    let mut successors: Vec<Successor> = legal_actions(state, to_move)
        .into_iter()
        .map(|action| Successor {
            action,
            state: apply_action(state, action, to_move)
                .expect("enumerated action must apply"),
        })
        .filter(|succ| !ctx.history.contains(&state_key(&succ.state, opponent)))
        .collect();

    if successors.is_empty() {
        ctx.path.remove(&key);
        return SearchOutcome::leaf(ctx.evaluator.score(state, None, ctx.ai, depth));
    }

    // Order by priority (stable, so enumeration order breaks ties), then
    // rotate the cached best action to the front.
    let window = state.window();
    successors.sort_by_key(|succ| std::cmp::Reverse(action_priority(window, succ.action)));
    if let Some(tt_action) = tt_action {
        if let Some(pos) = successors.iter().position(|succ| succ.action == tt_action) {
            let preferred = successors.remove(pos);
            successors.insert(0, preferred);
        }
    }

    let maximizing = to_move == ctx.ai;
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_action: Option<Action> = None;
    let mut best_pv: Vec<Action> = Vec::new();

    for succ in &successors {
        let child = search(&succ.state, opponent, depth + 1, alpha, beta, ctx);

        // First action to achieve the best score wins the tie.
        let improved = if maximizing {
            child.score > best_score
        } else {
            child.score < best_score
        };
        if improved {
            best_score = child.score;
            best_action = Some(succ.action);
            best_pv = Vec::with_capacity(child.pv.len() + 1);
            best_pv.push(succ.action);
            best_pv.extend(child.pv);
        }

        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    let bound = if best_score <= alpha0 {
        Bound::UpperBound
    } else if best_score >= beta0 {
        Bound::LowerBound
    } else {
        Bound::Exact
    };
    ctx.tt.store(
        key,
        TtEntry {
            score: best_score,
            depth: remaining,
            bound,
            best_action,
        },
    );

    ctx.path.remove(&key);

    SearchOutcome {
        score: best_score,
        best_action,
        pv: best_pv,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{INF, SearchContext, search};
    use crate::eval::EvalRegistry;
    use crate::search::SearchStats;
    use crate::search::tt::TranspositionTable;
    use oriel_core::{Action, GameState, Player, Square};

    fn state(notation: &str) -> GameState {
        notation.parse().expect("test notation must parse")
    }

    fn run(
        state: &GameState,
        to_move: Player,
        ai: Player,
        max_depth: u8,
    ) -> (super::SearchOutcome, SearchStats) {
        let registry = EvalRegistry::with_builtins();
        let evaluator = registry.get("default");
        let mut tt = TranspositionTable::new();
        let mut path = HashSet::new();
        let mut stats = SearchStats::default();
        let history = HashSet::new();
        let mut ctx = SearchContext {
            ai,
            max_depth,
            evaluator: &evaluator,
            tt: &mut tt,
            path: &mut path,
            history: &history,
            stats: &mut stats,
        };
        let outcome = search(state, to_move, 0, -INF, INF, &mut ctx);
        (outcome, stats)
    }

    #[test]
    fn won_position_scores_terminal() {
        let state = state("...../.XXX./...../...../..... 1,1 3 0");
        let (outcome, stats) = run(&state, Player::O, Player::X, 4);
        // Winner detected at depth 0: 10 - 0.
        assert_eq!(outcome.score, 10);
        assert!(outcome.pv.is_empty());
        assert_eq!(stats.nodes_visited, 1);
    }

    #[test]
    fn immediate_win_is_taken() {
        // X completes the middle window row at B4.
        let state = state("...../.XX../...../...../..... 1,1 2 0");
        let (outcome, _) = run(&state, Player::X, Player::X, 3);
        assert_eq!(outcome.best_action, Some(Action::Place(Square::B4)));
        // Win lands one ply down: 10 - 1.
        assert_eq!(outcome.score, 9);
        assert_eq!(outcome.pv, vec![Action::Place(Square::B4)]);
    }

    #[test]
    fn forced_loss_is_recognized() {
        // O to move owns two of the top window row and completes it;
        // the minimising side's win shows up as a deeply negative score.
        let state = state("...../.OO../...../...../..... 1,1 0 2");
        let (outcome, _) = run(&state, Player::O, Player::X, 2);
        // O completes at B4 immediately: depth 1 loss for X.
        assert_eq!(outcome.score, 1 - 10);
        assert_eq!(outcome.best_action, Some(Action::Place(Square::B4)));
    }

    #[test]
    fn path_guard_returns_neutral_score() {
        let state = state("...../.XO../...../...../..... 1,1 2 2");
        let registry = EvalRegistry::with_builtins();
        let evaluator = registry.get("default");
        let mut tt = TranspositionTable::new();
        let mut path = HashSet::new();
        path.insert(oriel_core::state_key(&state, Player::X));
        let mut stats = SearchStats::default();
        let history = HashSet::new();
        let mut ctx = SearchContext {
            ai: Player::X,
            max_depth: 4,
            evaluator: &evaluator,
            tt: &mut tt,
            path: &mut path,
            history: &history,
            stats: &mut stats,
        };
        let outcome = search(&state, Player::X, 0, -INF, INF, &mut ctx);
        assert_eq!(outcome.score, 0);
        assert!(outcome.best_action.is_none());
    }

    #[test]
    fn path_set_is_balanced() {
        let state = state("...../.XO../...../...../..... 1,1 2 2");
        let registry = EvalRegistry::with_builtins();
        let evaluator = registry.get("default");
        let mut tt = TranspositionTable::new();
        let mut path = HashSet::new();
        let mut stats = SearchStats::default();
        let history = HashSet::new();
        let mut ctx = SearchContext {
            ai: Player::X,
            max_depth: 3,
            evaluator: &evaluator,
            tt: &mut tt,
            path: &mut path,
            history: &history,
            stats: &mut stats,
        };
        search(&state, Player::X, 0, -INF, INF, &mut ctx);
        assert!(path.is_empty(), "every insert must be matched by a remove");
    }

    #[test]
    fn history_filter_excludes_successor() {
        // With every successor of an otherwise-quiet position recorded in
        // history except one, the search must pick the survivor.
        let state = GameState::initial();
        let registry = EvalRegistry::with_builtins();
        let evaluator = registry.get("default");

        let mut history = HashSet::new();
        for action in oriel_core::legal_actions(&state, Player::X) {
            if action != Action::Place(Square::C3) {
                let next = oriel_core::apply_action(&state, action, Player::X).unwrap();
                history.insert(oriel_core::state_key(&next, Player::O));
            }
        }

        let mut tt = TranspositionTable::new();
        let mut path = HashSet::new();
        let mut stats = SearchStats::default();
        let mut ctx = SearchContext {
            ai: Player::X,
            max_depth: 2,
            evaluator: &evaluator,
            tt: &mut tt,
            path: &mut path,
            history: &history,
            stats: &mut stats,
        };
        let outcome = search(&state, Player::X, 0, -INF, INF, &mut ctx);
        assert_eq!(outcome.best_action, Some(Action::Place(Square::C3)));
    }
}
