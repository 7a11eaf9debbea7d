//! Legal-action enumeration.

use crate::action::Action;
use crate::player::Player;
use crate::state::{GameState, PLACEMENT_LIMIT, PLACEMENT_MINIMUM};
use crate::window::Window;

/// Enumerate every legal action for `side` in deterministic order:
/// placements, then relocations, then window shifts.
///
/// * Placements target the empty window cells and require the side's
///   placement counter to be below the cap.
/// * Relocations pair every own marker (anywhere on the board) with every
///   empty window cell, and require at least two placements.
/// * Shifts cover the eight directions that keep the window on the board,
///   and also require at least two placements.
///
/// Every returned action applies successfully; the enumerator and
/// [`apply_action`](crate::apply::apply_action) agree on legality.
pub fn legal_actions(state: &GameState, side: Player) -> Vec<Action> {
    let window = state.window();
    let placed = state.placements(side);
    let mut actions = Vec::new();

    if placed < PLACEMENT_LIMIT {
        for sq in window.cells() {
            if state.board().is_empty_cell(sq) {
                actions.push(Action::Place(sq));
            }
        }
    }

    if placed >= PLACEMENT_MINIMUM {
        for from in state.board().markers_of(side) {
            for to in window.cells() {
                if state.board().is_empty_cell(to) {
                    actions.push(Action::Move { from, to });
                }
            }
        }

        for (dx, dy) in Window::SHIFT_OFFSETS {
            if window.shifted(dx, dy).is_some() {
                actions.push(Action::Shift { dx, dy });
            }
        }
    }

    actions
}
