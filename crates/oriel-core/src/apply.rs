//! Action application via copy-make.

use crate::action::Action;
use crate::error::ActionError;
use crate::player::Player;
use crate::state::{GameState, PLACEMENT_LIMIT, PLACEMENT_MINIMUM};

/// Apply `action` for `side`, returning the successor state.
///
/// Legality checks run in a fixed order so callers see deterministic
/// failure reasons. Placement targets are not checked against the window:
/// the enumerator only ever proposes in-window placements, and the game
/// rule constrains where markers may be placed, not where they may sit.
pub fn apply_action(
    state: &GameState,
    action: Action,
    side: Player,
) -> Result<GameState, ActionError> {
    match action {
        Action::Place(sq) => {
            if state.placements(side) >= PLACEMENT_LIMIT {
                return Err(ActionError::PlacementOverLimit { side });
            }
            if !state.board().is_empty_cell(sq) {
                return Err(ActionError::CellOccupied { square: sq });
            }
            Ok(state
                .with_board(state.board().with_marker(sq, side))
                .with_placement_recorded(side))
        }
        Action::Move { from, to } => {
            let placed = state.placements(side);
            if placed < PLACEMENT_MINIMUM {
                return Err(ActionError::MovementPremature { side, placed });
            }
            if state.board().marker_at(from) != Some(side) {
                return Err(ActionError::NotOwnPiece { square: from });
            }
            if !state.board().is_empty_cell(to) {
                return Err(ActionError::DestinationOccupied { square: to });
            }
            if !state.window().contains(to) {
                return Err(ActionError::DestinationOutsideWindow { square: to });
            }
            // Relocation preserves the placement counters.
            Ok(state.with_board(state.board().without_marker(from).with_marker(to, side)))
        }
        Action::Shift { dx, dy } => {
            let placed = state.placements(side);
            if placed < PLACEMENT_MINIMUM {
                return Err(ActionError::ShiftPremature { side, placed });
            }
            if dx == 0 && dy == 0 {
                return Err(ActionError::ShiftOutOfBounds { dx, dy });
            }
            match state.window().shifted(dx, dy) {
                Some(window) => Ok(state.with_window(window)),
                None => Err(ActionError::ShiftOutOfBounds { dx, dy }),
            }
        }
    }
}
