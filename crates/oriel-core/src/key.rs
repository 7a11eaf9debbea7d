//! Packed 64-bit position keys.
//!
//! Unlike a hash, the packing is injective: two positions share a key
//! exactly when they are semantically equal for search purposes. Keys feed
//! the transposition table, the in-search cycle guard, and the game's
//! repetition history.
//!
//! ## Bit layout
//!
//! ```text
//! bits  0-49: cells        (2 bits each, row-major: 0 empty, 1 X, 2 O)
//! bits 50-51: ax           (window column offset)
//! bits 52-53: ay           (window row offset)
//! bit  54:    side to move (0 X, 1 O)
//! bits 55-57: X placements (0..=4)
//! bits 58-60: O placements (0..=4)
//! ```

use crate::player::Player;
use crate::square::Square;
use crate::state::GameState;

/// A packed position fingerprint, side to move included.
pub type StateKey = u64;

const CELL_BITS: u32 = 2;
const WINDOW_SHIFT: u32 = CELL_BITS * Square::COUNT as u32;
const SIDE_SHIFT: u32 = WINDOW_SHIFT + 4;
const PLACEMENTS_SHIFT: u32 = SIDE_SHIFT + 1;

/// Compute the key for `state` with `to_move` next to act.
pub fn state_key(state: &GameState, to_move: Player) -> StateKey {
    let mut key = 0u64;

    for sq in Square::all() {
        let code: u64 = match state.board().marker_at(sq) {
            None => 0,
            Some(Player::X) => 1,
            Some(Player::O) => 2,
        };
        key |= code << (CELL_BITS * sq.index() as u32);
    }

    key |= (state.window().ax() as u64) << WINDOW_SHIFT;
    key |= (state.window().ay() as u64) << (WINDOW_SHIFT + 2);
    key |= (to_move.index() as u64) << SIDE_SHIFT;
    key |= (state.placements(Player::X) as u64) << PLACEMENTS_SHIFT;
    key |= (state.placements(Player::O) as u64) << (PLACEMENTS_SHIFT + 3);

    key
}

#[cfg(test)]
mod tests {
    use super::state_key;
    use crate::apply::apply_action;
    use crate::action::Action;
    use crate::player::Player;
    use crate::square::Square;
    use crate::state::GameState;

    fn state(notation: &str) -> GameState {
        notation.parse().expect("test notation must parse")
    }

    #[test]
    fn key_is_deterministic() {
        let state = state("X..../.XO../...../...../..... 1,1 2 1");
        assert_eq!(state_key(&state, Player::O), state_key(&state, Player::O));
    }

    #[test]
    fn side_to_move_distinguishes() {
        let state = GameState::initial();
        assert_ne!(state_key(&state, Player::X), state_key(&state, Player::O));
    }

    #[test]
    fn window_distinguishes() {
        let a = state("...../.XO../...../...../..... 1,1 2 2");
        let b = state("...../.XO../...../...../..... 0,0 2 2");
        assert_ne!(state_key(&a, Player::X), state_key(&b, Player::X));
    }

    #[test]
    fn counters_distinguish() {
        // Same board, different placement history (a marker was relocated).
        let a = state("...../.XO../...../...../..... 1,1 2 1");
        let b = state("...../.XO../...../...../..... 1,1 3 1");
        assert_ne!(state_key(&a, Player::X), state_key(&b, Player::X));
    }

    #[test]
    fn markers_distinguish() {
        let a = state("...../.X.../...../...../..... 1,1 1 0");
        let b = state("...../.O.../...../...../..... 1,1 1 0");
        let c = state("...../..X../...../...../..... 1,1 1 0");
        let ka = state_key(&a, Player::O);
        let kb = state_key(&b, Player::O);
        let kc = state_key(&c, Player::O);
        assert_ne!(ka, kb);
        assert_ne!(ka, kc);
        assert_ne!(kb, kc);
    }

    #[test]
    fn apply_is_key_deterministic() {
        let state = GameState::initial();
        let action = Action::Place(Square::C3);
        let first = apply_action(&state, action, Player::X).unwrap();
        let second = apply_action(&state, action, Player::X).unwrap();
        assert_eq!(state_key(&first, Player::O), state_key(&second, Player::O));
    }

    #[test]
    fn shift_roundtrip_restores_key() {
        let start = state("...../.XO../...../...../..... 1,1 2 2");
        let shifted = apply_action(&start, Action::Shift { dx: 1, dy: 1 }, Player::X).unwrap();
        let back = apply_action(&shifted, Action::Shift { dx: -1, dy: -1 }, Player::O).unwrap();
        assert_eq!(state_key(&start, Player::X), state_key(&back, Player::X));
    }
}
