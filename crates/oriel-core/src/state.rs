//! The game state: board, active window, and placement counters.

use std::fmt;

use crate::board::Board;
use crate::error::StateError;
use crate::player::Player;
use crate::window::Window;

/// Markers each player may place over a whole game.
pub const PLACEMENT_LIMIT: u8 = 4;

/// Placements a player needs before relocating markers or shifting
/// the window.
pub const PLACEMENT_MINIMUM: u8 = 2;

/// A complete game position.
///
/// The side to move is not part of the state value; operations that
/// depend on it take the acting player explicitly, and the state key
/// folds it in.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    window: Window,
    placements: [u8; Player::COUNT],
}

impl GameState {
    /// Return the initial position: empty board, window at (1,1),
    /// counters at zero. X moves first by convention of the callers.
    pub fn initial() -> GameState {
        GameState {
            board: Board::empty(),
            window: Window::new(1, 1).expect("(1,1) is a legal window corner"),
            placements: [0; Player::COUNT],
        }
    }

    /// Construct a state from raw components. No invariants are checked;
    /// call [`validate`](Self::validate) where they matter.
    pub fn new(board: Board, window: Window, placements_x: u8, placements_o: u8) -> GameState {
        GameState {
            board,
            window,
            placements: [placements_x, placements_o],
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the active window.
    #[inline]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Return the number of markers `player` has placed so far.
    #[inline]
    pub fn placements(&self, player: Player) -> u8 {
        self.placements[player.index()]
    }

    /// Return a copy with a new board.
    #[must_use]
    pub(crate) fn with_board(&self, board: Board) -> GameState {
        GameState { board, ..*self }
    }

    /// Return a copy with a new window.
    #[must_use]
    pub(crate) fn with_window(&self, window: Window) -> GameState {
        GameState { window, ..*self }
    }

    /// Return a copy with `player`'s placement counter incremented.
    #[must_use]
    pub(crate) fn with_placement_recorded(&self, player: Player) -> GameState {
        let mut placements = self.placements;
        placements[player.index()] += 1;
        GameState {
            placements,
            ..*self
        }
    }

    /// Return the winner, if any.
    ///
    /// Only the eight lines inside the active window are tested: a
    /// completed line elsewhere on the board does not count, even if it
    /// was inside the window before a shift.
    pub fn winner(&self) -> Option<Player> {
        for line in self.window.lines() {
            let Some(first) = self.board.marker_at(line[0]) else {
                continue;
            };
            if self.board.marker_at(line[1]) == Some(first)
                && self.board.marker_at(line[2]) == Some(first)
            {
                return Some(first);
            }
        }
        None
    }

    /// Return `true` if the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && self.winner().is_none()
    }

    /// Return `true` if the game is over (win or draw).
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Validate the structural invariants of the state.
    pub fn validate(&self) -> Result<(), StateError> {
        for player in Player::ALL {
            let placed = self.placements(player);
            if placed > PLACEMENT_LIMIT {
                return Err(StateError::PlacementOverCap {
                    side: player,
                    placed,
                });
            }
            let markers = self.board.count(player);
            if markers > placed {
                return Err(StateError::MarkersExceedPlacements {
                    side: player,
                    markers,
                    placed,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::player::Player;
    use crate::square::Square;

    fn state(notation: &str) -> GameState {
        notation.parse().expect("test notation must parse")
    }

    #[test]
    fn initial_state_is_valid() {
        let state = GameState::initial();
        state.validate().unwrap();
        assert_eq!(state.window().ax(), 1);
        assert_eq!(state.window().ay(), 1);
        assert_eq!(state.placements(Player::X), 0);
        assert_eq!(state.placements(Player::O), 0);
        assert!(!state.is_terminal());
    }

    #[test]
    fn winner_on_window_row() {
        let state = state("...../.XXX./...../...../..... 1,1 3 0");
        assert_eq!(state.winner(), Some(Player::X));
        assert!(state.is_terminal());
    }

    #[test]
    fn winner_on_window_column() {
        let state = state("...../..O../..O../..O../..... 1,1 0 3");
        assert_eq!(state.winner(), Some(Player::O));
    }

    #[test]
    fn winner_on_window_diagonal() {
        let state = state("...../.X.../..X../...X./..... 1,1 3 0");
        assert_eq!(state.winner(), Some(Player::X));
    }

    #[test]
    fn line_outside_window_does_not_win() {
        // Full X row across the top, window at (1,1): rows B-D only.
        let state = state("XXXXX/...../...../...../..... 1,1 4 0");
        assert_eq!(state.winner(), None);
        assert!(!state.is_draw());
    }

    #[test]
    fn line_straddling_window_edge_does_not_win() {
        // Three in a row at row B, columns 1-3; window covers columns 2-4.
        let state = state("...../XXX../...../...../..... 1,1 3 0");
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn draw_requires_full_board() {
        let state = state("XXOOX/OOXXO/XXOOX/OOXXO/XXOOX 1,1 4 4");
        assert_eq!(state.winner(), None);
        assert!(state.is_draw());
    }

    #[test]
    fn validate_rejects_over_cap() {
        let state = state("...../...../...../...../..... 1,1 4 0");
        state.validate().unwrap();

        let over = GameState::new(*state.board(), state.window(), 5, 0);
        assert!(over.validate().is_err());
    }

    #[test]
    fn validate_rejects_excess_markers() {
        let state = state("XX.../...../...../...../..... 1,1 1 0");
        assert!(state.validate().is_err());
    }

    #[test]
    fn marker_counts_within_placements() {
        let state = state("X.O../...../...../...../..... 1,1 2 1");
        state.validate().unwrap();
        assert_eq!(state.board().count(Player::X), 1);
        assert_eq!(state.board().marker_at(Square::A3), Some(Player::O));
    }
}
