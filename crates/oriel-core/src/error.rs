//! Error types for action application, state validation, and notation parsing.

use std::fmt;

use crate::player::Player;
use crate::square::Square;

/// Errors from applying an [`Action`](crate::action::Action) to a state.
///
/// The legal-action enumerator never produces an action that fails to
/// apply; these surface only when an external caller submits a crafted
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The acting player already placed all four markers.
    #[error("{side} has already placed all markers")]
    PlacementOverLimit {
        /// The acting player.
        side: Player,
    },
    /// The placement target already holds a marker.
    #[error("cell {square} is occupied")]
    CellOccupied {
        /// The occupied cell.
        square: Square,
    },
    /// Relocation attempted before the second placement.
    #[error("{side} cannot move before placing two markers ({placed} placed)")]
    MovementPremature {
        /// The acting player.
        side: Player,
        /// Markers placed so far.
        placed: u8,
    },
    /// The relocation source does not hold the acting player's marker.
    #[error("cell {square} does not hold the mover's marker")]
    NotOwnPiece {
        /// The offending source cell.
        square: Square,
    },
    /// The relocation destination already holds a marker.
    #[error("destination {square} is occupied")]
    DestinationOccupied {
        /// The occupied destination.
        square: Square,
    },
    /// The relocation destination lies outside the active window.
    #[error("destination {square} is outside the active window")]
    DestinationOutsideWindow {
        /// The out-of-window destination.
        square: Square,
    },
    /// Window shift attempted before the second placement.
    #[error("{side} cannot shift before placing two markers ({placed} placed)")]
    ShiftPremature {
        /// The acting player.
        side: Player,
        /// Markers placed so far.
        placed: u8,
    },
    /// The shift would push the window corner off the board.
    #[error("shift ({dx},{dy}) leaves the board")]
    ShiftOutOfBounds {
        /// Column delta.
        dx: i8,
        /// Row delta.
        dy: i8,
    },
}

/// Errors from structural validation of a [`GameState`](crate::state::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A placement counter exceeds the four-marker cap.
    #[error("{side} placement counter is {placed}, cap is 4")]
    PlacementOverCap {
        /// The offending player.
        side: Player,
        /// The counter value.
        placed: u8,
    },
    /// A side has more markers on the board than its placement counter allows.
    #[error("{side} has {markers} markers on the board but only {placed} placements")]
    MarkersExceedPlacements {
        /// The offending player.
        side: Player,
        /// Markers on the board.
        markers: u8,
        /// The placement counter.
        placed: u8,
    },
}

/// Errors that occur when parsing a position notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The notation does not have exactly 4 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The grid section does not have exactly 5 rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A grid row describes more or fewer than 5 cells.
    BadRowLength {
        /// Zero-based row index.
        row_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the grid.
    InvalidMarkerChar {
        /// The invalid character.
        character: char,
    },
    /// The window field is not "ax,ay" with both offsets in 0..=2.
    InvalidWindow {
        /// The invalid window string.
        found: String,
    },
    /// A placement counter is not a number in 0..=4.
    InvalidCounter {
        /// The field name ("X placements" or "O placements").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "expected 4 notation fields, found {found}")
            }
            NotationError::WrongRowCount { found } => {
                write!(f, "expected 5 rows in the grid, found {found}")
            }
            NotationError::BadRowLength { row_index, length } => {
                write!(f, "row {row_index} describes {length} cells, expected 5")
            }
            NotationError::InvalidMarkerChar { character } => {
                write!(f, "invalid marker character: '{character}'")
            }
            NotationError::InvalidWindow { found } => {
                write!(f, "invalid window corner: \"{found}\"")
            }
            NotationError::InvalidCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Errors that occur when parsing an action string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    /// The first token is not `place`, `move`, or `shift`.
    #[error("unknown action verb: \"{found}\"")]
    UnknownVerb {
        /// The unrecognized token.
        found: String,
    },
    /// A required token is missing.
    #[error("missing {field}")]
    MissingField {
        /// The missing token's role (e.g. "destination cell").
        field: &'static str,
    },
    /// A cell token is not a valid coordinate like "B3".
    #[error("invalid cell: \"{found}\"")]
    InvalidCell {
        /// The invalid token.
        found: String,
    },
    /// A shift offset is not -1, 0, or 1.
    #[error("invalid shift offset: \"{found}\"")]
    InvalidOffset {
        /// The invalid token.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{ActionError, NotationError, StateError};
    use crate::player::Player;
    use crate::square::Square;

    #[test]
    fn action_error_display() {
        let err = ActionError::CellOccupied { square: Square::B2 };
        assert_eq!(format!("{err}"), "cell B2 is occupied");
    }

    #[test]
    fn state_error_display() {
        let err = StateError::PlacementOverCap {
            side: Player::X,
            placed: 5,
        };
        assert_eq!(format!("{err}"), "X placement counter is 5, cap is 4");
    }

    #[test]
    fn notation_error_display() {
        let err = NotationError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 notation fields, found 2");
    }
}
