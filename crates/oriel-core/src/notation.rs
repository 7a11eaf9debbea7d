//! Compact position notation for [`GameState`].
//!
//! Four space-separated fields: the grid as five `/`-separated rows of
//! `X`, `O`, or `.`; the window corner as `ax,ay`; then the X and O
//! placement counters. Example:
//!
//! ```text
//! ...../.XO../...../...../..... 1,1 1 1
//! ```
//!
//! Parsing checks field syntax and ranges only; cross-field invariants
//! (marker counts vs counters) are the business of
//! [`GameState::validate`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::NotationError;
use crate::player::Player;
use crate::square::Square;
use crate::state::{GameState, PLACEMENT_LIMIT};
use crate::window::Window;

/// The notation for the initial position.
pub const INITIAL_NOTATION: &str = "...../...../...../...../..... 1,1 0 0";

impl FromStr for GameState {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<GameState, NotationError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Grid
        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != Square::SIDE as usize {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_index, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            for c in row_str.chars() {
                let marker = match c {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    '.' => None,
                    _ => return Err(NotationError::InvalidMarkerChar { character: c }),
                };
                if col >= Square::SIDE {
                    return Err(NotationError::BadRowLength {
                        row_index,
                        length: col as usize + 1,
                    });
                }
                if let Some(player) = marker {
                    board = board.with_marker(Square::new(row_index as u8, col), player);
                }
                col += 1;
            }
            if col != Square::SIDE {
                return Err(NotationError::BadRowLength {
                    row_index,
                    length: col as usize,
                });
            }
        }

        // Window corner
        let window = parse_window(fields[1]).ok_or_else(|| NotationError::InvalidWindow {
            found: fields[1].to_string(),
        })?;

        // Placement counters
        let placements_x = parse_counter(fields[2], "X placements")?;
        let placements_o = parse_counter(fields[3], "O placements")?;

        Ok(GameState::new(board, window, placements_x, placements_o))
    }
}

fn parse_window(field: &str) -> Option<Window> {
    let (ax, ay) = field.split_once(',')?;
    Window::new(ax.parse().ok()?, ay.parse().ok()?)
}

fn parse_counter(field: &str, name: &'static str) -> Result<u8, NotationError> {
    match field.parse::<u8>() {
        Ok(value) if value <= PLACEMENT_LIMIT => Ok(value),
        _ => Err(NotationError::InvalidCounter {
            field: name,
            found: field.to_string(),
        }),
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            if sq.index() > 0 && sq.col() == 0 {
                write!(f, "/")?;
            }
            let c = match self.board().marker_at(sq) {
                Some(player) => player.marker(),
                None => '.',
            };
            write!(f, "{c}")?;
        }
        write!(
            f,
            " {} {} {}",
            self.window(),
            self.placements(Player::X),
            self.placements(Player::O)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::INITIAL_NOTATION;
    use crate::error::NotationError;
    use crate::player::Player;
    use crate::square::Square;
    use crate::state::GameState;

    #[test]
    fn initial_notation_roundtrip() {
        let state: GameState = INITIAL_NOTATION.parse().unwrap();
        assert_eq!(state, GameState::initial());
        assert_eq!(format!("{state}"), INITIAL_NOTATION);
    }

    #[test]
    fn markers_land_on_the_right_cells() {
        let state: GameState = "X..../.O.../...../...../....O 1,1 1 2".parse().unwrap();
        assert_eq!(state.board().marker_at(Square::A1), Some(Player::X));
        assert_eq!(state.board().marker_at(Square::B2), Some(Player::O));
        assert_eq!(state.board().marker_at(Square::E5), Some(Player::O));
        assert_eq!(state.placements(Player::X), 1);
        assert_eq!(state.placements(Player::O), 2);
    }

    #[test]
    fn display_parse_roundtrip() {
        let notations = [
            "X..../.XO../..O../...../..... 0,0 2 2",
            "XXXX./OOOO./...../...../..... 2,2 4 4",
        ];
        for notation in notations {
            let state: GameState = notation.parse().unwrap();
            assert_eq!(format!("{state}"), notation);
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = "...../...../...../...../..... 1,1 0".parse::<GameState>().unwrap_err();
        assert_eq!(err, NotationError::WrongFieldCount { found: 3 });
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = "...../...../..... 1,1 0 0".parse::<GameState>().unwrap_err();
        assert_eq!(err, NotationError::WrongRowCount { found: 3 });
    }

    #[test]
    fn rejects_bad_row_length() {
        let err = "....../...../...../...../..... 1,1 0 0"
            .parse::<GameState>()
            .unwrap_err();
        assert!(matches!(err, NotationError::BadRowLength { .. }));
    }

    #[test]
    fn rejects_invalid_marker() {
        let err = "...Z./...../...../...../..... 1,1 0 0"
            .parse::<GameState>()
            .unwrap_err();
        assert_eq!(err, NotationError::InvalidMarkerChar { character: 'Z' });
    }

    #[test]
    fn rejects_out_of_range_window() {
        let err = "...../...../...../...../..... 3,0 0 0"
            .parse::<GameState>()
            .unwrap_err();
        assert!(matches!(err, NotationError::InvalidWindow { .. }));
    }

    #[test]
    fn rejects_out_of_range_counter() {
        let err = "...../...../...../...../..... 1,1 5 0"
            .parse::<GameState>()
            .unwrap_err();
        assert!(matches!(
            err,
            NotationError::InvalidCounter {
                field: "X placements",
                ..
            }
        ));
    }
}
