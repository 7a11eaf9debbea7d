//! Game actions: placement, relocation, and window shifts.

use std::fmt;
use std::str::FromStr;

use crate::error::ActionParseError;
use crate::square::Square;

/// One turn's worth of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Put the acting player's marker on an empty cell.
    Place(Square),
    /// Relocate one of the acting player's markers.
    Move {
        /// Cell currently holding the marker.
        from: Square,
        /// Empty destination inside the active window.
        to: Square,
    },
    /// Translate the active window by `(dx, dy)`, each in -1..=1,
    /// not both zero.
    Shift {
        /// Column delta.
        dx: i8,
        /// Row delta.
        dy: i8,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(sq) => write!(f, "place {sq}"),
            Action::Move { from, to } => write!(f, "move {from} {to}"),
            Action::Shift { dx, dy } => write!(f, "shift {dx:+},{dy:+}"),
        }
    }
}

/// Parse a shift offset token into -1, 0, or 1.
fn parse_offset(token: &str) -> Result<i8, ActionParseError> {
    match token.parse::<i8>() {
        Ok(value) if (-1..=1).contains(&value) => Ok(value),
        _ => Err(ActionParseError::InvalidOffset {
            found: token.to_string(),
        }),
    }
}

/// Parse a cell token like "B3" (case-insensitive).
fn parse_cell(token: &str) -> Result<Square, ActionParseError> {
    Square::from_name(token).ok_or_else(|| ActionParseError::InvalidCell {
        found: token.to_string(),
    })
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parse an action string: `place B3`, `move A1 C3`, or `shift 1,0`.
    ///
    /// Shift offsets accept comma or whitespace separation and an
    /// optional leading `+`.
    fn from_str(s: &str) -> Result<Action, ActionParseError> {
        let normalized = s.replace(',', " ");
        let mut tokens = normalized.split_whitespace();

        let verb = tokens.next().ok_or(ActionParseError::MissingField {
            field: "action verb",
        })?;

        match verb.to_ascii_lowercase().as_str() {
            "place" => {
                let cell = tokens.next().ok_or(ActionParseError::MissingField {
                    field: "placement cell",
                })?;
                Ok(Action::Place(parse_cell(cell)?))
            }
            "move" => {
                let from = tokens.next().ok_or(ActionParseError::MissingField {
                    field: "source cell",
                })?;
                let to = tokens.next().ok_or(ActionParseError::MissingField {
                    field: "destination cell",
                })?;
                Ok(Action::Move {
                    from: parse_cell(from)?,
                    to: parse_cell(to)?,
                })
            }
            "shift" => {
                let dx = tokens.next().ok_or(ActionParseError::MissingField {
                    field: "column delta",
                })?;
                let dy = tokens.next().ok_or(ActionParseError::MissingField {
                    field: "row delta",
                })?;
                Ok(Action::Shift {
                    dx: parse_offset(dx.trim_start_matches('+'))?,
                    dy: parse_offset(dy.trim_start_matches('+'))?,
                })
            }
            _ => Err(ActionParseError::UnknownVerb {
                found: verb.to_string(),
            }),
        }
    }
}
