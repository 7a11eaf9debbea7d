//! The 5x5 board: marker placement and queries.

use std::fmt;

use crate::player::Player;
use crate::square::Square;
use crate::window::Window;

/// Marker grid for the 5x5 board.
///
/// Boards are value-typed: updates return a new board and never mutate the
/// receiver, so search branches can never observe each other's edits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; Square::COUNT],
}

impl Board {
    /// Return the empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the marker on the given cell, if any.
    #[inline]
    pub const fn marker_at(&self, sq: Square) -> Option<Player> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given cell holds no marker.
    #[inline]
    pub const fn is_empty_cell(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return a copy of this board with `player`'s marker on `sq`.
    #[must_use]
    pub fn with_marker(&self, sq: Square, player: Player) -> Board {
        let mut next = *self;
        next.cells[sq.index()] = Some(player);
        next
    }

    /// Return a copy of this board with `sq` cleared.
    #[must_use]
    pub fn without_marker(&self, sq: Square) -> Board {
        let mut next = *self;
        next.cells[sq.index()] = None;
        next
    }

    /// Count the markers belonging to `player`.
    pub fn count(&self, player: Player) -> u8 {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(player))
            .count() as u8
    }

    /// Count the empty cells.
    pub fn empty_count(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_none()).count() as u8
    }

    /// Return `true` if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterate over the cells holding `player`'s markers, in index order.
    pub fn markers_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.marker_at(sq) == Some(player))
    }

    /// Return a pretty-printable wrapper showing the active window.
    pub fn pretty(&self, window: Window) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            window,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = String::with_capacity(Square::COUNT + 4);
        for sq in Square::all() {
            if sq.index() > 0 && sq.col() == 0 {
                grid.push('/');
            }
            grid.push(match self.marker_at(sq) {
                Some(player) => player.marker(),
                None => '.',
            });
        }
        write!(f, "Board(\"{grid}\")")
    }
}

/// Wrapper for pretty-printing a board as a 5x5 grid.
///
/// Cells inside the active window are bracketed.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    window: Window,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     1   2   3   4   5")?;
        for row in 0..Square::SIDE {
            write!(f, " {} ", (b'A' + row) as char)?;
            for col in 0..Square::SIDE {
                let sq = Square::new(row, col);
                let c = match self.board.marker_at(sq) {
                    Some(player) => player.marker(),
                    None => '.',
                };
                if self.window.contains(sq) {
                    write!(f, "[{c}] ")?;
                } else {
                    write!(f, " {c}  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
