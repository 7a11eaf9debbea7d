//! The 3x3 active window that slides over the board.
//!
//! Placements land inside the window and lines are only counted inside it.

use std::fmt;

use crate::square::Square;

/// The active 3x3 window, named by its top-left corner `(ax, ay)`.
///
/// `ax` is the column offset and `ay` the row offset; both lie in 0..=2 so
/// the window always fits on the 5x5 board. The nine covered cells are
/// `(ay + i, ax + j)` for `0 <= i, j < 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    ax: u8,
    ay: u8,
}

impl Window {
    /// The window side length.
    pub const SIDE: u8 = 3;

    /// Largest legal corner coordinate.
    pub const MAX_OFFSET: u8 = 2;

    /// The eight shift offsets `(dx, dy)` in deterministic enumeration order.
    pub const SHIFT_OFFSETS: [(i8, i8); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Create a window, returning `None` if the corner is out of range.
    #[inline]
    pub const fn new(ax: u8, ay: u8) -> Option<Window> {
        if ax <= Window::MAX_OFFSET && ay <= Window::MAX_OFFSET {
            Some(Window { ax, ay })
        } else {
            None
        }
    }

    /// Return the column offset of the top-left corner.
    #[inline]
    pub const fn ax(self) -> u8 {
        self.ax
    }

    /// Return the row offset of the top-left corner.
    #[inline]
    pub const fn ay(self) -> u8 {
        self.ay
    }

    /// Return `true` if the given cell lies inside the window.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        let row = sq.row();
        let col = sq.col();
        row >= self.ay
            && row < self.ay + Window::SIDE
            && col >= self.ax
            && col < self.ax + Window::SIDE
    }

    /// Return the cell at window-relative coordinates `(i, j)` (row, col).
    #[inline]
    pub const fn cell_at(self, i: u8, j: u8) -> Square {
        debug_assert!(i < Window::SIDE && j < Window::SIDE);
        Square::new(self.ay + i, self.ax + j)
    }

    /// Iterate over the nine covered cells in window-relative row-major order.
    pub fn cells(self) -> impl Iterator<Item = Square> {
        (0..Window::SIDE).flat_map(move |i| (0..Window::SIDE).map(move |j| self.cell_at(i, j)))
    }

    /// Return the centre cell of the window.
    #[inline]
    pub const fn center(self) -> Square {
        self.cell_at(1, 1)
    }

    /// Return `true` if the cell is one of the four window corners.
    #[inline]
    pub fn is_corner(self, sq: Square) -> bool {
        self.contains(sq) && sq.row() != self.ay + 1 && sq.col() != self.ax + 1
    }

    /// Return the window translated by `(dx, dy)`, or `None` if the new
    /// corner escapes 0..=2 in either coordinate.
    #[inline]
    pub fn shifted(self, dx: i8, dy: i8) -> Option<Window> {
        let ax = self.ax as i8 + dx;
        let ay = self.ay as i8 + dy;
        if (0..=Window::MAX_OFFSET as i8).contains(&ax)
            && (0..=Window::MAX_OFFSET as i8).contains(&ay)
        {
            Some(Window {
                ax: ax as u8,
                ay: ay as u8,
            })
        } else {
            None
        }
    }

    /// The eight candidate lines in window coordinates: three rows, three
    /// columns, two diagonals. Only these lines can win.
    pub fn lines(self) -> [[Square; 3]; 8] {
        [
            // rows
            [self.cell_at(0, 0), self.cell_at(0, 1), self.cell_at(0, 2)],
            [self.cell_at(1, 0), self.cell_at(1, 1), self.cell_at(1, 2)],
            [self.cell_at(2, 0), self.cell_at(2, 1), self.cell_at(2, 2)],
            // columns
            [self.cell_at(0, 0), self.cell_at(1, 0), self.cell_at(2, 0)],
            [self.cell_at(0, 1), self.cell_at(1, 1), self.cell_at(2, 1)],
            [self.cell_at(0, 2), self.cell_at(1, 2), self.cell_at(2, 2)],
            // diagonals
            [self.cell_at(0, 0), self.cell_at(1, 1), self.cell_at(2, 2)],
            [self.cell_at(0, 2), self.cell_at(1, 1), self.cell_at(2, 0)],
        ]
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.ax, self.ay)
    }
}

#[cfg(test)]
mod tests {
    use super::Window;
    use crate::square::Square;

    #[test]
    fn new_bounds() {
        assert!(Window::new(0, 0).is_some());
        assert!(Window::new(2, 2).is_some());
        assert!(Window::new(3, 0).is_none());
        assert!(Window::new(0, 3).is_none());
    }

    #[test]
    fn cells_cover_nine() {
        let window = Window::new(1, 1).unwrap();
        let cells: Vec<Square> = window.cells().collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|&sq| window.contains(sq)));
        assert_eq!(cells[0], Square::B2);
        assert_eq!(cells[8], Square::D4);
    }

    #[test]
    fn contains_excludes_outside() {
        let window = Window::new(1, 1).unwrap();
        assert!(!window.contains(Square::A1));
        assert!(!window.contains(Square::E5));
        assert!(window.contains(Square::C3));
    }

    #[test]
    fn center_and_corners() {
        let window = Window::new(0, 0).unwrap();
        assert_eq!(window.center(), Square::B2);
        assert!(window.is_corner(Square::A1));
        assert!(window.is_corner(Square::A3));
        assert!(window.is_corner(Square::C1));
        assert!(window.is_corner(Square::C3));
        assert!(!window.is_corner(Square::A2));
        assert!(!window.is_corner(Square::B2));
        assert!(!window.is_corner(Square::E5));
    }

    #[test]
    fn shifted_bounds() {
        let window = Window::new(0, 0).unwrap();
        assert!(window.shifted(-1, 0).is_none());
        assert!(window.shifted(0, -1).is_none());
        assert_eq!(window.shifted(1, 1), Window::new(1, 1));

        let window = Window::new(2, 2).unwrap();
        assert!(window.shifted(1, 0).is_none());
        assert!(window.shifted(0, 1).is_none());
    }

    #[test]
    fn shift_and_inverse_return_home() {
        // Legal shifts form a group: (dx, dy) then (-dx, -dy) is identity.
        for ax in 0..=2 {
            for ay in 0..=2 {
                let window = Window::new(ax, ay).unwrap();
                for (dx, dy) in Window::SHIFT_OFFSETS {
                    if let Some(shifted) = window.shifted(dx, dy) {
                        assert_eq!(shifted.shifted(-dx, -dy), Some(window));
                    }
                }
            }
        }
    }

    #[test]
    fn eight_lines_inside_window() {
        let window = Window::new(2, 2).unwrap();
        let lines = window.lines();
        assert_eq!(lines.len(), 8);
        for line in lines {
            for sq in line {
                assert!(window.contains(sq));
            }
        }
    }
}
