//! Move ordering: surface likely-best actions first so alpha-beta
//! prunes early.

use oriel_core::{Action, Window};

/// Ordering priority for an action; higher is searched first.
///
/// Placements dominate because they are the most committal, and the
/// centre and corners sit on the most window lines. Score bands:
///
/// | Action | Priority |
/// |---|---|
/// | place on the window centre | 100 |
/// | place on a window corner | 80 |
/// | place elsewhere in the window | 60 |
/// | move | 40 |
/// | shift | 20 |
pub fn action_priority(window: Window, action: Action) -> i32 {
    match action {
        Action::Place(sq) if sq == window.center() => 100,
        Action::Place(sq) if window.is_corner(sq) => 80,
        Action::Place(_) => 60,
        Action::Move { .. } => 40,
        Action::Shift { .. } => 20,
    }
}
