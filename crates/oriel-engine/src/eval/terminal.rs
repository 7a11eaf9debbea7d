//! The `default` evaluation: decisive outcomes only.

use oriel_core::{GameState, Player};

/// Magnitude of a terminal score before depth adjustment.
pub const WIN_BASE: i32 = 10;

/// Score a position for `ai` with decisive outcomes only.
///
/// A win for the AI scores `10 - depth`, a loss `depth - 10`, and
/// everything else (draws and non-terminal positions) scores 0. The depth
/// adjustment makes faster wins score strictly higher and faster losses
/// strictly lower.
pub fn evaluate(_state: &GameState, winner: Option<Player>, ai: Player, depth: u8) -> i32 {
    match winner {
        Some(player) if player == ai => WIN_BASE - depth as i32,
        Some(_) => depth as i32 - WIN_BASE,
        None => 0,
    }
}
