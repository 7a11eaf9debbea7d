//! The `positional` evaluation: window threats, presence, and the centre.

use oriel_core::{GameState, Player};

/// Magnitude of a terminal score before depth adjustment.
pub const WIN_BASE: i32 = 100;

/// Bonus per open two-in-a-row inside the window.
const THREAT_WEIGHT: i32 = 3;

/// Bonus per own marker inside the window.
const PRESENCE_WEIGHT: i32 = 1;

/// Bonus for holding the window centre.
const CENTER_WEIGHT: i32 = 2;

/// Score a position for `ai`.
///
/// Terminal positions score `±(100 - depth)`. Non-terminal positions sum
/// three features, each counted for the AI and against the opponent:
/// open two-in-a-row threats inside the window, markers inside the
/// window, and occupancy of the window centre.
pub fn evaluate(state: &GameState, winner: Option<Player>, ai: Player, depth: u8) -> i32 {
    match winner {
        Some(player) if player == ai => WIN_BASE - depth as i32,
        Some(_) => depth as i32 - WIN_BASE,
        None => {
            let opponent = ai.flip();
            THREAT_WEIGHT * (threats(state, ai) - threats(state, opponent))
                + PRESENCE_WEIGHT * (presence(state, ai) - presence(state, opponent))
                + CENTER_WEIGHT * (center_bonus(state, ai) - center_bonus(state, opponent))
        }
    }
}

/// Count window lines holding exactly two of `player`'s markers and one
/// empty cell.
fn threats(state: &GameState, player: Player) -> i32 {
    let board = state.board();
    state
        .window()
        .lines()
        .iter()
        .filter(|line| {
            let own = line
                .iter()
                .filter(|&&sq| board.marker_at(sq) == Some(player))
                .count();
            let empty = line.iter().filter(|&&sq| board.is_empty_cell(sq)).count();
            own == 2 && empty == 1
        })
        .count() as i32
}

/// Count `player`'s markers inside the window.
fn presence(state: &GameState, player: Player) -> i32 {
    let board = state.board();
    state
        .window()
        .cells()
        .filter(|&sq| board.marker_at(sq) == Some(player))
        .count() as i32
}

/// 1 if `player` holds the window centre, else 0.
fn center_bonus(state: &GameState, player: Player) -> i32 {
    (state.board().marker_at(state.window().center()) == Some(player)) as i32
}
