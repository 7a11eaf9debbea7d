//! Terminal rendering: the board, engine progress, and outcomes.

use oriel_core::{GameState, Player};
use oriel_engine::DepthReport;

/// Clear the terminal, unless `NO_CLEAR_SCREEN=1` is set.
pub fn clear_screen() {
    if std::env::var("NO_CLEAR_SCREEN").as_deref() == Ok("1") {
        return;
    }
    print!("\x1b[2J\x1b[1;1H");
}

/// Print the board with the active window bracketed, plus the
/// placement counters.
pub fn render_board(state: &GameState) {
    println!("{}", state.board().pretty(state.window()));
    println!(
        " window {}  placed X:{} O:{}",
        state.window(),
        state.placements(Player::X),
        state.placements(Player::O),
    );
}

/// Print one iterative-deepening progress snapshot.
pub fn render_depth_report(report: &DepthReport) {
    println!(
        "depth {}/{}  nodes {}  hits {}  cutoffs {}  [eval {}]",
        report.depth,
        report.max_depth,
        report.stats.nodes_visited,
        report.stats.cache_hits,
        report.stats.cutoffs,
        report.eval_name,
    );
    for (rank, evaluation) in report.evaluations.iter().enumerate() {
        println!(
            "  {}. {:+}  {}",
            rank + 1,
            evaluation.score,
            format_pv(&evaluation.pv),
        );
    }
}

/// Join a principal variation into a single readable line.
pub fn format_pv(pv: &[oriel_core::Action]) -> String {
    pv.iter()
        .map(|action| action.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::format_pv;
    use oriel_core::{Action, Square};

    #[test]
    fn format_pv_joins_actions() {
        let pv = vec![
            Action::Place(Square::C3),
            Action::Shift { dx: 1, dy: 0 },
            Action::Move {
                from: Square::C3,
                to: Square::D4,
            },
        ];
        assert_eq!(format_pv(&pv), "place C3 | shift +1,+0 | move C3 D4");
    }

    #[test]
    fn format_pv_empty() {
        assert_eq!(format_pv(&[]), "");
    }
}
