//! Command-line options and the startup choice vocabulary.

use clap::Parser;

use oriel_core::Player;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "oriel", about = "Sliding-window three-in-a-row with an engine opponent")]
pub struct Options {
    /// Maximum iterative-deepening depth for the engine.
    #[arg(long = "engine-depth", default_value_t = 6)]
    pub engine_depth: u8,

    /// Number of ranked engine lines to report; 0 or less disables reports.
    #[arg(long = "multi-pv", default_value_t = 3, allow_hyphen_values = true)]
    pub multi_pv: i32,

    /// Evaluation plugin for both sides.
    #[arg(long = "eval", default_value = "default")]
    pub eval: String,

    /// Override the evaluation plugin for X.
    #[arg(long = "eval-x")]
    pub eval_x: Option<String>,

    /// Override the evaluation plugin for O.
    #[arg(long = "eval-o")]
    pub eval_o: Option<String>,

    /// Run computer vs computer without interactive input.
    #[arg(long = "self-play")]
    pub self_play: bool,

    /// Print the registered evaluation plugins and exit.
    #[arg(long = "list-evals")]
    pub list_evals: bool,
}

impl Options {
    /// Return the evaluation plugin name for `side`, honouring the
    /// per-side overrides.
    pub fn evaluator_name(&self, side: Player) -> &str {
        let overridden = match side {
            Player::X => self.eval_x.as_deref(),
            Player::O => self.eval_o.as_deref(),
        };
        overridden.unwrap_or(&self.eval)
    }
}

/// What the player picked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The human plays X.
    PlayX,
    /// The human plays O.
    PlayO,
    /// Computer vs computer.
    SelfPlay,
}

/// Parse the startup choice token.
///
/// Case-insensitive; empty input defaults to X. Unknown tokens yield
/// `None` so the prompt can repeat.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_ascii_uppercase().as_str() {
        "" | "X" => Some(Choice::PlayX),
        "O" => Some(Choice::PlayO),
        "C" | "AI" | "AUTO" | "COMPUTER" | "COMPUTERVSCOMPUTER" | "SELF" | "SELFPLAY"
        | "SELFPLAYMODE" => Some(Choice::SelfPlay),
        _ => None,
    }
}
