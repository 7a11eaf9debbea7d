//! Terminal front end: options parsing, interactive play, and self-play.

mod error;
mod game;
mod options;
mod render;
mod selfplay;

pub use error::CliError;
pub use options::{Choice, Options, parse_choice};
pub use selfplay::{SelfPlayParams, SelfPlayReport, Termination, run_self_play};

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::warn;

use oriel_core::Player;
use oriel_engine::EvalRegistry;

/// Parse the command line and run the program.
pub fn run() -> Result<(), CliError> {
    run_with_options(Options::parse())
}

/// Run the program with pre-parsed options.
pub fn run_with_options(options: Options) -> Result<(), CliError> {
    let registry = EvalRegistry::with_builtins();

    if options.list_evals {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    for side in Player::ALL {
        let name = options.evaluator_name(side);
        if !registry.contains(name) {
            warn!(name, %side, "unknown evaluation plugin, falling back to default");
        }
    }

    if options.self_play {
        return finish_self_play(&options, &registry);
    }

    match prompt_choice()? {
        Choice::PlayX => game::run_interactive(&options, &registry, Player::X),
        Choice::PlayO => game::run_interactive(&options, &registry, Player::O),
        Choice::SelfPlay => finish_self_play(&options, &registry),
    }
}

/// Run computer vs computer to completion and print the outcome.
fn finish_self_play(options: &Options, registry: &EvalRegistry) -> Result<(), CliError> {
    let params = SelfPlayParams {
        max_turns: None,
        depth: options.engine_depth,
        multi_pv: options.multi_pv,
        render: true,
    };
    let eval_x = registry.get(options.evaluator_name(Player::X));
    let eval_o = registry.get(options.evaluator_name(Player::O));

    let report = run_self_play(&params, &eval_x, &eval_o);
    println!(
        "self-play over after {} turns: {}",
        report.turns, report.termination
    );
    Ok(())
}

/// Ask who plays until the answer is recognizable.
///
/// Empty input (or a closed stdin) defaults to playing X.
fn prompt_choice() -> Result<Choice, CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("Play as X, O, or computer vs computer? [X] ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Choice::PlayX);
        }
        match parse_choice(&line) {
            Some(choice) => return Ok(choice),
            None => println!("Choose one of: X, O, C, AI, AUTO, COMPUTER, SELF, SELFPLAY"),
        }
    }
}
