// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Command line sea battle against the computer.
use std::io::{self, BufRead};

use clap::{value_t, App, Arg};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use seabattle::{
    InteractiveSelector, Match, MatchConfig, MatchState, ShotOutcome, Side, TurnError,
    TurnResolved,
};

use crate::{
    input::{InputReader, MenuChoice},
    render::BoardDisplay,
};

mod input;
mod render;

fn main() -> io::Result<()> {
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of both boards")
                .takes_value(true)
                .default_value("6"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the computer's fleet"),
        )
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("FILTER")
                .help("log filter used when RUST_LOG is not set")
                .takes_value(true)
                .default_value("warn"),
        )
        .get_matches();

    init_logging(matches.value_of("log_level").unwrap_or("warn"));

    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!(seed, "using fixed seed");
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };
    let reveal = matches.is_present("reveal");
    let config = MatchConfig::with_size(size);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    loop {
        match input.read_menu()? {
            Some(MenuChoice::Help) => show_help(size),
            Some(MenuChoice::Start) => play_match(config, &mut rng, &mut input, reveal),
            Some(MenuChoice::Exit) | None => {
                println!("Leaving the game. Goodbye!");
                return Ok(());
            }
        }
    }
}

/// Log to stderr so log lines stay out of the drawn boards. `RUST_LOG` takes precedence
/// over `fallback`.
fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn show_help(size: usize) {
    println!();
    println!("Sea battle is a classic naval game.");
    println!("The goal is to sink every vessel of the enemy fleet.");
    println!("Both boards are {0}x{0} squares.", size);
    println!("Enter targets as: row col, for example 2 5. Both count from 1.");
    println!("Vessels are placed at random and never touch each other, not even at a corner.");
    println!("A hit or a sink lets you fire again, a miss passes the turn.");
    println!("Whoever sinks the whole enemy fleet first wins. Good luck!");
    println!();
    println!("Symbols: O unknown, ■ vessel, * hit, X miss or blocked");
    println!();
}

/// Play one match against the computer, reading the player's targets from `input`.
fn play_match<B: BufRead>(
    config: MatchConfig,
    rng: &mut StdRng,
    input: &mut InputReader<B>,
    reveal: bool,
) {
    let human = Box::new(InteractiveSelector::new(input));
    let mut game = match Match::new_match(config, rng, human) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "could not start a match");
            println!("Could not start a match: {}", err);
            return;
        }
    };

    show_boards(&game, reveal);
    announce(game.current_state());
    let result = game.run(|game, turn| {
        report_turn(turn);
        show_boards(game, reveal);
        announce(turn.next);
    });
    match result {
        Ok(Side::Human) => println!("You won!"),
        Ok(Side::Computer) => println!("You lost!"),
        Err(TurnError::Aborted) => println!("Match abandoned."),
        Err(err) => error!(%err, "match stopped"),
    }
    println!();
}

fn show_boards<R: RngCore>(game: &Match<'_, R>, reveal: bool) {
    let rule = "-".repeat(20);
    println!("{}", rule);
    println!("Your board");
    println!("{}", BoardDisplay::new(game.board(Side::Human)));
    println!("{}", rule);
    println!("Computer's board");
    let computer = game.board(Side::Computer);
    if reveal {
        println!("{}", BoardDisplay::revealed(computer));
    } else {
        println!("{}", BoardDisplay::new(computer));
    }
    println!("{}", rule);
}

fn announce(state: MatchState) {
    match state {
        MatchState::AwaitingMove(Side::Human) => println!("Your turn."),
        MatchState::AwaitingMove(Side::Computer) => println!("The computer is moving."),
        MatchState::MatchOver(_) => {}
    }
}

fn report_turn(turn: &TurnResolved) {
    match turn.side {
        Side::Human => println!("You fire at {}", turn.target),
        Side::Computer => println!("Computer's move: {}", turn.target),
    }
    match turn.outcome {
        ShotOutcome::Miss => println!("Miss."),
        ShotOutcome::Hit => println!("Vessel hit!"),
        ShotOutcome::Sunk => println!("Vessel sunk!"),
    }
}
