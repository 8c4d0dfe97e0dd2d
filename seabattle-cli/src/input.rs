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
//! Reading menu choices and targets typed by the player.
use std::{
    io::{self, BufRead, Write},
    num::NonZeroUsize,
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use seabattle::{Coordinate, CoordinateSource, ShotError, ShotOutcome};

/// Reason typed text could not be read as a target.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TargetParseError {
    #[error("enter exactly 2 coordinates, got {0}")]
    WrongTokenCount(usize),
    #[error("enter positive whole numbers, {0:?} is not one")]
    NotANumber(String),
}

/// Parse a target typed as two whitespace-separated 1-indexed numbers, row first.
pub fn parse_target(line: &str) -> Result<(NonZeroUsize, NonZeroUsize), TargetParseError> {
    static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]+$").unwrap());

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(TargetParseError::WrongTokenCount(tokens.len()));
    }
    let parse = |token: &str| {
        Some(token)
            .filter(|token| NUMBER.is_match(token))
            .and_then(|token| token.trim_start_matches('+').parse::<NonZeroUsize>().ok())
            .ok_or_else(|| TargetParseError::NotANumber(token.to_owned()))
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

/// Entries of the main menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuChoice {
    Help,
    Start,
    Exit,
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Show the menu and read a choice. Returns `None` at end of input.
    pub fn read_menu(&mut self) -> io::Result<Option<MenuChoice>> {
        println!("Menu:");
        println!(" 1 - Help");
        println!(" 2 - Start a match");
        println!(" 3 - Exit");
        self.read_input("Choose an action (1/2/3):", |input| match input {
            "1" => Some(MenuChoice::Help),
            "2" => Some(MenuChoice::Start),
            "3" => Some(MenuChoice::Exit),
            other => {
                println!("Invalid choice {:?}. Please choose 1, 2 or 3.", other);
                None
            }
        })
    }

    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` at end of input.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

impl<B: BufRead> CoordinateSource for InputReader<B> {
    fn next_target(&mut self) -> Option<(NonZeroUsize, NonZeroUsize)> {
        let read = self.read_input("Your move (row col):", |input| match parse_target(input) {
            Ok(target) => Some(target),
            Err(err) => {
                println!("{}", err);
                None
            }
        });
        match read {
            Ok(target) => target,
            Err(err) => {
                warn!(%err, "could not read the next target");
                None
            }
        }
    }

    fn rejected(&mut self, err: &ShotError) {
        println!("{}", err.reason());
    }

    fn resolved(&mut self, target: Coordinate, outcome: ShotOutcome) {
        debug!(%target, ?outcome, "player shot resolved");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn parses_two_numbers() {
        assert_eq!(parse_target("2 3"), Ok((nz(2), nz(3))));
        assert_eq!(parse_target("  6\t1 "), Ok((nz(6), nz(1))));
        assert_eq!(parse_target("10 +4"), Ok((nz(10), nz(4))));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_target(""), Err(TargetParseError::WrongTokenCount(0)));
        assert_eq!(parse_target("1"), Err(TargetParseError::WrongTokenCount(1)));
        assert_eq!(
            parse_target("1 2 3"),
            Err(TargetParseError::WrongTokenCount(3))
        );
    }

    #[test]
    fn rejects_non_numbers_and_zero() {
        assert_eq!(
            parse_target("a 2"),
            Err(TargetParseError::NotANumber("a".to_owned()))
        );
        assert_eq!(
            parse_target("1 -2"),
            Err(TargetParseError::NotANumber("-2".to_owned()))
        );
        assert_eq!(
            parse_target("0 2"),
            Err(TargetParseError::NotANumber("0".to_owned()))
        );
    }

    #[test]
    fn source_skips_bad_lines_and_stops_at_eof() {
        let mut reader = InputReader::new(Cursor::new("x y\n1\n3 4\n"));
        assert_eq!(reader.next_target(), Some((nz(3), nz(4))));
        assert_eq!(reader.next_target(), None);
    }

    #[test]
    fn menu_reprompts_on_invalid_choice() {
        let mut reader = InputReader::new(Cursor::new("7\n\n2\n3\n"));
        assert_eq!(reader.read_menu().unwrap(), Some(MenuChoice::Start));
        assert_eq!(reader.read_menu().unwrap(), Some(MenuChoice::Exit));
        assert_eq!(reader.read_menu().unwrap(), None);
    }
}
