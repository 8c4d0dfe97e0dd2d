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
//! The match as a whole: two boards, two selectors and the turn loop.
//!
//! A match starts in [`MatchState::AwaitingMove`] for the side configured to go first.
//! Each resolved shot either keeps the same side to move (hit or sunk), passes the move
//! (miss) or ends the match once a whole fleet is sunk. Rejected shots do not consume the
//! turn.
use rand::RngCore;
use tracing::{debug, info};

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    config::MatchConfig,
    fleet::{self, FleetError},
    select::{AutomatedSelector, TargetSelector},
};

pub use self::errors::TurnError;

mod errors;

/// One of the two participants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// Where the match stands between turns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MatchState {
    /// The given side is to fire next.
    AwaitingMove(Side),
    /// The given side sank the whole enemy fleet. Terminal.
    MatchOver(Side),
}

/// Record of a shot that was accepted, and the state it led to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnResolved {
    /// Side that fired.
    pub side: Side,
    /// Cell that was fired at, on the opponent's board.
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// State after this shot.
    pub next: MatchState,
}

/// Runs a match. Owns both boards for its whole duration.
pub struct Match<'a, R> {
    /// Boards indexed by their owner.
    boards: [Board; 2],

    /// Selectors indexed by the side that uses them.
    selectors: [Box<dyn TargetSelector + 'a>; 2],

    state: MatchState,

    /// Shared source of randomness handed to the selectors.
    rng: R,
}

impl<'a, R: RngCore> Match<'a, R> {
    /// Start a match with freshly generated fleets. The computer fires with an
    /// [`AutomatedSelector`] and its board is hidden; the human's board is visible.
    pub fn new_match(
        config: MatchConfig,
        mut rng: R,
        human: Box<dyn TargetSelector + 'a>,
    ) -> Result<Self, FleetError> {
        let human_board = fleet::generate(&mut rng, config.size, config.placement)?;
        let mut computer_board = fleet::generate(&mut rng, config.size, config.placement)?;
        computer_board.set_visible(false);
        info!(size = config.size, first = ?config.first, "new match");
        Ok(Self::from_boards(
            human_board,
            computer_board,
            human,
            Box::new(AutomatedSelector::new(config.size)),
            config.first,
            rng,
        ))
    }

    /// Start a match from prepared boards and selectors.
    pub fn from_boards(
        human_board: Board,
        computer_board: Board,
        human: Box<dyn TargetSelector + 'a>,
        computer: Box<dyn TargetSelector + 'a>,
        first: Side,
        rng: R,
    ) -> Self {
        Self {
            boards: [human_board, computer_board],
            selectors: [human, computer],
            state: MatchState::AwaitingMove(first),
            rng,
        }
    }

    pub fn current_state(&self) -> MatchState {
        self.state
    }

    /// The board owned by `side`, which its opponent fires at.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Get the status of the match. Returns `None` if it is in progress, otherwise returns
    /// the winner.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::MatchOver(winner) => Some(winner),
            MatchState::AwaitingMove(_) => None,
        }
    }

    /// Fire the side to move's shot at `target` on the opponent's board.
    ///
    /// A rejected shot leaves the match unchanged and the same side to move. An accepted
    /// one keeps the move on a hit or sink, passes it on a miss, and ends the match once
    /// either fleet is fully sunk.
    pub fn resolve_turn(&mut self, target: Coordinate) -> Result<TurnResolved, TurnError> {
        let side = match self.state {
            MatchState::AwaitingMove(side) => side,
            MatchState::MatchOver(_) => return Err(TurnError::MatchOver),
        };
        let outcome = self.boards[side.opponent().index()].shoot(target)?;
        let next = match self.fleet_destroyed() {
            Some(winner) => MatchState::MatchOver(winner),
            None if outcome.grants_extra_turn() => MatchState::AwaitingMove(side),
            None => MatchState::AwaitingMove(side.opponent()),
        };
        self.state = next;
        debug!(?side, %target, ?outcome, ?next, "turn resolved");
        if let MatchState::MatchOver(winner) = next {
            info!(
                ?winner,
                human_sunk = self.board(Side::Human).sunk_count(),
                computer_sunk = self.board(Side::Computer).sunk_count(),
                "match over"
            );
        }
        Ok(TurnResolved {
            side,
            target,
            outcome,
            next,
        })
    }

    /// Ask the side to move for a target and resolve it. Rejected targets are reported
    /// back to the same selector, which is asked again until a shot is accepted.
    pub fn play_turn(&mut self) -> Result<TurnResolved, TurnError> {
        loop {
            let side = match self.state {
                MatchState::AwaitingMove(side) => side,
                MatchState::MatchOver(_) => return Err(TurnError::MatchOver),
            };
            let target = self.selectors[side.index()].select_target(
                &mut self.rng,
                &self.boards[side.index()],
                self.boards[side.opponent().index()].view(),
            )?;
            match self.resolve_turn(target) {
                Ok(turn) => {
                    self.selectors[side.index()].report_outcome(turn.target, turn.outcome);
                    return Ok(turn);
                }
                Err(TurnError::Shot(err)) => {
                    debug!(?side, %err, "shot rejected");
                    self.selectors[side.index()].report_rejection(&err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play turns until the match is over, calling `observer` after every accepted shot.
    /// Returns the winner.
    pub fn run<F>(&mut self, mut observer: F) -> Result<Side, TurnError>
    where
        F: FnMut(&Self, &TurnResolved),
    {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            let turn = self.play_turn()?;
            observer(self, &turn);
        }
    }

    /// Check both fleets. Returns the side whose opponent has nothing left afloat.
    fn fleet_destroyed(&self) -> Option<Side> {
        if self.board(Side::Computer).defeated() {
            Some(Side::Human)
        } else if self.board(Side::Human).defeated() {
            Some(Side::Computer)
        } else {
            None
        }
    }
}
