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

//! Rule engine for a two-player sea battle on a small square grid.
//!
//! Each side hides a fixed fleet of straight vessels on its own [`Board`][board::Board].
//! Vessels may not touch each other, not even diagonally. Sides take turns firing at the
//! opposing board; a hit or a sink grants another shot, a miss passes the turn. The first
//! side to sink the whole enemy fleet wins.
//!
//! [`board`] holds the grid and shot resolution, [`fleet`] generates random fleets,
//! [`select`] provides the automated and interactive ways of picking targets and [`game`]
//! runs the turn loop.

pub mod board;
pub mod config;
pub mod fleet;
pub mod game;
pub mod select;
pub mod ships;

pub use crate::{
    board::{Board, BoardSetup, BoardView, CellState, Coordinate, ShotError, ShotOutcome},
    config::MatchConfig,
    fleet::{FleetError, PlacementLimits, FLEET},
    game::{Match, MatchState, Side, TurnError, TurnResolved},
    select::{AutomatedSelector, CoordinateSource, InteractiveSelector, TargetSelector},
    ships::{Orientation, Vessel},
};
