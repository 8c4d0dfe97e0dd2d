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
//! Types used for defining vessels and their footprint.
use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Direction in which a vessel extends from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends towards increasing columns.
    Horizontal,
    /// Extends towards increasing rows.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight-line vessel with a bow, an orientation and a length. Tracks how many of its
/// cells are still afloat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Vessel {
    bow: Coordinate,
    orientation: Orientation,
    length: usize,
    hit_points: usize,
}

impl Vessel {
    /// Construct an undamaged vessel. Panics if `length` is 0.
    pub fn new(bow: Coordinate, orientation: Orientation, length: usize) -> Self {
        assert!(length > 0, "vessel length must be nonzero");
        Self {
            bow,
            orientation,
            length,
            hit_points: length,
        }
    }

    /// Coordinate of the first cell.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of cells not yet hit.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// The `length` coordinates covered by this vessel, starting at the bow. Coordinates
    /// are not checked against any board, so some may lie outside of it.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = self.bow;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(row, col + i),
            Orientation::Vertical => Coordinate::new(row + i, col),
        })
    }

    /// True if `coord` is one of this vessel's cells.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        let Coordinate { row, col } = self.bow;
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == row && coord.col >= col && coord.col - col < self.length
            }
            Orientation::Vertical => {
                coord.col == col && coord.row >= row && coord.row - row < self.length
            }
        }
    }

    /// Take one point of damage. A sunk vessel takes no further damage. Returns true if
    /// this hit sank it.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hit_points == 0 {
            return false;
        }
        self.hit_points -= 1;
        self.hit_points == 0
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dir = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{}-cell {} vessel at {}", self.length, dir, self.bow)
    }
}
