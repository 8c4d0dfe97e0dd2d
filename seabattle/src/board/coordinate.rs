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
use std::fmt;

use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

/// The coordinates of a cell in the board. Zero-indexed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: usize,
    /// Column of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Shows the coordinate the way players type it: 1-indexed, row then column.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

impl SampleUniform for Coordinate {
    type Sampler = UniformCoordinate;
}

/// Samples coordinates uniformly from the rectangle spanned by two corners. Each axis is
/// sampled independently, so `Uniform::new((0, 0), (n, n))` covers an `n`x`n` grid.
#[derive(Clone, Copy, Debug)]
pub struct UniformCoordinate {
    row: UniformInt<usize>,
    col: UniformInt<usize>,
}

impl UniformSampler for UniformCoordinate {
    type X = Coordinate;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: UniformInt::<usize>::new(low.row, high.row),
            col: UniformInt::<usize>::new(low.col, high.col),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: UniformInt::<usize>::new_inclusive(low.row, high.row),
            col: UniformInt::<usize>::new_inclusive(low.col, high.col),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Coordinate::new(self.row.sample(rng), self.col.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn displays_one_indexed() {
        assert_eq!(Coordinate::new(0, 5).to_string(), "1 6");
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = Uniform::new(Coordinate::new(0, 0), Coordinate::new(6, 6));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let c = rng.sample(&range);
            assert!(c.row < 6 && c.col < 6, "{:?} out of range", c);
            seen.insert(c);
        }
        assert_eq!(seen.len(), 36);
    }
}
