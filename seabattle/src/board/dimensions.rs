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
//! Extent of a square board.
use crate::board::Coordinate;

/// Side length of the board used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 6;

/// Largest supported side length. Every cell is allocated up front.
pub const MAX_SIZE: usize = 100;

/// Dimensions of a square `size`x`size` board.
/// Implements the methods needed for the board to check bounds, linearize indexes, and
/// compute neighbor cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified side length.
    /// Panics if `size` is 0 or larger than [`MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero, got {}x{}", size, size),
            None => panic!("Dimensions too large: {} > {}", size, MAX_SIZE),
        }
    }

    /// Create new [`Dimensions`] with the specified side length.
    /// Returns `None` if `size` is 0 or larger than [`MAX_SIZE`].
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_SIZE {
            None
        } else {
            Some(Self { size })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board. Used to allocate storage.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// True if the coordinate lies on the board.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// True if either axis of the coordinate falls outside `[0, size)`.
    #[inline]
    pub fn is_out_of_bounds(&self, coord: &Coordinate) -> bool {
        !self.contains(coord)
    }

    /// Convert a coordinate to a row-major index.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate the in-bounds cells that touch `coord` along an edge or a corner.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors {
            dim: *self,
            // An out of bounds center has no neighbors worth reporting.
            step: if self.contains(&coord) {
                0
            } else {
                OFFSETS.len()
            },
            coord,
        }
    }

    /// True if the two coordinates are distinct and touch along an edge or a corner.
    pub fn is_neighbor(&self, c1: &Coordinate, c2: &Coordinate) -> bool {
        c1 != c2
            && self.contains(c1)
            && self.contains(c2)
            && c1.row.max(c2.row) - c1.row.min(c2.row) <= 1
            && c1.col.max(c2.col) - c1.col.min(c2.col) <= 1
    }
}

impl Default for Dimensions {
    /// The standard 6x6 board.
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
        }
    }
}

/// Row and column steps to the 8 cells around a center, clockwise from the top-left.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Iterator over the neighbors of a coordinate. See [`Dimensions::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    coord: Coordinate,
    step: usize,
}

/// Apply a step of -1, 0 or 1 to an axis, failing below zero.
fn offset(v: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        v.checked_sub(1)
    } else {
        v.checked_add(delta as usize)
    }
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.step < OFFSETS.len() {
            let (dr, dc) = OFFSETS[self.step];
            self.step += 1;
            if let (Some(row), Some(col)) = (offset(self.coord.row, dr), offset(self.coord.col, dc))
            {
                let neighbor = Coordinate::new(row, col);
                if self.dim.contains(&neighbor) {
                    return Some(neighbor);
                }
            }
        }
        None
    }
}
