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
//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::ops::{Index, IndexMut};

use enumflags2::BitFlags;

use crate::board::{CellState, Coordinate, Dimensions};

/// Bookkeeping marks a cell can carry independently of whether a vessel occupies it.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub(super) enum Mark {
    /// Part of a placed vessel's adjacency buffer. Only meaningful during setup.
    Reserved = 0b001,
    /// A shot has landed on this cell.
    Shot = 0b010,
    /// Part of a sunk vessel's adjacency buffer; can no longer be targeted.
    Blocked = 0b100,
}

/// A single cell in the player's grid.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct GridCell {
    /// Index of the vessel that occupies this cell, if any.
    pub(super) vessel: Option<usize>,

    /// Marks recorded against this cell.
    pub(super) marks: BitFlags<Mark>,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            vessel: None,
            marks: BitFlags::empty(),
        }
    }
}

impl GridCell {
    /// True if the cell may no longer be placed on. Occupied cells and reserved buffers
    /// both count.
    pub(super) fn blocks_placement(&self) -> bool {
        self.vessel.is_some() || self.marks.contains(Mark::Reserved)
    }

    /// True if the cell may no longer be shot at.
    pub(super) fn resolved(&self) -> bool {
        self.marks.intersects(Mark::Shot | Mark::Blocked)
    }

    /// Logical state of the cell, derived from occupancy and marks.
    pub(super) fn state(&self) -> CellState {
        match (self.vessel, self.marks.contains(Mark::Shot)) {
            (Some(_), true) => CellState::Hit,
            (None, true) => CellState::Miss,
            _ if self.marks.contains(Mark::Blocked) => CellState::Blocked,
            (Some(_), false) => CellState::Occupied,
            (None, false) => CellState::Empty,
        }
    }
}

/// Grid structure shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board].
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board, row-major.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the in-bounds cells around `coords` that are not themselves in `coords`.
    pub(super) fn buffer_of<'a>(
        &'a self,
        coords: &'a [Coordinate],
    ) -> impl 'a + Iterator<Item = Coordinate> {
        let dim = self.dim;
        coords
            .iter()
            .flat_map(move |&c| dim.neighbors(c))
            .filter(move |n| !coords.contains(n))
    }

    /// Remove a mark from every cell.
    pub(super) fn clear_mark(&mut self, mark: Mark) {
        for cell in self.cells.iter_mut() {
            cell.marks.remove(mark);
        }
    }
}

impl Index<&Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
