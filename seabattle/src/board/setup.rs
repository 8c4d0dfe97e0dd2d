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
//! Implements the setup phase of the board.
use crate::{
    board::{
        grid::{Grid, Mark},
        Board, CannotPlaceReason, Coordinate, Dimensions, PlaceError,
    },
    ships::Vessel,
};

/// Setup phase for a [`Board`]. Allows placing vessels and does not allow shooting.
///
/// Every placed vessel reserves its adjacency buffer for the rest of the setup phase, so no
/// later vessel can touch it along an edge or a corner.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSetup {
    /// Grid for placement of vessels.
    grid: Grid,

    /// Vessels placed so far, in placement order.
    vessels: Vec<Vessel>,
}

impl BoardSetup {
    /// Begin setup by constructing an empty board with the given side length.
    /// Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(Dimensions::new(size))
    }

    /// Begin setup by constructing an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            vessels: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// True if either axis of `coord` falls outside the board.
    pub fn is_out_of_bounds(&self, coord: &Coordinate) -> bool {
        self.grid.dim.is_out_of_bounds(coord)
    }

    /// True if `coord` is occupied or reserved by a placed vessel's buffer. Out of bounds
    /// coordinates are never resolved.
    pub fn is_resolved(&self, coord: &Coordinate) -> bool {
        self.grid
            .get(coord)
            .map_or(false, |cell| cell.blocks_placement())
    }

    /// Vessels placed so far, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Attempts to place the vessel. Fails without modifying the board if any cell of its
    /// footprint is off the board, occupied, or inside another vessel's buffer. On success
    /// the footprint becomes occupied and the surrounding buffer is reserved.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlaceError> {
        let footprint: Vec<Coordinate> = vessel.coords().collect();
        for coord in footprint.iter() {
            match self.grid.get(coord) {
                None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, vessel)),
                Some(cell) if cell.blocks_placement() => {
                    return Err(PlaceError::new(CannotPlaceReason::Reserved, vessel))
                }
                _ => {}
            }
        }
        // Already ensured that every position is valid and free.
        let index = self.vessels.len();
        for coord in footprint.iter() {
            self.grid[coord].vessel = Some(index);
        }
        self.vessels.push(vessel);
        let buffer: Vec<Coordinate> = self.grid.buffer_of(&footprint).collect();
        for coord in buffer.iter() {
            self.grid[coord].marks.insert(Mark::Reserved);
        }
        Ok(())
    }

    /// Finish setup and start play. Buffer reservations only exist to keep vessels apart
    /// while placing, so they are dropped here and only vessel occupancy carries over. The
    /// returned board is visible; hide it with [`Board::set_visible`].
    pub fn start(mut self) -> Board {
        self.grid.clear_mark(Mark::Reserved);
        Board {
            grid: self.grid,
            vessels: self.vessels,
            sunk: 0,
            visible: true,
        }
    }
}
