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
//! Types that make up the game board.

use tracing::{info, trace};

use crate::ships::Vessel;

use self::grid::{Grid, Mark};
pub use self::{
    coordinate::{Coordinate, UniformCoordinate},
    dimensions::{Dimensions, Neighbors, DEFAULT_SIZE, MAX_SIZE},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Logical state of a single cell. How a state is drawn is up to the viewer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing known or nothing there.
    Empty,
    /// A vessel occupies the cell and it has not been shot.
    Occupied,
    /// A vessel occupies the cell and it has been shot.
    Hit,
    /// The cell was shot and held no vessel.
    Miss,
    /// The cell borders a sunk vessel and can no longer be targeted.
    Blocked,
}

/// Result of a shot that was accepted by the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a vessel without sinking it.
    Hit,
    /// The shot hit a vessel and sank it.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks let the shooter fire again; a miss ends the turn.
    pub fn grants_extra_turn(self) -> bool {
        match self {
            ShotOutcome::Miss => false,
            ShotOutcome::Hit | ShotOutcome::Sunk => true,
        }
    }
}

/// Represents a single player's board during play, including their vessels and their side
/// of the ocean. Built by [`BoardSetup::start`].
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Grid of cells occupied by vessels, with shot and blocked marks.
    grid: Grid,

    /// Vessels on this board, in placement order.
    vessels: Vec<Vessel>,

    /// Number of vessels sunk so far.
    sunk: usize,

    /// Whether an outside viewer may see unshot vessels. Display concern only.
    visible: bool,
}

impl Board {
    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// True if either axis of `coord` falls outside the board.
    pub fn is_out_of_bounds(&self, coord: &Coordinate) -> bool {
        self.grid.dim.is_out_of_bounds(coord)
    }

    /// True if `coord` was already shot, or borders a sunk vessel. Such cells cannot be
    /// shot again.
    pub fn is_resolved(&self, coord: &Coordinate) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.resolved())
    }

    /// True logical state of a cell, or `None` if it is out of bounds.
    pub fn cell(&self, coord: &Coordinate) -> Option<CellState> {
        self.grid.get(coord).map(|cell| cell.state())
    }

    /// State of a cell as an outside viewer may see it: unshot vessels show as
    /// [`CellState::Empty`] unless the board is visible.
    pub fn visible_cell(&self, coord: &Coordinate) -> Option<CellState> {
        self.cell(coord).map(|state| match state {
            CellState::Occupied if !self.visible => CellState::Empty,
            other => other,
        })
    }

    /// Whether unshot vessels are shown to outside viewers.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Vessels on this board, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns true if this board had vessels and all of them have been sunk.
    pub fn defeated(&self) -> bool {
        !self.vessels.is_empty() && self.sunk == self.vessels.len()
    }

    /// Get an iterator over the visible state of the board. The iterator's item is another
    /// iterator that iterates over a single row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        self.grid.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| self.visible_cell(&coord).unwrap_or(CellState::Empty))
        })
    }

    /// Read-only view that exposes only what the opponent may know about this board.
    pub fn view(&self) -> BoardView {
        BoardView { board: self }
    }

    /// Fire a shot at this board, returning the reason the shot was rejected or the result
    /// of the shot. Rejected shots leave the board unchanged.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let hit_vessel = match self.grid.get_mut(&coord) {
            None => {
                return Err(ShotError::new(
                    CannotShootReason::CoordinateOutOfRange,
                    coord,
                ))
            }
            Some(cell) if cell.resolved() => {
                return Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord))
            }
            Some(cell) => {
                cell.marks.insert(Mark::Shot);
                cell.vessel
            }
        };
        let outcome = match hit_vessel {
            None => ShotOutcome::Miss,
            Some(index) => {
                if self.vessels[index].register_hit() {
                    self.sink(index);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        trace!(%coord, ?outcome, "shot resolved");
        Ok(outcome)
    }

    /// Count the vessel as sunk and block every unresolved cell of its buffer.
    fn sink(&mut self, index: usize) {
        self.sunk += 1;
        let footprint: Vec<Coordinate> = self.vessels[index].coords().collect();
        let buffer: Vec<Coordinate> = self.grid.buffer_of(&footprint).collect();
        for coord in buffer.iter() {
            let cell = &mut self.grid[coord];
            if !cell.resolved() {
                cell.marks.insert(Mark::Blocked);
            }
        }
        info!(
            vessel = %self.vessels[index],
            sunk = self.sunk,
            total = self.vessels.len(),
            "vessel sunk"
        );
    }
}

/// Read-only view of an opponent's [`Board`]. Unshot vessels are always hidden, whatever
/// the board's visibility flag says.
#[derive(Debug, Copy, Clone)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn dimensions(&self) -> &'a Dimensions {
        self.board.dimensions()
    }

    /// State of the cell as the opponent may see it, or `None` if out of bounds.
    pub fn cell(&self, coord: &Coordinate) -> Option<CellState> {
        self.board.cell(coord).map(|state| match state {
            CellState::Occupied => CellState::Empty,
            other => other,
        })
    }

    /// True if a shot at `coord` would be rejected as already targeted.
    pub fn is_resolved(&self, coord: &Coordinate) -> bool {
        self.board.is_resolved(coord)
    }

    pub fn sunk_count(&self) -> usize {
        self.board.sunk_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    /// Board with a single horizontal vessel of length 3 at (2, 2).
    fn single_vessel_board() -> Board {
        let mut setup = BoardSetup::new(6);
        setup
            .place_vessel(Vessel::new(
                Coordinate::new(2, 2),
                Orientation::Horizontal,
                3,
            ))
            .unwrap();
        setup.start()
    }

    #[test]
    fn hit_hit_sunk_blocks_buffer() {
        let mut board = single_vessel_board();
        assert_eq!(board.shoot(Coordinate::new(2, 2)), Ok(ShotOutcome::Hit));
        assert_eq!(board.shoot(Coordinate::new(2, 3)), Ok(ShotOutcome::Hit));
        assert_eq!(board.sunk_count(), 0);
        assert_eq!(board.shoot(Coordinate::new(2, 4)), Ok(ShotOutcome::Sunk));
        assert_eq!(board.sunk_count(), 1);
        assert!(board.defeated());

        for row in 1..=3 {
            for col in 1..=5 {
                let coord = Coordinate::new(row, col);
                let expected = if row == 2 && (2..=4).contains(&col) {
                    CellState::Hit
                } else {
                    CellState::Blocked
                };
                assert_eq!(board.cell(&coord), Some(expected), "at {:?}", coord);
                assert!(board.is_resolved(&coord));
            }
        }
        assert_eq!(board.cell(&Coordinate::new(0, 0)), Some(CellState::Empty));
        assert!(!board.is_resolved(&Coordinate::new(4, 3)));
    }

    #[test]
    fn sinking_keeps_earlier_misses() {
        let mut board = single_vessel_board();
        assert_eq!(board.shoot(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
        board.shoot(Coordinate::new(2, 2)).unwrap();
        board.shoot(Coordinate::new(2, 3)).unwrap();
        board.shoot(Coordinate::new(2, 4)).unwrap();
        assert_eq!(board.cell(&Coordinate::new(1, 1)), Some(CellState::Miss));
        assert_eq!(board.cell(&Coordinate::new(1, 2)), Some(CellState::Blocked));
    }

    #[test]
    fn blocked_cells_reject_shots() {
        let mut board = single_vessel_board();
        for col in 2..=4 {
            board.shoot(Coordinate::new(2, col)).unwrap();
        }
        let err = board.shoot(Coordinate::new(3, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
    }

    #[test]
    fn miss_then_repeat_is_rejected() {
        let mut board = BoardSetup::new(6).start();
        assert_eq!(board.shoot(Coordinate::new(0, 0)), Ok(ShotOutcome::Miss));
        assert!(board.is_resolved(&Coordinate::new(0, 0)));
        let before = board.clone();
        let err = board.shoot(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
        assert_eq!(*err.coord(), Coordinate::new(0, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_is_rejected_unchanged() {
        let mut board = single_vessel_board();
        let before = board.clone();
        let err = board.shoot(Coordinate::new(6, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::CoordinateOutOfRange);
        assert_eq!(board, before);
    }

    #[test]
    fn hidden_board_masks_unshot_vessels() {
        let mut board = single_vessel_board();
        board.set_visible(false);
        let bow = Coordinate::new(2, 2);
        assert_eq!(board.cell(&bow), Some(CellState::Occupied));
        assert_eq!(board.visible_cell(&bow), Some(CellState::Empty));
        assert_eq!(board.view().cell(&bow), Some(CellState::Empty));
        board.shoot(bow).unwrap();
        assert_eq!(board.view().cell(&bow), Some(CellState::Hit));
        board.set_visible(true);
        assert_eq!(board.visible_cell(&Coordinate::new(2, 3)), Some(CellState::Occupied));
        assert_eq!(board.view().cell(&Coordinate::new(2, 3)), Some(CellState::Empty));
        board.set_visible(false);
        let row: Vec<_> = board.iter_rows().nth(2).unwrap().collect();
        assert_eq!(
            row,
            vec![
                CellState::Empty,
                CellState::Empty,
                CellState::Hit,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty
            ]
        );
    }

    #[test]
    fn view_reports_resolved_cells_and_sinks() {
        let mut board = single_vessel_board();
        assert_eq!(board.view().dimensions().size(), 6);
        for col in 2..=4 {
            board.shoot(Coordinate::new(2, col)).unwrap();
        }
        let view = board.view();
        assert_eq!(view.sunk_count(), 1);
        assert!(view.is_resolved(&Coordinate::new(2, 3)));
        assert!(view.is_resolved(&Coordinate::new(1, 1)));
        assert!(!view.is_resolved(&Coordinate::new(4, 4)));
        assert_eq!(view.cell(&Coordinate::new(1, 1)), Some(CellState::Blocked));
    }

    #[test]
    fn empty_board_is_never_defeated() {
        let board = BoardSetup::new(6).start();
        assert!(!board.defeated());
    }

    #[test]
    fn extra_turn_on_hit_and_sunk() {
        assert!(ShotOutcome::Hit.grants_extra_turn());
        assert!(ShotOutcome::Sunk.grants_extra_turn());
        assert!(!ShotOutcome::Miss.grants_extra_turn());
    }
}
