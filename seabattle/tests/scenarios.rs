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

use seabattle::{
    board::CannotShootReason, BoardSetup, CellState, Coordinate, Orientation, ShotOutcome, Vessel,
};

#[test]
fn three_cell_vessel_is_sunk_and_boxed_in() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_vessel(Vessel::new(
            Coordinate::new(2, 2),
            Orientation::Horizontal,
            3,
        ))
        .unwrap();
    let mut board = setup.start();

    assert_eq!(board.shoot(Coordinate::new(2, 2)), Ok(ShotOutcome::Hit));
    assert_eq!(board.shoot(Coordinate::new(2, 3)), Ok(ShotOutcome::Hit));
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
    assert_eq!(board.cell(&Coordinate::new(4, 3)), Some(CellState::Empty));
}

#[test]
fn miss_then_repeat_on_empty_board() {
    let mut board = BoardSetup::new(6).start();
    let origin = Coordinate::new(0, 0);
    assert_eq!(board.shoot(origin), Ok(ShotOutcome::Miss));
    assert!(board.is_resolved(&origin));
    assert_eq!(board.cell(&origin), Some(CellState::Miss));
    assert_eq!(
        board.shoot(origin).unwrap_err().reason(),
        CannotShootReason::AlreadyTargeted
    );
}

#[test]
fn row_six_is_off_a_six_board() {
    let mut board = BoardSetup::new(6).start();
    assert_eq!(
        board.shoot(Coordinate::new(6, 0)).unwrap_err().reason(),
        CannotShootReason::CoordinateOutOfRange
    );
}

#[test]
fn blocked_cells_cannot_be_shot() {
    let mut setup = BoardSetup::new(6);
    setup
        .place_vessel(Vessel::new(Coordinate::new(0, 0), Orientation::Vertical, 1))
        .unwrap();
    let mut board = setup.start();
    assert_eq!(board.shoot(Coordinate::new(0, 0)), Ok(ShotOutcome::Sunk));
    assert_eq!(
        board.shoot(Coordinate::new(1, 1)).unwrap_err().reason(),
        CannotShootReason::AlreadyTargeted
    );
}
