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
//! Text rendering of boards.
use std::fmt;

use seabattle::{Board, CellState};

/// Display helper that draws a board as a grid of symbols with 1-indexed row and column
/// labels.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    reveal: bool,
}

impl<'a> BoardDisplay<'a> {
    /// Draw the board honouring its visibility flag.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            reveal: false,
        }
    }

    /// Draw the board with every vessel shown, whatever its visibility flag says.
    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            reveal: true,
        }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dim = self.board.dimensions();
        f.write_str("   ")?;
        for col in 1..=dim.size() {
            write!(f, " {} |", col)?;
        }
        for (i, row) in dim.iter_coordinates().enumerate() {
            write!(f, "\n{} |", i + 1)?;
            for coord in row {
                let cell = if self.reveal {
                    self.board.cell(&coord)
                } else {
                    self.board.visible_cell(&coord)
                };
                write!(f, " {} |", symbol(cell.unwrap_or(CellState::Empty)))?;
            }
        }
        Ok(())
    }
}

fn symbol(cell: CellState) -> char {
    match cell {
        CellState::Empty => 'O',
        CellState::Occupied => '■',
        CellState::Hit => '*',
        CellState::Miss | CellState::Blocked => 'X',
    }
}

#[cfg(test)]
mod tests {
    use seabattle::{BoardSetup, Coordinate, Orientation, Vessel};

    use super::*;

    fn small_board() -> Board {
        let mut setup = BoardSetup::new(3);
        setup
            .place_vessel(Vessel::new(Coordinate::new(0, 0), Orientation::Horizontal, 2))
            .unwrap();
        setup.start()
    }

    #[test]
    fn draws_header_and_rows() {
        let board = small_board();
        assert_eq!(
            BoardDisplay::new(&board).to_string(),
            "    1 | 2 | 3 |\n1 | ■ | ■ | O |\n2 | O | O | O |\n3 | O | O | O |"
        );
    }

    #[test]
    fn hidden_board_masks_vessels_until_revealed() {
        let mut board = small_board();
        board.shoot(Coordinate::new(0, 0)).unwrap();
        board.shoot(Coordinate::new(2, 2)).unwrap();
        board.set_visible(false);
        assert_eq!(
            BoardDisplay::new(&board).to_string(),
            "    1 | 2 | 3 |\n1 | * | O | O |\n2 | O | O | O |\n3 | O | O | X |"
        );
        assert_eq!(
            BoardDisplay::revealed(&board).to_string(),
            "    1 | 2 | 3 |\n1 | * | ■ | O |\n2 | O | O | O |\n3 | O | O | X |"
        );
    }

    #[test]
    fn sunk_vessel_is_boxed_in() {
        let mut board = small_board();
        board.shoot(Coordinate::new(0, 0)).unwrap();
        board.shoot(Coordinate::new(0, 1)).unwrap();
        assert_eq!(
            BoardDisplay::new(&board).to_string(),
            "    1 | 2 | 3 |\n1 | * | * | X |\n2 | X | X | X |\n3 | O | O | O |"
        );
    }
}
