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
//! Random fleet placement.
//!
//! Vessels are placed longest first at a random bow and orientation. A rejected attempt is
//! simply retried somewhere else. Each vessel gets a bounded number of attempts; if one runs
//! out, the whole fleet is cleared and placement starts over, up to a bounded number of
//! restarts. This keeps generation finite even on boards that cannot hold the fleet.
use rand::{distributions::Uniform, Rng};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    board::{Board, BoardSetup, Coordinate, Dimensions, MAX_SIZE},
    ships::Vessel,
};

/// Lengths of the vessels every fleet is made of.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Ceilings that bound random placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementLimits {
    /// Attempts per vessel before the whole fleet is restarted.
    pub max_attempts: usize,
    /// Whole-fleet restarts before giving up.
    pub max_restarts: usize,
}

impl Default for PlacementLimits {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            max_restarts: 100,
        }
    }
}

/// Error returned when no fleet could be generated.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The board has no cells.
    #[error("board size must be nonzero")]
    InvalidSize,
    /// The board would have more cells than supported.
    #[error("board size {size} is larger than the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    /// Every attempt and restart was used up without fitting the fleet.
    #[error("could not fit the fleet on a {size}x{size} board after {restarts} restarts")]
    Exhausted { size: usize, restarts: usize },
}

/// Generate a playing board of the given size holding the standard [`FLEET`].
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    limits: PlacementLimits,
) -> Result<Board, FleetError> {
    generate_with(rng, size, &FLEET, limits)
}

/// Generate a playing board holding vessels of the given lengths, placed in the order
/// given.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
    limits: PlacementLimits,
) -> Result<Board, FleetError> {
    if size > MAX_SIZE {
        return Err(FleetError::TooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    let dim = Dimensions::try_new(size).ok_or(FleetError::InvalidSize)?;
    let bows = Uniform::new(Coordinate::new(0, 0), Coordinate::new(size, size));
    for restart in 0..=limits.max_restarts {
        if restart > 0 {
            debug!(restart, "restarting fleet placement");
        }
        if let Some(setup) = try_place_all(rng, dim, &bows, lengths, limits.max_attempts) {
            info!(size, vessels = lengths.len(), restart, "fleet generated");
            return Ok(setup.start());
        }
    }
    Err(FleetError::Exhausted {
        size,
        restarts: limits.max_restarts,
    })
}

/// One pass over the whole fleet. Returns `None` as soon as any vessel runs out of
/// attempts.
fn try_place_all<R: Rng + ?Sized>(
    rng: &mut R,
    dim: Dimensions,
    bows: &Uniform<Coordinate>,
    lengths: &[usize],
    max_attempts: usize,
) -> Option<BoardSetup> {
    let mut setup = BoardSetup::with_dimensions(dim);
    'vessels: for &length in lengths {
        for _ in 0..max_attempts {
            let vessel = Vessel::new(rng.sample(bows), rng.gen(), length);
            match setup.place_vessel(vessel) {
                Ok(()) => continue 'vessels,
                Err(err) => debug!(%err, "placement attempt rejected"),
            }
        }
        debug!(length, max_attempts, "vessel ran out of placement attempts");
        return None;
    }
    Some(setup)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn standard_fleet_fits_default_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = generate(&mut rng, 6, PlacementLimits::default()).unwrap();
        assert_eq!(board.vessels().len(), FLEET.len());
        let mut lengths: Vec<_> = board.vessels().iter().map(|v| v.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, FLEET.to_vec());
        assert_eq!(board.sunk_count(), 0);
        assert!(board.is_visible());
    }

    #[test]
    fn same_seed_same_fleet() {
        let a = generate(&mut StdRng::seed_from_u64(99), 6, Default::default()).unwrap();
        let b = generate(&mut StdRng::seed_from_u64(99), 6, Default::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_small_board_terminates() {
        let mut rng = StdRng::seed_from_u64(3);
        let limits = PlacementLimits {
            max_attempts: 50,
            max_restarts: 5,
        };
        assert_eq!(
            generate(&mut rng, 2, limits).unwrap_err(),
            FleetError::Exhausted {
                size: 2,
                restarts: 5
            }
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate(&mut rng, 0, PlacementLimits::default()).unwrap_err(),
            FleetError::InvalidSize
        );
    }

    #[test]
    fn huge_size_is_rejected_before_allocating() {
        let mut rng = StdRng::seed_from_u64(1);
        for &size in &[MAX_SIZE + 1, 1_000_000, 1 << 33] {
            let err = generate(&mut rng, size, PlacementLimits::default()).unwrap_err();
            assert_eq!(
                err,
                FleetError::TooLarge {
                    size,
                    max: MAX_SIZE
                }
            );
            assert!(err.to_string().contains("larger than the maximum"));
        }
    }

    #[test]
    fn custom_lengths() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = generate_with(&mut rng, 4, &[2, 1], PlacementLimits::default()).unwrap();
        assert_eq!(board.vessels().len(), 2);
    }
}
