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
//! Settings for a single match.
use crate::{board::DEFAULT_SIZE, fleet::PlacementLimits, game::Side};

/// Settings used by [`Match::new_match`][crate::game::Match::new_match].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MatchConfig {
    /// Side length of both boards.
    pub size: usize,
    /// Ceilings for random fleet placement.
    pub placement: PlacementLimits,
    /// Side that fires first.
    pub first: Side,
}

impl MatchConfig {
    /// Default settings on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

impl Default for MatchConfig {
    /// A 6x6 board where the human moves first.
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            placement: PlacementLimits::default(),
            first: Side::Human,
        }
    }
}
