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
//! Ways for a side to pick where to fire next.
use std::num::NonZeroUsize;

use rand::{distributions::Uniform, Rng, RngCore};
use tracing::trace;

use crate::board::{Board, BoardView, Coordinate, ShotError, ShotOutcome};

/// Returned by a selector that cannot produce a target, for example because its input
/// closed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SelectAborted;

/// Produces the next coordinate a side fires at.
pub trait TargetSelector {
    /// Pick a target on the enemy board. `rng` is the match's shared source of randomness.
    fn select_target(
        &mut self,
        rng: &mut dyn RngCore,
        own: &Board,
        enemy: BoardView,
    ) -> Result<Coordinate, SelectAborted>;

    /// Told when the board rejected the last target. The same side will be asked again.
    fn report_rejection(&mut self, _err: &ShotError) {}

    /// Told when a target was accepted.
    fn report_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// Fires at uniformly random cells. It does not remember earlier shots; repeats are
/// rejected by the board and a fresh target is drawn.
#[derive(Debug, Clone)]
pub struct AutomatedSelector {
    range: Uniform<Coordinate>,
}

impl AutomatedSelector {
    /// Selector for an enemy board with the given side length. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        Self {
            range: Uniform::new(Coordinate::new(0, 0), Coordinate::new(size, size)),
        }
    }
}

impl TargetSelector for AutomatedSelector {
    fn select_target(
        &mut self,
        rng: &mut dyn RngCore,
        _own: &Board,
        _enemy: BoardView,
    ) -> Result<Coordinate, SelectAborted> {
        Ok(rng.sample(&self.range))
    }

    fn report_rejection(&mut self, err: &ShotError) {
        trace!(%err, "automated shot rejected, drawing again");
    }
}

/// External collaborator that supplies targets typed by a person.
pub trait CoordinateSource {
    /// Read the next target as 1-indexed `(row, col)`. Malformed input is handled by the
    /// source itself. Returns `None` if no target will ever come, such as at end of input.
    fn next_target(&mut self) -> Option<(NonZeroUsize, NonZeroUsize)>;

    /// Told when the board rejected the last target.
    fn rejected(&mut self, _err: &ShotError) {}

    /// Told when a target was accepted.
    fn resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

impl<S: CoordinateSource + ?Sized> CoordinateSource for &mut S {
    fn next_target(&mut self) -> Option<(NonZeroUsize, NonZeroUsize)> {
        (**self).next_target()
    }

    fn rejected(&mut self, err: &ShotError) {
        (**self).rejected(err)
    }

    fn resolved(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).resolved(target, outcome)
    }
}

/// Delegates target choice to a [`CoordinateSource`], translating its 1-indexed input.
#[derive(Debug)]
pub struct InteractiveSelector<S> {
    source: S,
}

impl<S: CoordinateSource> InteractiveSelector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Extract the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CoordinateSource> TargetSelector for InteractiveSelector<S> {
    fn select_target(
        &mut self,
        _rng: &mut dyn RngCore,
        _own: &Board,
        _enemy: BoardView,
    ) -> Result<Coordinate, SelectAborted> {
        let (row, col) = self.source.next_target().ok_or(SelectAborted)?;
        Ok(Coordinate::new(row.get() - 1, col.get() - 1))
    }

    fn report_rejection(&mut self, err: &ShotError) {
        self.source.rejected(err);
    }

    fn report_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.source.resolved(target, outcome);
    }
}
