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
//! Errors raised while resolving a turn.
use thiserror::Error;

use crate::{board::ShotError, select::SelectAborted};

/// Reason why a turn could not be resolved. None of these end the match; a rejected shot
/// leaves the same side to move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The board rejected the target.
    #[error(transparent)]
    Shot(#[from] ShotError),

    /// The match already has a winner.
    #[error("the match is already over")]
    MatchOver,

    /// The acting side's selector could not supply a target.
    #[error("no target was supplied, the match was abandoned")]
    Aborted,
}

impl From<SelectAborted> for TurnError {
    fn from(_: SelectAborted) -> Self {
        TurnError::Aborted
    }
}
