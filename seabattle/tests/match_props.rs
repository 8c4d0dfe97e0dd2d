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

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    AutomatedSelector, Match, MatchConfig, MatchState, ShotOutcome, Side, FLEET,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn automated_match_ends_with_one_fleet_sunk(seed in any::<u64>(), computer_first in any::<bool>()) {
        let config = MatchConfig {
            first: if computer_first { Side::Computer } else { Side::Human },
            ..MatchConfig::default()
        };
        let mut game = Match::new_match(
            config,
            StdRng::seed_from_u64(seed),
            Box::new(AutomatedSelector::new(config.size)),
        )
        .unwrap();

        let mut violations = Vec::new();
        let winner = game
            .run(|game, turn| {
                let expected = if game.board(turn.side.opponent()).defeated() {
                    MatchState::MatchOver(turn.side)
                } else if turn.outcome == ShotOutcome::Miss {
                    MatchState::AwaitingMove(turn.side.opponent())
                } else {
                    MatchState::AwaitingMove(turn.side)
                };
                if turn.next != expected || game.current_state() != expected {
                    violations.push(*turn);
                }
            })
            .unwrap();

        prop_assert!(violations.is_empty(), "bad transitions: {:?}", violations);
        prop_assert_eq!(game.current_state(), MatchState::MatchOver(winner));
        prop_assert_eq!(game.board(winner.opponent()).sunk_count(), FLEET.len());
        prop_assert!(game.board(winner).sunk_count() < FLEET.len());
    }
}

#[test]
fn same_seed_replays_the_same_match() {
    let play = |seed| {
        let mut game = Match::new_match(
            MatchConfig::default(),
            StdRng::seed_from_u64(seed),
            Box::new(AutomatedSelector::new(6)),
        )
        .unwrap();
        let mut turns = Vec::new();
        let winner = game.run(|_, turn| turns.push(*turn)).unwrap();
        (winner, turns)
    };
    assert_eq!(play(1234), play(1234));
}
