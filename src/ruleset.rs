// Copyright 2023 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! `RuleSet`: the external collaborator contract for legal-move generation
//! and game-over detection. The kernel never implements one — it only
//! calls through this trait, so rule-specific logic never leaks into the
//! event-resolution substrate.

use crate::piece::Piece;
use crate::primitives::PlayerColor;
use crate::state::{GameState, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverStatus {
    pub over: bool,
    pub winner: Option<PlayerColor>,
}

impl GameOverStatus {
    pub fn ongoing() -> Self {
        Self { over: false, winner: None }
    }

    pub fn won_by(winner: PlayerColor) -> Self {
        Self { over: true, winner: Some(winner) }
    }

    pub fn drawn() -> Self {
        Self { over: true, winner: None }
    }
}

/// Pure by contract: neither method may mutate `state`, and both must be
/// deterministic in it.
pub trait RuleSet {
    fn get_legal_moves(&self, state: &GameState, piece: &Piece) -> Vec<Move>;
    fn is_game_over(&self, state: &GameState) -> GameOverStatus;
}

#[cfg(test)]
pub(crate) struct NullRuleSet;

#[cfg(test)]
impl RuleSet for NullRuleSet {
    fn get_legal_moves(&self, _state: &GameState, _piece: &Piece) -> Vec<Move> {
        Vec::new()
    }

    fn is_game_over(&self, _state: &GameState) -> GameOverStatus {
        GameOverStatus::ongoing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::primitives::Vector2Int;
    use crate::tile::Tile;

    #[test]
    fn null_ruleset_never_ends_the_game() {
        let board = Board::new(2, 2, |p| Tile::new(format!("t{p}"), p));
        let state = GameState::new(board);
        let status = NullRuleSet.is_game_over(&state);
        assert!(!status.over);
        assert!(status.winner.is_none());
        let piece = Piece::new("p", "Mock", PlayerColor::White, Vector2Int::new(0, 0));
        assert!(NullRuleSet.get_legal_moves(&state, &piece).is_empty());
    }
}
