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

//! `GameState`: the immutable record the whole kernel revolves around, and
//! `Move`: the boundary type a caller hands in to describe an intended
//! action.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::GameStateError;
use crate::piece::Piece;
use crate::primitives::{PlayerColor, Vector2Int};

/// Describes an intended action. Consumed only at the `ChessEngine`
/// boundary to build the initial event list; never itself enters the
/// event queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Vector2Int,
    pub to: Vector2Int,
    pub piece: Piece,
}

impl Move {
    pub fn new(from: Vector2Int, to: Vector2Int, piece: Piece) -> Self {
        Self { from, to, piece }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: PlayerColor,
    pub turn_number: u32,
    pub move_history: Vec<Move>,
}

/// A subset of `GameState`'s fields to replace, used by `with_updated`.
/// Fields left `None` carry over a deep clone of the prior value.
#[derive(Default)]
pub struct GameStatePatch {
    pub board: Option<Board>,
    pub current_player: Option<PlayerColor>,
    pub turn_number: Option<u32>,
    pub move_history: Option<Vec<Move>>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            current_player: PlayerColor::White,
            turn_number: 1,
            move_history: Vec::new(),
        }
    }

    pub fn with_updated(&self, patch: GameStatePatch) -> GameState {
        GameState {
            board: patch.board.unwrap_or_else(|| self.board.clone()),
            current_player: patch.current_player.unwrap_or(self.current_player),
            turn_number: patch.turn_number.unwrap_or(self.turn_number),
            move_history: patch.move_history.unwrap_or_else(|| self.move_history.clone()),
        }
    }

    /// Setup-time convenience: places every `(position, piece)` pair onto
    /// `board` in order and wraps the result in a fresh `GameState`. Unlike
    /// the resolution pipeline, this is not expected to run mid-game and
    /// fails closed on the first invalid placement rather than silently
    /// dropping it.
    pub fn try_from_setup(mut board: Board, placements: Vec<(Vector2Int, Piece)>) -> Result<Self, GameStateError> {
        for (pos, piece) in placements {
            board.place_piece(piece, pos)?;
        }
        Ok(Self::new(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    fn test_state() -> GameState {
        let board = Board::new(3, 3, |pos| Tile::new(format!("t{pos}"), pos));
        GameState::new(board)
    }

    #[test]
    fn defaults_are_white_turn_one() {
        let s = test_state();
        assert_eq!(s.current_player, PlayerColor::White);
        assert_eq!(s.turn_number, 1);
        assert!(s.move_history.is_empty());
    }

    #[test]
    fn with_updated_replaces_only_named_fields() {
        let s = test_state();
        let patched = s.with_updated(GameStatePatch {
            turn_number: Some(7),
            ..Default::default()
        });
        assert_eq!(patched.turn_number, 7);
        assert_eq!(patched.current_player, PlayerColor::White);
        assert_eq!(patched.board.width(), s.board.width());
    }

    #[test]
    fn with_updated_does_not_mutate_source() {
        let s = test_state();
        let _ = s.with_updated(GameStatePatch {
            current_player: Some(PlayerColor::Black),
            ..Default::default()
        });
        assert_eq!(s.current_player, PlayerColor::White);
    }

    #[test]
    fn try_from_setup_places_every_piece() {
        let board = Board::new(3, 3, |pos| Tile::new(format!("t{pos}"), pos));
        let a = Piece::new("a", "Mock", PlayerColor::White, Vector2Int::new(0, 0));
        let b = Piece::new("b", "Mock", PlayerColor::Black, Vector2Int::new(2, 2));
        let state = GameState::try_from_setup(
            board,
            vec![(Vector2Int::new(0, 0), a), (Vector2Int::new(2, 2), b)],
        )
        .unwrap();
        assert!(state.board.get_piece_at(Vector2Int::new(0, 0)).is_some());
        assert!(state.board.get_piece_at(Vector2Int::new(2, 2)).is_some());
    }

    #[test]
    fn try_from_setup_fails_closed_on_collision() {
        let board = Board::new(3, 3, |pos| Tile::new(format!("t{pos}"), pos));
        let a = Piece::new("a", "Mock", PlayerColor::White, Vector2Int::new(0, 0));
        let b = Piece::new("b", "Mock", PlayerColor::Black, Vector2Int::new(0, 0));
        let result = GameState::try_from_setup(
            board,
            vec![(Vector2Int::new(0, 0), a), (Vector2Int::new(0, 0), b)],
        );
        assert!(result.is_err());
    }
}
