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

//! A rectangular grid of tiles with sparse piece occupancy.
//!
//! `Board` owns every `Tile` and `Piece` placed on it. Every cell has
//! exactly one tile; at most one piece. `clone()` is deep: the returned
//! board shares nothing mutable with its source (see `Piece`/`Tile` for the
//! one intentional exception — the attached listener behavior object, which
//! is not game state).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::piece::Piece;
use crate::primitives::Vector2Int;
use crate::tile::Tile;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    pieces: HashMap<Vector2Int, Piece>,
}

impl Board {
    /// Builds a `width` x `height` board (both must be >= 1), calling
    /// `default_tile` once per cell to seed the total tile mapping.
    pub fn new(width: i32, height: i32, mut default_tile: impl FnMut(Vector2Int) -> Tile) -> Self {
        assert!(width >= 1 && height >= 1, "board dimensions must be >= 1");
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(default_tile(Vector2Int::new(x, y)));
            }
        }
        Self {
            width,
            height,
            tiles,
            pieces: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Vector2Int) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn index_of(&self, pos: Vector2Int) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn get_tile(&self, pos: Vector2Int) -> Option<&Tile> {
        self.index_of(pos).map(|i| &self.tiles[i])
    }

    pub fn set_tile(&mut self, pos: Vector2Int, tile: Tile) -> Result<(), BoardError> {
        let idx = self.index_of(pos).ok_or(BoardError::OutOfBounds(pos))?;
        self.tiles[idx] = tile;
        Ok(())
    }

    pub fn get_piece_at(&self, pos: Vector2Int) -> Option<&Piece> {
        self.pieces.get(&pos)
    }

    pub fn place_piece(&mut self, mut piece: Piece, pos: Vector2Int) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if self.pieces.contains_key(&pos) {
            return Err(BoardError::CellOccupied(pos));
        }
        piece.position = pos;
        self.pieces.insert(pos, piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, pos: Vector2Int) -> Result<Piece, BoardError> {
        self.pieces.remove(&pos).ok_or(BoardError::CellEmpty(pos))
    }

    pub fn move_piece(&mut self, from: Vector2Int, to: Vector2Int) -> Result<(), BoardError> {
        if !self.in_bounds(to) {
            return Err(BoardError::OutOfBounds(to));
        }
        if !self.pieces.contains_key(&from) {
            return Err(BoardError::CellEmpty(from));
        }
        if self.pieces.contains_key(&to) {
            return Err(BoardError::CellOccupied(to));
        }
        let mut piece = self.pieces.remove(&from).expect("checked above");
        piece.position = to;
        self.pieces.insert(to, piece);
        Ok(())
    }

    /// A snapshot sequence of every piece currently on the board. Order is
    /// the underlying map's iteration order — callers must not depend on
    /// it for anything beyond "every piece exactly once".
    pub fn all_pieces(&self) -> Vec<&Piece> {
        self.pieces.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::PlayerColor;

    fn grass_board(w: i32, h: i32) -> Board {
        Board::new(w, h, |pos| Tile::new(format!("grass-{pos}"), pos))
    }

    #[test]
    fn place_then_get_round_trips() {
        let mut board = grass_board(3, 3);
        let piece = Piece::new("p1", "Knight", PlayerColor::White, Vector2Int::new(0, 0));
        board.place_piece(piece, Vector2Int::new(1, 1)).unwrap();
        let found = board.get_piece_at(Vector2Int::new(1, 1)).unwrap();
        assert_eq!(found.id, "p1");
        assert_eq!(found.position, Vector2Int::new(1, 1));
    }

    #[test]
    fn place_on_occupied_cell_fails() {
        let mut board = grass_board(2, 2);
        let a = Piece::new("a", "A", PlayerColor::White, Vector2Int::new(0, 0));
        let b = Piece::new("b", "B", PlayerColor::Black, Vector2Int::new(0, 0));
        board.place_piece(a, Vector2Int::new(0, 0)).unwrap();
        assert!(matches!(
            board.place_piece(b, Vector2Int::new(0, 0)),
            Err(BoardError::CellOccupied(_))
        ));
    }

    #[test]
    fn move_piece_updates_position_and_frees_origin() {
        let mut board = grass_board(4, 4);
        let piece = Piece::new("p1", "Rook", PlayerColor::White, Vector2Int::new(0, 0));
        board.place_piece(piece, Vector2Int::new(0, 0)).unwrap();
        board
            .move_piece(Vector2Int::new(0, 0), Vector2Int::new(3, 3))
            .unwrap();
        assert!(board.get_piece_at(Vector2Int::new(0, 0)).is_none());
        let moved = board.get_piece_at(Vector2Int::new(3, 3)).unwrap();
        assert_eq!(moved.position, Vector2Int::new(3, 3));
    }

    #[test]
    fn move_from_empty_cell_fails() {
        let mut board = grass_board(2, 2);
        assert!(matches!(
            board.move_piece(Vector2Int::new(0, 0), Vector2Int::new(1, 1)),
            Err(BoardError::CellEmpty(_))
        ));
    }

    #[test]
    fn clone_is_independent() {
        let mut board = grass_board(2, 2);
        let piece = Piece::new("p1", "Pawn", PlayerColor::White, Vector2Int::new(0, 0));
        board.place_piece(piece, Vector2Int::new(0, 0)).unwrap();
        let mut clone = board.clone();
        clone.remove_piece(Vector2Int::new(0, 0)).unwrap();
        assert!(board.get_piece_at(Vector2Int::new(0, 0)).is_some());
        assert!(clone.get_piece_at(Vector2Int::new(0, 0)).is_none());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let board = grass_board(2, 2);
        assert!(!board.in_bounds(Vector2Int::new(-1, 0)));
        assert!(!board.in_bounds(Vector2Int::new(2, 0)));
        assert!(board.in_bounds(Vector2Int::new(1, 1)));
    }
}
