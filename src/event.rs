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

//! The tagged event family: every atomic effect the kernel knows how to
//! apply, plus the per-variant validity predicate that gates application.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::piece::Piece;
use crate::primitives::{PlayerColor, Vector2Int};
use crate::state::GameState;
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Move {
        from: Vector2Int,
        to: Vector2Int,
        piece: Piece,
    },
    Capture {
        attacker: Piece,
        target: Piece,
    },
    Destroy {
        target: Piece,
        reason: String,
    },
    PiecePlaced {
        piece: Piece,
        position: Vector2Int,
    },
    TileChanged {
        position: Vector2Int,
        old_tile: Tile,
        new_tile: Tile,
    },
    PieceChanged {
        old_piece: Piece,
        new_piece: Piece,
        position: Vector2Int,
    },
    TurnAdvanced {
        next_player: PlayerColor,
        turn_number: u32,
    },
    TurnStart {
        player: PlayerColor,
        turn_number: u32,
    },
    TurnEnd {
        player: PlayerColor,
        turn_number: u32,
    },
    TimeOut {
        expired_player: PlayerColor,
    },
    GameOver {
        losing_player: PlayerColor,
    },
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Move { from, to, piece } => {
                write!(f, "{} moves {} -> {}", piece.name, from, to)
            }
            EventKind::Capture { attacker, target } => {
                write!(f, "{} captures {}", attacker.name, target.name)
            }
            EventKind::Destroy { target, reason } => {
                write!(f, "{} destroyed ({})", target.name, reason)
            }
            EventKind::PiecePlaced { piece, position } => {
                write!(f, "{} placed at {}", piece.name, position)
            }
            EventKind::TileChanged { position, new_tile, .. } => {
                write!(f, "tile at {} changed to {}", position, new_tile.id)
            }
            EventKind::PieceChanged { old_piece, new_piece, position } => {
                write!(f, "{} replaced by {} at {}", old_piece.name, new_piece.name, position)
            }
            EventKind::TurnAdvanced { next_player, turn_number } => {
                write!(f, "turn advances to {} (#{})", next_player, turn_number)
            }
            EventKind::TurnStart { player, turn_number } => {
                write!(f, "turn {} starts for {}", turn_number, player)
            }
            EventKind::TurnEnd { player, turn_number } => {
                write!(f, "turn {} ends for {}", turn_number, player)
            }
            EventKind::TimeOut { expired_player } => {
                write!(f, "{} timed out", expired_player)
            }
            EventKind::GameOver { losing_player } => {
                write!(f, "game over, {} loses", losing_player)
            }
        }
    }
}

/// A value object: two `Event`s are equal if their variant and payload
/// match, never by `id` (each construction mints a fresh one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub source_id: String,
    pub actor: PlayerColor,
    pub is_player_action: bool,
    pub description: String,
    pub kind: EventKind,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.source_id == other.source_id
            && self.actor == other.actor
            && self.is_player_action == other.is_player_action
            && self.description == other.description
            && self.kind == other.kind
    }
}
impl Eq for Event {}

impl Event {
    pub fn new(kind: EventKind, source_id: impl Into<String>, actor: PlayerColor, is_player_action: bool) -> Self {
        let description = kind.to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            source_id: source_id.into(),
            actor,
            is_player_action,
            description,
            kind,
        }
    }

    pub fn move_event(
        from: Vector2Int,
        to: Vector2Int,
        piece: Piece,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::Move { from, to, piece }, source_id, actor, is_player_action)
    }

    pub fn capture(
        attacker: Piece,
        target: Piece,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::Capture { attacker, target }, source_id, actor, is_player_action)
    }

    pub fn destroy(
        target: Piece,
        reason: impl Into<String>,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(
            EventKind::Destroy { target, reason: reason.into() },
            source_id,
            actor,
            is_player_action,
        )
    }

    pub fn piece_placed(
        piece: Piece,
        position: Vector2Int,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::PiecePlaced { piece, position }, source_id, actor, is_player_action)
    }

    pub fn tile_changed(
        position: Vector2Int,
        old_tile: Tile,
        new_tile: Tile,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(
            EventKind::TileChanged { position, old_tile, new_tile },
            source_id,
            actor,
            is_player_action,
        )
    }

    pub fn piece_changed(
        old_piece: Piece,
        new_piece: Piece,
        position: Vector2Int,
        actor: PlayerColor,
        is_player_action: bool,
        source_id: impl Into<String>,
    ) -> Self {
        Self::new(
            EventKind::PieceChanged { old_piece, new_piece, position },
            source_id,
            actor,
            is_player_action,
        )
    }

    pub fn turn_advanced(next_player: PlayerColor, turn_number: u32, source_id: impl Into<String>) -> Self {
        Self::new(
            EventKind::TurnAdvanced { next_player, turn_number },
            source_id,
            next_player,
            false,
        )
    }

    pub fn turn_start(player: PlayerColor, turn_number: u32, source_id: impl Into<String>) -> Self {
        Self::new(EventKind::TurnStart { player, turn_number }, source_id, player, false)
    }

    pub fn turn_end(player: PlayerColor, turn_number: u32, source_id: impl Into<String>) -> Self {
        Self::new(EventKind::TurnEnd { player, turn_number }, source_id, player, false)
    }

    pub fn time_out(expired_player: PlayerColor, source_id: impl Into<String>) -> Self {
        Self::new(EventKind::TimeOut { expired_player }, source_id, expired_player, false)
    }

    pub fn game_over(losing_player: PlayerColor, source_id: impl Into<String>) -> Self {
        Self::new(EventKind::GameOver { losing_player }, source_id, losing_player, false)
    }

    /// Whether this event's precondition still holds against `state`. The
    /// sole gate before `apply` is allowed to touch the board; a `false`
    /// here means the event is stale and must be silently dropped.
    pub fn is_still_valid(&self, state: &GameState) -> bool {
        let board = &state.board;
        match &self.kind {
            EventKind::Move { from, piece, .. } => board
                .get_piece_at(*from)
                .is_some_and(|p| p.id == piece.id),
            EventKind::Capture { attacker, target } => {
                board.get_piece_at(attacker.position).is_some_and(|p| p.id == attacker.id)
                    && board.get_piece_at(target.position).is_some_and(|p| p.id == target.id)
            }
            EventKind::Destroy { target, .. } => {
                board.get_piece_at(target.position).is_some_and(|p| p.id == target.id)
            }
            EventKind::PiecePlaced { position, .. } => {
                board.in_bounds(*position) && board.get_piece_at(*position).is_none()
            }
            EventKind::TileChanged { position, old_tile, .. } => board.in_bounds(*position)
                && board
                    .get_tile(*position)
                    .is_some_and(|t| t.id == old_tile.id),
            EventKind::PieceChanged { old_piece, position, .. } => board
                .get_piece_at(*position)
                .is_some_and(|p| p.id == old_piece.id),
            EventKind::TurnAdvanced { .. }
            | EventKind::TurnStart { .. }
            | EventKind::TurnEnd { .. }
            | EventKind::TimeOut { .. }
            | EventKind::GameOver { .. } => true,
        }
    }
}
