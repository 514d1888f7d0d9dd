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

//! The pure event applier: `apply(event, state) -> state`. No hook, no
//! observable side effect outside the returned value. Every target is
//! re-resolved from the freshly cloned board by position and id — never by
//! object identity of the event's payload, which may be a stale snapshot.

use crate::event::{Event, EventKind};
use crate::state::{GameState, GameStatePatch};

/// Applies a single event to `state`, returning a new `GameState`.
///
/// If `event.is_still_valid(state)` is false, `state` is cloned and
/// returned unchanged (no mutation attempted at all). Otherwise the board
/// is cloned and the mutation re-resolves its targets against that clone;
/// if re-resolution still fails (can only happen for variants whose
/// validity predicate does not pin down every target precisely), the
/// cloned-but-unmutated state is returned.
pub fn apply(event: &Event, state: &GameState) -> GameState {
    if !event.is_still_valid(state) {
        return state.clone();
    }

    let mut board = state.board.clone();

    match &event.kind {
        EventKind::Move { from, to, piece } => {
            if board.get_piece_at(*from).is_some_and(|p| p.id == piece.id) {
                if board.move_piece(*from, *to).is_ok() {
                    if let Some(moved) = board.get_piece_at(*to) {
                        let mut moved = moved.clone();
                        moved.moves_made += 1;
                        let _ = board.remove_piece(*to);
                        let _ = board.place_piece(moved, *to);
                    }
                }
            }
        }
        EventKind::Capture { attacker, target } => {
            let attacker_ok = board.get_piece_at(attacker.position).is_some_and(|p| p.id == attacker.id);
            let target_ok = board.get_piece_at(target.position).is_some_and(|p| p.id == target.id);
            if attacker_ok && target_ok {
                let _ = board.remove_piece(target.position);
            }
        }
        EventKind::Destroy { target, .. } => {
            if board.get_piece_at(target.position).is_some_and(|p| p.id == target.id) {
                let _ = board.remove_piece(target.position);
            }
        }
        EventKind::PiecePlaced { piece, position } => {
            if board.get_piece_at(*position).is_none() {
                let _ = board.place_piece(piece.clone(), *position);
            }
        }
        EventKind::TileChanged { position, old_tile, new_tile } => {
            if board.get_tile(*position).is_some_and(|t| t.id == old_tile.id) {
                let _ = board.set_tile(*position, new_tile.clone());
            }
        }
        EventKind::PieceChanged { old_piece, new_piece, position } => {
            if board.get_piece_at(*position).is_some_and(|p| p.id == old_piece.id) {
                let _ = board.remove_piece(*position);
                let _ = board.place_piece(new_piece.clone(), *position);
            }
        }
        EventKind::TurnAdvanced { next_player, turn_number } => {
            return state.with_updated(GameStatePatch {
                board: Some(board),
                current_player: Some(*next_player),
                turn_number: Some(*turn_number),
                ..Default::default()
            });
        }
        EventKind::TurnStart { .. }
        | EventKind::TurnEnd { .. }
        | EventKind::TimeOut { .. }
        | EventKind::GameOver { .. } => {}
    }

    state.with_updated(GameStatePatch {
        board: Some(board),
        ..Default::default()
    })
}
