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

//! `ChessEngine`: the thin, stateless façade over the event queue. Every
//! method here is a composition of primitives already defined elsewhere;
//! none of it holds state of its own.

use anyhow::{bail, Result};

use crate::board::Board;
use crate::event::Event;
use crate::listener::Listener;
use crate::piece::Piece;
use crate::primitives::PlayerColor;
use crate::queue::{resolve, EventQueueConfig, ResolutionResult};
use crate::ruleset::{GameOverStatus, RuleSet};
use crate::state::{GameState, Move};

pub struct ChessEngine;

impl ChessEngine {
    /// Builds the initial event list for `mv` and resolves it. If no piece
    /// sits at `mv.from`, returns an unchanged state with an empty log —
    /// the engine never errors on a malformed `Move`, it just produces no
    /// effect.
    pub fn resolve_move(state: &GameState, mv: &Move, listeners: &[&dyn Listener]) -> ResolutionResult {
        let events = Self::build_move_events(state, mv);
        resolve(state, events, listeners, &EventQueueConfig::default())
    }

    pub fn resolve_event(state: &GameState, event: Event, listeners: &[&dyn Listener]) -> ResolutionResult {
        resolve(state, vec![event], listeners, &EventQueueConfig::default())
    }

    /// Sequentially resolves `TurnStart`, the move itself, `TurnEnd`, then
    /// `TurnAdvanced`, feeding each stage's final state into the next and
    /// concatenating the four event logs. A thin composition, not new
    /// machinery — turn orchestration beyond the event level is explicitly
    /// out of scope for the kernel proper.
    pub fn resolve_turn(state: &GameState, mv: &Move, listeners: &[&dyn Listener]) -> ResolutionResult {
        let player = state.current_player;
        let turn_number = state.turn_number;

        let start = Self::resolve_event(state, Event::turn_start(player, turn_number, "turn"), listeners);
        let moved = Self::resolve_move(&start.final_state, mv, listeners);
        let end = Self::resolve_event(&moved.final_state, Event::turn_end(player, turn_number, "turn"), listeners);
        let advanced = Self::resolve_event(
            &end.final_state,
            Event::turn_advanced(player.opponent(), turn_number + 1, "turn"),
            listeners,
        );

        let mut event_log = start.event_log;
        event_log.extend(moved.event_log);
        event_log.extend(end.event_log);
        event_log.extend(advanced.event_log);

        ResolutionResult {
            final_state: advanced.final_state,
            event_log,
            aborted: start.aborted || moved.aborted || end.aborted || advanced.aborted,
        }
    }

    /// Caller-facing convenience: checks `mv` against `ruleset` before
    /// resolving it, failing with context instead of silently no-opping
    /// the way `resolve_move` does for a malformed `Move`. Mirrors
    /// `riff-chess`'s `submit_move` idiom of validating, then applying,
    /// under a single `Result`-returning entry point.
    pub fn submit_move(
        state: &GameState,
        mv: &Move,
        listeners: &[&dyn Listener],
        ruleset: &dyn RuleSet,
    ) -> Result<ResolutionResult> {
        let Some(piece) = state.board.get_piece_at(mv.from) else {
            bail!("no piece at {}", mv.from);
        };
        if !ruleset.get_legal_moves(state, piece).contains(mv) {
            bail!("move from {} to {} is not legal for piece {:?}", mv.from, mv.to, piece.id);
        }
        Ok(Self::resolve_move(state, mv, listeners))
    }

    pub fn get_legal_moves(state: &GameState, piece: &Piece, ruleset: &dyn RuleSet) -> Vec<Move> {
        ruleset.get_legal_moves(state, piece)
    }

    pub fn is_game_over(state: &GameState, ruleset: &dyn RuleSet) -> GameOverStatus {
        ruleset.is_game_over(state)
    }

    /// Capture-then-move if the destination is occupied, else move only.
    fn build_move_events(state: &GameState, mv: &Move) -> Vec<Event> {
        let Some(mover) = state.board.get_piece_at(mv.from) else {
            return Vec::new();
        };
        let mover = mover.clone();

        let mut events = Vec::with_capacity(2);
        if let Some(target) = state.board.get_piece_at(mv.to) {
            events.push(Event::capture(
                mover.clone(),
                target.clone(),
                state.current_player,
                true,
                mover.id.clone(),
            ));
        }
        events.push(Event::move_event(
            mv.from,
            mv.to,
            mover.clone(),
            state.current_player,
            true,
            mover.id.clone(),
        ));
        events
    }
}

/// Walks every piece and tile on `board` asking for its attached listener
/// capability, then appends `extra` (caller-supplied listeners not tied to
/// any board entity). A convenience, not a required part of the contract —
/// assembling the listener set is the caller's responsibility.
pub fn collect_listeners<'a>(board: &'a Board, extra: &'a [&'a dyn Listener]) -> Vec<&'a dyn Listener> {
    let mut out: Vec<&dyn Listener> = Vec::new();
    for piece in board.all_pieces() {
        if let Some(listener) = piece.as_listener() {
            out.push(listener);
        }
    }
    for y in 0..board.height() {
        for x in 0..board.width() {
            if let Some(tile) = board.get_tile(crate::primitives::Vector2Int::new(x, y)) {
                if let Some(listener) = tile.as_listener() {
                    out.push(listener);
                }
            }
        }
    }
    out.extend_from_slice(extra);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vector2Int;
    use crate::tile::Tile;

    fn board_8x8() -> Board {
        Board::new(8, 8, |p| Tile::new(format!("t{p}"), p))
    }

    #[test]
    fn resolve_move_builds_move_only_when_destination_empty() {
        let mut board = board_8x8();
        let w = Piece::new("w", "Mock", PlayerColor::White, Vector2Int::new(1, 1));
        board.place_piece(w, Vector2Int::new(1, 1)).unwrap();
        let state = GameState::new(board);
        let mv = Move::new(
            Vector2Int::new(1, 1),
            Vector2Int::new(3, 3),
            state.board.get_piece_at(Vector2Int::new(1, 1)).unwrap().clone(),
        );
        let result = ChessEngine::resolve_move(&state, &mv, &[]);
        assert_eq!(result.event_log.len(), 1);
        assert!(result.final_state.board.get_piece_at(Vector2Int::new(3, 3)).is_some());
    }

    #[test]
    fn resolve_move_builds_capture_then_move_when_occupied() {
        let mut board = board_8x8();
        let w = Piece::new("w", "Mock", PlayerColor::White, Vector2Int::new(1, 1));
        let b = Piece::new("b", "Mock", PlayerColor::Black, Vector2Int::new(2, 2));
        board.place_piece(w, Vector2Int::new(1, 1)).unwrap();
        board.place_piece(b, Vector2Int::new(2, 2)).unwrap();
        let state = GameState::new(board);
        let mv = Move::new(
            Vector2Int::new(1, 1),
            Vector2Int::new(2, 2),
            state.board.get_piece_at(Vector2Int::new(1, 1)).unwrap().clone(),
        );
        let result = ChessEngine::resolve_move(&state, &mv, &[]);
        assert_eq!(result.event_log.len(), 2);
        assert!(result.final_state.board.get_piece_at(Vector2Int::new(2, 2)).is_some());
    }

    #[test]
    fn resolve_move_with_no_piece_at_from_is_a_no_op() {
        let board = board_8x8();
        let state = GameState::new(board);
        let ghost = Piece::new("ghost", "Mock", PlayerColor::White, Vector2Int::new(0, 0));
        let mv = Move::new(Vector2Int::new(0, 0), Vector2Int::new(1, 1), ghost);
        let result = ChessEngine::resolve_move(&state, &mv, &[]);
        assert!(result.event_log.is_empty());
    }

    #[test]
    fn resolve_turn_concatenates_four_stages() {
        let mut board = board_8x8();
        let w = Piece::new("w", "Mock", PlayerColor::White, Vector2Int::new(1, 1));
        board.place_piece(w, Vector2Int::new(1, 1)).unwrap();
        let state = GameState::new(board);
        let mv = Move::new(
            Vector2Int::new(1, 1),
            Vector2Int::new(2, 1),
            state.board.get_piece_at(Vector2Int::new(1, 1)).unwrap().clone(),
        );
        let result = ChessEngine::resolve_turn(&state, &mv, &[]);
        // TurnStart + Move + TurnEnd + TurnAdvanced
        assert_eq!(result.event_log.len(), 4);
        assert_eq!(result.final_state.current_player, PlayerColor::Black);
        assert_eq!(result.final_state.turn_number, 2);
    }

    #[test]
    fn submit_move_rejects_a_move_the_ruleset_never_licensed() {
        use crate::ruleset::NullRuleSet;

        let mut board = board_8x8();
        let w = Piece::new("w", "Mock", PlayerColor::White, Vector2Int::new(1, 1));
        board.place_piece(w, Vector2Int::new(1, 1)).unwrap();
        let state = GameState::new(board);
        let mv = Move::new(
            Vector2Int::new(1, 1),
            Vector2Int::new(2, 1),
            state.board.get_piece_at(Vector2Int::new(1, 1)).unwrap().clone(),
        );
        // NullRuleSet never licenses any move, so this must fail rather than resolve.
        let result = ChessEngine::submit_move(&state, &mv, &[], &NullRuleSet);
        assert!(result.is_err());
    }

    #[test]
    fn collect_listeners_gathers_pieces_tiles_and_extras() {
        struct L;
        impl Listener for L {
            fn priority(&self) -> i32 {
                0
            }
        }
        let mut board = board_8x8();
        let w = Piece::new("w", "Mock", PlayerColor::White, Vector2Int::new(1, 1))
            .with_listener(std::sync::Arc::new(L));
        board.place_piece(w, Vector2Int::new(1, 1)).unwrap();
        let extra_listener = L;
        let extra: Vec<&dyn Listener> = vec![&extra_listener];
        let gathered = collect_listeners(&board, &extra);
        assert_eq!(gathered.len(), 2);
    }
}
