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

//! A pure, deterministic event-resolution kernel for chess-like games.
//!
//! This crate does not know what a "knight" is, does not generate legal
//! moves, and does not decide when a game is over. What it does own is the
//! substrate those things are built on:
//!
//! * A `Board` is a rectangular grid of opaque `Tile`s with sparse `Piece`
//!   occupancy. A `GameState` wraps a `Board` with whose-turn and
//!   turn-number bookkeeping. Both are immutable value types — every
//!   mutation produces a new value; nothing is ever changed in place.
//!
//! * An `Event` is a tagged atomic effect (`Move`, `Capture`, `Destroy`,
//!   `PiecePlaced`, `TileChanged`, `PieceChanged`, `TurnAdvanced`,
//!   `TurnStart`, `TurnEnd`, `TimeOut`, `GameOver`). Each variant carries a
//!   validity predicate and implicit mutation semantics; [`applier::apply`]
//!   is the single pure function that knows how to turn an event into a
//!   new `GameState`.
//!
//! * A [`Listener`](listener::Listener) is the sole extension point:
//!   custom piece abilities and tile behaviors attach one to a `Piece` or
//!   `Tile` and are called before and after every event the resolution
//!   loop processes. They can observe, rewrite, cancel, fan out into many
//!   events, or do nothing at all.
//!
//! * [`queue::resolve`] is the resolution loop itself: it drains a queue
//!   of events through every listener in priority order, maintains the
//!   invariant that a cancelled player-initiated capture also cancels the
//!   move that would have followed it, and guarantees termination via a
//!   hard fan-out cap.
//!
//! * [`ChessEngine`](engine::ChessEngine) is a thin façade over all of the
//!   above: `resolve_move` turns a `Move` into the right initial events and
//!   resolves them; `resolve_turn` composes a whole turn's worth of
//!   bookkeeping events around it.
//!
//! Legal-move generation and game-over detection are deliberately left to
//! an external [`RuleSet`](ruleset::RuleSet) implementation the caller
//! supplies — this crate only calls through that trait, never implements
//! one itself.

pub mod applier;
pub mod board;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod event;
pub mod listener;
pub mod piece;
pub mod primitives;
pub mod queue;
pub mod ruleset;
pub mod state;
pub mod tile;

pub use board::Board;
pub use engine::{collect_listeners, ChessEngine};
pub use error::{BoardError, GameStateError};
pub use event::{Event, EventKind};
pub use listener::{BeforeEventResult, Listener, ListenerContext};
pub use piece::Piece;
pub use primitives::{PlayerColor, Vector2Int};
pub use queue::{resolve, resolve_with_diagnostics, EventQueueConfig, ResolutionResult, MAX_EVENTS_PER_RESOLUTION};
pub use ruleset::{GameOverStatus, RuleSet};
pub use state::{GameState, GameStatePatch, Move};
pub use tile::Tile;
