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

use thiserror::Error;

use crate::primitives::Vector2Int;

/// Precondition violations on `Board`'s direct mutators. The event applier
/// never surfaces these: it checks an event's validity predicate first and
/// silently no-ops on failure, per the kernel's "never throws" contract.
/// These exist for callers who poke at a `Board` outside of event
/// resolution (test fixtures, `RuleSet` implementations probing legality).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is already occupied")]
    CellOccupied(Vector2Int),
    #[error("cell {0} is empty")]
    CellEmpty(Vector2Int),
    #[error("position {0} is out of bounds")]
    OutOfBounds(Vector2Int),
}

/// Errors from `GameState::with_updated` when a patch cannot be applied
/// consistently (for example, a caller-supplied board whose dimensions make
/// the carried-over move history's referenced squares meaningless is *not*
/// checked here — that is a `RuleSet` concern — but a malformed patch that
/// fails to clone is).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameStateError {
    #[error(transparent)]
    Board(#[from] BoardError),
}
