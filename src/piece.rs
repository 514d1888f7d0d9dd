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

//! The opaque `Piece` entity. The kernel knows only identity, owner,
//! position, and the two counters it mutates; what a "knight" or an
//! "exploding bishop" does is entirely outside this crate, reached only
//! through the optional listener capability.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::listener::Listener;
use crate::primitives::{PlayerColor, Vector2Int};

#[derive(Clone, Serialize, Deserialize)]
pub struct Piece {
    pub id: String,
    pub name: String,
    pub owner: PlayerColor,
    pub position: Vector2Int,
    pub moves_made: u32,
    pub captures_made: u32,
    #[serde(skip)]
    listener: Option<Arc<dyn Listener>>,
}

impl Piece {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: PlayerColor, position: Vector2Int) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner,
            position,
            moves_made: 0,
            captures_made: 0,
            listener: None,
        }
    }

    /// Attaches the listener capability. A piece's ability is a behavioral
    /// object, not game state, so it is shared (`Arc`) across clones rather
    /// than deep-cloned — cloning a `Piece` for a new `GameState` never
    /// needs to duplicate its ability logic, only its identity/counters.
    pub fn with_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn as_listener(&self) -> Option<&dyn Listener> {
        self.listener.as_deref()
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("position", &self.position)
            .field("moves_made", &self.moves_made)
            .field("captures_made", &self.captures_made)
            .finish()
    }
}

/// Value equality ignores the attached listener: two pieces with the same
/// identity and counters are the same piece for event-resolution purposes
/// regardless of which closures happen to be wired to them.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.owner == other.owner
            && self.position == other.position
            && self.moves_made == other.moves_made
            && self.captures_made == other.captures_made
    }
}
impl Eq for Piece {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_has_zeroed_counters() {
        let p = Piece::new("p1", "Knight", PlayerColor::White, Vector2Int::new(1, 1));
        assert_eq!(p.moves_made, 0);
        assert_eq!(p.captures_made, 0);
        assert!(p.as_listener().is_none());
    }

    #[test]
    fn equality_ignores_listener_attachment() {
        struct L;
        impl Listener for L {
            fn priority(&self) -> i32 {
                0
            }
        }
        let plain = Piece::new("p1", "Knight", PlayerColor::White, Vector2Int::new(1, 1));
        let with_ability = plain.clone().with_listener(Arc::new(L));
        assert_eq!(plain, with_ability);
    }
}
