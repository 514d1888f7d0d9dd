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

//! The opaque `Tile` entity occupying every cell of a `Board`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::listener::Listener;
use crate::primitives::Vector2Int;

#[derive(Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub position: Vector2Int,
    #[serde(skip)]
    listener: Option<Arc<dyn Listener>>,
}

impl Tile {
    pub fn new(id: impl Into<String>, position: Vector2Int) -> Self {
        Self {
            id: id.into(),
            position,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn as_listener(&self) -> Option<&dyn Listener> {
        self.listener.as_deref()
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("id", &self.id)
            .field("position", &self.position)
            .finish()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.position == other.position
    }
}
impl Eq for Tile {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_has_no_listener() {
        let t = Tile::new("grass", Vector2Int::new(0, 0));
        assert!(t.as_listener().is_none());
    }
}
