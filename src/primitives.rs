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

//! Coordinate and player primitives shared by every other module.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// A pair of signed board coordinates. No invariant beyond totality: negative
/// or otherwise out-of-range values are valid `Vector2Int`s, and it is the
/// `Board`'s job to reject them via `in_bounds`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

impl Vector2Int {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector2Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector2Int {
    type Output = Vector2Int;
    fn add(self, rhs: Vector2Int) -> Vector2Int {
        Vector2Int::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2Int {
    type Output = Vector2Int;
    fn sub(self, rhs: Vector2Int) -> Vector2Int {
        Vector2Int::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The two-valued player identity. Unlike a standard chess `Color`, nothing
/// in this crate hard-codes which side moves first; that is a `RuleSet`
/// concern.
#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    #[inline]
    pub const fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }
}

impl std::ops::Not for PlayerColor {
    type Output = PlayerColor;
    fn not(self) -> PlayerColor {
        self.opponent()
    }
}
