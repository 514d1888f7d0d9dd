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

//! The listener capability: the sole extension point of the kernel. Custom
//! piece abilities and tile behaviors are built entirely on top of this
//! trait; the kernel never inspects what a listener *is*, only what it
//! returns.

use crate::event::Event;
use crate::state::GameState;

/// A before-hook's verdict on a single event. Modeled as an explicit
/// four-arm enum rather than overloading `None`/a single event/a `Vec` the
/// way the source language does, per the "optional method signalling"
/// design note: that overloading is a dynamic-typing artifact, not part of
/// the contract.
#[derive(Debug, Clone)]
pub enum BeforeEventResult {
    /// No opinion; the event proceeds to the next listener unchanged.
    PassThrough,
    /// Replace the event with a different single event. Subsequent
    /// listeners in the same before-phase walk see the replacement.
    ReplaceOne(Event),
    /// Replace the event with an ordered sequence of events. Cancels the
    /// original and stops the before-phase walk; the sequence is
    /// front-inserted into the queue.
    ReplaceMany(Vec<Event>),
    /// Cancel the event outright. Stops the before-phase walk.
    Cancel,
}

/// The live view a listener sees: the state as of the most recently applied
/// event in this resolution, and an immutable snapshot of the log so far.
/// Never a stale snapshot — `EventQueue::resolve` rebuilds this between
/// every phase.
pub struct ListenerContext<'a> {
    pub state: &'a GameState,
    pub event_log: &'a [Event],
}

impl<'a> ListenerContext<'a> {
    pub fn new(state: &'a GameState, event_log: &'a [Event]) -> Self {
        Self { state, event_log }
    }
}

/// A participant in event resolution. Both hooks are optional in spirit —
/// their default bodies are no-ops — so a listener that only cares about
/// fan-out need not implement `on_before_event`, and vice versa.
///
/// `priority` determines call order within a phase: lower runs earlier.
/// Among equal priorities, order is the input collection's iteration order
/// — deterministic, but callers must not depend on it (see Design Notes).
pub trait Listener {
    fn priority(&self) -> i32;

    fn on_before_event(&self, _ctx: &ListenerContext<'_>, _event: &Event) -> BeforeEventResult {
        BeforeEventResult::PassThrough
    }

    fn on_after_event(&self, _ctx: &ListenerContext<'_>, _event: &Event) -> Vec<Event> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{PlayerColor, Vector2Int};

    struct Noop;
    impl Listener for Noop {
        fn priority(&self) -> i32 {
            0
        }
    }

    #[test]
    fn default_hooks_are_pass_through_and_empty() {
        let l = Noop;
        let state = GameState::new(crate::board::Board::new(1, 1, |_| {
            crate::tile::Tile::new("t", Vector2Int::new(0, 0))
        }));
        let log: Vec<Event> = Vec::new();
        let ctx = ListenerContext::new(&state, &log);
        let e = Event::turn_start(PlayerColor::White, 1, "src");
        assert!(matches!(
            l.on_before_event(&ctx, &e),
            BeforeEventResult::PassThrough
        ));
        assert!(l.on_after_event(&ctx, &e).is_empty());
    }
}
