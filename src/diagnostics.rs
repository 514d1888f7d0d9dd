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

//! A pluggable diagnostic sink. Not part of the observable contract —
//! `EventQueue::resolve`'s return value never depends on what a
//! `Diagnostics` implementation does with these calls.

use crate::event::Event;

pub trait Diagnostics {
    fn on_event_applied(&self, _event: &Event) {}

    /// Called once, only when the fan-out cap trips. `recent` is the tail
    /// of the log at the moment of abort, for debugging runaway cascades.
    fn on_abort(&self, _recent: &[Event]) {}
}

/// The default sink used when a caller doesn't supply one: no-op behavior
/// plus `log` records at the same two points, so a crate consumer gets
/// structured logging without having to implement anything.
#[derive(Default)]
pub struct LoggingDiagnostics;

impl Diagnostics for LoggingDiagnostics {
    fn on_event_applied(&self, event: &Event) {
        log::trace!(target: "event_chess_kernel::queue", "applied {}: {}", event.id, event.description);
    }

    fn on_abort(&self, recent: &[Event]) {
        log::warn!(
            target: "event_chess_kernel::queue",
            "resolution aborted after fan-out cap; last {} applied events: {:?}",
            recent.len(),
            recent.iter().map(|e| e.description.as_str()).collect::<Vec<_>>()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::primitives::{PlayerColor, Vector2Int};

    #[test]
    fn logging_diagnostics_does_not_panic_on_either_hook() {
        let _ = env_logger::try_init();
        let diagnostics = LoggingDiagnostics;
        let piece = Piece::new("p1", "Mock", PlayerColor::White, Vector2Int::new(0, 0));
        let event = Event::destroy(piece, "test", PlayerColor::White, false, "test");
        diagnostics.on_event_applied(&event);
        diagnostics.on_abort(std::slice::from_ref(&event));
    }
}
