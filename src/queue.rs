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

//! The resolution loop: the core of the core. Drains an event queue
//! through priority-sorted listeners, maintaining the capture/move
//! coupling invariant and enforcing the fan-out cap.

use std::collections::VecDeque;

use crate::applier::apply;
use crate::diagnostics::{Diagnostics, LoggingDiagnostics};
use crate::event::{Event, EventKind};
use crate::listener::{BeforeEventResult, Listener, ListenerContext};
use crate::primitives::Vector2Int;
use crate::state::GameState;

/// The single tunable of the kernel: the hard fan-out cap that guarantees
/// termination against listener loops.
pub const MAX_EVENTS_PER_RESOLUTION: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct EventQueueConfig {
    pub max_events_per_resolution: usize,
}

impl Default for EventQueueConfig {
    fn default() -> Self {
        Self {
            max_events_per_resolution: MAX_EVENTS_PER_RESOLUTION,
        }
    }
}

/// The outcome of one complete resolution run.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    pub final_state: GameState,
    pub event_log: Vec<Event>,
    pub aborted: bool,
}

/// A pending coupled-cancellation: drop the next matching player-action
/// `Move` the loop dequeues.
type PendingMoveCancel = (Vector2Int, Vector2Int, String);

fn matches_capture_coupling(candidate: &Event, attacker_pos: Vector2Int, target_pos: Vector2Int, attacker_id: &str) -> bool {
    candidate.is_player_action
        && matches!(
            &candidate.kind,
            EventKind::Move { from, to, piece }
                if *from == attacker_pos && *to == target_pos && piece.id == attacker_id
        )
}

/// Runs the event queue to completion (or to the fan-out cap) starting
/// from `initial_state` with `initial_events` already enqueued.
pub fn resolve(
    initial_state: &GameState,
    initial_events: Vec<Event>,
    listeners: &[&dyn Listener],
    config: &EventQueueConfig,
) -> ResolutionResult {
    resolve_with_diagnostics(initial_state, initial_events, listeners, config, &LoggingDiagnostics)
}

/// Same as [`resolve`] but with an explicit diagnostic sink instead of the
/// default logging one.
pub fn resolve_with_diagnostics(
    initial_state: &GameState,
    initial_events: Vec<Event>,
    listeners: &[&dyn Listener],
    config: &EventQueueConfig,
    diagnostics: &dyn Diagnostics,
) -> ResolutionResult {
    let mut current = initial_state.clone();
    let mut queue: VecDeque<Event> = initial_events.into_iter().collect();
    let mut log: Vec<Event> = Vec::new();

    let mut sorted_listeners: Vec<&dyn Listener> = listeners.to_vec();
    sorted_listeners.sort_by_key(|l| l.priority());

    let mut pending_move_cancels: Vec<PendingMoveCancel> = Vec::new();
    let mut processed: usize = 0;

    while !queue.is_empty() {
        processed += 1;
        if processed > config.max_events_per_resolution {
            diagnostics.on_abort(&log[log.len().saturating_sub(10)..]);
            return ResolutionResult {
                final_state: current,
                event_log: log,
                aborted: true,
            };
        }

        let e = queue.pop_front().expect("queue checked non-empty above");

        if let EventKind::Move { from, to, piece } = &e.kind {
            if let Some(idx) = pending_move_cancels
                .iter()
                .position(|(f, t, id)| f == from && t == to && id == &piece.id)
            {
                pending_move_cancels.remove(idx);
                continue;
            }
        }

        let mut modified: Option<Event> = Some(e.clone());
        let mut replacement: Option<Vec<Event>> = None;
        let mut was_replaced = false;

        let before_ctx = ListenerContext::new(&current, &log);
        for listener in &sorted_listeners {
            let observed = match &modified {
                Some(ev) => ev.clone(),
                None => break,
            };
            match listener.on_before_event(&before_ctx, &observed) {
                BeforeEventResult::PassThrough => {}
                BeforeEventResult::ReplaceOne(new_event) => {
                    if new_event != observed {
                        was_replaced = true;
                    }
                    modified = Some(new_event);
                }
                BeforeEventResult::ReplaceMany(events) => {
                    modified = None;
                    replacement = Some(events);
                    was_replaced = true;
                    break;
                }
                BeforeEventResult::Cancel => {
                    modified = None;
                    break;
                }
            }
        }

        if modified.is_none() {
            if e.is_player_action {
                if let EventKind::Capture { attacker, target } = &e.kind {
                    if let Some(idx) = queue
                        .iter()
                        .position(|m| matches_capture_coupling(m, attacker.position, target.position, &attacker.id))
                    {
                        let _ = queue.remove(idx);
                    }
                }
            }
            if let Some(sequence) = replacement {
                for ev in sequence.into_iter().rev() {
                    queue.push_front(ev);
                }
            }
            continue;
        }

        if e.is_player_action && was_replaced {
            if let EventKind::Capture { attacker, target } = &e.kind {
                let still_capture = matches!(modified.as_ref().unwrap().kind, EventKind::Capture { .. });
                if !still_capture
                    && queue
                        .iter()
                        .any(|m| matches_capture_coupling(m, attacker.position, target.position, &attacker.id))
                {
                    pending_move_cancels.push((attacker.position, target.position, attacker.id.clone()));
                }
            }
        }

        let modified = modified.expect("checked above");
        if !modified.is_still_valid(&current) {
            continue;
        }

        current = apply(&modified, &current);
        log.push(modified.clone());
        diagnostics.on_event_applied(&modified);

        let ctx = ListenerContext::new(&current, &log);
        for listener in &sorted_listeners {
            for emitted in listener.on_after_event(&ctx, &modified) {
                queue.push_back(emitted);
            }
        }
    }

    ResolutionResult {
        final_state: current,
        event_log: log,
        aborted: false,
    }
}
