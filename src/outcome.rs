//! Action outcome module.
//!
//! Contains the `ActionOutcome` type, a read-only report of one pipeline
//! pass: the state before and after, whether clamping kicked in, and
//! every event in the order it was emitted.

use crate::action::Action;
use crate::danger::DangerEvent;
use crate::event::PetEvent;
use crate::state::PetState;
use serde::{Deserialize, Serialize};

/// The full breakdown of one pipeline pass.
///
/// Cloneable and serializable, so it can be logged, diffed or shipped to
/// a view as-is.
///
/// # Examples
///
/// ```rust
/// use zzpet::ActionEngine;
///
/// let mut engine = ActionEngine::default();
/// let outcome = engine.treat();
///
/// assert_eq!(outcome.before.hunger(), 50);
/// assert_eq!(outcome.after.hunger(), 60);
/// assert_eq!(outcome.displayed_message(), Some("Yum! That was tasty!".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The action that ran, or `None` for a refresh pass.
    pub action: Option<Action>,

    /// Snapshot taken before any delta was applied.
    pub before: PetState,

    /// Snapshot after the whole pipeline.
    pub after: PetState,

    /// Whether the clamp step changed any stat.
    pub clamped: bool,

    /// Events in emission order.
    pub events: Vec<PetEvent>,
}

impl ActionOutcome {
    /// Start an outcome from the state before the pass.
    ///
    /// `after` starts as a copy of `before` and is overwritten once the
    /// pipeline finishes.
    pub fn new(action: Option<Action>, before: PetState) -> Self {
        Self {
            action,
            after: before.clone(),
            before,
            clamped: false,
            events: Vec::new(),
        }
    }

    /// Record an event.
    pub fn add_event(&mut self, event: impl Into<PetEvent>) {
        self.events.push(event.into());
    }

    /// Messages in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(PetEvent::message).collect()
    }

    /// The message a transient display ends up showing.
    ///
    /// Each new message interrupts the previous one, so this is the last
    /// message emitted. `None` if the pass emitted nothing.
    pub fn displayed_message(&self) -> Option<String> {
        self.events.last().map(PetEvent::message)
    }

    /// The new level if this pass leveled the pet up.
    pub fn leveled_up(&self) -> Option<i64> {
        self.events.iter().find_map(|event| match event {
            PetEvent::LevelUp { level } => Some(*level),
            _ => None,
        })
    }

    /// Danger events in the order they fired.
    pub fn danger_events(&self) -> Vec<DangerEvent> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PetEvent::Danger(danger) => Some(*danger),
                _ => None,
            })
            .collect()
    }
}
