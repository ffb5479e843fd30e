//! # zzpet - Deterministic Virtual-Pet State Engine
//!
//! The rules behind a small virtual-pet toy, with no UI attached:
//! - **Deterministic** transitions (same state + action → same result)
//! - **Total** actions (no action can fail or leave the state invalid)
//! - **Owned** state (no global pet; each engine owns its own)
//! - **View-agnostic** rendering through the [`PetView`] trait
//!
//! ## Core Concepts
//!
//! ### Action Pipeline
//!
//! Every action flows through the same fixed pipeline:
//!
//! ```text
//! [Action deltas] → [Clamp] → [Danger states] → [Experience] → [PetView]
//! ```
//!
//! 1. **Deltas** add the action's fixed stat changes
//! 2. **Clamp** pulls weight, happiness, hunger and energy back in range
//! 3. **Danger states** penalize zero energy and zero hunger
//! 4. **Experience** is granted; 50 points buy one level
//! 5. **View** receives the messages and the final state
//!
//! ## Example
//!
//! ```rust
//! use zzpet::*;
//!
//! let mut engine = ActionEngine::new(PetState::default());
//!
//! let outcome = engine.treat();
//! assert_eq!(engine.state().hunger(), 60);
//! assert_eq!(engine.state().exp(), 5);
//! assert_eq!(outcome.displayed_message(), Some("Yum! That was tasty!".to_string()));
//!
//! // Named triggers from a UI
//! engine.dispatch("nap").unwrap();
//! assert_eq!(engine.state().energy(), 88);
//! ```
//!
//! ## Modules
//!
//! - [`stat`] - Stat identifier type
//! - [`bounds`] - Inclusive stat ranges and clamping
//! - [`state`] - The pet record and its invariants
//! - [`action`] - Actions and their delta table
//! - [`danger`] - Danger state evaluation
//! - [`leveling`] - Experience and level-up rule
//! - [`event`] - Events emitted during a pipeline pass
//! - [`outcome`] - Per-action breakdown reports
//! - [`view`] - The rendering collaborator
//! - [`engine`] - The action engine
//! - [`config`] - Starting configuration
//! - [`error`] - Error types

pub mod action;
pub mod bounds;
pub mod config;
pub mod danger;
pub mod engine;
pub mod error;
pub mod event;
pub mod leveling;
pub mod outcome;
pub mod stat;
pub mod state;
pub mod view;

// Re-export main types for convenience
pub use action::{Action, ActionEffect};
pub use bounds::StatBounds;
pub use config::PetConfig;
pub use danger::DangerEvent;
pub use engine::ActionEngine;
pub use error::PetError;
pub use event::PetEvent;
pub use outcome::ActionOutcome;
pub use stat::PetStat;
pub use state::PetState;

// Re-export views
pub use view::{NullView, PetView, RecordingView};
