//! Action engine module.
//!
//! Provides the `ActionEngine` type, the main entry point of the crate.
//! It owns one [`PetState`] and one [`PetView`], applies actions and runs
//! the shared post-processing pipeline after each of them.

use crate::action::Action;
use crate::danger;
use crate::error::PetError;
use crate::event::PetEvent;
use crate::leveling;
use crate::outcome::ActionOutcome;
use crate::state::PetState;
use crate::view::{NullView, PetView};
use tracing::debug;

/// Owns a pet and applies actions to it.
///
/// Every action runs the same pipeline:
/// 1. Apply the action's stat deltas
/// 2. Clamp weight, happiness, hunger and energy
/// 3. Evaluate danger states (zero energy, then zero hunger)
/// 4. Gain experience, leveling up at 50
/// 5. Notify the view
///
/// The state is exclusively owned: it can only change through `&mut self`,
/// so there is no shared mutable pet anywhere.
///
/// # Examples
///
/// ```rust
/// use zzpet::*;
///
/// let mut engine = ActionEngine::with_view(PetState::default(), RecordingView::new());
/// let outcome = engine.treat();
///
/// assert_eq!(engine.state().weight(), 11);
/// assert_eq!(engine.state().exp(), 5);
/// assert_eq!(outcome.messages(), vec!["Yum! That was tasty!".to_string()]);
/// assert_eq!(engine.view().frames.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ActionEngine<V = NullView> {
    state: PetState,
    view: V,
}

impl ActionEngine<NullView> {
    /// Create an engine with no view attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::{ActionEngine, PetState};
    ///
    /// let engine = ActionEngine::new(PetState::new("Mochi"));
    /// assert_eq!(engine.state().name(), "Mochi");
    /// ```
    pub fn new(state: PetState) -> Self {
        Self::with_view(state, NullView)
    }
}

impl Default for ActionEngine<NullView> {
    fn default() -> Self {
        Self::new(PetState::default())
    }
}

impl<V: PetView> ActionEngine<V> {
    /// Create an engine that reports to `view`.
    pub fn with_view(state: PetState, view: V) -> Self {
        Self { state, view }
    }

    /// The current state.
    pub fn state(&self) -> &PetState {
        &self.state
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> PetState {
        self.state.clone()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Take the engine apart.
    pub fn into_parts(self) -> (PetState, V) {
        (self.state, self.view)
    }

    /// Feed the pet: happiness +1, weight +1, hunger +10, energy -2, exp +5.
    pub fn treat(&mut self) -> ActionOutcome {
        self.apply(Action::Treat)
    }

    /// Play with the pet: happiness +3, weight -1, hunger -5, energy -10, exp +8.
    pub fn play(&mut self) -> ActionOutcome {
        self.apply(Action::Play)
    }

    /// Exercise the pet: happiness -1, weight -2, hunger -10, energy -15, exp +10.
    pub fn exercise(&mut self) -> ActionOutcome {
        self.apply(Action::Exercise)
    }

    /// Let the pet nap: hunger -3, energy +20, exp +2.
    pub fn nap(&mut self) -> ActionOutcome {
        self.apply(Action::Nap)
    }

    /// Apply an action and run the full pipeline.
    ///
    /// Never fails: every step is total over the state.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        let outcome = run_pipeline(&mut self.state, Some(action));
        self.notify(&outcome);
        outcome
    }

    /// Apply the action named by a UI trigger.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::UnknownAction`] if `name` is not one of
    /// `treat`, `play`, `exercise` or `nap`. The state is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::{ActionEngine, PetError};
    ///
    /// let mut engine = ActionEngine::default();
    /// assert!(engine.dispatch("play").is_ok());
    /// assert_eq!(
    ///     engine.dispatch("fetch").unwrap_err(),
    ///     PetError::UnknownAction("fetch".to_string())
    /// );
    /// ```
    pub fn dispatch(&mut self, name: &str) -> Result<ActionOutcome, PetError> {
        let action = name.parse::<Action>()?;
        Ok(self.apply(action))
    }

    /// Run clamp, danger evaluation and render without any action.
    ///
    /// No experience is granted and no animation plays.
    pub fn refresh(&mut self) -> ActionOutcome {
        let outcome = run_pipeline(&mut self.state, None);
        self.notify(&outcome);
        outcome
    }

    /// Startup sequence: an initial refresh, then one automatic treat.
    ///
    /// Returns the outcome of the treat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::{ActionEngine, PetState, RecordingView};
    ///
    /// let mut engine = ActionEngine::with_view(PetState::default(), RecordingView::new());
    /// engine.start();
    ///
    /// assert_eq!(engine.state().hunger(), 60);
    /// assert_eq!(engine.view().frames.len(), 2);
    /// assert_eq!(engine.view().current_message(), Some("Yum! That was tasty!"));
    /// ```
    pub fn start(&mut self) -> ActionOutcome {
        self.refresh();
        self.treat()
    }

    /// Compute what an action would do without applying it.
    ///
    /// Runs the pipeline on a copy of the state; neither the state nor the
    /// view is touched.
    pub fn preview(&self, action: Action) -> ActionOutcome {
        let mut scratch = self.state.clone();
        run_pipeline(&mut scratch, Some(action))
    }

    fn notify(&mut self, outcome: &ActionOutcome) {
        if outcome.action.is_some() {
            self.view.animate();
        }
        for message in outcome.messages() {
            self.view.show_message(&message);
        }
        self.view.render(&self.state);
    }
}

/// The pipeline shared by every action and by refresh.
fn run_pipeline(state: &mut PetState, action: Option<Action>) -> ActionOutcome {
    let mut outcome = ActionOutcome::new(action, state.clone());

    if let Some(action) = action {
        action.effect().apply_deltas(state);
        outcome.add_event(PetEvent::Action(action));
    }

    outcome.clamped = state.clamp();

    for event in danger::evaluate(state) {
        outcome.add_event(event);
    }

    if let Some(action) = action {
        if let Some(level) = leveling::gain_exp(state, action.effect().exp) {
            outcome.add_event(PetEvent::LevelUp { level });
        }
    }

    debug!(
        pet = state.name(),
        action = action.map_or("refresh", Action::as_str),
        weight = state.weight(),
        happiness = state.happiness(),
        hunger = state.hunger(),
        energy = state.energy(),
        level = state.level(),
        exp = state.exp(),
        "Pipeline complete"
    );

    outcome.after = state.clone();
    outcome
}
