//! View collaborator module.
//!
//! The engine never draws anything itself. After each pipeline pass it
//! hands the final state, the emitted messages and an animation trigger
//! to a [`PetView`]. Timing of the transient effects belongs entirely to
//! the view; the constants below describe the expected feel.

use crate::state::PetState;
use std::time::Duration;

/// Fade-in time of a transient message.
pub const MESSAGE_FADE_IN: Duration = Duration::from_millis(200);
/// How long a transient message stays fully visible.
pub const MESSAGE_HOLD: Duration = Duration::from_millis(1200);
/// Fade-out time of a transient message.
pub const MESSAGE_FADE_OUT: Duration = Duration::from_millis(300);
/// Length of the pulse played by [`PetView::animate`].
pub const ANIMATION_PULSE: Duration = Duration::from_millis(350);

/// Renders pet state for a user.
///
/// Per action, the engine calls `animate` once, then `show_message` for
/// each emitted message in order, then `render` once. A new message must
/// interrupt and replace one still on screen.
///
/// # Examples
///
/// ```rust
/// use zzpet::{ActionEngine, PetState, PetView};
///
/// #[derive(Default)]
/// struct Banner(String);
///
/// impl PetView for Banner {
///     fn render(&mut self, _state: &PetState) {}
///     fn show_message(&mut self, message: &str) {
///         self.0 = message.to_string();
///     }
///     fn animate(&mut self) {}
/// }
///
/// let mut engine = ActionEngine::with_view(PetState::default(), Banner::default());
/// engine.play();
/// assert_eq!(engine.view().0, "That was fun!");
/// ```
pub trait PetView {
    /// Draw the given state: name, weight, happiness and level as text,
    /// hunger and energy as proportional fills.
    fn render(&mut self, state: &PetState);

    /// Show a message transiently, replacing any message still visible.
    fn show_message(&mut self, message: &str);

    /// Play a short pulse and return to rest.
    fn animate(&mut self);
}

impl<V: PetView + ?Sized> PetView for Box<V> {
    fn render(&mut self, state: &PetState) {
        (**self).render(state);
    }

    fn show_message(&mut self, message: &str) {
        (**self).show_message(message);
    }

    fn animate(&mut self) {
        (**self).animate();
    }
}

/// Map a gauge value to a fill width in percent.
///
/// Hunger and energy already live in `0..=100`; anything outside is
/// pinned to the nearest edge.
///
/// # Examples
///
/// ```rust
/// use zzpet::view::fill_percent;
///
/// assert_eq!(fill_percent(68), 68);
/// assert_eq!(fill_percent(-5), 0);
/// assert_eq!(fill_percent(250), 100);
/// ```
pub fn fill_percent(value: i64) -> u8 {
    // Clamped to 0..=100, so the cast is lossless.
    value.clamp(0, 100) as u8
}

/// A view that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl PetView for NullView {
    fn render(&mut self, _state: &PetState) {}

    fn show_message(&mut self, _message: &str) {}

    fn animate(&mut self) {}
}

/// A view that records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    /// Every state passed to `render`.
    pub frames: Vec<PetState>,
    /// Every message passed to `show_message`.
    pub messages: Vec<String>,
    /// Number of `animate` calls.
    pub animations: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen: the most recent one.
    pub fn current_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// The most recently rendered state.
    pub fn last_frame(&self) -> Option<&PetState> {
        self.frames.last()
    }
}

impl PetView for RecordingView {
    fn render(&mut self, state: &PetState) {
        self.frames.push(state.clone());
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn animate(&mut self) {
        self.animations += 1;
    }
}
