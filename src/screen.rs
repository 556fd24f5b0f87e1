// SPDX-License-Identifier: GPL-3.0-only

//! Page state for the name-entry screen.
//!
//! `Personalization` holds everything the screen tracks — input value,
//! warning banner, layout selection, submission bookkeeping, departure —
//! and turns UI events into effects for the application shell to run. It
//! carries no toolkit types, so the screen's contracts are tested here
//! directly.
//!
//! The flow: input events keep the field and the keyboard buffer mirrored;
//! Enter (from either device) starts a validation round; the verdict either
//! departs to the next wizard screen or raises a warning. At most one
//! round is in flight, and rounds that outlive their relevance are dropped.

use crate::keyboard::{KeyStroke, KeyboardEvent, LayoutKind, OnscreenKeyboard, ParseError};
use crate::route::{Route, WizardQuery};
use crate::validator::Verdict;

/// Warning banner contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The backend refused the name.
    Rejected,
    /// The validation call failed; the user may retry.
    Transient,
}

/// Work the application shell must perform for the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Run the validation call for `name`, reporting back with `generation`.
    Validate {
        /// Round identifier to echo back with the result.
        generation: u64,
        /// Candidate name, sent as-is.
        name: String,
    },
}

/// State of the name-entry screen.
#[derive(Debug)]
pub struct Personalization {
    /// Wizard state from the previous step.
    query: WizardQuery,
    /// The on-screen keyboard device.
    keyboard: OnscreenKeyboard,
    /// Current input value, mirrored with the keyboard buffer.
    input: String,
    /// Displayed warning, if any.
    warning: Option<Warning>,
    /// Whether a validation round is in flight.
    submitting: bool,
    /// Identifier of the current validation round.
    generation: u64,
    /// Destination chosen on successful validation.
    departed: Option<Route>,
}

impl Personalization {
    /// Creates the screen with the wizard state from the previous step.
    ///
    /// Arabic is the initial key arrangement.
    pub fn new(query: WizardQuery) -> Result<Self, ParseError> {
        Ok(Self {
            query,
            keyboard: OnscreenKeyboard::new(LayoutKind::Arabic)?,
            input: String::new(),
            warning: None,
            submitting: false,
            generation: 0,
            departed: None,
        })
    }

    /// Current input value.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Displayed warning, if any.
    pub fn warning(&self) -> Option<Warning> {
        self.warning
    }

    /// Currently selected key arrangement.
    pub fn layout_kind(&self) -> LayoutKind {
        self.keyboard.kind()
    }

    /// The on-screen keyboard device.
    pub fn keyboard(&self) -> &OnscreenKeyboard {
        &self.keyboard
    }

    /// Whether a validation round is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Destination chosen on successful validation, once departed.
    pub fn departed(&self) -> Option<&Route> {
        self.departed.as_ref()
    }

    /// Text typed into the physical input field.
    ///
    /// Mirrors the new value into the keyboard buffer and clears any
    /// displayed warning.
    pub fn input_changed(&mut self, value: String) {
        if self.departed.is_some() {
            return;
        }

        self.keyboard.set_text(value.clone());
        self.input = value;

        if self.warning.is_some() {
            self.warning = None;
        }
    }

    /// Enter pressed while the physical field is focused.
    pub fn input_submitted(&mut self) -> Effect {
        self.submit(self.input.clone())
    }

    /// A key pressed on the on-screen keyboard.
    ///
    /// Buffer changes flow back into the input value (clearing a displayed
    /// warning); the enter key submits with the buffer's text, exactly as
    /// the physical Enter does with the field's.
    pub fn key_pressed(&mut self, stroke: KeyStroke) -> Effect {
        if self.departed.is_some() {
            return Effect::None;
        }

        match self.keyboard.apply(stroke) {
            Some(KeyboardEvent::Changed(text)) => {
                self.input = text;
                if self.warning.is_some() {
                    self.warning = None;
                }
                Effect::None
            }
            Some(KeyboardEvent::Submitted(text)) => {
                self.input = text.clone();
                self.submit(text)
            }
            None => Effect::None,
        }
    }

    /// Flips the key arrangement between Arabic and English.
    ///
    /// Purely local; the keyboard is reconfigured in place and the typed
    /// text survives.
    pub fn toggle_layout(&mut self) {
        let next = self.keyboard.kind().toggled();
        self.keyboard.configure(next);
        tracing::debug!(layout = ?next, "keyboard layout switched");
    }

    /// Starts a validation round for `name`.
    ///
    /// At most one round is in flight: a submission while one is pending is
    /// dropped. A departed screen no longer submits.
    fn submit(&mut self, name: String) -> Effect {
        if self.departed.is_some() {
            return Effect::None;
        }

        if self.submitting {
            tracing::debug!("validation already in flight, ignoring submit");
            return Effect::None;
        }

        self.warning = None;
        self.submitting = true;
        self.generation += 1;

        Effect::Validate {
            generation: self.generation,
            name,
        }
    }

    /// Applies the outcome of a validation round.
    ///
    /// Rounds other than the current one are stale — superseded, or
    /// finished after the screen departed — and are dropped without
    /// touching state.
    pub fn verdict_received(
        &mut self,
        generation: u64,
        name: &str,
        result: Result<Verdict, String>,
    ) {
        if generation != self.generation {
            tracing::debug!(generation, "dropping stale validation result");
            return;
        }

        self.submitting = false;

        match result {
            Ok(Verdict::Valid) => {
                self.warning = None;

                let route = Route::after_validation(self.query.first_text.as_deref(), name);
                tracing::info!(path = %route.to_path(), "name accepted, advancing");

                // Departing invalidates anything still in flight.
                self.generation += 1;
                self.departed = Some(route);
            }
            Ok(Verdict::Rejected) => {
                self.warning = Some(Warning::Rejected);
            }
            Err(cause) => {
                tracing::error!(%cause, "name validation failed");
                self.warning = Some(Warning::Transient);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(first_text: Option<&str>) -> Personalization {
        let query = WizardQuery {
            first_text: first_text.map(str::to_string),
        };
        Personalization::new(query).expect("embedded layouts should load")
    }

    fn expect_validate(effect: Effect) -> (u64, String) {
        match effect {
            Effect::Validate { generation, name } => (generation, name),
            Effect::None => panic!("expected a validation effect"),
        }
    }

    /// Test: Valid verdict without a prior value departs to confirm-more
    #[test]
    fn test_valid_without_prior_departs_to_confirmmore() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());

        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Valid));

        assert_eq!(
            screen.departed().map(Route::to_path).as_deref(),
            Some("/confirmmore?first_text=Omar")
        );
        assert_eq!(screen.warning(), None);
    }

    /// Test: Valid verdict with a prior value departs to processing
    #[test]
    fn test_valid_with_prior_departs_to_processing() {
        let mut screen = screen(Some("Ali"));
        screen.input_changed("Omar".to_string());

        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Valid));

        assert_eq!(
            screen.departed().map(Route::to_path).as_deref(),
            Some("/processing?first_text=Ali&second_text=Omar")
        );
    }

    /// Test: Rejected verdict raises the fixed warning and stays put
    #[test]
    fn test_rejected_warns_without_navigation() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());

        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Rejected));

        assert_eq!(screen.warning(), Some(Warning::Rejected));
        assert_eq!(screen.departed(), None);
        assert!(!screen.is_submitting());
    }

    /// Test: Transport failure raises the transient warning and stays put
    #[test]
    fn test_transient_failure_warns_without_navigation() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());

        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Err("connection refused".to_string()));

        assert_eq!(screen.warning(), Some(Warning::Transient));
        assert_eq!(screen.departed(), None);
    }

    /// Test: Typing clears a displayed warning, through either device
    #[test]
    fn test_typing_clears_warning() {
        let mut screen = screen(None);
        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Rejected));
        assert_eq!(screen.warning(), Some(Warning::Rejected));

        screen.input_changed("O".to_string());
        assert_eq!(screen.warning(), None);

        // Again, via the on-screen keyboard this time.
        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Rejected));
        assert_eq!(screen.warning(), Some(Warning::Rejected));

        screen.key_pressed(KeyStroke::Text("m".to_string()));
        assert_eq!(screen.warning(), None);
    }

    /// Test: A new submission clears the warning up front
    #[test]
    fn test_submission_clears_warning() {
        let mut screen = screen(None);
        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Err("boom".to_string()));
        assert_eq!(screen.warning(), Some(Warning::Transient));

        let _ = expect_validate(screen.input_submitted());
        assert_eq!(screen.warning(), None);
    }

    /// Test: Toggling alternates layouts and keeps the typed text
    #[test]
    fn test_toggle_alternates_and_keeps_text() {
        let mut screen = screen(None);
        screen.input_changed("علي".to_string());
        assert_eq!(screen.layout_kind(), LayoutKind::Arabic);

        screen.toggle_layout();
        assert_eq!(screen.layout_kind(), LayoutKind::English);
        assert_eq!(screen.input(), "علي");
        assert_eq!(screen.keyboard().text(), "علي");

        screen.toggle_layout();
        assert_eq!(screen.layout_kind(), LayoutKind::Arabic);
        assert_eq!(screen.keyboard().text(), "علي");
    }

    /// Test: On-screen enter submits the same contract as physical Enter
    #[test]
    fn test_onscreen_enter_matches_physical_enter() {
        let mut physical = screen(None);
        physical.input_changed("Omar".to_string());
        let (_, physical_name) = expect_validate(physical.input_submitted());

        let mut onscreen = screen(None);
        onscreen.key_pressed(KeyStroke::Text("Omar".to_string()));
        let (_, onscreen_name) = expect_validate(onscreen.key_pressed(KeyStroke::Enter));

        assert_eq!(physical_name, onscreen_name);
    }

    /// Test: Empty input submits as-is (no client-side trimming)
    #[test]
    fn test_empty_input_submits() {
        let mut screen = screen(None);
        let (_, name) = expect_validate(screen.input_submitted());
        assert_eq!(name, "");
    }

    /// Test: A second submit while a round is pending is dropped
    #[test]
    fn test_in_flight_guard_drops_duplicate_submit() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());

        let _ = expect_validate(screen.input_submitted());
        assert!(screen.is_submitting());

        assert_eq!(screen.input_submitted(), Effect::None);
        assert_eq!(screen.key_pressed(KeyStroke::Enter), Effect::None);
    }

    /// Test: Stale verdicts are dropped without touching state
    #[test]
    fn test_stale_verdict_is_dropped() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());
        let (generation, name) = expect_validate(screen.input_submitted());

        // A verdict from a round that is not current does nothing.
        screen.verdict_received(generation + 7, &name, Ok(Verdict::Valid));
        assert_eq!(screen.departed(), None);
        assert!(screen.is_submitting());

        // The real round still lands.
        screen.verdict_received(generation, &name, Ok(Verdict::Valid));
        assert!(screen.departed().is_some());
    }

    /// Test: A departed screen ignores input and further verdicts
    #[test]
    fn test_departed_screen_is_inert() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());
        let (generation, name) = expect_validate(screen.input_submitted());
        screen.verdict_received(generation, &name, Ok(Verdict::Valid));

        let departed = screen.departed().cloned();
        assert!(departed.is_some());

        screen.input_changed("ignored".to_string());
        assert_eq!(screen.input(), "Omar");

        assert_eq!(screen.input_submitted(), Effect::None);
        assert_eq!(screen.key_pressed(KeyStroke::Text("x".to_string())), Effect::None);

        // A late verdict from before departure changes nothing.
        screen.verdict_received(generation, &name, Ok(Verdict::Rejected));
        assert_eq!(screen.warning(), None);
        assert_eq!(screen.departed().cloned(), departed);
    }

    /// Test: The submitted name is the one validated, not later typing
    #[test]
    fn test_verdict_uses_submitted_name() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());
        let (generation, name) = expect_validate(screen.input_submitted());

        // The verdict for "Omar" routes with "Omar", regardless of the
        // current field contents.
        screen.verdict_received(generation, &name, Ok(Verdict::Valid));
        assert_eq!(
            screen.departed().map(Route::to_path).as_deref(),
            Some("/confirmmore?first_text=Omar")
        );
    }

    /// Test: Physical typing mirrors into the keyboard buffer
    #[test]
    fn test_field_mirrors_into_keyboard() {
        let mut screen = screen(None);
        screen.input_changed("Omar".to_string());
        assert_eq!(screen.keyboard().text(), "Omar");

        // And keyboard edits mirror back into the field.
        screen.key_pressed(KeyStroke::Backspace);
        assert_eq!(screen.input(), "Oma");
    }
}
