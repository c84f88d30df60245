//! Debounced single-button gesture classifier.
//!
//! ## Inputs
//!
//! - **Edge notifications** from the GPIO interrupt ([`GestureClassifier::on_edge`],
//!   [`GestureClassifier::on_interrupt`]). Fast path into debouncing.
//! - **Periodic poll** from the main loop ([`GestureClassifier::advance`]).
//!   Resolves every time-based transition and re-samples the raw level, so
//!   lost or coalesced edges only delay a gesture, never corrupt one.
//!
//! ## Transition table
//!
//! | State        | Trigger                         | Condition                          | Next         |
//! |--------------|---------------------------------|------------------------------------|--------------|
//! | Idle         | press edge                      | —                                  | Debouncing   |
//! | Idle         | poll                            | 1 click pending, gap > W           | Idle, emit `ShortPress` |
//! | Debouncing   | poll                            | elapsed < D                        | Debouncing   |
//! | Debouncing   | poll                            | elapsed ≥ D, raw pressed           | Pressed      |
//! | Debouncing   | poll                            | elapsed ≥ D, raw released          | Idle, resolve release |
//! | Pressed      | poll                            | held ≥ L                           | LongPressed  |
//! | Pressed      | release edge / raw released     | —                                  | Debouncing   |
//! | LongPressed  | release edge / raw released     | —                                  | Debouncing   |
//!
//! Release resolution: a hold ≥ L emits `LongPress` and drops any pending
//! click; a shorter hold counts a click, and the second click emits
//! `DoubleClick`. A lone click becomes `ShortPress` only once the
//! double-click window has closed.
//!
//! The classifier holds at most one unread gesture; a newer one overwrites it.

pub mod shared;

use log::debug;

use crate::config::ButtonConfig;

/// Milliseconds from a monotonic, wrapping `u32` counter.
pub type Millis = u32;

/// Classified gesture handed to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    ShortPress,
    LongPress,
    DoubleClick,
}

/// Externally visible classifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    Idle,
    Debouncing,
    Pressed,
    LongPressed,
}

/// Direction of an electrical transition on the button line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Press,
    Release,
}

/// Instantaneous, undebounced contact level.
pub trait RawInput {
    /// `true` while the contact is closed.
    fn is_pressed_raw(&mut self) -> bool;
}

/// What a `Debouncing` period is trying to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settling {
    Press,
    Release,
}

/// The gesture state machine plus its raw-level sampler.
pub struct GestureClassifier<I> {
    input: I,
    config: ButtonConfig,
    state: ClassifierState,
    settling: Settling,
    state_entered_at: Millis,
    press_started_at: Millis,
    last_release_at: Millis,
    click_count: u8,
    pending: Option<Gesture>,
}

impl<I: RawInput> GestureClassifier<I> {
    /// `config` is expected to have passed [`ButtonConfig::validate`].
    pub fn new(config: ButtonConfig, input: I) -> Self {
        Self {
            input,
            config,
            state: ClassifierState::Idle,
            settling: Settling::Press,
            state_entered_at: 0,
            press_started_at: 0,
            last_release_at: 0,
            click_count: 0,
            pending: None,
        }
    }

    // ── Edge notifications ────────────────────────────────────

    /// Apply an edge notification. Edges that do not match the current
    /// state are contact bounce and are dropped.
    pub fn on_edge(&mut self, edge: Edge, now: Millis) {
        match (self.state, edge) {
            (ClassifierState::Idle, Edge::Press) => {
                // A poll may have been skipped past the end of the window.
                self.expire_click_window(now);
                self.enter_debounce(Settling::Press, now);
            }
            (ClassifierState::Pressed | ClassifierState::LongPressed, Edge::Release) => {
                self.enter_debounce(Settling::Release, now);
            }
            _ => {}
        }
    }

    /// Interrupt entry point for an any-edge GPIO: the direction is taken
    /// from the line level at the time the interrupt is serviced.
    pub fn on_interrupt(&mut self, now: Millis) {
        let edge = if self.input.is_pressed_raw() {
            Edge::Press
        } else {
            Edge::Release
        };
        self.on_edge(edge, now);
    }

    // ── Periodic poll ─────────────────────────────────────────

    /// Run the time-based transitions. Safe to call at any rate; repeated
    /// calls with the same `now` and no new edges change nothing.
    pub fn advance(&mut self, now: Millis) {
        match self.state {
            ClassifierState::Idle => self.expire_click_window(now),

            ClassifierState::Debouncing => {
                if now.wrapping_sub(self.state_entered_at) < self.config.debounce_ms {
                    return;
                }
                let pressed = self.input.is_pressed_raw();
                match (self.settling, pressed) {
                    (Settling::Press, true) => {
                        // Both ends of a hold are edge instants.
                        self.press_started_at = self.state_entered_at;
                        self.transition(ClassifierState::Pressed, now);
                    }
                    (Settling::Press, false) => {
                        // Glitch shorter than the debounce interval.
                        self.transition(ClassifierState::Idle, now);
                    }
                    (Settling::Release, true) => {
                        // Release bounced back closed: the press continues.
                        let held = now.wrapping_sub(self.press_started_at);
                        let next = if held >= self.config.long_press_ms {
                            ClassifierState::LongPressed
                        } else {
                            ClassifierState::Pressed
                        };
                        self.transition(next, now);
                    }
                    (Settling::Release, false) => {
                        let released_at = self.state_entered_at;
                        self.transition(ClassifierState::Idle, now);
                        self.resolve_release(released_at);
                    }
                }
            }

            ClassifierState::Pressed => {
                if !self.input.is_pressed_raw() {
                    self.enter_debounce(Settling::Release, now);
                } else if now.wrapping_sub(self.press_started_at) >= self.config.long_press_ms {
                    self.transition(ClassifierState::LongPressed, now);
                }
            }

            ClassifierState::LongPressed => {
                if !self.input.is_pressed_raw() {
                    self.enter_debounce(Settling::Release, now);
                }
            }
        }
    }

    // ── Consumer side ─────────────────────────────────────────

    /// Return and clear the pending gesture.
    pub fn take_pending_gesture(&mut self) -> Option<Gesture> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Short clicks counted but not yet resolved into a gesture.
    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    /// Debounced contact level.
    pub fn is_pressed(&self) -> bool {
        matches!(
            self.state,
            ClassifierState::Pressed | ClassifierState::LongPressed
        )
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Access to the sampler, for tests and diagnostics.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    // ── Internal ──────────────────────────────────────────────

    fn enter_debounce(&mut self, settling: Settling, now: Millis) {
        self.settling = settling;
        self.transition(ClassifierState::Debouncing, now);
    }

    fn transition(&mut self, next: ClassifierState, now: Millis) {
        debug!("button: {:?} -> {:?} @{}ms", self.state, next, now);
        self.state = next;
        self.state_entered_at = now;
    }

    fn expire_click_window(&mut self, now: Millis) {
        if self.click_count == 1
            && now.wrapping_sub(self.last_release_at) > self.config.double_click_window_ms
        {
            self.click_count = 0;
            self.emit(Gesture::ShortPress);
        }
    }

    fn resolve_release(&mut self, released_at: Millis) {
        let held = released_at.wrapping_sub(self.press_started_at);
        if held >= self.config.long_press_ms {
            self.click_count = 0;
            self.emit(Gesture::LongPress);
            return;
        }

        self.click_count += 1;
        if self.click_count >= 2 {
            self.click_count = 0;
            self.emit(Gesture::DoubleClick);
        } else {
            self.last_release_at = released_at;
        }
    }

    fn emit(&mut self, gesture: Gesture) {
        if let Some(unread) = self.pending.replace(gesture) {
            debug!("button: unread {:?} overwritten by {:?}", unread, gesture);
        } else {
            debug!("button: {:?}", gesture);
        }
    }
}
