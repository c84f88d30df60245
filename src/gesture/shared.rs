//! Interrupt-safe home for the gesture classifier.
//!
//! The GPIO interrupt and the main loop both mutate the classifier. Every
//! access goes through one `critical_section::with`, so an edge can never
//! land halfway through a poll-driven transition, and anything the ISR
//! wrote is visible to the next poll.
//!
//! ```text
//! GPIO ISR ──on_interrupt()──▶ ┌──────────────────────────┐
//!                              │ Mutex<RefCell<Classifier>>│
//! main loop ──advance()──────▶ │   (critical section)      │ ──take_pending_gesture()──▶ app
//!                              └──────────────────────────┘
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use super::{Edge, Gesture, GestureClassifier, Millis, RawInput};

/// A [`GestureClassifier`] that can live in a `static`.
pub struct SharedClassifier<I> {
    inner: Mutex<RefCell<Option<GestureClassifier<I>>>>,
}

impl<I> Default for SharedClassifier<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> SharedClassifier<I> {
    /// Empty slot; every call is a no-op until [`install`](Self::install).
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<I: RawInput> SharedClassifier<I> {
    /// Place the classifier. Replaces any previously installed one.
    pub fn install(&self, classifier: GestureClassifier<I>) {
        critical_section::with(|cs| {
            self.inner.borrow_ref_mut(cs).replace(classifier);
        });
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// ISR entry point with a known edge direction.
    pub fn on_edge(&self, edge: Edge, now: Millis) {
        self.with_mut(|c| c.on_edge(edge, now));
    }

    /// ISR entry point for an any-edge interrupt.
    pub fn on_interrupt(&self, now: Millis) {
        self.with_mut(|c| c.on_interrupt(now));
    }

    /// Main-loop poll.
    pub fn advance(&self, now: Millis) {
        self.with_mut(|c| c.advance(now));
    }

    /// Main-loop consumer: return and clear the pending gesture.
    pub fn take_pending_gesture(&self) -> Option<Gesture> {
        self.with_mut(GestureClassifier::take_pending_gesture)
            .flatten()
    }

    /// Run `f` on the classifier inside the critical section.
    /// Returns `None` if nothing is installed.
    pub fn with<R>(&self, f: impl FnOnce(&GestureClassifier<I>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref(cs).as_ref().map(f))
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut GestureClassifier<I>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}
