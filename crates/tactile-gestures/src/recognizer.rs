//! Closure-backed gesture recognizers.
//!
//! `Recognizer<G>` owns a state machine, the callback observing it, and the
//! simultaneous-recognition policy in one place, so nothing needs to be
//! associated onto a shared framework object after the fact. The callback
//! is typed against the concrete machine `G`; there is no downcast between
//! the generic dispatch path and a behavior's handler.

use crate::state::GestureState;
use crate::types::{PointerEvent, PointerPhase};
use std::cell::RefCell;
use std::rc::Rc;

/// A recognizer state machine: consumes pointer events, walks the
/// possible → began → changed → terminal cycle.
pub trait GestureStateMachine {
    fn state(&self) -> GestureState;

    /// Feed one pointer event. Returns true when the machine made a
    /// transition the attached callback should observe. Transitions into a
    /// terminal state from `Possible` (a gesture that never began) are
    /// silent, matching host-toolkit action delivery.
    fn feed(&mut self, event: &PointerEvent) -> bool;

    /// Restore the idle state for the next cycle.
    fn reset(&mut self);
}

/// Decides whether this recognizer may stay active alongside another
/// recognizer in the given state. The default policy permits everything.
pub type SimultaneousPolicy = Rc<dyn Fn(GestureState) -> bool>;

fn permissive_policy() -> SimultaneousPolicy {
    Rc::new(|_| true)
}

/// A ready-to-attach recognizer: state machine, callback, and policy in
/// one holder. The callback fires synchronously on the dispatching thread
/// for every observable transition; after a terminal transition the
/// machine resets for the next cycle.
pub struct Recognizer<G: GestureStateMachine> {
    machine: G,
    callback: Box<dyn FnMut(&G)>,
    policy: SimultaneousPolicy,
    suppressed: bool,
}

impl<G: GestureStateMachine> Recognizer<G> {
    pub fn new(machine: G, callback: impl FnMut(&G) + 'static) -> Self {
        Self {
            machine,
            callback: Box::new(callback),
            policy: permissive_policy(),
            suppressed: false,
        }
    }

    pub fn with_policy(mut self, policy: SimultaneousPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn machine(&self) -> &G {
        &self.machine
    }

    pub fn feed(&mut self, event: &PointerEvent) {
        // A denied recognizer sits out the rest of the cycle; the next
        // down starts a fresh one.
        if self.suppressed {
            if event.phase == PointerPhase::Down {
                self.suppressed = false;
            } else {
                return;
            }
        }

        let fired = self.machine.feed(event);
        if fired {
            (self.callback)(&self.machine);
        }
        if self.machine.state().is_terminal() {
            self.machine.reset();
        }
    }

    /// Wrap into a type-erased, shareable handle for storage and dispatch.
    pub fn into_handle(self) -> RecognizerHandle
    where
        G: 'static,
    {
        RecognizerHandle {
            inner: Rc::new(RefCell::new(self)),
        }
    }
}

/// Object-safe view of a recognizer, used by element stores and dispatch.
pub trait ErasedRecognizer {
    fn state(&self) -> GestureState;
    fn feed(&mut self, event: &PointerEvent);
    fn allows_simultaneous_with(&self, other: GestureState) -> bool;
    /// Deny this recognizer for the remainder of the current cycle.
    fn fail_for_cycle(&mut self);
}

impl<G: GestureStateMachine> ErasedRecognizer for Recognizer<G> {
    fn state(&self) -> GestureState {
        self.machine.state()
    }

    fn feed(&mut self, event: &PointerEvent) {
        Recognizer::feed(self, event);
    }

    fn allows_simultaneous_with(&self, other: GestureState) -> bool {
        (self.policy)(other)
    }

    fn fail_for_cycle(&mut self) {
        self.machine.reset();
        self.suppressed = true;
    }
}

/// Shared handle to an attached recognizer.
#[derive(Clone)]
pub struct RecognizerHandle {
    inner: Rc<RefCell<dyn ErasedRecognizer>>,
}

impl RecognizerHandle {
    pub fn state(&self) -> GestureState {
        self.inner.borrow().state()
    }

    pub fn dispatch(&self, event: &PointerEvent) {
        self.inner.borrow_mut().feed(event);
    }

    pub fn allows_simultaneous_with(&self, other: GestureState) -> bool {
        self.inner.borrow().allows_simultaneous_with(other)
    }

    pub fn fail_for_cycle(&self) {
        self.inner.borrow_mut().fail_for_cycle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tactile_graphics::Point;

    /// Begins on the first move, ends on up.
    #[derive(Default)]
    struct ToyGesture {
        state: Option<GestureState>,
    }

    impl ToyGesture {
        fn state_or_idle(&self) -> GestureState {
            self.state.unwrap_or(GestureState::Possible)
        }
    }

    impl GestureStateMachine for ToyGesture {
        fn state(&self) -> GestureState {
            self.state_or_idle()
        }

        fn feed(&mut self, event: &PointerEvent) -> bool {
            match event.phase {
                PointerPhase::Down => {
                    self.state = Some(GestureState::Possible);
                    false
                }
                PointerPhase::Move => {
                    self.state = Some(if self.state_or_idle().is_active() {
                        GestureState::Changed
                    } else {
                        GestureState::Began
                    });
                    true
                }
                PointerPhase::Up => {
                    let active = self.state_or_idle().is_active();
                    self.state = Some(if active {
                        GestureState::Ended
                    } else {
                        GestureState::Failed
                    });
                    active
                }
                PointerPhase::Cancel => {
                    self.state = Some(GestureState::Cancelled);
                    self.state_or_idle().is_active()
                }
            }
        }

        fn reset(&mut self) {
            self.state = None;
        }
    }

    fn event(phase: PointerPhase) -> PointerEvent {
        PointerEvent::new(1, phase, Point::ZERO, 0)
    }

    #[test]
    fn callback_fires_per_observable_transition() {
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        let mut recognizer = Recognizer::new(ToyGesture::default(), move |_| {
            observed.set(observed.get() + 1);
        });

        recognizer.feed(&event(PointerPhase::Down));
        assert_eq!(fired.get(), 0);
        recognizer.feed(&event(PointerPhase::Move));
        recognizer.feed(&event(PointerPhase::Move));
        recognizer.feed(&event(PointerPhase::Up));
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn machine_resets_after_terminal_state() {
        let mut recognizer = Recognizer::new(ToyGesture::default(), |_| {});
        recognizer.feed(&event(PointerPhase::Down));
        recognizer.feed(&event(PointerPhase::Move));
        recognizer.feed(&event(PointerPhase::Up));
        assert_eq!(recognizer.machine().state(), GestureState::Possible);
    }

    #[test]
    fn never_began_failure_is_silent() {
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        let mut recognizer = Recognizer::new(ToyGesture::default(), move |_| {
            observed.set(observed.get() + 1);
        });
        recognizer.feed(&event(PointerPhase::Down));
        recognizer.feed(&event(PointerPhase::Up));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn denied_recognizer_sits_out_until_next_down() {
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        let handle = Recognizer::new(ToyGesture::default(), move |_| {
            observed.set(observed.get() + 1);
        })
        .into_handle();

        handle.dispatch(&event(PointerPhase::Down));
        handle.dispatch(&event(PointerPhase::Move));
        assert_eq!(fired.get(), 1);

        handle.fail_for_cycle();
        handle.dispatch(&event(PointerPhase::Move));
        handle.dispatch(&event(PointerPhase::Up));
        assert_eq!(fired.get(), 1);

        handle.dispatch(&event(PointerPhase::Down));
        handle.dispatch(&event(PointerPhase::Move));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn default_policy_is_permissive() {
        let recognizer = Recognizer::new(ToyGesture::default(), |_| {});
        assert!(recognizer.allows_simultaneous_with(GestureState::Began));
        assert!(recognizer.allows_simultaneous_with(GestureState::Possible));
    }
}
