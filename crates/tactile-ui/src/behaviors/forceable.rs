//! Pressure-sensitive press handling.

use crate::element::InteractiveElement;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tactile_gestures::gestures::ForcePressGesture;
use tactile_gestures::{GestureState, GestureStateMachine, Recognizer, BASELINE_FORCE};

/// Hooks for an element that reacts to press force.
///
/// Only available where the input hardware reports pressure; on anything
/// else the attached recognizer fails without firing.
pub trait Forceable: InteractiveElement {
    fn did_start_forcing(&mut self, _force: f32) {}

    /// Fired on every pressure update with the current and previous
    /// readings.
    fn did_force(&mut self, _force: f32, _last_force: f32) {}

    fn did_finish_forcing(&mut self, _force: f32) {}
}

/// Attaches a force-press recognizer that drives the [`Forceable`] hooks.
pub fn make_forceable<V: Forceable + 'static>(element: &Rc<RefCell<V>>) {
    let last_force = Cell::new(BASELINE_FORCE);
    let weak = Rc::downgrade(element);

    let recognizer = Recognizer::new(ForcePressGesture::new(), move |press: &ForcePressGesture| {
        let element = match weak.upgrade() {
            Some(element) => element,
            None => return,
        };
        let force = press.force();
        match press.state() {
            GestureState::Began => {
                last_force.set(BASELINE_FORCE);
                element.borrow_mut().did_start_forcing(force);
            }
            GestureState::Ended | GestureState::Failed | GestureState::Cancelled => {
                element.borrow_mut().did_finish_forcing(force);
            }
            _ => {
                element.borrow_mut().did_force(force, last_force.get());
                last_force.set(force);
            }
        }
    });

    element.borrow().recognizers().attach(recognizer.into_handle());
}
