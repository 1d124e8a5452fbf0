//! Rotate an element with a two-finger twist.

use crate::element::InteractiveElement;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tactile_gestures::gestures::RotationGesture;
use tactile_gestures::{GestureState, GestureStateMachine, Recognizer};
use tactile_graphics::Transform2D;

/// Hooks for an element that can be rotated.
///
/// The rotation bounds are declared but not consulted by the default
/// update path; their defaults are unconstraining sentinels. An override
/// that wants limits enforces them in `transform_with_rotation`.
pub trait Rotatable: InteractiveElement {
    fn did_start_rotating(&mut self) {}

    /// `velocity` is the final angular velocity in radians/second.
    fn did_finish_rotating(&mut self, _velocity: f32) {}

    fn minimum_rotation(&self) -> f32 {
        f32::MAX
    }

    fn maximum_rotation(&self) -> f32 {
        f32::MIN_POSITIVE
    }

    /// Incremental transform applying the delta since the last update.
    fn transform_with_rotation(
        &self,
        rotation: f32,
        last_rotation: f32,
        _velocity: f32,
    ) -> Transform2D {
        self.transform().rotated_by(rotation - last_rotation)
    }

    fn animate_to_rotated_transform(&mut self, transform: Transform2D) {
        self.set_transform(transform);
    }
}

/// Attaches a rotation recognizer that drives the [`Rotatable`] hooks.
///
/// Finish fires only on ended; a cancelled or failed rotation falls
/// through without a finish callback.
pub fn make_rotatable<V: Rotatable + 'static>(element: &Rc<RefCell<V>>) {
    let last_rotation = Cell::new(0.0f32);
    let weak = Rc::downgrade(element);

    let recognizer = Recognizer::new(RotationGesture::new(), move |gesture: &RotationGesture| {
        let element = match weak.upgrade() {
            Some(element) => element,
            None => return,
        };
        let velocity = gesture.velocity();
        match gesture.state() {
            GestureState::Began => {
                element.borrow_mut().did_start_rotating();
                last_rotation.set(0.0);
            }
            GestureState::Ended => {
                element.borrow_mut().did_finish_rotating(velocity);
            }
            GestureState::Changed => {
                let mut view = element.borrow_mut();
                let transform =
                    view.transform_with_rotation(gesture.rotation(), last_rotation.get(), velocity);
                view.animate_to_rotated_transform(transform);
                last_rotation.set(gesture.rotation());
            }
            _ => {}
        }
    });

    element.borrow().recognizers().attach(recognizer.into_handle());
}
