//! Tap handling with touch-down/touch-up feedback.

use crate::element::InteractiveElement;
use std::cell::RefCell;
use std::rc::Rc;
use tactile_gestures::gestures::LongPressGesture;
use tactile_gestures::{
    GestureState, GestureStateMachine, Recognizer, DEFAULT_ALLOWABLE_MOVEMENT,
    DEFAULT_MINIMUM_PRESS_DURATION_MS,
};
use tactile_graphics::{EdgeInsets, Point};

/// Hooks for an element that can be tapped.
///
/// The tap region is the element's frame grown by [`tap_region_insets`];
/// the default margin is half the element's own size beyond each edge, so
/// a slightly missed release still counts. While the press drags across
/// that boundary the touch-down/touch-up feedback toggles, giving the
/// usual drag-off-to-cancel feel.
///
/// [`tap_region_insets`]: Tappable::tap_region_insets
pub trait Tappable: InteractiveElement {
    fn did_tap(&mut self) {}

    fn did_touch_down(&mut self) {
        self.set_opacity(0.5);
    }

    fn did_touch_up(&mut self) {
        self.set_opacity(1.0);
    }

    /// Recognizer parameter: how long the pointer must stay down before
    /// the press begins, in milliseconds. Near-zero makes it a tap.
    fn minimum_press_duration(&self) -> u64 {
        DEFAULT_MINIMUM_PRESS_DURATION_MS
    }

    /// Recognizer parameter: movement tolerance before the press begins.
    fn allowable_movement(&self) -> f32 {
        DEFAULT_ALLOWABLE_MOVEMENT
    }

    fn tap_region_insets(&self) -> EdgeInsets {
        let size = self.frame().size();
        EdgeInsets::symmetric(size.width / 2.0, size.height / 2.0)
    }

    /// Whether a location (in the parent's space) counts as on-element.
    fn is_in_tap_region(&self, location: Point) -> bool {
        self.frame().outset(self.tap_region_insets()).contains(location)
    }
}

/// Attaches a press recognizer that drives the [`Tappable`] hooks.
pub fn make_tappable<V: Tappable + 'static>(element: &Rc<RefCell<V>>) {
    let (minimum_press_duration, allowable_movement) = {
        let view = element.borrow();
        (view.minimum_press_duration(), view.allowable_movement())
    };
    let machine = LongPressGesture::new()
        .with_minimum_press_duration(minimum_press_duration)
        .with_allowable_movement(allowable_movement);
    let weak = Rc::downgrade(element);

    let recognizer = Recognizer::new(machine, move |press: &LongPressGesture| {
        let element = match weak.upgrade() {
            Some(element) => element,
            None => return,
        };
        let location = press.location();
        let mut view = element.borrow_mut();
        match press.state() {
            GestureState::Began => {
                view.did_touch_down();
            }
            GestureState::Ended => {
                view.did_touch_up();
                if view.is_in_tap_region(location) {
                    view.did_tap();
                }
            }
            GestureState::Failed | GestureState::Cancelled => {
                view.did_touch_up();
            }
            GestureState::Changed => {
                if view.is_in_tap_region(location) {
                    view.did_touch_down();
                } else {
                    view.did_touch_up();
                }
            }
            GestureState::Possible => {}
        }
    });

    element.borrow().recognizers().attach(recognizer.into_handle());
}
