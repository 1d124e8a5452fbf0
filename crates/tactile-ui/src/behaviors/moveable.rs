//! Drag an element around, bounded by its parent.

use crate::element::InteractiveElement;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tactile_gestures::gestures::PanGesture;
use tactile_gestures::{GestureState, GestureStateMachine, Recognizer};
use tactile_graphics::{Point, Transform2D};

/// Hooks for an element that can be dragged.
///
/// The clamping hooks derive the permitted center range from keeping the
/// element's bounding box inside its parent's bounds; an element without a
/// parent is unconstrained. Overrides can substitute any other policy.
pub trait Moveable: InteractiveElement {
    fn did_start_moving(&mut self) {}

    /// `velocity` is the final pointer velocity in units/second per axis.
    fn did_finish_moving(&mut self, _velocity: Point) {}

    fn can_move_to_x(&self, x: f32) -> bool {
        match self.parent_bounds() {
            Some(parent) => {
                let half = self.frame().width / 2.0;
                x - half >= parent.x && x + half <= parent.x + parent.width
            }
            None => true,
        }
    }

    fn can_move_to_y(&self, y: f32) -> bool {
        match self.parent_bounds() {
            Some(parent) => {
                let half = self.frame().height / 2.0;
                y - half >= parent.y && y + half <= parent.y + parent.height
            }
            None => true,
        }
    }

    /// Smallest permitted center position.
    fn minimum_point(&self) -> Point {
        let frame = self.frame();
        match self.parent_bounds() {
            Some(parent) => {
                Point::new(parent.x + frame.width / 2.0, parent.y + frame.height / 2.0)
            }
            None => Point::new(frame.width / 2.0, frame.height / 2.0),
        }
    }

    /// Largest permitted center position.
    fn maximum_point(&self) -> Point {
        match self.parent_bounds() {
            Some(parent) => {
                let frame = self.frame();
                Point::new(
                    parent.x + parent.width - frame.width / 2.0,
                    parent.y + parent.height - frame.height / 2.0,
                )
            }
            None => Point::ZERO,
        }
    }

    /// Candidate center for the current update: start point plus the
    /// cumulative translation, clamped per axis. A component that would
    /// leave the permitted range lands exactly on the boundary matching
    /// the translation's sign.
    fn translate_center(
        &self,
        translation: Point,
        _velocity: Point,
        start_point: Point,
        _current_point: Point,
    ) -> Point {
        let mut point = start_point;

        if self.can_move_to_x(point.x + translation.x) {
            point.x += translation.x;
        } else {
            point.x = if translation.x > 0.0 {
                self.maximum_point().x
            } else {
                self.minimum_point().x
            };
        }

        if self.can_move_to_y(point.y + translation.y) {
            point.y += translation.y;
        } else {
            point.y = if translation.y > 0.0 {
                self.maximum_point().y
            } else {
                self.minimum_point().y
            };
        }

        point
    }

    /// Incremental transform stepping the center from `current_point` to
    /// `center`.
    fn transform_from_center(&self, center: Point, current_point: Point) -> Transform2D {
        self.transform()
            .translated_by(center.x - current_point.x, center.y - current_point.y)
    }

    fn animate_to_moved_transform(&mut self, transform: Transform2D) {
        self.set_transform(transform);
    }
}

/// Attaches a pan recognizer that drives the [`Moveable`] hooks.
pub fn make_moveable<V: Moveable + 'static>(element: &Rc<RefCell<V>>) {
    let start_point = Cell::new(Point::ZERO);
    let current_point = Cell::new(Point::ZERO);
    let weak = Rc::downgrade(element);

    let recognizer = Recognizer::new(PanGesture::new(), move |pan: &PanGesture| {
        let element = match weak.upgrade() {
            Some(element) => element,
            None => return,
        };
        let translation = pan.translation();
        let velocity = pan.velocity();
        match pan.state() {
            GestureState::Began => {
                let mut view = element.borrow_mut();
                let center = view.center();
                start_point.set(center);
                current_point.set(center);
                view.did_start_moving();
            }
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed => {
                element.borrow_mut().did_finish_moving(velocity);
            }
            _ => {
                let mut view = element.borrow_mut();
                let point = view.translate_center(
                    translation,
                    velocity,
                    start_point.get(),
                    current_point.get(),
                );
                let transform = view.transform_from_center(point, current_point.get());
                view.animate_to_moved_transform(transform);
                current_point.set(point);
            }
        }
    });

    element.borrow().recognizers().attach(recognizer.into_handle());
}
