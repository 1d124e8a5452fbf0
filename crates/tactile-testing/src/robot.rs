//! Robot-style input simulation against a single element.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_gestures::{PointerEvent, PointerId, PointerPhase};
use tactile_graphics::Point;
use tactile_ui::{dispatch_pointer_event, InteractiveElement};

/// Synthetic time between consecutive events, one display frame.
const FRAME_MS: u64 = 16;

/// Drives pointer sequences into one element's recognizers.
///
/// Every event advances a synthetic clock by one frame, so recognizers
/// that reason about uptimes (press durations, velocity) behave
/// deterministically. Low-level `down`/`move_to`/`up`/`cancel` calls
/// compose into whatever a test needs; the high-level helpers cover the
/// common interactions.
pub struct PointerRobot<V: InteractiveElement> {
    element: Rc<RefCell<V>>,
    uptime: u64,
}

impl<V: InteractiveElement> PointerRobot<V> {
    pub fn new(element: Rc<RefCell<V>>) -> Self {
        Self { element, uptime: 0 }
    }

    pub fn element(&self) -> &Rc<RefCell<V>> {
        &self.element
    }

    pub fn uptime(&self) -> u64 {
        self.uptime
    }

    /// Lets the synthetic clock idle, e.g. to satisfy a press duration.
    pub fn advance(&mut self, millis: u64) {
        self.uptime += millis;
    }

    pub fn dispatch(&mut self, event: PointerEvent) {
        dispatch_pointer_event(&self.element, &event);
    }

    fn step(&mut self, id: PointerId, phase: PointerPhase, at: Point) -> PointerEvent {
        self.uptime += FRAME_MS;
        PointerEvent::new(id, phase, at, self.uptime)
    }

    pub fn down(&mut self, id: PointerId, at: Point) {
        let event = self.step(id, PointerPhase::Down, at);
        self.dispatch(event);
    }

    pub fn move_to(&mut self, id: PointerId, at: Point) {
        let event = self.step(id, PointerPhase::Move, at);
        self.dispatch(event);
    }

    pub fn up(&mut self, id: PointerId, at: Point) {
        let event = self.step(id, PointerPhase::Up, at);
        self.dispatch(event);
    }

    pub fn cancel(&mut self, id: PointerId, at: Point) {
        let event = self.step(id, PointerPhase::Cancel, at);
        self.dispatch(event);
    }

    pub fn down_with_pressure(&mut self, id: PointerId, at: Point, pressure: f32) {
        let event = self.step(id, PointerPhase::Down, at).with_pressure(pressure);
        self.dispatch(event);
    }

    pub fn move_with_pressure(&mut self, id: PointerId, at: Point, pressure: f32) {
        let event = self.step(id, PointerPhase::Move, at).with_pressure(pressure);
        self.dispatch(event);
    }

    pub fn up_with_pressure(&mut self, id: PointerId, at: Point, pressure: f32) {
        let event = self.step(id, PointerPhase::Up, at).with_pressure(pressure);
        self.dispatch(event);
    }

    /// Press and release in place.
    pub fn tap_at(&mut self, at: Point) {
        self.down(1, at);
        self.up(1, at);
    }

    /// Press at one location, release at another.
    pub fn press_and_release(&mut self, press_at: Point, release_at: Point) {
        self.down(1, press_at);
        self.move_to(1, release_at);
        self.up(1, release_at);
    }

    /// Drag in a straight line across `steps` move events.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) {
        self.down(1, from);
        self.drag_moves(from, to, steps);
        self.up(1, to);
    }

    /// Like [`drag`](Self::drag) but the host cancels instead of releasing.
    pub fn drag_and_cancel(&mut self, from: Point, to: Point, steps: u32) {
        self.down(1, from);
        self.drag_moves(from, to, steps);
        self.cancel(1, to);
    }

    fn drag_moves(&mut self, from: Point, to: Point, steps: u32) {
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.move_to(1, at);
        }
    }

    /// Two-finger twist: finger 1 holds the pivot, finger 2 orbits it by
    /// `angle` radians across `steps` move events, then both lift.
    pub fn two_finger_rotate(&mut self, pivot: Point, radius: f32, angle: f32, steps: u32) {
        self.two_finger_twist(pivot, radius, angle, steps);
        self.up(2, self.orbit_position(pivot, radius, angle));
        self.up(1, pivot);
    }

    /// Two-finger twist terminated by a host cancel instead of a lift.
    pub fn two_finger_rotate_cancelled(
        &mut self,
        pivot: Point,
        radius: f32,
        angle: f32,
        steps: u32,
    ) {
        self.two_finger_twist(pivot, radius, angle, steps);
        self.cancel(2, self.orbit_position(pivot, radius, angle));
        self.cancel(1, pivot);
    }

    fn two_finger_twist(&mut self, pivot: Point, radius: f32, angle: f32, steps: u32) {
        self.down(1, pivot);
        self.down(2, self.orbit_position(pivot, radius, 0.0));
        let steps = steps.max(1);
        for step in 1..=steps {
            let at = self.orbit_position(pivot, radius, angle * step as f32 / steps as f32);
            self.move_to(2, at);
        }
    }

    fn orbit_position(&self, pivot: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            pivot.x + radius * angle.cos(),
            pivot.y + radius * angle.sin(),
        )
    }

    /// Force press walking through the given pressure readings, releasing
    /// at the last one.
    pub fn force_press(&mut self, at: Point, pressures: &[f32]) {
        let (first, rest) = match pressures.split_first() {
            Some(split) => split,
            None => return,
        };
        self.down_with_pressure(1, at, *first);
        for pressure in rest {
            self.move_with_pressure(1, at, *pressure);
        }
        self.up_with_pressure(1, at, *pressures.last().unwrap_or(first));
    }
}
