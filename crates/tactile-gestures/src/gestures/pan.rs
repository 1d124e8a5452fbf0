//! Single-pointer pan recognition.

use crate::constants::TOUCH_SLOP;
use crate::recognizer::GestureStateMachine;
use crate::state::GestureState;
use crate::types::{PointerEvent, PointerId, PointerPhase};
use crate::velocity::VelocityTracker;
use tactile_graphics::Point;

/// Tracks one pointer and begins once cumulative movement passes the
/// shared touch slop. Translation is measured from the down position;
/// velocity comes from a per-axis tracker fed with event positions.
pub struct PanGesture {
    state: GestureState,
    pointer: Option<PointerId>,
    down_position: Point,
    translation: Point,
    velocity_x: VelocityTracker,
    velocity_y: VelocityTracker,
}

impl Default for PanGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Possible,
            pointer: None,
            down_position: Point::ZERO,
            translation: Point::ZERO,
            velocity_x: VelocityTracker::new(),
            velocity_y: VelocityTracker::new(),
        }
    }

    /// Cumulative translation since the down position.
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Pointer velocity in units/second, per axis.
    pub fn velocity(&self) -> Point {
        Point::new(self.velocity_x.velocity(), self.velocity_y.velocity())
    }

    fn track(&mut self, event: &PointerEvent) {
        self.velocity_x.add_sample(event.uptime, event.position.x);
        self.velocity_y.add_sample(event.uptime, event.position.y);
    }
}

impl GestureStateMachine for PanGesture {
    fn state(&self) -> GestureState {
        self.state
    }

    fn feed(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if self.pointer.is_some() {
                    // Single-pointer gesture; later pointers are ignored.
                    return false;
                }
                self.pointer = Some(event.id);
                self.down_position = event.position;
                self.translation = Point::ZERO;
                self.velocity_x.reset();
                self.velocity_y.reset();
                self.track(event);
                self.state = GestureState::Possible;
                false
            }
            PointerPhase::Move => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                self.track(event);
                let offset = event.position - self.down_position;
                if self.state.is_active() {
                    self.translation = offset;
                    self.state = GestureState::Changed;
                    true
                } else if self.down_position.distance_to(event.position) >= TOUCH_SLOP {
                    self.translation = offset;
                    self.state = GestureState::Began;
                    true
                } else {
                    false
                }
            }
            PointerPhase::Up => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                self.track(event);
                if self.state.is_active() {
                    self.translation = event.position - self.down_position;
                    self.state = GestureState::Ended;
                    true
                } else {
                    self.state = GestureState::Failed;
                    false
                }
            }
            PointerPhase::Cancel => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                let was_active = self.state.is_active();
                self.state = if was_active {
                    GestureState::Cancelled
                } else {
                    GestureState::Failed
                };
                was_active
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(at: Point) -> PointerEvent {
        PointerEvent::new(7, PointerPhase::Down, at, 0)
    }

    fn move_to(at: Point, uptime: u64) -> PointerEvent {
        PointerEvent::new(7, PointerPhase::Move, at, uptime)
    }

    fn up(at: Point, uptime: u64) -> PointerEvent {
        PointerEvent::new(7, PointerPhase::Up, at, uptime)
    }

    #[test]
    fn begins_only_past_touch_slop() {
        let mut pan = PanGesture::new();
        pan.feed(&down(Point::ZERO));
        assert!(!pan.feed(&move_to(Point::new(3.0, 0.0), 10)));
        assert_eq!(pan.state(), GestureState::Possible);
        assert!(pan.feed(&move_to(Point::new(20.0, 0.0), 20)));
        assert_eq!(pan.state(), GestureState::Began);
    }

    #[test]
    fn translation_is_measured_from_down() {
        let mut pan = PanGesture::new();
        pan.feed(&down(Point::new(100.0, 100.0)));
        pan.feed(&move_to(Point::new(130.0, 80.0), 10));
        assert_eq!(pan.translation(), Point::new(30.0, -20.0));
        pan.feed(&move_to(Point::new(150.0, 110.0), 20));
        assert_eq!(pan.translation(), Point::new(50.0, 10.0));
    }

    #[test]
    fn ends_with_velocity() {
        let mut pan = PanGesture::new();
        pan.feed(&down(Point::ZERO));
        for step in 1..5 {
            pan.feed(&move_to(Point::new(step as f32 * 50.0, 0.0), step * 10));
        }
        assert!(pan.feed(&up(Point::new(250.0, 0.0), 50)));
        assert_eq!(pan.state(), GestureState::Ended);
        let velocity = pan.velocity();
        assert!(
            (velocity.x - 5_000.0).abs() < 10.0,
            "expected ~5000 px/s, got {}",
            velocity.x
        );
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn tap_without_movement_fails_silently() {
        let mut pan = PanGesture::new();
        pan.feed(&down(Point::ZERO));
        assert!(!pan.feed(&up(Point::new(1.0, 1.0), 30)));
        assert_eq!(pan.state(), GestureState::Failed);
    }

    #[test]
    fn foreign_pointers_are_ignored() {
        let mut pan = PanGesture::new();
        pan.feed(&down(Point::ZERO));
        let other = PointerEvent::new(9, PointerPhase::Move, Point::new(500.0, 0.0), 10);
        assert!(!pan.feed(&other));
        assert_eq!(pan.translation(), Point::ZERO);
    }
}
