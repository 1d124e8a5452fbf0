//! Two-pointer rotation recognition.

use crate::recognizer::GestureStateMachine;
use crate::state::GestureState;
use crate::types::{PointerEvent, PointerId, PointerPhase};
use crate::velocity::VelocityTracker;
use std::f32::consts::PI;
use tactile_graphics::Point;

/// Tracks exactly two pointers and reports the cumulative rotation of the
/// line between them, in radians, relative to where they landed. Begins on
/// the first angle change once both pointers are down; ends when either
/// lifts.
pub struct RotationGesture {
    state: GestureState,
    first: Option<(PointerId, Point)>,
    second: Option<(PointerId, Point)>,
    last_angle: f32,
    rotation: f32,
    tracker: VelocityTracker,
}

impl Default for RotationGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Possible,
            first: None,
            second: None,
            last_angle: 0.0,
            rotation: 0.0,
            tracker: VelocityTracker::new(),
        }
    }

    /// Cumulative rotation since both pointers landed, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Angular velocity in radians/second.
    pub fn velocity(&self) -> f32 {
        self.tracker.velocity()
    }

    fn current_angle(&self) -> Option<f32> {
        let (_, a) = self.first?;
        let (_, b) = self.second?;
        let line = b - a;
        Some(line.y.atan2(line.x))
    }

    fn update_position(&mut self, id: PointerId, position: Point) -> bool {
        if let Some((first_id, pos)) = &mut self.first {
            if *first_id == id {
                *pos = position;
                return true;
            }
        }
        if let Some((second_id, pos)) = &mut self.second {
            if *second_id == id {
                *pos = position;
                return true;
            }
        }
        false
    }

    fn tracks(&self, id: PointerId) -> bool {
        self.first.map(|(first_id, _)| first_id) == Some(id)
            || self.second.map(|(second_id, _)| second_id) == Some(id)
    }
}

/// Normalizes an angle difference into (-PI, PI] so rotation stays
/// continuous across the atan2 wrap.
fn wrap_to_pi(mut delta: f32) -> f32 {
    while delta > PI {
        delta -= 2.0 * PI;
    }
    while delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

impl GestureStateMachine for RotationGesture {
    fn state(&self) -> GestureState {
        self.state
    }

    fn feed(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if self.first.is_none() {
                    self.first = Some((event.id, event.position));
                } else if self.second.is_none() {
                    self.second = Some((event.id, event.position));
                    // Both pointers are down; the landing line is the
                    // zero-rotation reference.
                    self.last_angle = self.current_angle().unwrap_or(0.0);
                    self.rotation = 0.0;
                    self.tracker.reset();
                    self.tracker.add_sample(event.uptime, 0.0);
                } else {
                    log::debug!("rotation gesture ignoring pointer {}", event.id);
                }
                false
            }
            PointerPhase::Move => {
                if !self.update_position(event.id, event.position) {
                    return false;
                }
                let angle = match self.current_angle() {
                    Some(angle) => angle,
                    None => return false,
                };
                let delta = wrap_to_pi(angle - self.last_angle);
                self.last_angle = angle;
                if delta == 0.0 {
                    return false;
                }
                self.rotation += delta;
                self.tracker.add_sample(event.uptime, self.rotation);
                self.state = if self.state.is_active() {
                    GestureState::Changed
                } else {
                    GestureState::Began
                };
                true
            }
            PointerPhase::Up => {
                if !self.tracks(event.id) {
                    return false;
                }
                if self.state.is_active() {
                    self.state = GestureState::Ended;
                    true
                } else {
                    self.state = GestureState::Failed;
                    false
                }
            }
            PointerPhase::Cancel => {
                if !self.tracks(event.id) {
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
