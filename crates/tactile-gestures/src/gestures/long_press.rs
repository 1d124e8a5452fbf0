//! Press recognition with a configurable hold duration.

use crate::constants::{DEFAULT_ALLOWABLE_MOVEMENT, DEFAULT_MINIMUM_PRESS_DURATION_MS};
use crate::recognizer::GestureStateMachine;
use crate::state::GestureState;
use crate::types::{PointerEvent, PointerId, PointerPhase};
use tactile_graphics::Point;

/// Tracks one pointer and begins once it has stayed within the movement
/// tolerance for the minimum press duration. With the default zero
/// duration it begins on the down event itself, which makes it a plain
/// tap recognizer. After beginning, movement is unrestricted and every
/// move reports `Changed` so observers can follow the location.
pub struct LongPressGesture {
    state: GestureState,
    pointer: Option<PointerId>,
    down_position: Point,
    down_uptime: u64,
    location: Point,
    minimum_press_duration_ms: u64,
    allowable_movement: f32,
}

impl Default for LongPressGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPressGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Possible,
            pointer: None,
            down_position: Point::ZERO,
            down_uptime: 0,
            location: Point::ZERO,
            minimum_press_duration_ms: DEFAULT_MINIMUM_PRESS_DURATION_MS,
            allowable_movement: DEFAULT_ALLOWABLE_MOVEMENT,
        }
    }

    pub fn with_minimum_press_duration(mut self, millis: u64) -> Self {
        self.minimum_press_duration_ms = millis;
        self
    }

    pub fn with_allowable_movement(mut self, tolerance: f32) -> Self {
        self.allowable_movement = tolerance;
        self
    }

    /// Current pointer location, in the parent's coordinate space.
    pub fn location(&self) -> Point {
        self.location
    }

    fn deadline(&self) -> u64 {
        self.down_uptime + self.minimum_press_duration_ms
    }
}

impl GestureStateMachine for LongPressGesture {
    fn state(&self) -> GestureState {
        self.state
    }

    fn feed(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if self.pointer.is_some() {
                    return false;
                }
                self.pointer = Some(event.id);
                self.down_position = event.position;
                self.down_uptime = event.uptime;
                self.location = event.position;
                if self.minimum_press_duration_ms == 0 {
                    self.state = GestureState::Began;
                    true
                } else {
                    self.state = GestureState::Possible;
                    false
                }
            }
            PointerPhase::Move => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                self.location = event.position;
                if self.state.is_active() {
                    self.state = GestureState::Changed;
                    true
                } else if self.down_position.distance_to(event.position) > self.allowable_movement {
                    self.state = GestureState::Failed;
                    false
                } else if event.uptime >= self.deadline() {
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
                self.location = event.position;
                if self.state.is_active() {
                    self.state = GestureState::Ended;
                    true
                } else {
                    // Released before the hold completed.
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
        let minimum = self.minimum_press_duration_ms;
        let tolerance = self.allowable_movement;
        *self = Self::new()
            .with_minimum_press_duration(minimum)
            .with_allowable_movement(tolerance);
    }
}
