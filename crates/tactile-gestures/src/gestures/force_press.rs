//! Pressure-sensitive press recognition.

use crate::constants::BASELINE_FORCE;
use crate::recognizer::GestureStateMachine;
use crate::state::GestureState;
use crate::types::{PointerEvent, PointerId, PointerPhase};

/// Tracks one pressure-reporting pointer. Begins on the down event and
/// reports the event's normalized pressure on every update. A down event
/// without a pressure reading fails the gesture: force press is only
/// available where the hardware reports pressure.
pub struct ForcePressGesture {
    state: GestureState,
    pointer: Option<PointerId>,
    force: f32,
}

impl Default for ForcePressGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl ForcePressGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Possible,
            pointer: None,
            force: BASELINE_FORCE,
        }
    }

    /// Most recent pressure reading.
    pub fn force(&self) -> f32 {
        self.force
    }
}

impl GestureStateMachine for ForcePressGesture {
    fn state(&self) -> GestureState {
        self.state
    }

    fn feed(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if self.pointer.is_some() {
                    return false;
                }
                let pressure = match event.pressure {
                    Some(pressure) => pressure,
                    None => {
                        log::warn!("force press requires pressure-reporting input");
                        self.state = GestureState::Failed;
                        return false;
                    }
                };
                self.pointer = Some(event.id);
                self.force = pressure;
                self.state = GestureState::Began;
                true
            }
            PointerPhase::Move => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                if let Some(pressure) = event.pressure {
                    self.force = pressure;
                }
                self.state = GestureState::Changed;
                true
            }
            PointerPhase::Up => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                if let Some(pressure) = event.pressure {
                    self.force = pressure;
                }
                self.state = GestureState::Ended;
                true
            }
            PointerPhase::Cancel => {
                if self.pointer != Some(event.id) {
                    return false;
                }
                self.state = GestureState::Cancelled;
                true
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
    use tactile_graphics::Point;

    fn pressed(phase: PointerPhase, pressure: f32, uptime: u64) -> PointerEvent {
        PointerEvent::new(2, phase, Point::ZERO, uptime).with_pressure(pressure)
    }

    #[test]
    fn begins_with_the_down_pressure() {
        let mut force = ForcePressGesture::new();
        assert!(force.feed(&pressed(PointerPhase::Down, 0.2, 0)));
        assert_eq!(force.state(), GestureState::Began);
        assert_eq!(force.force(), 0.2);
    }

    #[test]
    fn reports_pressure_on_every_update() {
        let mut force = ForcePressGesture::new();
        force.feed(&pressed(PointerPhase::Down, 0.2, 0));
        assert!(force.feed(&pressed(PointerPhase::Move, 0.7, 10)));
        assert_eq!(force.state(), GestureState::Changed);
        assert_eq!(force.force(), 0.7);
        assert!(force.feed(&pressed(PointerPhase::Up, 0.4, 20)));
        assert_eq!(force.state(), GestureState::Ended);
        assert_eq!(force.force(), 0.4);
    }

    #[test]
    fn pressureless_input_fails_silently() {
        let mut force = ForcePressGesture::new();
        let plain = PointerEvent::new(2, PointerPhase::Down, Point::ZERO, 0);
        assert!(!force.feed(&plain));
        assert_eq!(force.state(), GestureState::Failed);
    }

    #[test]
    fn cancel_is_observable() {
        let mut force = ForcePressGesture::new();
        force.feed(&pressed(PointerPhase::Down, 0.5, 0));
        let cancel = PointerEvent::new(2, PointerPhase::Cancel, Point::ZERO, 10);
        assert!(force.feed(&cancel));
        assert_eq!(force.state(), GestureState::Cancelled);
    }
}
