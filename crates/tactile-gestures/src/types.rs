//! Normalized pointer input event types.

use tactile_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Stylus,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event as delivered by the host (or synthesized by a test).
///
/// Positions are in the coordinate space of the element's parent. `uptime`
/// is milliseconds from an arbitrary epoch; recognizers only ever compare
/// uptimes, so any monotonic source works. `pressure` is the normalized
/// pressure reading, `None` on hardware that does not report one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    pub uptime: u64,
    pub pressure: Option<f32>,
    pub pointer_type: PointerType,
}

impl PointerEvent {
    pub fn new(id: PointerId, phase: PointerPhase, position: Point, uptime: u64) -> Self {
        Self {
            id,
            phase,
            position,
            uptime,
            pressure: None,
            pointer_type: PointerType::Touch,
        }
    }

    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }
}

/// Milliseconds since the first call in this process.
///
/// Convenience for hosts that forward platform events without their own
/// timestamp source. Tests synthesize uptimes instead, so everything in
/// this crate stays deterministic.
pub fn uptime_now() -> u64 {
    use web_time::Instant;

    thread_local! {
        static EPOCH: Instant = Instant::now();
    }
    EPOCH.with(|epoch| epoch.elapsed().as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_defaults_to_unsupported() {
        let event = PointerEvent::new(1, PointerPhase::Down, Point::ZERO, 0);
        assert_eq!(event.pressure, None);
        assert_eq!(event.with_pressure(0.5).pressure, Some(0.5));
    }

    #[test]
    fn uptime_now_is_monotonic() {
        let a = uptime_now();
        let b = uptime_now();
        assert!(b >= a);
    }
}
