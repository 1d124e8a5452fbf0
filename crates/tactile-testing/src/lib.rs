//! Deterministic pointer-event synthesis for testing Tactile behaviors.
//!
//! The robot drives a real element through `dispatch_pointer_event` with a
//! synthetic clock, so integration tests can perform taps, drags,
//! two-finger twists, and force presses without a windowing backend and
//! without wall-clock flakiness.

mod robot;

pub use robot::PointerRobot;
