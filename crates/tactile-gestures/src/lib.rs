//! Pointer events, recognizer state machines, and closure-backed recognizers.
//!
//! This crate translates raw pointer events into the classic recognizer
//! state cycle (possible → began → changed → ended/cancelled/failed) and
//! lets a closure observe every transition, so callers never implement a
//! separate delegate object. Everything is single-threaded and
//! event-driven: timing decisions are made from the `uptime` carried on
//! each event, never from a timer.

mod constants;
mod recognizer;
mod state;
mod types;
mod velocity;

pub mod gestures;

pub use constants::*;
pub use recognizer::{
    ErasedRecognizer, GestureStateMachine, Recognizer, RecognizerHandle, SimultaneousPolicy,
};
pub use state::GestureState;
pub use types::{uptime_now, PointerEvent, PointerId, PointerPhase, PointerType};
pub use velocity::VelocityTracker;
