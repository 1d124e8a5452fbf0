//! The four gesture behaviors.
//!
//! Each module pairs a trait of overridable hooks (default bodies included)
//! with a `make_*` function that attaches the closure-backed recognizer.
//! Per-interaction session state (start point, last rotation, last force)
//! lives in `Cell`s captured by the recognizer closure and is reset on
//! every began transition, so behaviors are stateless between gestures.

mod forceable;
mod moveable;
mod rotatable;
mod tappable;

pub use forceable::{make_forceable, Forceable};
pub use moveable::{make_moveable, Moveable};
pub use rotatable::{make_rotatable, Rotatable};
pub use tappable::{make_tappable, Tappable};
