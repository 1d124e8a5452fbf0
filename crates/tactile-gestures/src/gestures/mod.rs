//! Concrete recognizer state machines, one per file.

mod force_press;
mod long_press;
mod pan;
mod rotation;

pub use force_press::ForcePressGesture;
pub use long_press::LongPressGesture;
pub use pan::PanGesture;
pub use rotation::RotationGesture;
