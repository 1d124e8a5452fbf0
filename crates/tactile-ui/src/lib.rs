//! Interactive gesture behaviors for visual elements.
//!
//! Each behavior is a trait of overridable hooks with default bodies plus
//! one `make_*` activation call that attaches a closure-backed recognizer
//! to the element:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tactile_graphics::Rect;
//! use tactile_ui::{make_moveable, ElementCore, InteractiveElement, Moveable};
//!
//! struct Card {
//!     core: ElementCore,
//! }
//!
//! impl InteractiveElement for Card {
//!     fn core(&self) -> &ElementCore {
//!         &self.core
//!     }
//!     fn core_mut(&mut self) -> &mut ElementCore {
//!         &mut self.core
//!     }
//! }
//!
//! impl Moveable for Card {
//!     fn did_start_moving(&mut self) {
//!         // bring to front, shadow, ...
//!     }
//! }
//!
//! let card = Rc::new(RefCell::new(Card {
//!     core: ElementCore::new(Rect::new(0.0, 0.0, 100.0, 100.0))
//!         .with_parent_bounds(Rect::new(0.0, 0.0, 400.0, 400.0)),
//! }));
//! make_moveable(&card);
//! // The host now feeds pointer events via dispatch_pointer_event.
//! ```

pub mod behaviors;
mod dispatch;
mod element;

pub use behaviors::{
    make_forceable, make_moveable, make_rotatable, make_tappable, Forceable, Moveable, Rotatable,
    Tappable,
};
pub use dispatch::dispatch_pointer_event;
pub use element::{ElementCore, InteractiveElement, RecognizerStore};
