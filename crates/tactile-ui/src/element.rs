//! The element abstraction behaviors attach to.

use smallvec::SmallVec;
use std::cell::RefCell;
use tactile_gestures::RecognizerHandle;
use tactile_graphics::{Point, Rect, Transform2D};

/// Recognizers attached to one element.
///
/// Interior-mutable so attachment works through a shared borrow; dispatch
/// clones the handles out before feeding them, which lets recognizer
/// callbacks reborrow the element mutably.
#[derive(Default)]
pub struct RecognizerStore {
    handles: RefCell<SmallVec<[RecognizerHandle; 2]>>,
}

impl RecognizerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, handle: RecognizerHandle) {
        self.handles.borrow_mut().push(handle);
    }

    pub fn handles(&self) -> SmallVec<[RecognizerHandle; 2]> {
        self.handles.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.handles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.borrow().is_empty()
    }
}

/// Geometry, transform, and recognizer storage an element embeds.
///
/// `frame` is the untransformed bounding box in the parent's coordinate
/// space; behaviors move and rotate the element through `transform`, never
/// by rewriting the frame.
pub struct ElementCore {
    pub frame: Rect,
    pub transform: Transform2D,
    pub opacity: f32,
    pub parent_bounds: Option<Rect>,
    pub recognizers: RecognizerStore,
}

impl ElementCore {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            transform: Transform2D::IDENTITY,
            opacity: 1.0,
            parent_bounds: None,
            recognizers: RecognizerStore::new(),
        }
    }

    pub fn with_parent_bounds(mut self, bounds: Rect) -> Self {
        self.parent_bounds = Some(bounds);
        self
    }
}

/// A visual element that gesture behaviors can attach to.
///
/// Implementers embed an [`ElementCore`] and expose it through `core` /
/// `core_mut`; everything else has a default body reading that state.
pub trait InteractiveElement {
    fn core(&self) -> &ElementCore;
    fn core_mut(&mut self) -> &mut ElementCore;

    fn frame(&self) -> Rect {
        self.core().frame
    }

    /// Center of the untransformed frame, in the parent's space.
    fn center(&self) -> Point {
        self.frame().center()
    }

    fn transform(&self) -> Transform2D {
        self.core().transform
    }

    fn set_transform(&mut self, transform: Transform2D) {
        self.core_mut().transform = transform;
    }

    fn opacity(&self) -> f32 {
        self.core().opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.core_mut().opacity = opacity;
    }

    fn parent_bounds(&self) -> Option<Rect> {
        self.core().parent_bounds
    }

    fn recognizers(&self) -> &RecognizerStore {
        &self.core().recognizers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chip {
        core: ElementCore,
    }

    impl InteractiveElement for Chip {
        fn core(&self) -> &ElementCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ElementCore {
            &mut self.core
        }
    }

    #[test]
    fn center_tracks_the_frame_not_the_transform() {
        let mut chip = Chip {
            core: ElementCore::new(Rect::new(10.0, 10.0, 20.0, 20.0)),
        };
        assert_eq!(chip.center(), Point::new(20.0, 20.0));
        chip.set_transform(Transform2D::translation(100.0, 0.0));
        assert_eq!(chip.center(), Point::new(20.0, 20.0));
    }

    #[test]
    fn defaults_are_opaque_and_unparented() {
        let chip = Chip {
            core: ElementCore::new(Rect::new(0.0, 0.0, 1.0, 1.0)),
        };
        assert_eq!(chip.opacity(), 1.0);
        assert_eq!(chip.parent_bounds(), None);
        assert!(chip.recognizers().is_empty());
    }
}
