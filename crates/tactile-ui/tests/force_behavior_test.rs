//! Integration tests for the force behavior: baseline reset, update
//! pairs, and unsupported-hardware silence.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_graphics::{Point, Rect};
use tactile_testing::PointerRobot;
use tactile_ui::{make_forceable, ElementCore, Forceable, InteractiveElement};

struct Key {
    core: ElementCore,
    force_starts: Vec<f32>,
    force_updates: Vec<(f32, f32)>,
    force_finishes: Vec<f32>,
}

impl Key {
    fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            core: ElementCore::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            force_starts: Vec::new(),
            force_updates: Vec::new(),
            force_finishes: Vec::new(),
        }))
    }
}

impl InteractiveElement for Key {
    fn core(&self) -> &ElementCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ElementCore {
        &mut self.core
    }
}

impl Forceable for Key {
    fn did_start_forcing(&mut self, force: f32) {
        self.force_starts.push(force);
    }

    fn did_force(&mut self, force: f32, last_force: f32) {
        self.force_updates.push((force, last_force));
    }

    fn did_finish_forcing(&mut self, force: f32) {
        self.force_finishes.push(force);
    }
}

const AT: Point = Point::new(50.0, 50.0);

#[test]
fn press_walks_start_update_finish() {
    let key = Key::new();
    make_forceable(&key);

    let mut robot = PointerRobot::new(key.clone());
    robot.force_press(AT, &[0.2, 0.5, 0.8]);

    let view = key.borrow();
    assert_eq!(view.force_starts, vec![0.2]);
    // First update sees the 1.0 baseline, the second sees the previous
    // reading.
    assert_eq!(view.force_updates, vec![(0.5, 1.0), (0.8, 0.5)]);
    assert_eq!(view.force_finishes, vec![0.8]);
}

#[test]
fn baseline_resets_on_every_new_press() {
    let key = Key::new();
    make_forceable(&key);

    let mut robot = PointerRobot::new(key.clone());
    robot.force_press(AT, &[0.2, 0.9]);
    robot.force_press(AT, &[0.3, 0.4]);

    let view = key.borrow();
    assert_eq!(view.force_starts, vec![0.2, 0.3]);
    // Each press's first update starts from the 1.0 baseline no matter
    // how hard the previous press ended.
    assert_eq!(view.force_updates, vec![(0.9, 1.0), (0.4, 1.0)]);
}

#[test]
fn cancel_finishes_with_the_last_reading() {
    let key = Key::new();
    make_forceable(&key);

    let mut robot = PointerRobot::new(key.clone());
    robot.down_with_pressure(1, AT, 0.2);
    robot.move_with_pressure(1, AT, 0.6);
    robot.cancel(1, AT);

    let view = key.borrow();
    assert_eq!(view.force_starts, vec![0.2]);
    assert_eq!(view.force_finishes, vec![0.6]);
}

#[test]
fn pressureless_input_never_fires() {
    let key = Key::new();
    make_forceable(&key);

    let mut robot = PointerRobot::new(key.clone());
    robot.down(1, AT);
    robot.move_to(1, AT);
    robot.up(1, AT);

    let view = key.borrow();
    assert!(view.force_starts.is_empty());
    assert!(view.force_updates.is_empty());
    assert!(view.force_finishes.is_empty());
}
