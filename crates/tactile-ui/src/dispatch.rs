//! Routing pointer events into an element's recognizers.

use crate::element::InteractiveElement;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use tactile_gestures::{GestureState, PointerEvent};

/// Feeds one pointer event to every recognizer attached to the element.
///
/// Handles are cloned out of the store first so callbacks are free to
/// reborrow the element. All recognizers see every event; when one begins
/// while another is already active, both simultaneity policies are
/// consulted and a denied newcomer sits out the rest of the cycle. The
/// default policy permits everything, so recognizers normally run
/// simultaneously.
pub fn dispatch_pointer_event<V: InteractiveElement>(
    element: &Rc<RefCell<V>>,
    event: &PointerEvent,
) {
    let handles = element.borrow().recognizers().handles();
    let before: SmallVec<[GestureState; 2]> =
        handles.iter().map(|handle| handle.state()).collect();

    for handle in &handles {
        handle.dispatch(event);
    }

    for (index, handle) in handles.iter().enumerate() {
        let just_began =
            handle.state() == GestureState::Began && before[index] != GestureState::Began;
        if !just_began {
            continue;
        }
        for (other_index, other) in handles.iter().enumerate() {
            if other_index == index || !other.state().is_active() {
                continue;
            }
            if !handle.allows_simultaneous_with(other.state())
                || !other.allows_simultaneous_with(handle.state())
            {
                log::debug!("simultaneous recognition denied; recognizer sits out this cycle");
                handle.fail_for_cycle();
                break;
            }
        }
    }
}
