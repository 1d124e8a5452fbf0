//! The recognizer state cycle.

/// State of a gesture recognizer within one interaction cycle.
///
/// Continuous recognizers walk possible → began → changed* → one terminal
/// state, then reset to possible for the next cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureState {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GestureState {
    /// Whether the cycle is over and the recognizer is about to reset.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed
        )
    }

    /// Whether the recognizer is actively tracking a recognized gesture.
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Began | GestureState::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_active_partition_the_cycle() {
        assert!(!GestureState::Possible.is_terminal());
        assert!(!GestureState::Possible.is_active());
        assert!(GestureState::Began.is_active());
        assert!(GestureState::Changed.is_active());
        for state in [
            GestureState::Ended,
            GestureState::Cancelled,
            GestureState::Failed,
        ] {
            assert!(state.is_terminal());
            assert!(!state.is_active());
        }
    }
}
