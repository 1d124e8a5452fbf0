//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels and milliseconds. They are deliberately
//! shared between recognizers so a drag that escapes one recognizer's
//! threshold cannot still satisfy another's.

/// Movement threshold before a pan begins, in logical pixels.
///
/// Large enough to ignore finger jitter on touch screens, small enough to
/// feel responsive. Matches common platform conventions (Android uses ~8dp
/// for ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Default minimum press duration before a press begins, in milliseconds.
///
/// Zero makes a press behave like a tap: it begins on the down event
/// itself rather than after a hold.
pub const DEFAULT_MINIMUM_PRESS_DURATION_MS: u64 = 0;

/// Default movement tolerance for a press that has not yet begun, in
/// logical pixels. Moving further than this before the minimum duration
/// elapses fails the press.
pub const DEFAULT_ALLOWABLE_MOVEMENT: f32 = 10.0;

/// Baseline force reported before any pressure has been applied.
pub const BASELINE_FORCE: f32 = 1.0;
