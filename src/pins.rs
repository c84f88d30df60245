//! GPIO / peripheral pin assignments for the alarm clock board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// User button
// ---------------------------------------------------------------------------

/// Momentary push-button, the only user input.
/// An external pull-down holds the line low until the contact closes to 3V3.
pub const BUTTON_GPIO: i32 = 0;

/// Electrical level that means "contact closed".
pub const BUTTON_ACTIVE_HIGH: bool = true;
