//! Pipeline tests.


/// Latch status and bubble detection.
pub mod latches;


/// Individual stage functions.
pub mod stages;
