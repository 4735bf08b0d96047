//! # Data Unlock
//!
//! Which badges the current session considers owned, and how free text about
//! a profile is turned into badge ids.

pub mod detect;
mod tracker;

pub use detect::{detect, Detection, KEYWORDS};
pub use tracker::UnlockTracker;
