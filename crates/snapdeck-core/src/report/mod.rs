//! Position reporters
//!
//! Passive observers that keep the on-screen indicators in line with the
//! navigator, and the navigator in line with what is actually visible.

mod elevation;
mod ui_sync;
mod visibility;

pub use elevation::NavElevation;
pub use ui_sync::{IndicatorSet, UiSync};
pub use visibility::{VisibilityCorrector, VisibilityEntry};
