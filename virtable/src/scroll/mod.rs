//! Synthetic scrolling: clamped scroll offsets and scrollbar thumbs.
//!
//! Scroll offsets follow a translate convention: both are zero at the
//! origin and go negative as content moves up or left.

mod scrollbar;
mod viewport;

pub use scrollbar::{Scrollbar, ScrollbarPlan};
pub use viewport::ViewportState;

/// Space reserved for a scrollbar along the edge of the content.
pub const SCROLLBAR_WIDTH: f64 = 10.0;
/// Smallest thumb size along the track.
pub const SCROLLBAR_MIN_WIDTH: f64 = 14.0;

/// Scroll direction of a scrollbar or drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}
