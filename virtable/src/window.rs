//! Virtualization window: which rows to render for a scroll position.

use std::time::Instant;

use crate::debounce::{Debouncer, SCROLL_IDLE_MS};

/// The slice of rows to render, plus the space taken by rows left out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Window {
    /// First rendered row.
    pub start: usize,
    /// One past the last rendered row.
    pub end: usize,
    /// Combined height of the rows above the slice.
    pub top_pad: f64,
    /// Combined height of the rows below the slice.
    pub bottom_pad: f64,
}

impl Window {
    /// A window covering all `count` rows.
    pub fn full(count: usize) -> Self {
        Self {
            start: 0,
            end: count,
            top_pad: 0.0,
            bottom_pad: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Select the rows that intersect the viewport.
///
/// `scroll_y` is the (non-positive) vertical scroll offset. A row is left
/// out when it ends above the viewport top or starts below the viewport
/// bottom extended by `overscan`. Because offsets only grow, the rendered
/// rows are always one contiguous run.
pub fn compute_window(row_heights: &[f64], scroll_y: f64, viewport_height: f64, overscan: f64) -> Window {
    let min_visible = scroll_y.abs();
    let max_visible = min_visible + viewport_height + overscan;

    let mut top = 0.0;
    let mut above = 0;
    let mut rendered = 0;
    let mut top_pad = 0.0;
    let mut bottom_pad = 0.0;

    for &height in row_heights {
        if top + height < min_visible {
            top_pad += height;
            above += 1;
        } else if top > max_visible {
            bottom_pad += height;
        } else {
            rendered += 1;
        }
        top += height;
    }

    let window = Window {
        start: above,
        end: above + rendered,
        top_pad,
        bottom_pad,
    };
    log::trace!(
        "[window] scroll_y={} rows {}..{} of {}",
        scroll_y,
        window.start,
        window.end,
        row_heights.len()
    );
    window
}

/// Tracks whether the table is actively scrolling.
///
/// Set on every scroll, cleared once no scroll has happened for
/// [`SCROLL_IDLE_MS`]. Hosts can use it to suspend pointer interaction
/// with rows while scrolling fast.
#[derive(Debug, Clone)]
pub struct ScrollActivity {
    scrolling: bool,
    idle: Debouncer,
}

impl ScrollActivity {
    pub fn new() -> Self {
        Self {
            scrolling: false,
            idle: Debouncer::new(SCROLL_IDLE_MS),
        }
    }

    /// Record a scroll at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.scrolling = true;
        self.idle.trigger(now);
    }

    /// Clear the flag if the idle period has passed. Returns true when the
    /// flag was cleared by this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.idle.should_execute(now) {
            self.scrolling = false;
            return true;
        }
        false
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

impl Default for ScrollActivity {
    fn default() -> Self {
        Self::new()
    }
}
