use super::SCROLLBAR_WIDTH;

/// Scroll offsets and the extents they are clamped against.
///
/// `table_height` is the height of the scrolling body, without the header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub content_width: f64,
    pub content_height: f64,
    pub table_width: f64,
    pub table_height: f64,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_overflow_x(&self) -> bool {
        self.content_width > self.table_width
    }

    pub fn has_overflow_y(&self) -> bool {
        self.content_height > self.table_height
    }

    /// Lowest horizontal offset. Overflowing content keeps a scrollbar's
    /// width of slack so the last column clears the vertical scrollbar.
    pub fn min_scroll_x(&self) -> f64 {
        if self.has_overflow_x() {
            -(self.content_width - self.table_width) - SCROLLBAR_WIDTH
        } else {
            0.0
        }
    }

    pub fn min_scroll_y(&self) -> f64 {
        if self.has_overflow_y() {
            -(self.content_height - self.table_height) - SCROLLBAR_WIDTH
        } else {
            0.0
        }
    }

    /// Whether a horizontal wheel delta has room to move.
    ///
    /// Positive deltas scroll toward the end, negative ones back toward
    /// the origin.
    pub fn can_scroll_x(&self, delta: f64) -> bool {
        if delta == 0.0 || !self.has_overflow_x() {
            return false;
        }
        (delta >= 0.0 && self.scroll_x > self.min_scroll_x()) || (delta < 0.0 && self.scroll_x < 0.0)
    }

    pub fn can_scroll_y(&self, delta: f64) -> bool {
        if delta == 0.0 {
            return false;
        }
        (delta >= 0.0 && self.scroll_y > self.min_scroll_y()) || (delta < 0.0 && self.scroll_y < 0.0)
    }

    /// Apply already-gated deltas. Returns whether either offset changed.
    pub fn apply_delta(&mut self, delta_x: f64, delta_y: f64) -> bool {
        let (x, y) = (self.scroll_x, self.scroll_y);
        self.scroll_x = clamp_scroll(self.scroll_x - delta_x, self.min_scroll_x());
        self.scroll_y = clamp_scroll(self.scroll_y - delta_y, self.min_scroll_y());
        x != self.scroll_x || y != self.scroll_y
    }

    /// Pull both offsets back into range after the extents changed.
    pub fn clamp(&mut self) {
        self.scroll_x = clamp_scroll(self.scroll_x, self.min_scroll_x());
        self.scroll_y = clamp_scroll(self.scroll_y, self.min_scroll_y());
    }

    pub fn set_scroll_x(&mut self, x: f64) {
        self.scroll_x = clamp_scroll(x, self.min_scroll_x());
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = clamp_scroll(y, self.min_scroll_y());
    }
}

fn clamp_scroll(value: f64, min: f64) -> f64 {
    value.max(min).min(0.0)
}
