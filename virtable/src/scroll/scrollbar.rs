use super::{Axis, SCROLLBAR_MIN_WIDTH};

/// A synthetic scrollbar.
///
/// The thumb moves independently of the content: wheel input moves it by
/// the content delta scaled down to the track, and dragging it produces a
/// content delta scaled up from the track. Both are clamped to the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrollbar {
    axis: Axis,
    /// Visible length of the scrolled area (the track).
    length: f64,
    /// Full length of the content.
    scroll_length: f64,
    /// Thumb position along the track.
    offset: f64,
    pressed: bool,
}

/// Scrollbar geometry handed to the render sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarPlan {
    pub axis: Axis,
    pub length: f64,
    pub scroll_length: f64,
    pub handle_size: f64,
    pub handle_offset: f64,
    pub hidden: bool,
    pub pressed: bool,
}

impl Scrollbar {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            length: 1.0,
            scroll_length: 1.0,
            offset: 0.0,
            pressed: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn scroll_length(&self) -> f64 {
        self.scroll_length
    }

    /// Thumb position along the track.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Update track and content lengths, keeping the thumb on the track.
    pub fn set_lengths(&mut self, length: f64, scroll_length: f64) {
        self.length = length;
        self.scroll_length = scroll_length;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Content units per track unit.
    pub fn ratio(&self) -> f64 {
        if self.length > 0.0 && self.scroll_length > 0.0 {
            self.scroll_length / self.length
        } else {
            1.0
        }
    }

    fn proportional_size(&self) -> f64 {
        if self.scroll_length > 0.0 {
            self.length / self.scroll_length * self.length
        } else {
            self.length
        }
    }

    /// Thumb size along the track.
    pub fn handle_size(&self) -> f64 {
        self.proportional_size().max(SCROLLBAR_MIN_WIDTH)
    }

    /// Furthest the thumb can travel.
    pub fn max_offset(&self) -> f64 {
        if self.length <= 0.0 || self.scroll_length <= 0.0 {
            return 0.0;
        }
        (self.length - self.proportional_size().max(SCROLLBAR_MIN_WIDTH + 2.0)).max(0.0)
    }

    /// Nothing to scroll.
    pub fn is_hidden(&self) -> bool {
        self.scroll_length <= self.length
    }

    /// Move the thumb by a track delta, clamped to the track.
    pub fn move_by(&mut self, delta: f64) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Follow a content scroll of `delta` (wheel, touch).
    pub fn on_wheel_scroll(&mut self, delta: f64) {
        self.move_by(delta / self.ratio());
    }

    /// Place the thumb at `offset` without clamping.
    pub fn reset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Place the thumb where content scrolled to `scroll` (a non-positive
    /// translate offset) puts it.
    pub fn sync_to_content(&mut self, scroll: f64) {
        self.offset = (-scroll / self.ratio()).clamp(0.0, self.max_offset());
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Drag the thumb by a pointer delta. Returns the content delta.
    pub fn drag_by(&mut self, delta: f64) -> f64 {
        self.move_by(delta);
        delta * self.ratio()
    }

    /// Click on the track at `position` (relative to the track start).
    ///
    /// Clicking past the thumb moves it so its far edge lands on the click
    /// point, clicking before it moves its near edge there. Returns the
    /// content delta.
    pub fn click_track(&mut self, position: f64) -> f64 {
        let handle = self.proportional_size();
        let delta = if position > self.offset {
            position - handle - self.offset
        } else {
            position - self.offset
        };
        self.drag_by(delta)
    }

    /// Whether a track position falls on the thumb.
    pub fn handle_contains(&self, position: f64) -> bool {
        position >= self.offset && position < self.offset + self.handle_size()
    }

    pub fn geometry(&self) -> ScrollbarPlan {
        ScrollbarPlan {
            axis: self.axis,
            length: self.length,
            scroll_length: self.scroll_length,
            handle_size: self.handle_size(),
            handle_offset: self.offset,
            hidden: self.is_hidden(),
            pressed: self.pressed,
        }
    }
}
