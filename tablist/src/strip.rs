use crate::layout::StripLayout;

/// Net pointer displacement, in columns, above which a press/release pair is
/// treated as a drag rather than a click.
pub const DRAG_THRESHOLD: i32 = 5;

/// One live drag gesture.
#[derive(Debug, Clone)]
struct Gesture {
    start_x: i32,
    start_offset: i32,
    /// Tab under the pointer when the gesture began, if any.
    pressed: Option<String>,
}

/// What a finished gesture turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEnd {
    /// Cumulative displacement crossed the drag threshold.
    pub dragged: bool,
    /// Tab under the pointer at press time.
    pub pressed: Option<String>,
}

/// Horizontal positioner for the tab strip.
///
/// Tracks the strip offset and any in-progress drag. An offset of 0 pins the
/// first tab to the viewport's left edge; negative values shift the strip
/// left. Mid-gesture the offset may overshoot both ends; committing at
/// gesture end clamps it back into range.
#[derive(Debug, Default)]
pub struct StripState {
    offset: i32,
    gesture: Option<Gesture>,
}

impl StripState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// True while no gesture is live. Position changes animate only when
    /// smooth; a drag must track the pointer directly.
    pub fn smooth(&self) -> bool {
        self.gesture.is_none()
    }

    /// Start a gesture at the given pointer column.
    pub fn begin_drag(&mut self, x: i32, pressed: Option<String>) {
        log::trace!("[strip] drag start at {x} (pressed: {pressed:?})");
        self.gesture = Some(Gesture {
            start_x: x,
            start_offset: self.offset,
            pressed,
        });
    }

    /// Track a pointer move. Overscroll is permitted mid-gesture; nothing is
    /// clamped until the gesture ends. Returns false if no gesture is live.
    pub fn drag_to(&mut self, x: i32) -> bool {
        let Some(gesture) = &self.gesture else {
            return false;
        };
        self.offset = gesture.start_offset + (x - gesture.start_x);
        true
    }

    /// Finish the gesture at the release column: clamp, commit, and report
    /// whether it was a drag. The threshold is judged once, here, on the net
    /// displacement since the gesture began, not per move.
    pub fn end_drag(&mut self, x: i32, viewport: u16, strip_width: u16) -> Option<GestureEnd> {
        let gesture = self.gesture.take()?;
        let delta = x - gesture.start_x;
        self.offset = clamp_offset(gesture.start_offset + delta, viewport, strip_width);
        let dragged = delta.abs() > DRAG_THRESHOLD;
        log::debug!("[strip] drag end: delta={delta}, dragged={dragged}, offset={}", self.offset);
        Some(GestureEnd {
            dragged,
            pressed: gesture.pressed,
        })
    }

    /// A cancelled gesture commits like a release but never selects.
    pub fn cancel_drag(&mut self, viewport: u16, strip_width: u16) {
        if self.gesture.take().is_some() {
            self.offset = clamp_offset(self.offset, viewport, strip_width);
            log::debug!("[strip] drag cancelled, offset={}", self.offset);
        }
    }

    /// Place the given tab's center at the viewport's center, clamped so the
    /// strip never scrolls past either end.
    pub fn center_on(&mut self, layout: &StripLayout, index: usize, viewport: u16) {
        let Some(rect) = layout.tab(index) else {
            return;
        };
        // slide the tab's left edge to the viewport origin
        let mut position = -(rect.x as i32);
        // push it to the middle
        position += viewport as i32 / 2;
        // pull back by half the tab's own width
        position -= rect.width as i32 / 2;
        self.offset = clamp_offset(position, viewport, layout.total_width());
    }
}

/// Clamp a strip offset to `[viewport - strip_width, 0]`. A strip narrower
/// than the viewport never scrolls at all.
pub fn clamp_offset(value: i32, viewport: u16, strip_width: u16) -> i32 {
    let min = (viewport as i32 - strip_width as i32).min(0);
    value.clamp(min, 0)
}
