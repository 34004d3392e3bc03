mod rect;
mod strip;

pub use rect::Rect;
pub use strip::{measure_strip, StripLayout, TAB_GAP, TAB_PADDING};
