use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;

/// Columns of padding inside a tab, either side of its content.
pub const TAB_PADDING: u16 = 1;
/// Columns between adjacent tabs.
pub const TAB_GAP: u16 = 1;

/// Horizontal extents of every tab in the strip, in strip-local columns
/// (offset not applied).
#[derive(Debug, Clone, Default)]
pub struct StripLayout {
    tabs: Vec<Rect>,
    total_width: u16,
}

impl StripLayout {
    pub fn tab(&self, index: usize) -> Option<&Rect> {
        self.tabs.get(index)
    }

    pub fn total_width(&self) -> u16 {
        self.total_width
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the tab covering the given strip-local column.
    pub fn tab_at(&self, x: u16) -> Option<usize> {
        self.tabs.iter().position(|rect| rect.contains_x(x))
    }
}

/// Measure the strip: each tab is as wide as its summary content plus
/// padding, laid out left to right with a fixed gap.
pub fn measure_strip<'a>(tabs: impl Iterator<Item = &'a Element>) -> StripLayout {
    let mut rects = Vec::new();
    let mut x = 0u16;

    for tab in tabs {
        if !rects.is_empty() {
            x += TAB_GAP;
        }
        let width = intrinsic_width(tab) as u16 + 2 * TAB_PADDING;
        rects.push(Rect::new(x, 0, width, 1));
        x += width;
    }

    StripLayout {
        tabs: rects,
        total_width: x,
    }
}

/// Widest line of content this element would render.
fn intrinsic_width(element: &Element) -> usize {
    match &element.content {
        Content::None => 0,
        Content::Text(s) => display_width(s),
        Content::Children(children) => children
            .iter()
            .map(intrinsic_width)
            .max()
            .unwrap_or(0),
    }
}
