//! Turn an assembled tab list into plain text lines.
//!
//! This is the apply side of the component: a pure function of the view
//! tree, used by demos and by anything that wants to inspect what the
//! widget currently shows. The strip line is windowed by the nav's scroll
//! offset and the component's viewport width.

use crate::element::{Content, Element};
use crate::tab_list::TabList;
use crate::text::slice_columns;
use crate::types::Role;

/// Render the strip, the position indicator (while visible), and the
/// selected panel.
pub fn render_lines(list: &TabList) -> Vec<String> {
    let root = list.el();
    let viewport = list.viewport_width() as usize;
    let mut lines = Vec::new();

    if let Some(header) = find_class(&root, "tablist-header") {
        lines.push(header.content.plain_text());
    }

    if let Some(nav) = find_role(&root, Role::TabList) {
        lines.push(format!("‹ {} ›", strip_window(nav, viewport)));
    }

    if let Some(indicator) = find_class(&root, "tab-position-indicator") {
        if !indicator.has_class("fade") {
            lines.push(indicator.content.plain_text());
        }
    }

    if let Some(panel) = find_class(&root, "tablist-panel-selected") {
        element_lines(panel, &mut lines);
    }

    lines
}

/// The visible window of the strip: every tab label laid out with its
/// padding columns, shifted by the scroll offset, cut to the viewport.
fn strip_window(nav: &Element, viewport: usize) -> String {
    let mut strip = String::new();

    for (i, tab) in nav.child_elements().iter().enumerate() {
        if i > 0 {
            strip.push(' ');
        }
        let label = tab.content.plain_text();
        if tab.has_class("tablist-tab-selected") {
            strip.push('[');
            strip.push_str(&label);
            strip.push(']');
        } else {
            strip.push(' ');
            strip.push_str(&label);
            strip.push(' ');
        }
    }

    let offset = nav.scroll_offset.0;
    if offset > 0 {
        // mid-gesture overscroll past the left edge
        let pad = (offset as usize).min(viewport);
        let mut line = " ".repeat(pad);
        line.push_str(&slice_columns(&strip, 0, viewport - pad));
        line
    } else {
        slice_columns(&strip, offset.unsigned_abs() as usize, viewport)
    }
}

fn element_lines(element: &Element, out: &mut Vec<String>) {
    match &element.content {
        Content::None => {
            if element.has_class("image") {
                if let Some(src) = element.get_attr("src") {
                    out.push(format!("[image: {src}]"));
                }
            }
        }
        Content::Text(text) => out.extend(text.split('\n').map(str::to_string)),
        Content::Children(children) => {
            for child in children {
                element_lines(child, out);
            }
        }
    }
}

fn find_role<'a>(root: &'a Element, role: Role) -> Option<&'a Element> {
    if root.role == Some(role) {
        return Some(root);
    }
    for child in root.child_elements() {
        if let Some(found) = find_role(child, role) {
            return Some(found);
        }
    }
    None
}

fn find_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }
    for child in root.child_elements() {
        if let Some(found) = find_class(child, class) {
            return Some(found);
        }
    }
    None
}
