use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Role;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Draw the next value from the process-wide id sequence.
///
/// The sequence is shared by every element and every component instance in
/// the process, so generated ids never collide even when several tab lists
/// live on the same surface. There is no reset.
pub fn next_node_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

fn generate_id(prefix: &str) -> String {
    let id = next_node_id();
    format!("{prefix}-{id}")
}

/// A rendering-surface node.
///
/// Elements are plain data: the component mutates roles, attributes and
/// classes as state transitions happen, and a separate render step turns the
/// assembled tree into output. Nothing here touches a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Accessibility
    pub role: Option<Role>,
    pub attrs: HashMap<String, String>,

    // Visual state
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Strip positioning (x, y); negative x means content shifted left
    pub scroll_offset: (i32, i32),

    // Interaction
    pub focusable: bool,
    /// Whether this element currently holds keyboard focus. Set by the
    /// component, not by user code.
    pub focused: bool,

    // Custom data storage (format-hook extensions, upgrade markers, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: None,
            attrs: HashMap::new(),
            classes: Vec::new(),
            content: Content::None,
            scroll_offset: (0, 0),
            focusable: false,
            focused: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn section() -> Self {
        Self {
            id: generate_id("section"),
            ..Default::default()
        }
    }

    pub fn nav() -> Self {
        Self {
            id: generate_id("nav"),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn header(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("header"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn span(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// The constructor kind of this element, recovered from its generated id
    /// prefix (`section`, `header`, ...). Custom ids yield the full id.
    pub fn kind(&self) -> &str {
        match self.id.rfind('-') {
            Some(pos) if !self.id[pos + 1..].is_empty()
                && self.id[pos + 1..].chars().all(|c| c.is_ascii_digit()) =>
            {
                &self.id[..pos]
            }
            _ => &self.id,
        }
    }

    // Accessibility
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    // Content
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    pub fn scroll_offset(mut self, x: i32, y: i32) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
