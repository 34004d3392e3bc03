use std::collections::HashMap;
use std::fmt;

use crate::element::Content;

/// Zero-argument notification hook supplied by the host.
pub type Callback = Box<dyn FnMut()>;

/// Panel content: either ready up front, or produced on demand the first
/// time the tab is selected.
pub enum PanelContent {
    Ready(Content),
    Lazy(Box<dyn FnMut() -> Content>),
}

impl Default for PanelContent {
    fn default() -> Self {
        PanelContent::Ready(Content::None)
    }
}

impl fmt::Debug for PanelContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(content) => write!(f, "Ready({content:?})"),
            Self::Lazy(_) => write!(f, "Lazy(...)"),
        }
    }
}

/// Host-supplied description of one tab.
///
/// `title` is rendered eagerly into the tab summary; `content` is not
/// touched until the tab is first selected. The `data` map carries
/// variant-specific fields for format hooks (image references, captions).
#[derive(Default)]
pub struct TabDescriptor {
    pub title: Content,
    pub content: PanelContent,
    pub selected: bool,
    pub data: HashMap<String, String>,
    /// Called on every selection of this tab, not just the first.
    pub on_select: Option<Callback>,
    /// Called when another tab takes the selection away from this one.
    pub on_deselect: Option<Callback>,
    /// Called exactly once, at component teardown.
    pub on_destroy: Option<Callback>,
}

impl TabDescriptor {
    pub fn new(title: impl Into<Content>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = PanelContent::Ready(content.into());
        self
    }

    /// Defer panel content to a producer, invoked at most once.
    pub fn content_with(mut self, produce: impl FnMut() -> Content + 'static) -> Self {
        self.content = PanelContent::Lazy(Box::new(produce));
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn on_select(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn on_deselect(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_deselect = Some(Box::new(callback));
        self
    }

    pub fn on_destroy(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_destroy = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("selected", &self.selected)
            .field("data", &self.data)
            .field("on_select", &self.on_select.is_some())
            .field("on_deselect", &self.on_deselect.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}
