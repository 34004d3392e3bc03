use std::fmt;

use crate::descriptor::{PanelContent, TabDescriptor};
use crate::element::{Content, Element};

/// The two formatting hooks, injected into the component.
///
/// Both list variants are configurations of the same component: the plain
/// text list and the image list differ only in these two functions.
pub struct TabFormat {
    /// Format tab (summary) content. Runs eagerly when the tab is added.
    pub tab: Box<dyn Fn(&TabDescriptor) -> Content>,
    /// Format panel (detail) content. Runs at most once per tab, on first
    /// selection; may consume the descriptor's lazy producer.
    pub panel: Box<dyn Fn(&mut TabDescriptor) -> Content>,
}

impl TabFormat {
    /// Plain text list: the tab shows the title verbatim, the panel shows
    /// the descriptor's content, produced on demand when lazy.
    pub fn text_list() -> Self {
        Self {
            tab: Box::new(|descriptor| descriptor.title.clone()),
            panel: Box::new(|descriptor| match &mut descriptor.content {
                PanelContent::Lazy(produce) => produce(),
                PanelContent::Ready(content) => content.clone(),
            }),
        }
    }

    /// Image list: thumbnail tabs and captioned image panels, driven by the
    /// descriptor's data map. Recognized keys: `thumbnail-title` and
    /// `thumbnail-image` (tab, falling back to the title and `image`),
    /// `image`, `alt`, `header`, `footer`, and `attr:*` extras copied onto
    /// the panel's image node.
    pub fn image_list() -> Self {
        Self {
            tab: Box::new(|descriptor| {
                let title = descriptor
                    .data
                    .get("thumbnail-title")
                    .cloned()
                    .unwrap_or_else(|| descriptor.title.plain_text());
                let image = descriptor
                    .data
                    .get("thumbnail-image")
                    .or_else(|| descriptor.data.get("image"))
                    .cloned()
                    .unwrap_or_default();
                let alt = descriptor.data.get("alt").cloned().unwrap_or_default();

                Content::Children(vec![
                    Element::header(title),
                    Element::div().class("image").attr("src", image).attr("alt", alt),
                ])
            }),
            panel: Box::new(|descriptor| {
                let image = descriptor.data.get("image").cloned().unwrap_or_default();
                let alt = descriptor.data.get("alt").cloned().unwrap_or_default();

                let mut img = Element::div().class("image").attr("src", image).attr("alt", alt);
                for (key, value) in &descriptor.data {
                    if let Some(name) = key.strip_prefix("attr:") {
                        img.set_attr(name, value.clone());
                    }
                }

                let mut children = vec![Element::header(descriptor.title.plain_text())];
                if let Some(header) = descriptor.data.get("header") {
                    children.push(Element::text(header.clone()));
                }
                children.push(img);
                if let Some(footer) = descriptor.data.get("footer") {
                    children.push(Element::text(footer.clone()));
                }

                Content::Children(children)
            }),
        }
    }
}

impl Default for TabFormat {
    fn default() -> Self {
        Self::text_list()
    }
}

impl fmt::Debug for TabFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TabFormat { .. }")
    }
}
