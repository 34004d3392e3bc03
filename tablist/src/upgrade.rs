use crate::descriptor::TabDescriptor;
use crate::element::{collect_by_class, find_element, replace_element, Content, Element};
use crate::tab_list::{TabList, TabListOptions};

/// Class marking a container that should become a tab list.
pub const CONTAINER_CLASS: &str = "tablist";
/// Class marking one static panel inside such a container.
pub const PANEL_CLASS: &str = "panel";

const TITLE_ATTR: &str = "data-title";
const SELECTED_ATTR: &str = "data-selected";

/// Build a component from a container's static panel markup.
///
/// Panels are the container's descendants carrying the `panel` class. Each
/// panel's title comes from its `data-title` attribute, falling back to the
/// text of a header child; the selected flag from `data-selected="true"`;
/// the panel content is the panel's own content, carried over verbatim. A
/// container with no matching panels yields an empty tab list.
pub fn upgrade_one(container: &Element) -> TabList {
    let mut descriptors = Vec::new();
    collect_panels(container, &mut descriptors);

    log::debug!(
        "[tablist] upgrading container {} ({} panels)",
        container.id,
        descriptors.len()
    );

    TabList::new(TabListOptions::new().tabs(descriptors))
}

/// Upgrade every `tablist`-classed container under the root, replacing each
/// in the tree by the constructed component's root node. Returns the live
/// components, which keep all further state.
pub fn upgrade_all(root: &mut Element) -> Vec<TabList> {
    let ids = collect_by_class(root, CONTAINER_CLASS);
    let mut lists = Vec::new();

    for id in ids.iter().rev() {
        // a container swallowed by an earlier replacement is gone; skip it
        let Some(container) = find_element(root, id) else {
            continue;
        };
        let list = upgrade_one(container);
        replace_element(root, id, list.el());
        lists.push(list);
    }

    lists
}

fn collect_panels(element: &Element, out: &mut Vec<TabDescriptor>) {
    for child in element.child_elements() {
        if child.has_class(PANEL_CLASS) {
            out.push(descriptor_for(child));
        } else {
            collect_panels(child, out);
        }
    }
}

fn descriptor_for(panel: &Element) -> TabDescriptor {
    let title = match panel.get_attr(TITLE_ATTR) {
        Some(title) => title.to_string(),
        None => panel
            .child_elements()
            .iter()
            .find(|child| child.kind() == "header")
            .map(|header| header.content.plain_text())
            .unwrap_or_default(),
    };

    let selected = panel.get_attr(SELECTED_ATTR) == Some("true");

    TabDescriptor {
        title: Content::Text(title),
        content: crate::descriptor::PanelContent::Ready(panel.content.clone()),
        selected,
        ..Default::default()
    }
}
