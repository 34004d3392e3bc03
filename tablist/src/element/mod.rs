mod content;
mod node;

pub use content::Content;
pub use node::{next_node_id, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Replace the element with the given ID by a new element, in place.
/// Returns true if a replacement happened. The root itself can be replaced.
pub fn replace_element(root: &mut Element, id: &str, replacement: Element) -> bool {
    let mut replacement = Some(replacement);
    replace_recursive(root, id, &mut replacement)
}

fn replace_recursive(element: &mut Element, id: &str, replacement: &mut Option<Element>) -> bool {
    if element.id == id {
        if let Some(new) = replacement.take() {
            *element = new;
            return true;
        }
        return false;
    }

    if let Content::Children(children) = &mut element.content {
        for child in children {
            if replace_recursive(child, id, replacement) {
                return true;
            }
        }
    }

    false
}

/// Collect the IDs of all descendants (including the root) carrying the
/// given class, in tree order.
pub fn collect_by_class(root: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_by_class_recursive(root, class, &mut result);
    result
}

fn collect_by_class_recursive(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_class_recursive(child, class, result);
        }
    }
}
