use std::cell::Cell;
use std::rc::Rc;

use tablist::{Content, TabDescriptor, TabList, TabListOptions};

fn list_of(titles: &[&str]) -> TabList {
    TabList::new(
        TabListOptions::new().tabs(
            titles
                .iter()
                .map(|title| TabDescriptor::new(*title).content(format!("{title} content"))),
        ),
    )
}

fn counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move || inner.set(inner.get() + 1))
}

// ============================================================================
// Default selection
// ============================================================================

#[test]
fn test_first_tab_selected_by_default() {
    let list = list_of(&["Alpha", "Beta"]);

    assert_eq!(list.selected(), Some(0));

    let first = list.tab_handle(0).unwrap();
    let second = list.tab_handle(1).unwrap();
    let root = list.el();

    let first_tab = tablist::find_element(&root, first.tab_id()).unwrap();
    let second_tab = tablist::find_element(&root, second.tab_id()).unwrap();
    assert!(first_tab.has_class("tablist-tab-selected"));
    assert!(!second_tab.has_class("tablist-tab-selected"));
}

#[test]
fn test_explicit_selected_flag_wins() {
    let list = TabList::new(
        TabListOptions::new()
            .tab(TabDescriptor::new("Alpha").content("alpha content"))
            .tab(TabDescriptor::new("Beta").content("beta content").selected(true)),
    );

    assert_eq!(list.selected(), Some(1));

    // only the flagged tab's content is realized
    let first = list.tab_handle(0).unwrap();
    let second = list.tab_handle(1).unwrap();
    assert!(!list.content_ready(&first));
    assert!(list.content_ready(&second));
}

#[test]
fn test_empty_construction() {
    let list = TabList::new(TabListOptions::new());
    assert!(list.is_empty());
    assert_eq!(list.selected(), None);
}

#[test]
fn test_add_tab_to_empty_list_selects_it() {
    let mut list = TabList::new(TabListOptions::new());
    let handle = list.add_tab(TabDescriptor::new("Only").content("only content"));

    assert_eq!(list.selected(), Some(0));
    assert!(list.content_ready(&handle));
}

#[test]
fn test_add_tab_does_not_steal_selection() {
    let mut list = list_of(&["Alpha"]);
    let handle = list.add_tab(TabDescriptor::new("Beta").content("beta content"));

    assert_eq!(list.selected(), Some(0));
    assert!(!list.content_ready(&handle));
}

#[test]
fn test_suppressed_add_defers_default_selection() {
    let mut list = TabList::new(TabListOptions::new());
    list.add_tab_with(TabDescriptor::new("Alpha").content("a"), true);
    assert_eq!(list.selected(), None);

    // the next unsuppressed add settles the default on the first tab
    list.add_tab(TabDescriptor::new("Beta").content("b"));
    assert_eq!(list.selected(), Some(0));
}

#[test]
fn test_bulk_construction_selects_once() {
    // the default resolution runs after the whole batch, not per add
    let (selects, on_select) = counter();
    let list = TabList::new(
        TabListOptions::new()
            .tab(TabDescriptor::new("Alpha").content("a").on_select(on_select))
            .tab(TabDescriptor::new("Beta").content("b"))
            .tab(TabDescriptor::new("Gamma").content("c")),
    );

    assert_eq!(list.selected(), Some(0));
    assert_eq!(selects.get(), 1);
}

// ============================================================================
// Lazy realization
// ============================================================================

#[test]
fn test_producer_runs_once_on_first_selection() {
    let (produced, _) = counter();
    let inner = Rc::clone(&produced);

    let mut list = TabList::new(
        TabListOptions::new()
            .tab(TabDescriptor::new("Lazy").content_with(move || {
                inner.set(inner.get() + 1);
                Content::Text("expensive".into())
            }))
            .tab(TabDescriptor::new("Eager").content("cheap").selected(true)),
    );

    // never selected, never produced
    assert_eq!(produced.get(), 0);

    let lazy = list.tab_handle(0).unwrap();
    list.select(&lazy);
    assert_eq!(produced.get(), 1);
    assert!(list.content_ready(&lazy));

    // reselection does not re-run the producer
    list.select(&lazy);
    list.select(&lazy);
    assert_eq!(produced.get(), 1);
}

#[test]
fn test_realized_content_lands_in_panel() {
    let list = TabList::new(
        TabListOptions::new().tab(TabDescriptor::new("Alpha").content("alpha body")),
    );

    let handle = list.tab_handle(0).unwrap();
    let root = list.el();
    let panel = tablist::find_element(&root, handle.panel_id()).unwrap();
    assert_eq!(panel.content, Content::Text("alpha body".into()));
}

// ============================================================================
// Callback policy
// ============================================================================

#[test]
fn test_on_select_refires_every_selection() {
    let (selects, on_select) = counter();
    let (produced, _) = counter();
    let inner = Rc::clone(&produced);

    let mut list = TabList::new(
        TabListOptions::new().tab(
            TabDescriptor::new("Alpha")
                .content_with(move || {
                    inner.set(inner.get() + 1);
                    Content::Text("body".into())
                })
                .on_select(on_select),
        ),
    );

    // initial default selection
    assert_eq!(selects.get(), 1);

    let handle = list.tab_handle(0).unwrap();
    list.select(&handle);
    list.select(&handle);

    assert_eq!(selects.get(), 3);
    assert_eq!(produced.get(), 1);
}

#[test]
fn test_on_deselect_fires_only_when_selection_moves() {
    let (alpha_deselects, alpha_on_deselect) = counter();
    let (beta_deselects, beta_on_deselect) = counter();

    let mut list = TabList::new(
        TabListOptions::new()
            .tab(
                TabDescriptor::new("Alpha")
                    .content("a")
                    .on_deselect(alpha_on_deselect),
            )
            .tab(
                TabDescriptor::new("Beta")
                    .content("b")
                    .on_deselect(beta_on_deselect),
            ),
    );

    // construction selected Alpha; nothing was deselected
    assert_eq!(alpha_deselects.get(), 0);

    let alpha = list.tab_handle(0).unwrap();
    let beta = list.tab_handle(1).unwrap();

    list.select(&beta);
    assert_eq!(alpha_deselects.get(), 1);

    // reselecting the selected tab fires no deselect
    list.select(&beta);
    assert_eq!(alpha_deselects.get(), 1);
    assert_eq!(beta_deselects.get(), 0);

    list.select(&alpha);
    assert_eq!(beta_deselects.get(), 1);
}

#[test]
fn test_destroy_fires_on_destroy_once_per_tab() {
    let (first_drops, first_on_destroy) = counter();
    let (second_drops, second_on_destroy) = counter();

    let list = TabList::new(
        TabListOptions::new()
            .tab(
                TabDescriptor::new("Alpha")
                    .content("a")
                    .on_destroy(first_on_destroy),
            )
            .tab(
                TabDescriptor::new("Beta")
                    .content("b")
                    .on_destroy(second_on_destroy),
            ),
    );

    list.destroy();

    assert_eq!(first_drops.get(), 1);
    assert_eq!(second_drops.get(), 1);
}

// ============================================================================
// Mutual exclusivity
// ============================================================================

#[test]
fn test_exactly_one_selected_tab_and_panel() {
    let mut list = list_of(&["Alpha", "Beta", "Gamma"]);
    let beta = list.tab_handle(1).unwrap();
    list.select(&beta);

    let root = list.el();
    let mut selected_tabs = 0;
    let mut selected_panels = 0;
    for i in 0..list.len() {
        let handle = list.tab_handle(i).unwrap();
        let tab = tablist::find_element(&root, handle.tab_id()).unwrap();
        let panel = tablist::find_element(&root, handle.panel_id()).unwrap();
        if tab.has_class("tablist-tab-selected") {
            selected_tabs += 1;
        }
        if panel.has_class("tablist-panel-selected") {
            selected_panels += 1;
        }
    }

    assert_eq!(selected_tabs, 1);
    assert_eq!(selected_panels, 1);
}

#[test]
fn test_stale_handle_is_ignored() {
    let mut first = list_of(&["Alpha", "Beta"]);
    let second = list_of(&["Gamma", "Delta"]);

    let foreign = second.tab_handle(1).unwrap();
    first.select(&foreign);

    assert_eq!(first.selected(), Some(0));
}
