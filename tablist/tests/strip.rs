use tablist::{clamp_offset, Event, MouseButton, TabDescriptor, TabList, TabListOptions};

// Tab widths are content + one padding column each side, with a one-column
// gap: One(5) Two(5) Three(7) Four(6) Five(6) at x = 0, 6, 12, 20, 27.
// Total strip width 33; with a 20-column viewport the offset range is
// [-13, 0].
fn strip_list() -> TabList {
    TabList::new(
        TabListOptions::new()
            .viewport_width(20)
            .tabs(
                ["One", "Two", "Three", "Four", "Five"]
                    .iter()
                    .map(|title| TabDescriptor::new(*title).content(format!("{title} content"))),
            ),
    )
}

fn press(target: &str, x: u16) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x,
        y: 0,
        button: MouseButton::Left,
    }
}

fn drag(x: u16) -> Event {
    Event::Drag {
        target: None,
        x,
        y: 0,
        button: MouseButton::Left,
    }
}

fn release(x: u16) -> Event {
    Event::Release {
        target: None,
        x,
        y: 0,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Programmatic centering
// ============================================================================

#[test]
fn test_centering_clamps_at_the_left_edge() {
    let list = strip_list();
    // first tab selected by default; its center cannot be pushed right
    assert_eq!(list.strip_offset(), 0);
}

#[test]
fn test_centering_clamps_at_the_right_edge() {
    let mut list = strip_list();
    let last = list.tab_handle(4).unwrap();
    list.select(&last);
    assert_eq!(list.strip_offset(), -13);
}

#[test]
fn test_centering_in_the_middle_is_exact() {
    let mut list = strip_list();
    let middle = list.tab_handle(2).unwrap();
    list.select(&middle);
    // -x + viewport/2 - width/2 = -12 + 10 - 3
    assert_eq!(list.strip_offset(), -5);
}

#[test]
fn test_offset_stays_in_range_for_every_selection() {
    let mut list = strip_list();
    for i in 0..list.len() {
        let handle = list.tab_handle(i).unwrap();
        list.select(&handle);
        assert!(list.strip_offset() <= 0);
        assert!(list.strip_offset() >= -13);
    }
}

// ============================================================================
// Manual drag
// ============================================================================

#[test]
fn test_drag_moves_the_strip_unclamped_until_release() {
    let mut list = strip_list();
    let nav = list.nav_id().to_string();

    assert!(list.process_event(&press(&nav, 10)));
    assert!(list.process_event(&drag(30)));

    // overscroll is visible mid-gesture
    assert_eq!(list.strip_offset(), 20);

    assert!(list.process_event(&release(30)));
    assert_eq!(list.strip_offset(), 0);
}

#[test]
fn test_drag_commit_clamps_to_the_far_end() {
    let mut list = strip_list();
    let nav = list.nav_id().to_string();

    list.process_event(&press(&nav, 30));
    list.process_event(&drag(10));
    assert_eq!(list.strip_offset(), -20);

    list.process_event(&release(10));
    assert_eq!(list.strip_offset(), -13);
}

#[test]
fn test_drag_does_not_change_selection() {
    let mut list = strip_list();
    let nav = list.nav_id().to_string();

    list.process_event(&press(&nav, 18));
    list.process_event(&drag(5));
    list.process_event(&release(5));

    assert_eq!(list.selected(), Some(0));
}

#[test]
fn test_moves_without_a_gesture_are_ignored() {
    let mut list = strip_list();
    assert!(!list.process_event(&drag(10)));
    assert!(!list.process_event(&release(10)));
    assert_eq!(list.strip_offset(), 0);
}

// ============================================================================
// Click vs drag
// ============================================================================

#[test]
fn test_release_within_threshold_selects_the_pressed_tab() {
    let mut list = strip_list();
    let second = list.tab_handle(1).unwrap();

    list.process_event(&press(second.tab_id(), 10));
    list.process_event(&drag(14));
    list.process_event(&release(14));

    assert_eq!(list.selected(), Some(1));
}

#[test]
fn test_release_at_exactly_the_threshold_still_selects() {
    let mut list = strip_list();
    let second = list.tab_handle(1).unwrap();

    list.process_event(&press(second.tab_id(), 10));
    list.process_event(&release(15));

    assert_eq!(list.selected(), Some(1));
}

#[test]
fn test_release_past_the_threshold_suppresses_selection() {
    let mut list = strip_list();
    let second = list.tab_handle(1).unwrap();

    list.process_event(&press(second.tab_id(), 10));
    list.process_event(&drag(16));
    list.process_event(&release(16));

    assert_eq!(list.selected(), Some(0));
}

#[test]
fn test_threshold_uses_net_displacement_not_per_move() {
    let mut list = strip_list();
    let second = list.tab_handle(1).unwrap();

    // wanders past the threshold but returns; the release decides
    list.process_event(&press(second.tab_id(), 10));
    list.process_event(&drag(20));
    list.process_event(&drag(11));
    list.process_event(&release(11));

    assert_eq!(list.selected(), Some(1));
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_cancel_commits_the_clamped_offset() {
    let mut list = strip_list();
    let nav = list.nav_id().to_string();

    list.process_event(&press(&nav, 10));
    list.process_event(&drag(50));
    assert_eq!(list.strip_offset(), 40);

    assert!(list.process_event(&Event::Cancel));
    assert_eq!(list.strip_offset(), 0);
    assert_eq!(list.selected(), Some(0));

    // the gesture is gone; further moves do nothing
    assert!(!list.process_event(&drag(5)));
    assert!(!list.process_event(&Event::Cancel));
}

#[test]
fn test_smooth_class_is_dropped_while_dragging() {
    let mut list = strip_list();
    let nav_id = list.nav_id().to_string();

    let smooth = |list: &TabList| {
        tablist::find_element(&list.el(), &nav_id)
            .unwrap()
            .has_class("smooth")
    };

    assert!(smooth(&list));
    list.process_event(&press(&nav_id, 10));
    assert!(!smooth(&list));
    list.process_event(&release(12));
    assert!(smooth(&list));
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_clamp_offset_bounds() {
    assert_eq!(clamp_offset(5, 20, 100), 0);
    assert_eq!(clamp_offset(-200, 20, 100), -80);
    assert_eq!(clamp_offset(-40, 20, 100), -40);
}

#[test]
fn test_short_strip_never_scrolls() {
    assert_eq!(clamp_offset(-10, 50, 30), 0);
    assert_eq!(clamp_offset(10, 50, 30), 0);
}

#[test]
fn test_tab_at_respects_the_offset() {
    let list = strip_list();

    assert_eq!(
        list.tab_at(0).as_deref(),
        Some(list.tab_handle(0).unwrap().tab_id())
    );
    // the gap between tabs hits nothing
    assert_eq!(list.tab_at(5), None);
    assert_eq!(
        list.tab_at(6).as_deref(),
        Some(list.tab_handle(1).unwrap().tab_id())
    );
}
