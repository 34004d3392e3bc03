use crate::descriptor::TabDescriptor;
use crate::element::{next_node_id, Element};
use crate::event::{Event, Key, MouseButton};
use crate::format::TabFormat;
use crate::indicator::PositionIndicator;
use crate::layout::{measure_strip, StripLayout};
use crate::strip::StripState;
use crate::types::{Role, TabPosition};

const DEFAULT_VIEWPORT: u16 = 80;

/// Construction contract for [`TabList`].
#[derive(Debug, Default)]
pub struct TabListOptions {
    /// Pre-existing root element to build into; a fresh section otherwise.
    pub el: Option<Element>,
    /// Markup placed in a header above the strip.
    pub header: Option<String>,
    pub tab_position: TabPosition,
    /// Initial descriptors; each is passed through the add-tab path.
    pub tabs: Vec<TabDescriptor>,
    pub format: TabFormat,
    /// Width of the strip viewport, in columns.
    pub viewport_width: u16,
}

impl TabListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn el(mut self, el: Element) -> Self {
        self.el = Some(el);
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn tab_position(mut self, position: TabPosition) -> Self {
        self.tab_position = position;
        self
    }

    pub fn tab(mut self, descriptor: TabDescriptor) -> Self {
        self.tabs.push(descriptor);
        self
    }

    pub fn tabs(mut self, descriptors: impl IntoIterator<Item = TabDescriptor>) -> Self {
        self.tabs.extend(descriptors);
        self
    }

    pub fn format(mut self, format: TabFormat) -> Self {
        self.format = format;
        self
    }

    pub fn viewport_width(mut self, width: u16) -> Self {
        self.viewport_width = width;
        self
    }
}

/// One registered tab: its descriptor and the two rendering-surface nodes it
/// exclusively owns. Records are created in registration order and never
/// reordered or removed before teardown.
#[derive(Debug)]
struct TabRecord {
    descriptor: TabDescriptor,
    tab: Element,
    panel: Element,
    /// Monotonic: false until the panel content has been realized once.
    content_ready: bool,
}

/// Token returned by [`TabList::add_tab`]; selection is re-invoked through
/// the owning component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHandle {
    index: usize,
    tab_id: String,
    panel_id: String,
}

impl TabHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }
}

/// An accessible, scrollable tab list.
///
/// Holds the tab registry, the selection state, and the strip positioner.
/// All transitions happen synchronously under `&mut self`; the view is
/// assembled on demand by [`TabList::el`].
#[derive(Debug)]
pub struct TabList {
    base: Element,
    header: Option<Element>,
    backward: Element,
    forward: Element,
    nav_id: String,
    container_id: String,
    indicator_id: String,

    tabs: Vec<TabRecord>,
    selected: Option<usize>,

    format: TabFormat,
    strip: StripState,
    indicator: PositionIndicator,
    viewport_width: u16,
}

impl TabList {
    pub fn new(options: TabListOptions) -> Self {
        let TabListOptions {
            el,
            header,
            tab_position,
            tabs,
            format,
            viewport_width,
        } = options;

        let mut base = el.unwrap_or_else(Element::section);
        base.add_class("tablist");
        base.add_class(tab_position.class());

        let header = header.map(|markup| Element::header(markup).class("tablist-header"));

        let backward = Element::div()
            .class("tablist-backward-button")
            .child(Element::div().class("image"));
        let forward = Element::div()
            .class("tablist-forward-button")
            .child(Element::div().class("image"));

        let nav_id = format!("tablist-nav-{}", next_node_id());
        let container_id = format!("{nav_id}-container");
        let indicator_id = format!("{nav_id}-indicator");

        let viewport_width = if viewport_width == 0 {
            DEFAULT_VIEWPORT
        } else {
            viewport_width
        };

        let mut list = Self {
            base,
            header,
            backward,
            forward,
            nav_id,
            container_id,
            indicator_id,
            tabs: Vec::new(),
            selected: None,
            format,
            strip: StripState::new(),
            indicator: PositionIndicator::new(),
            viewport_width,
        };

        // add any tabs provided when constructing; selection defaults are
        // resolved once, after the whole batch
        for descriptor in tabs {
            list.add_tab_with(descriptor, true);
        }
        list.ensure_selected();

        list
    }

    /// Add a tab to this list.
    ///
    /// The summary is rendered eagerly through the format hook; panel
    /// content stays unrealized until the tab is first selected. A
    /// descriptor flagged `selected` is selected immediately; otherwise,
    /// if nothing is selected yet, the default resolution runs.
    pub fn add_tab(&mut self, descriptor: TabDescriptor) -> TabHandle {
        self.add_tab_with(descriptor, false)
    }

    /// Add a tab, optionally suppressing the default-selection resolution.
    /// Callers batching several adds pass `true` and settle the default once
    /// at the end, instead of once per add.
    pub fn add_tab_with(
        &mut self,
        descriptor: TabDescriptor,
        suppress_auto_select: bool,
    ) -> TabHandle {
        // assign unique ids to this tab's element pair
        let seq = next_node_id();
        let tab_id = format!("tablist-tab-{seq}");
        let panel_id = format!("tablist-panel-{seq}");

        // summary element
        let mut tab = Element::section()
            .id(tab_id.clone())
            .class("tablist-tab")
            .role(Role::Tab)
            .attr("tabindex", "-1")
            .attr("aria-controls", panel_id.clone());
        tab.set_content((self.format.tab)(&descriptor));

        // detail element; content attached on first selection
        let panel = Element::section()
            .id(panel_id.clone())
            .class("tablist-panel")
            .role(Role::TabPanel)
            .attr("aria-labelledby", tab_id.clone());

        let select_now = descriptor.selected;
        let index = self.tabs.len();
        self.tabs.push(TabRecord {
            descriptor,
            tab,
            panel,
            content_ready: false,
        });

        log::debug!("[tablist] added tab {index} ({tab_id})");

        // select the specified item, or resolve the default
        if select_now {
            self.select_at(index);
        } else if !suppress_auto_select {
            self.ensure_selected();
        }

        TabHandle {
            index,
            tab_id,
            panel_id,
        }
    }

    /// Select a tab through its handle. Stale handles from another list are
    /// ignored.
    pub fn select(&mut self, handle: &TabHandle) {
        match self.tabs.get(handle.index) {
            Some(record) if record.tab.id == handle.tab_id => self.select_at(handle.index),
            _ => log::debug!("[tablist] ignoring stale handle {}", handle.tab_id),
        }
    }

    /// Select the tab after the current one, wrapping from the last to the
    /// first.
    pub fn select_next(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let index = match self.selected {
            Some(i) if i + 1 < self.tabs.len() => i + 1,
            _ => 0,
        };
        self.select_at(index);
    }

    /// Select the tab before the current one, wrapping from the first to the
    /// last.
    pub fn select_previous(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let index = match self.selected {
            Some(i) if i > 0 => i - 1,
            _ => self.tabs.len() - 1,
        };
        self.select_at(index);
    }

    /// The selection transition.
    ///
    /// Re-selecting the already-selected tab is not short-circuited: content
    /// realization is guarded, but `on_select` fires again, the strip
    /// re-centers, and the indicator restarts. That repeat-trigger behavior
    /// is intentional.
    fn select_at(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }

        let previously_selected = self.selected;

        // realize panel content, if needed; the flag flips before any host
        // callback runs so a callback failure cannot re-run realization
        if !self.tabs[index].content_ready {
            let format_panel = &self.format.panel;
            let record = &mut self.tabs[index];
            let content = format_panel(&mut record.descriptor);
            record.panel.set_content(content);
            record.content_ready = true;
            log::debug!("[tablist] realized content for tab {index}");
        }

        for (i, record) in self.tabs.iter_mut().enumerate() {
            if i == index {
                record.tab.add_class("tablist-tab-selected");
                record.panel.add_class("tablist-panel-selected");
            } else {
                record.tab.remove_class("tablist-tab-selected");
                record.panel.remove_class("tablist-panel-selected");
                // notify the outgoing tab, if the selection actually moved
                if previously_selected == Some(i) {
                    if let Some(callback) = record.descriptor.on_deselect.as_mut() {
                        callback();
                    }
                }
            }
        }

        // notify the tab it is visible, on every selection
        if let Some(callback) = self.tabs[index].descriptor.on_select.as_mut() {
            callback();
        }

        self.selected = Some(index);
        self.update_tab_index();

        let layout = self.strip_layout();
        self.strip.center_on(&layout, index, self.viewport_width);

        self.indicator.show(index + 1, self.tabs.len());

        log::debug!(
            "[tablist] selected tab {index} (was {previously_selected:?}), offset={}",
            self.strip.offset()
        );
    }

    /// Select the first tab if nothing is selected yet. Runs once after bulk
    /// construction, and after each individual post-construction add.
    fn ensure_selected(&mut self) {
        if self.selected.is_none() && !self.tabs.is_empty() {
            self.select_at(0);
        }
    }

    /// Exactly one tab is keyboard-reachable and visible to assistive
    /// technology: the selected one.
    fn update_tab_index(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };

        for (i, record) in self.tabs.iter_mut().enumerate() {
            if i == selected {
                record.tab.set_attr("tabindex", "0");
                record.tab.set_attr("aria-hidden", "false");
                record.tab.focusable = true;
                record.tab.focused = true;
            } else {
                record.tab.set_attr("tabindex", "-1");
                record.tab.set_attr("aria-hidden", "true");
                record.tab.focusable = false;
                record.tab.focused = false;
            }
        }
    }

    /// Route a host event through the component.
    ///
    /// Returns true when the event was handled; for up/down arrow keys this
    /// is the signal to suppress the host's default vertical scroll.
    pub fn process_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if modifiers.none() && self.in_strip(target) => match key {
                Key::Left | Key::Up => {
                    self.select_previous();
                    true
                }
                Key::Right | Key::Down => {
                    self.select_next();
                    true
                }
                _ => false,
            },

            Event::Click {
                target: Some(target),
                x,
                button: MouseButton::Left,
                ..
            } => {
                if *target == self.backward.id {
                    self.select_previous();
                    true
                } else if *target == self.forward.id {
                    self.select_next();
                    true
                } else if *target == self.nav_id || self.index_of_tab(target).is_some() {
                    let pressed = self
                        .index_of_tab(target)
                        .map(|i| self.tabs[i].tab.id.clone());
                    self.strip.begin_drag(i32::from(*x), pressed);
                    true
                } else {
                    false
                }
            }

            Event::Drag { x, .. } => self.strip.drag_to(i32::from(*x)),

            Event::Release { x, .. } => {
                let strip_width = self.strip_layout().total_width();
                match self
                    .strip
                    .end_drag(i32::from(*x), self.viewport_width, strip_width)
                {
                    Some(end) => {
                        if !end.dragged {
                            if let Some(index) =
                                end.pressed.as_deref().and_then(|id| self.index_of_tab(id))
                            {
                                self.select_at(index);
                            }
                        }
                        true
                    }
                    None => false,
                }
            }

            Event::Cancel => {
                if self.strip.dragging() {
                    let strip_width = self.strip_layout().total_width();
                    self.strip.cancel_drag(self.viewport_width, strip_width);
                    true
                } else {
                    false
                }
            }

            _ => false,
        }
    }

    /// Tear the component down, firing each tab's `on_destroy` exactly once.
    /// Consuming `self` invalidates every path back into the component.
    pub fn destroy(mut self) {
        for record in &mut self.tabs {
            if let Some(callback) = record.descriptor.on_destroy.as_mut() {
                callback();
            }
        }
        log::debug!("[tablist] destroyed ({} tabs)", self.tabs.len());
    }

    /// Assemble the current view tree.
    pub fn el(&self) -> Element {
        let mut children = Vec::new();

        if let Some(header) = &self.header {
            children.push(header.clone());
        }

        children.push(self.backward.clone());

        let mut nav = Element::nav()
            .id(self.nav_id.clone())
            .role(Role::TabList)
            .scroll_offset(self.strip.offset(), 0)
            .children(self.tabs.iter().map(|record| record.tab.clone()));
        if self.strip.smooth() {
            nav.add_class("smooth");
        }
        children.push(
            Element::div()
                .id(self.container_id.clone())
                .class("tablist-container")
                .child(nav),
        );

        children.push(self.forward.clone());
        children.extend(self.tabs.iter().map(|record| record.panel.clone()));

        if !self.indicator.is_blank() {
            let mut span = Element::span(self.indicator.text())
                .id(self.indicator_id.clone())
                .class("tab-position-indicator");
            if self.indicator.is_faded() {
                span.add_class("fade");
            }
            children.push(span);
        }

        self.base.clone().children(children)
    }

    // Accessors

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the currently selected tab.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the panel content behind this handle has been realized.
    pub fn content_ready(&self, handle: &TabHandle) -> bool {
        self.tabs
            .get(handle.index)
            .is_some_and(|record| record.tab.id == handle.tab_id && record.content_ready)
    }

    /// Handle for an already-registered tab.
    pub fn tab_handle(&self, index: usize) -> Option<TabHandle> {
        self.tabs.get(index).map(|record| TabHandle {
            index,
            tab_id: record.tab.id.clone(),
            panel_id: record.panel.id.clone(),
        })
    }

    pub fn nav_id(&self) -> &str {
        &self.nav_id
    }

    pub fn backward_id(&self) -> &str {
        &self.backward.id
    }

    pub fn forward_id(&self) -> &str {
        &self.forward.id
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Committed strip offset (live value mid-gesture).
    pub fn strip_offset(&self) -> i32 {
        self.strip.offset()
    }

    /// Strip metrics for the current registry.
    pub fn strip_layout(&self) -> StripLayout {
        measure_strip(self.tabs.iter().map(|record| &record.tab))
    }

    /// ID of the tab at the given viewport column, under the current offset.
    /// Used by hosts that hit-test the strip line themselves.
    pub fn tab_at(&self, x: u16) -> Option<String> {
        let strip_x = i32::from(x) - self.strip.offset();
        if strip_x < 0 {
            return None;
        }
        let layout = self.strip_layout();
        layout
            .tab_at(strip_x as u16)
            .map(|index| self.tabs[index].tab.id.clone())
    }

    fn index_of_tab(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|record| record.tab.id == id)
    }

    fn in_strip(&self, target: &str) -> bool {
        target == self.nav_id || self.index_of_tab(target).is_some()
    }
}
