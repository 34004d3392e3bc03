/// Accessibility role carried by an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TabList,
    Tab,
    TabPanel,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::TabList => "tablist",
            Role::Tab => "tab",
            Role::TabPanel => "tabpanel",
        }
    }
}

/// Where the tab strip sits relative to the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPosition {
    #[default]
    Top,
    Left,
    Right,
}

impl TabPosition {
    pub const fn class(self) -> &'static str {
        match self {
            TabPosition::Top => "tablist-top",
            TabPosition::Left => "tablist-left",
            TabPosition::Right => "tablist-right",
        }
    }
}
