pub mod descriptor;
pub mod element;
pub mod event;
pub mod format;
pub mod indicator;
pub mod layout;
pub mod render;
pub mod strip;
pub mod tab_list;
pub mod text;
pub mod types;
pub mod upgrade;

pub use descriptor::{Callback, PanelContent, TabDescriptor};
pub use element::{
    collect_by_class, find_element, find_element_mut, next_node_id, replace_element, Content,
    Element,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use format::TabFormat;
pub use indicator::PositionIndicator;
pub use layout::{measure_strip, Rect, StripLayout};
pub use render::render_lines;
pub use strip::{clamp_offset, GestureEnd, StripState, DRAG_THRESHOLD};
pub use tab_list::{TabHandle, TabList, TabListOptions};
pub use types::{Role, TabPosition};
pub use upgrade::{upgrade_all, upgrade_one};
