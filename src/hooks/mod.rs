pub mod use_active_section;
pub mod use_sidebar_state;
pub mod use_viewport;
pub mod use_window_listener;

pub use use_active_section::use_active_section;
pub use use_sidebar_state::{use_sidebar_state, SidebarState};
pub use use_viewport::use_viewport;
pub use use_window_listener::use_window_listener;
