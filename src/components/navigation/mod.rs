pub mod external_link;
pub mod mobile_navbar;
pub mod nav_link;
pub mod sidebar;
pub mod sidebar_footer;

pub use external_link::ExternalLink;
pub use mobile_navbar::MobileNavbar;
pub use nav_link::NavLink;
pub use sidebar::Sidebar;
pub use sidebar_footer::SidebarFooter;
