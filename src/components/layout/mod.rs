pub mod content_area;
pub mod portfolio_layout;

pub use content_area::ContentArea;
pub use portfolio_layout::PortfolioLayout;
