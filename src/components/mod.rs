pub(crate) mod dashboard_card;
mod footer;
mod header;
mod toggle_button;

pub use dashboard_card::DashboardCard;
pub use footer::Footer;
pub use header::Header;
pub use toggle_button::ToggleButton;
