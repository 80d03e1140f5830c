mod footer;
mod nav_bar;
mod paywall_modal;
mod progress_bar;
mod risk_chart;
mod toast_host;

pub use footer::Footer;
pub use nav_bar::NavBar;
pub use paywall_modal::PaywallModal;
pub use progress_bar::ProgressBar;
pub use risk_chart::{RiskBarChart, RiskPieChart};
pub use toast_host::ToastHost;
