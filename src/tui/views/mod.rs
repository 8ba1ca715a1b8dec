//! Page views for the dashboard.

mod calculator;
mod home;

pub use calculator::render_calculator;
pub use home::render_home;
