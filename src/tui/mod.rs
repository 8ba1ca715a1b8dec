//! Interactive terminal dashboard using ratatui.
//!
//! Two pages are available:
//! - Home: a landing page describing the tool
//! - Calculator: the input form with score gauge, skill bars, radar chart
//!   and suggestions
//!
//! # Architecture
//!
//! The current [`Page`] is a plain value held by [`App`]; key handlers
//! move between pages explicitly and the renderer dispatches on it.

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme};

pub use app::{step_for, App, FormState, Page};
pub use events::{handle_key_event, Event, EventHandler};
pub use ui::{render, run_tui};
