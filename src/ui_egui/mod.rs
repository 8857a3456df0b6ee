mod app;
mod settings_dialog;
pub mod theme;
mod views;

pub use app::{AppContext, TripCalendarApp};
