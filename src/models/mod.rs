// Module exports for models

pub mod activity;
pub mod category;
pub mod filter;
pub mod settings;
pub mod week;
