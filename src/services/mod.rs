// Service module exports

pub mod activity;
pub mod config;
pub mod database;
pub mod export;
pub mod layout;
pub mod loader;
pub mod settings;
pub mod source;
pub mod summary;
