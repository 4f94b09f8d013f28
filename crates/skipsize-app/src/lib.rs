//! Application service layer - config, source selection, background loading

pub mod config;
pub mod loader;
pub mod repository;
