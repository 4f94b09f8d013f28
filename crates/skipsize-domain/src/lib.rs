//! Domain layer - size records, picker state, and source traits

pub mod model;
pub mod repository;
pub mod service;
