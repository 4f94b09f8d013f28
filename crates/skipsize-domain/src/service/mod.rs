//! Domain services

pub mod cards;
pub mod picker;

pub use cards::{format_price, SizeCard};
pub use picker::{SelectOutcome, SizePicker};
