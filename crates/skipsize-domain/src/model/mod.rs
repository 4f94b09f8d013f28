//! Domain model types

pub mod location;
pub mod size_record;

pub use location::Location;
pub use size_record::SizeRecord;
