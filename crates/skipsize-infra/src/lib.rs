//! Infrastructure layer - size source implementations

pub mod file_source;
pub mod http_source;

pub use file_source::FileSkipSizeSource;
pub use http_source::{HttpSkipSizeSource, DEFAULT_API_BASE_URL};
