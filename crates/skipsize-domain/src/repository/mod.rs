//! Source trait for skip size data

use crate::model::{Location, SizeRecord};
use skipsize_types::Error;

/// Anything that can produce the skip sizes offered at a location
pub trait SkipSizeSource {
    /// Fetch all sizes offered at `location`, in the order the source returns them
    fn fetch_sizes(&self, location: &Location) -> Result<Vec<SizeRecord>, Error>;
}

impl<S: SkipSizeSource + ?Sized> SkipSizeSource for Box<S> {
    fn fetch_sizes(&self, location: &Location) -> Result<Vec<SizeRecord>, Error> {
        (**self).fetch_sizes(location)
    }
}
