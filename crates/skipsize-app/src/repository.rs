//! Size source selection

use log::info;

use skipsize_domain::repository::SkipSizeSource;
use skipsize_infra::{FileSkipSizeSource, HttpSkipSizeSource};
use skipsize_types::Result;

use crate::config::Config;

/// Open the size source the config points at: the offline catalogue when
/// one is set, the remote API otherwise
pub fn open_size_source(config: &Config) -> Result<Box<dyn SkipSizeSource + Send>> {
    if let Some(ref path) = config.catalogue_path {
        let source = FileSkipSizeSource::new(path.clone());
        info!("Using offline catalogue {}", source.path().display());
        return Ok(Box::new(source));
    }
    let source = HttpSkipSizeSource::new(config.api_base_url.clone(), config.timeout())?;
    info!("Using size API {}", source.endpoint());
    Ok(Box::new(source))
}
