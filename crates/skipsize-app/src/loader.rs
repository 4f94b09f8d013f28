//! Background loading of skip sizes
//!
//! One fetch per loader. Failures are logged and delivered as an empty list.
//! Dropping the loader discards a response that arrives afterwards.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use skipsize_domain::model::{Location, SizeRecord};
use skipsize_domain::repository::SkipSizeSource;

/// Sizes delivered by a finished load
#[derive(Debug, Clone)]
pub struct LoadedSizes {
    pub sizes: Vec<SizeRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedSizes {
    fn now(sizes: Vec<SizeRecord>) -> Self {
        Self {
            sizes,
            loaded_at: Utc::now(),
        }
    }
}

/// Fetch sizes, turning any failure into an empty list
pub fn load_sizes_or_empty<S: SkipSizeSource + ?Sized>(source: &S, location: &Location) -> Vec<SizeRecord> {
    match source.fetch_sizes(location) {
        Ok(sizes) => {
            debug!("Fetched {} sizes for {}", sizes.len(), location);
            sizes
        }
        Err(e) => {
            warn!("Could not load skip sizes for {}: {}", location, e);
            Vec::new()
        }
    }
}

/// Handle to a fetch running on a background thread
pub struct SizeLoader {
    receiver: Option<Receiver<LoadedSizes>>,
}

impl SizeLoader {
    /// Start the fetch
    pub fn spawn<S>(source: S, location: Location) -> Self
    where
        S: SkipSizeSource + Send + 'static,
    {
        let (sender, receiver) = channel();
        thread::spawn(move || {
            let sizes = load_sizes_or_empty(&source, &location);
            if sender.send(LoadedSizes::now(sizes)).is_err() {
                debug!("Size loader dropped before the response for {} arrived", location);
            }
        });
        Self {
            receiver: Some(receiver),
        }
    }

    /// Non-blocking check. Yields the result exactly once.
    pub fn poll(&mut self) -> Option<LoadedSizes> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(loaded) => {
                self.receiver = None;
                Some(loaded)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Size loader thread exited without a result");
                self.receiver = None;
                Some(LoadedSizes::now(Vec::new()))
            }
        }
    }

    /// Block until the fetch finishes
    pub fn wait(mut self) -> LoadedSizes {
        match self.receiver.take().map(|r| r.recv()) {
            Some(Ok(loaded)) => loaded,
            Some(Err(_)) => {
                warn!("Size loader thread exited without a result");
                LoadedSizes::now(Vec::new())
            }
            None => LoadedSizes::now(Vec::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }
}
