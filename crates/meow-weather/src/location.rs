//! Where the user is, if they let us know.
//!
//! A lookup that is denied, fails or takes longer than the timeout is the
//! same as having no coordinates at all.

use crate::types::{Location, LocationError};
use std::future::Future;
use std::time::Duration;

/// Default wait before giving up on a location.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can produce the user's current location.
pub trait LocationSource: Send + Sync {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Coordinates from the command line or config file.
///
/// `None` behaves like a denied permission prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    coordinates: Option<(f64, f64)>,
}

impl FixedLocation {
    pub fn new(coordinates: Option<(f64, f64)>) -> Self {
        Self { coordinates }
    }

    pub fn denied() -> Self {
        Self { coordinates: None }
    }
}

impl LocationSource for FixedLocation {
    async fn locate(&self) -> Result<Location, LocationError> {
        self.coordinates
            .map(|(lat, lon)| Location::new(lat, lon))
            .ok_or(LocationError::PermissionDenied)
    }
}

/// Ask the source for a location, giving up after `timeout`.
pub async fn resolve_location<S: LocationSource>(source: &S, timeout: Duration) -> Option<Location> {
    match tokio::time::timeout(timeout, source.locate()).await {
        Ok(Ok(location)) => {
            tracing::info!("Got location: {}, {}", location.latitude, location.longitude);
            Some(location)
        }
        Ok(Err(e)) => {
            tracing::warn!("Location unavailable: {}", e);
            None
        }
        Err(_) => {
            tracing::warn!("{} after {:?}", LocationError::Timeout, timeout);
            None
        }
    }
}
