//! Location acquisition for the calculation core.
//!
//! Geolocation is a platform capability; the math crates never touch it.
//! [`LocationProvider`] is the injected port, with an IP-geolocation
//! implementation for headless use and a fixed provider for tests and
//! fallbacks. Acquisition failures degrade to the Kaaba coordinate rather
//! than blocking, matching the behavior expected of the consuming UI.

use mihrab_types::{Coordinate, KAABA, MihrabError};
use serde::Deserialize;
use std::time::Duration;

/// Default IP geolocation endpoint (returns `{"lat": .., "lon": ..}`).
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/";

/// How long a location fix may take before the caller falls back.
pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Port for obtaining the user's coordinate.
pub trait LocationProvider {
    /// Resolves a coordinate, or an error the caller may turn into a
    /// fallback.
    fn locate(&self) -> impl Future<Output = Result<Coordinate, MihrabError>> + Send;
}

/// Provider that always yields a fixed coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinate, MihrabError> {
        Ok(self.0)
    }
}

/// IP-based geolocation over HTTP.
///
/// City-level accuracy only, which is ample for prayer times and qibla.
/// The endpoint is configurable so tests can point it at a local mock.
#[derive(Debug, Clone)]
pub struct IpLocationProvider {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    lat: f64,
    lon: f64,
}

impl IpLocationProvider {
    /// Creates a provider against the default public endpoint.
    pub fn new() -> Result<Self, MihrabError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a provider against a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, MihrabError> {
        let client = reqwest::Client::builder()
            .user_agent("mihrab/0.3 (prayer times library)")
            .timeout(LOCATE_TIMEOUT)
            .build()
            .map_err(|e| MihrabError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoint: endpoint.into() })
    }
}

impl LocationProvider for IpLocationProvider {
    async fn locate(&self) -> Result<Coordinate, MihrabError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| MihrabError::Network(format!("geolocation request failed: {e}")))?;

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| MihrabError::Network(format!("malformed geolocation response: {e}")))?;

        Coordinate::new(data.lat, data.lon)
    }
}

/// Resolves a coordinate, falling back to the Kaaba when the provider
/// fails. Never errors; a companion app must always have *some* location
/// to compute against.
pub async fn locate_or_fallback<P: LocationProvider>(provider: &P) -> Coordinate {
    provider.locate().await.unwrap_or(KAABA)
}
