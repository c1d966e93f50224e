//! Reverse Geocoding
//!
//! Turns a coordinate pair into a short spoken street address via the
//! Nominatim lookup service. Treated strictly as an oracle: any failure
//! means "no address" and the caller falls back to coarser phrasing.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::hub::CALL_TIMEOUT;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const USER_AGENT: &str = concat!("WhereBus/", env!("CARGO_PKG_VERSION"));

/// Address-lookup oracle for a coordinate pair
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Spoken-form address for the coordinates, `None` on any failure
    async fn reverse(&self, lat: f64, lon: f64) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: AddressParts,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressParts {
    #[serde(default)]
    house_number: Option<String>,
    #[serde(default)]
    road: Option<String>,
    #[serde(default)]
    suburb: Option<String>,
    #[serde(default)]
    neighbourhood: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
}

impl ReverseResponse {
    /// Assemble "number road, suburb, city" from whichever parts exist
    fn spoken_address(&self) -> Option<String> {
        let addr = &self.address;
        let mut parts = Vec::new();

        if let Some(road) = &addr.road {
            let street = match &addr.house_number {
                Some(number) => format!("{number} {road}"),
                None => road.clone(),
            };
            parts.push(street);
        }
        if let Some(area) = addr.suburb.as_ref().or(addr.neighbourhood.as_ref()) {
            parts.push(area.clone());
        }
        if let Some(place) = addr
            .city
            .as_ref()
            .or(addr.town.as_ref())
            .or(addr.village.as_ref())
        {
            parts.push(place.clone());
        }

        if !parts.is_empty() {
            Some(parts.join(", "))
        } else {
            self.display_name.clone().filter(|name| !name.is_empty())
        }
    }
}

/// Nominatim-backed reverse geocoder
pub struct Nominatim {
    client: reqwest::Client,
}

impl Nominatim {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    async fn reverse(&self, lat: f64, lon: f64) -> Option<String> {
        debug!("🗺️ Reverse geocoding {:.4}, {:.4}", lat, lon);

        let response = match self
            .client
            .get(NOMINATIM_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
                ("zoom", "16".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(CALL_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("⚠️ Geocoding request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("⚠️ Geocoding returned {}", response.status());
            return None;
        }

        let parsed: ReverseResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("⚠️ Geocoding returned invalid JSON: {}", e);
                return None;
            }
        };

        parsed.spoken_address()
    }
}
