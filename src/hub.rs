//! Hub State Store Access
//!
//! The single fetch-or-absent capability every collaborator call goes
//! through: one `get`, one `post`, each answering `None` on any timeout,
//! transport error, or malformed payload. Tests substitute an in-memory
//! implementation; production uses `RestHub` against the hub's REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;

/// Per-call timeout for every outbound request
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Entity id namespace for location trackers
pub const TRACKER_PREFIX: &str = "device_tracker.";

/// Fetch-or-absent access to the hub's entity/state API
///
/// A failed call is final for the invocation; no retries.
#[async_trait]
pub trait HubApi: Send + Sync {
    /// GET an API path, `None` on any failure
    async fn get(&self, path: &str) -> Option<Value>;

    /// POST an API path with a JSON body, `None` on any failure
    async fn post(&self, path: &str, body: Value) -> Option<Value>;
}

/// State snapshot of a tracked entity, as the hub reports it
#[derive(Debug, Clone, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub attributes: EntityAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityAttributes {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub friendly_name: Option<String>,
}

impl EntityState {
    /// Coordinate pair, only when both halves are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.attributes.latitude, self.attributes.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Named zone the hub resolved, if any
    ///
    /// The `not_home` marker, the `unknown` marker, and an empty state all
    /// mean "no zone", not a place name.
    pub fn named_zone(&self) -> Option<&str> {
        match self.state.as_deref() {
            Some("not_home") | Some("unknown") | Some("") | None => None,
            Some(zone) => Some(zone),
        }
    }
}

/// Fetch one entity's state, absent on any failure
pub async fn fetch_entity(hub: &dyn HubApi, entity_id: &str) -> Option<EntityState> {
    let value = hub.get(&format!("states/{entity_id}")).await?;
    match serde_json::from_value(value) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("⚠️ Malformed state payload for {}: {}", entity_id, e);
            None
        }
    }
}

/// REST client for the hub, bearer-token authenticated
pub struct RestHub {
    client: Client,
    base_url: String,
    token: String,
}

impl RestHub {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/api", config.hub_url),
            token: config.hub_token.clone(),
        }
    }
}

#[async_trait]
impl HubApi for RestHub {
    async fn get(&self, path: &str) -> Option<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("📡 Hub GET {}", path);

        let response = match self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .timeout(CALL_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("⚠️ Hub GET {} failed: {}", path, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("⚠️ Hub GET {} returned {}", path, response.status());
            return None;
        }

        match response.json().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("⚠️ Hub GET {} returned invalid JSON: {}", path, e);
                None
            }
        }
    }

    async fn post(&self, path: &str, body: Value) -> Option<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("📡 Hub POST {}", path);

        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .timeout(CALL_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("⚠️ Hub POST {} failed: {}", path, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("⚠️ Hub POST {} returned {}", path, response.status());
            return None;
        }

        match response.json().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("⚠️ Hub POST {} returned invalid JSON: {}", path, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_zone_markers() {
        let mut entity = EntityState {
            entity_id: "device_tracker.trackmate_bus_2".to_string(),
            state: Some("school".to_string()),
            attributes: EntityAttributes::default(),
        };
        assert_eq!(entity.named_zone(), Some("school"));

        for marker in ["not_home", "unknown", ""] {
            entity.state = Some(marker.to_string());
            assert_eq!(entity.named_zone(), None, "marker {marker:?}");
        }

        entity.state = None;
        assert_eq!(entity.named_zone(), None);
    }

    #[test]
    fn test_coordinates_require_both_halves() {
        let mut entity = EntityState {
            entity_id: "device_tracker.trackmate_bus_2".to_string(),
            state: Some("not_home".to_string()),
            attributes: EntityAttributes {
                latitude: Some(40.7),
                longitude: None,
                friendly_name: None,
            },
        };
        assert_eq!(entity.coordinates(), None);

        entity.attributes.longitude = Some(-74.0);
        assert_eq!(entity.coordinates(), Some((40.7, -74.0)));
    }

    #[test]
    fn test_entity_state_decodes_sparse_payload() {
        let entity: EntityState =
            serde_json::from_value(serde_json::json!({ "entity_id": "device_tracker.bus" }))
                .expect("Failed to decode");
        assert_eq!(entity.state, None);
        assert_eq!(entity.coordinates(), None);
    }
}
