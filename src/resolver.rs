//! Bus Entity Resolution
//!
//! Discovers the hub's tracker entities and matches the spoken bus number
//! against them. Discovery prefers the structured entity registry and falls
//! back to scanning raw states when the registry is unavailable. Matching is
//! a linear scan in source order: an identifier match wins immediately, a
//! friendly-name match is only consulted when the identifier misses.

use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::hub::{fetch_entity, HubApi, TRACKER_PREFIX};

/// Registry entry as returned by `config/entity_registry/list`
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    entity_id: String,
    #[serde(default)]
    platform: Option<String>,
}

/// Standalone-number pattern for a canonical bus number
///
/// The number must not be adjacent to another digit, so "2" matches
/// `trackmate_bus_2` but never `trackmate_bus_12` or `trackmate_bus_23`.
fn number_pattern(number: &str) -> Regex {
    let pattern = format!("(?i)(?:^|[^0-9]){}(?:[^0-9]|$)", regex::escape(number));
    // The number is escaped to a literal, so the pattern always compiles
    Regex::new(&pattern).expect("escaped pattern is valid")
}

/// Resolves a canonical bus number to a tracker entity id
pub struct EntityResolver<'a> {
    hub: &'a dyn HubApi,
    tracker_domain: &'a str,
}

impl<'a> EntityResolver<'a> {
    pub fn new(hub: &'a dyn HubApi, tracker_domain: &'a str) -> Self {
        Self {
            hub,
            tracker_domain,
        }
    }

    /// Find the tracker entity whose id or friendly name carries the number
    pub async fn resolve(&self, number: &str) -> Option<String> {
        let candidates = self.discover().await;
        debug!("🚌 {} tracker candidate(s)", candidates.len());

        let pattern = number_pattern(number);

        for entity_id in candidates {
            if pattern.is_match(&entity_id) {
                debug!("🚌 Matched {} by entity id", entity_id);
                return Some(entity_id);
            }

            // Identifier missed; check the friendly name
            if let Some(entity) = fetch_entity(self.hub, &entity_id).await {
                if let Some(friendly) = &entity.attributes.friendly_name {
                    if pattern.is_match(friendly) {
                        debug!("🚌 Matched {} by friendly name '{}'", entity_id, friendly);
                        return Some(entity_id);
                    }
                }
            }
        }

        None
    }

    /// Tracker entity ids, registry first, raw states as fallback
    ///
    /// Registry entries are structured, so the filter demands an exact
    /// platform tag and the tracker namespace. The raw-state fallback only
    /// has identifier text to go on and settles for the domain keyword
    /// appearing anywhere in it.
    async fn discover(&self) -> Vec<String> {
        if let Some(value) = self.hub.post("config/entity_registry/list", json!({})).await {
            match serde_json::from_value::<Vec<RegistryEntry>>(value) {
                Ok(entries) if !entries.is_empty() => {
                    return entries
                        .into_iter()
                        .filter(|e| e.platform.as_deref() == Some(self.tracker_domain))
                        .filter(|e| e.entity_id.starts_with(TRACKER_PREFIX))
                        .map(|e| e.entity_id)
                        .collect();
                }
                Ok(_) => debug!("🚌 Registry returned no entries, falling back to states"),
                Err(e) => warn!("⚠️ Malformed registry payload: {}", e),
            }
        }

        let Some(value) = self.hub.get("states").await else {
            return Vec::new();
        };
        let states: Vec<RegistryEntry> = match serde_json::from_value(value) {
            Ok(states) => states,
            Err(e) => {
                warn!("⚠️ Malformed states payload: {}", e);
                return Vec::new();
            }
        };

        states
            .into_iter()
            .filter(|s| s.entity_id.starts_with(TRACKER_PREFIX))
            .filter(|s| s.entity_id.contains(self.tracker_domain))
            .map(|s| s.entity_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_standalone_number() {
        let pattern = number_pattern("2");
        assert!(pattern.is_match("device_tracker.trackmate_bus_2"));
        assert!(pattern.is_match("Bus 2"));
        assert!(!pattern.is_match("device_tracker.trackmate_bus_12"));
        assert!(!pattern.is_match("device_tracker.trackmate_bus_23"));
    }

    #[test]
    fn test_pattern_two_digit_number() {
        let pattern = number_pattern("12");
        assert!(pattern.is_match("device_tracker.trackmate_bus_12"));
        assert!(!pattern.is_match("device_tracker.trackmate_bus_123"));
        assert!(!pattern.is_match("device_tracker.trackmate_bus_112"));
    }

    #[test]
    fn test_pattern_at_string_edges() {
        let pattern = number_pattern("7");
        assert!(pattern.is_match("7"));
        assert!(pattern.is_match("bus 7"));
        assert!(pattern.is_match("7 express"));
    }
}
