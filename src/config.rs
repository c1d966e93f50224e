use crate::error::{SkillError, SkillResult};
use serde::{Deserialize, Serialize};

/// Default integration platform tag for tracker entities
pub const DEFAULT_TRACKER_DOMAIN: &str = "trackmate";

/// Main skill configuration
///
/// Built once per invocation from the environment and passed explicitly into
/// the components that make collaborator calls, so tests can construct one
/// by hand and wire in fake collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hub base URL, e.g. `https://yourhome.duckdns.org`
    pub hub_url: String,
    /// Long-lived hub access token
    pub hub_token: String,
    /// Integration platform tag that marks bus trackers
    pub tracker_domain: String,
}

impl Config {
    pub fn new(hub_url: &str, hub_token: &str, tracker_domain: &str) -> Self {
        Self {
            hub_url: hub_url.trim_end_matches('/').to_string(),
            hub_token: hub_token.to_string(),
            tracker_domain: tracker_domain.to_string(),
        }
    }

    /// Load config from the environment
    ///
    /// `HUB_URL` and `HUB_TOKEN` are required; `TRACKER_DOMAIN` falls back
    /// to the default integration name.
    pub fn from_env() -> SkillResult<Self> {
        let hub_url = std::env::var("HUB_URL")
            .map_err(|_| SkillError::Config("HUB_URL is not set".to_string()))?;
        let hub_token = std::env::var("HUB_TOKEN")
            .map_err(|_| SkillError::Config("HUB_TOKEN is not set".to_string()))?;
        let tracker_domain =
            std::env::var("TRACKER_DOMAIN").unwrap_or_else(|_| DEFAULT_TRACKER_DOMAIN.to_string());

        Ok(Self::new(&hub_url, &hub_token, &tracker_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = Config::new("https://hub.example/", "token", "trackmate");
        assert_eq!(config.hub_url, "https://hub.example");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::new("https://hub.example", "token", "trackmate");
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.hub_url, restored.hub_url);
        assert_eq!(config.tracker_domain, restored.tracker_domain);
    }
}
