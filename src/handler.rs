//! Skill Request Handling
//!
//! Dispatches one platform event to a spoken response. Every path ends the
//! session; every collaborator failure is absorbed into the next-best
//! informational answer.

use tracing::{debug, info};

use crate::alexa::{speak, SkillEvent, SkillResponse};
use crate::geocode::Geocoder;
use crate::hub::{fetch_entity, HubApi};
use crate::location::describe_location;
use crate::normalize::normalize_number;
use crate::resolver::EntityResolver;

const USAGE_PROMPT: &str = "Ask me where a bus is. For example, say where is bus 2.";
const BUS_SLOT: &str = "busNumber";

/// Handles skill events against a hub and a geocoder
///
/// Holds no cross-request state; one handler invocation per platform event.
pub struct SkillHandler<'a> {
    hub: &'a dyn HubApi,
    geocoder: &'a dyn Geocoder,
    tracker_domain: &'a str,
}

impl<'a> SkillHandler<'a> {
    pub fn new(hub: &'a dyn HubApi, geocoder: &'a dyn Geocoder, tracker_domain: &'a str) -> Self {
        Self {
            hub,
            geocoder,
            tracker_domain,
        }
    }

    /// Dispatch a platform event to its spoken response
    pub async fn handle(&self, event: &SkillEvent) -> SkillResponse {
        match event.request.request_type.as_str() {
            "LaunchRequest" => speak(USAGE_PROMPT),
            "IntentRequest" => {
                let intent = event
                    .request
                    .intent
                    .as_ref()
                    .map(|i| i.name.as_str())
                    .unwrap_or_default();
                debug!("🎙️ Intent: {}", intent);

                match intent {
                    "WhereIsBusIntent" => self.where_is_bus(event).await,
                    "AMAZON.CancelIntent" | "AMAZON.StopIntent" => speak("Goodbye!"),
                    "AMAZON.HelpIntent" => speak(USAGE_PROMPT),
                    _ => speak("I didn't catch that. Try asking where is bus 2."),
                }
            }
            _ => speak("I didn't catch that. Try asking where is bus 2."),
        }
    }

    /// The bus-location flow: normalize, resolve, fetch state, describe
    async fn where_is_bus(&self, event: &SkillEvent) -> SkillResponse {
        let Some(spoken) = event.slot_value(BUS_SLOT) else {
            return speak("Which bus would you like? For example, say where is bus 2.");
        };

        let Some(bus_number) = normalize_number(spoken) else {
            debug!("🎙️ Unrecognized bus number '{}'", spoken);
            return speak("I didn't catch which bus number you said.");
        };

        let resolver = EntityResolver::new(self.hub, self.tracker_domain);
        let Some(entity_id) = resolver.resolve(&bus_number).await else {
            return speak(&format!(
                "I couldn't find bus {bus_number} in your tracker integration."
            ));
        };
        info!("🚌 Bus {} resolved to {}", bus_number, entity_id);

        let Some(entity) = fetch_entity(self.hub, &entity_id).await else {
            return speak("I couldn't reach the hub.");
        };

        let sentence = describe_location(&bus_number, &entity, self.hub, self.geocoder).await;
        speak(&sentence)
    }
}
