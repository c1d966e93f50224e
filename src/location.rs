//! Location Interpretation
//!
//! Decides which response variant a tracker's state supports: named zone,
//! address plus distance, one of the two alone, or raw coordinates. Never
//! invents data the hub did not report.

use tracing::debug;

use crate::distance::{distance_phrase, haversine_miles};
use crate::geocode::Geocoder;
use crate::hub::{fetch_entity, EntityState, HubApi};

/// Entity id of the fixed home reference zone
const HOME_ZONE: &str = "zone.home";

/// Produce the spoken sentence for a fetched tracker state
///
/// Priority order: named zone, then "no location", then whatever the home
/// and address lookups yield. The zone path returns before any collaborator
/// is consulted.
pub async fn describe_location(
    bus_number: &str,
    entity: &EntityState,
    hub: &dyn HubApi,
    geocoder: &dyn Geocoder,
) -> String {
    if let Some(zone) = entity.named_zone() {
        return format!("Bus {bus_number} is at {zone}.");
    }

    let Some((lat, lon)) = entity.coordinates() else {
        return format!("Bus {bus_number} is being tracked but has no location right now.");
    };

    // Independent lookups; results are only combined once both complete
    let (home, address) = tokio::join!(home_coordinates(hub), geocoder.reverse(lat, lon));

    let distance = home.map(|(home_lat, home_lon)| {
        let miles = haversine_miles(lat, lon, home_lat, home_lon);
        debug!("🚌 Bus {} is {:.2} miles from home", bus_number, miles);
        distance_phrase(miles)
    });

    match (address, distance) {
        (Some(address), Some(distance)) => {
            format!("Bus {bus_number} is near {address}, about {distance}.")
        }
        (Some(address), None) => format!("Bus {bus_number} is near {address}."),
        (None, Some(distance)) => {
            format!("Bus {bus_number} is {distance}, but I couldn't get a street address.")
        }
        (None, None) => format!("Bus {bus_number} is at {lat:.4}, {lon:.4}."),
    }
}

/// Home reference coordinates, absent when the zone lookup fails
async fn home_coordinates(hub: &dyn HubApi) -> Option<(f64, f64)> {
    let home = fetch_entity(hub, HOME_ZONE).await?;
    home.coordinates()
}
