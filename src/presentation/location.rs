use crate::error::AppError;
use crate::model::responses::LocationResponse;
use crate::presentation::codes::{LocationType, ServiceType};
use crate::presentation::is_reservable;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Appliance kind offered at a location, with its price
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationService {
    /// Appliance kind
    pub service_type: ServiceType,
    /// Price of one session in cents
    pub cost_cents: i64,
}

/// A physical site with one or more appliances
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Location id
    pub id: String,
    /// Kind of site
    pub location_type: LocationType,
    /// Free-form lifecycle status, e.g. `PRODUCTION_PHASE`
    pub location_status: String,
    /// Appliance kinds with prices, in the order the API lists them
    pub services: Vec<LocationService>,
    /// Location name
    pub name: String,
    /// Whether appliances at this location can be reserved
    pub reservable: bool,
    /// How many days in advance a reservation can be made
    pub reservable_days_in_advance: i64,
}

impl Location {
    /// Price of one kind of appliance at this location
    #[must_use]
    pub fn cost_of(&self, service_type: ServiceType) -> Option<i64> {
        self.services
            .iter()
            .find(|s| s.service_type == service_type)
            .map(|s| s.cost_cents)
    }
}

impl TryFrom<LocationResponse> for Location {
    type Error = AppError;

    /// Joins the listed appliance kinds against the separate pricing list.
    /// Fails when a listed kind has no price.
    fn try_from(raw: LocationResponse) -> Result<Self, Self::Error> {
        let services = raw
            .services
            .iter()
            .map(|entry| {
                raw.pricing
                    .iter()
                    .find(|price| price.service_type == entry.service_type)
                    .and_then(|price| price.cost_cents())
                    .map(|cost_cents| LocationService {
                        service_type: entry.service_type,
                        cost_cents,
                    })
                    .ok_or_else(|| {
                        AppError::Deserialization(format!(
                            "location {} has no pricing for {}",
                            raw.external_id, entry.service_type
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Location {
            reservable: is_reservable(&raw.reserved_type),
            id: raw.external_id,
            location_type: raw.location_type_v2,
            location_status: raw.location_status,
            services,
            name: raw.name,
            reservable_days_in_advance: raw.max_days_in_advance,
        })
    }
}
