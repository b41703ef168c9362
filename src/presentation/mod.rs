/// Closed code sets exchanged with the API
pub mod codes;
/// Location records
pub mod location;
/// Appliance records
pub mod service;

pub use codes::{DomainCode, LocationType, ServiceState, ServiceType};
pub use location::{Location, LocationService};
pub use service::Service;

use crate::constants::NOT_RESERVABLE;

/// Interprets a raw reservation marker: everything but `NOT_RESERVABLE` is reservable
#[must_use]
pub fn is_reservable(raw: &str) -> bool {
    raw != NOT_RESERVABLE
}
