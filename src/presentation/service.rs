use crate::application::client::AppWash;
use crate::application::interfaces::LaundryService;
use crate::error::AppError;
use crate::model::responses::ServiceResponse;
use crate::presentation::codes::{ServiceState, ServiceType};
use crate::presentation::is_reservable;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;

/// An individually addressable appliance at a location
///
/// A snapshot taken when the record was loaded; it is never updated in place.
/// It keeps a handle on the client that loaded it so it can be bought
/// directly.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize)]
pub struct Service {
    #[serde(skip)]
    client: AppWash,
    /// Appliance id
    pub service_id: String,
    /// Id of the owning location
    pub location_id: String,
    /// Name of the room the appliance is in
    pub location_name: Option<String>,
    /// Appliance kind
    pub service_type: ServiceType,
    /// Appliance name
    pub name: String,
    /// Price of one session in cents
    pub cost_cents: i64,
    /// Whether the appliance can be reserved
    pub reservable: bool,
    /// State when the record was loaded
    pub state: ServiceState,
    /// Localised description of `state`
    pub state_description: Option<String>,
    /// Start of the last session, in epoch seconds
    pub session_start: Option<i64>,
}

impl Service {
    /// Maps a raw appliance payload, using the first price component of the
    /// first pricing entry as the cost
    pub fn from_response(client: AppWash, raw: ServiceResponse) -> Result<Self, AppError> {
        let cost_cents = raw
            .pricing
            .first()
            .and_then(|price| price.cost_cents())
            .ok_or_else(|| {
                AppError::Deserialization(format!("service {} has no pricing", raw.external_id))
            })?;

        Ok(Service {
            client,
            reservable: is_reservable(&raw.reservable),
            service_id: raw.external_id,
            location_id: raw.location_id,
            location_name: raw.location,
            service_type: raw.service_type,
            name: raw.service_name,
            cost_cents,
            state: raw.state,
            state_description: raw.state_description,
            session_start: raw.last_session_start,
        })
    }

    /// Whether the appliance was free when loaded
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state == ServiceState::Available
    }

    /// Buys a session on this appliance
    ///
    /// Be careful: buying an appliance that is already running cancels the
    /// running session and bills again. With `safe` set, the purchase is
    /// declined (`Ok(false)`) when the appliance's current state is one of the
    /// client's configured unsafe states.
    pub async fn buy(&self, safe: bool) -> Result<bool, AppError> {
        self.client.buy_service(&self.service_id, safe).await
    }
}
