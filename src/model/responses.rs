/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::constants::SUCCESS_CODE;
use crate::error::AppError;
use crate::model::auth::LoginData;
use crate::presentation::codes::{LocationType, ServiceState, ServiceType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope shared by every AppWash API response
///
/// `errorCode` is zero on success. The endpoint specific payload sits in
/// `data`, except for the login call which answers with `login`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Remote status code, `0` means success
    pub error_code: i64,
    /// Human readable explanation of `error_code`
    #[serde(default)]
    pub error_description: String,
    /// Absolute expiry of the session token, in epoch seconds
    #[serde(rename = "token_expire_ts", default)]
    pub token_expire_ts: Option<i64>,
    /// Server clock, in epoch seconds
    #[serde(default)]
    pub server_time: Option<i64>,
    /// Account and token data, only present on login responses
    #[serde(default)]
    pub login: Option<LoginData>,
    /// Endpoint specific payload
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Decodes the envelope out of a raw JSON body
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the remote call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code == SUCCESS_CODE
    }

    /// Turns a non-zero `errorCode` into [`AppError::Api`]
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_api_error())
        }
    }

    /// Builds the API error described by this envelope
    #[must_use]
    pub fn into_api_error(self) -> AppError {
        AppError::Api {
            code: self.error_code,
            description: self.error_description,
        }
    }

    /// Decodes the `data` payload into `T`
    pub fn data<T: DeserializeOwned>(self) -> Result<T, AppError> {
        let data = self
            .data
            .ok_or_else(|| AppError::Deserialization("response has no data".to_string()))?;
        Ok(serde_json::from_value(data)?)
    }
}

/// One component of a price, e.g. a unit price
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceComponent {
    /// Component kind, e.g. `UNIT_PRICE`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Localised description including the unit
    #[serde(default)]
    pub full_price_string: Option<String>,
    /// Localised price
    #[serde(default)]
    pub price_string: Option<String>,
    /// Price in cents
    pub cost_cents: i64,
}

/// Pricing of one kind of appliance
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingEntry {
    /// Appliance kind this price applies to
    pub service_type: ServiceType,
    /// Components making up the price
    #[serde(default)]
    pub component_price_objects: Vec<PriceComponent>,
}

impl PricingEntry {
    /// Cost of the first price component, if any
    #[must_use]
    pub fn cost_cents(&self) -> Option<i64> {
        self.component_price_objects.first().map(|c| c.cost_cents)
    }
}

/// Appliance kind listed on a location
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LocationServiceEntry {
    /// Appliance kind
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    /// Localised name of the kind
    #[serde(default)]
    pub name: Option<String>,
}

/// `data` of `GET /locations/split/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    /// Location name
    pub name: String,
    /// Location id
    pub external_id: String,
    /// Kind of site
    pub location_type_v2: LocationType,
    /// Free-form lifecycle status, e.g. `PRODUCTION_PHASE`
    pub location_status: String,
    /// Appliance kinds available at the location
    #[serde(default)]
    pub services: Vec<LocationServiceEntry>,
    /// Prices per appliance kind
    #[serde(default)]
    pub pricing: Vec<PricingEntry>,
    /// How many days in advance reservations are possible
    #[serde(default)]
    pub max_days_in_advance: i64,
    /// Reservation mode, `NOT_RESERVABLE` when reservations are disabled
    pub reserved_type: String,
}

/// `data` of `GET /connector/{id}`, and each element of a connector listing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    /// Appliance id
    pub external_id: String,
    /// Id of the owning location
    pub location_id: String,
    /// Name of the room the appliance is in
    #[serde(default)]
    pub location: Option<String>,
    /// Appliance kind
    pub service_type: ServiceType,
    /// Appliance name
    pub service_name: String,
    /// Current state
    pub state: ServiceState,
    /// Localised description of `state`
    #[serde(default)]
    pub state_description: Option<String>,
    /// Prices of the appliance
    #[serde(default)]
    pub pricing: Vec<PricingEntry>,
    /// Reservation mode, `NOT_RESERVABLE` when reservations are disabled
    pub reservable: String,
    /// Start of the last session, in epoch seconds
    #[serde(default)]
    pub last_session_start: Option<i64>,
}
