/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::constants::SOURCE_CHANNEL;
use crate::presentation::codes::ServiceType;
use serde::Serialize;

/// Body of `POST /location/{id}/connectorsv2`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesRequest {
    /// Restricts the listing to one kind of appliance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

impl ServicesRequest {
    /// Creates a listing body, filtered when `service_type` is given
    pub fn new(service_type: Option<ServiceType>) -> Self {
        Self { service_type }
    }
}

/// Body of `POST /connector/{id}/start`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartServiceRequest {
    /// Channel the purchase is attributed to
    pub source_channel: &'static str,
}

impl Default for StartServiceRequest {
    fn default() -> Self {
        Self {
            source_channel: SOURCE_CHANNEL,
        }
    }
}
