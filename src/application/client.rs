/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! AppWash API client
//!
//! This module provides the entry point of the SDK. It handles:
//! - Authentication and lazy token refresh
//! - Loading locations and their appliances
//! - Buying a session on an appliance
//!
//! # Example
//! ```ignore
//! use appwash_client::prelude::*;
//!
//! let config = Config::new();
//! let client = AppWash::new(config).await?;
//!
//! for service in client.services(None, Some(ServiceType::Dryer)).await? {
//!     println!("{} is {}", service.name, service.state);
//! }
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::LaundryService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ServicesRequest, StartServiceRequest};
use crate::model::responses::{ApiResponse, LocationResponse, ServiceResponse};
use crate::presentation::codes::ServiceType;
use crate::presentation::location::Location;
use crate::presentation::service::Service;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the AppWash API
///
/// Cloning is cheap and every clone shares the same session; [`Service`]
/// records keep such a clone to buy themselves.
#[derive(Clone)]
pub struct AppWash {
    http_client: Arc<HttpClient>,
}

impl AppWash {
    /// Creates a new client and logs in
    ///
    /// # Returns
    /// * `Ok(AppWash)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a new client without logging in
    ///
    /// The login happens on the first request that needs a token.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(config)?);
        Ok(Self { http_client })
    }

    /// Logs in again with the configured credentials, whatever the current state
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        self.http_client.auth().authenticate().await
    }

    /// Gets a usable session token, logging in only if the current one expired
    pub async fn token(&self) -> Result<String, AppError> {
        self.http_client.auth().token().await
    }

    /// Forgets the current session locally
    pub async fn logout(&self) {
        self.http_client.auth().logout().await
    }

    /// Default location id, if configured
    pub fn location_id(&self) -> Option<&str> {
        self.config().location_id.as_deref()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying request dispatcher
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Picks the explicit location id, falling back to the configured default
    fn resolve_location_id<'a>(&'a self, location_id: Option<&'a str>) -> Result<&'a str, AppError> {
        let location_id = location_id.or_else(|| self.location_id()).ok_or_else(|| {
            AppError::InvalidInput(
                "either set a default location_id or pass a location_id".to_string(),
            )
        })?;
        path_segment("location_id", location_id)
    }
}

/// Checks that an id can be placed in a URL path as a single segment
fn path_segment<'a>(name: &str, id: &'a str) -> Result<&'a str, AppError> {
    let malformed = matches!(id, "" | "." | "..")
        || id.chars().any(|c| {
            matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control()
        });
    if malformed {
        return Err(AppError::InvalidInput(format!("malformed {name}: {id:?}")));
    }
    Ok(id)
}

#[async_trait]
impl LaundryService for AppWash {
    async fn location(&self, location_id: Option<&str>) -> Result<Location, AppError> {
        let location_id = self.resolve_location_id(location_id)?;
        let path = format!("/locations/split/{location_id}");
        info!("Getting location: {}", location_id);

        let value = self.http_client.get(&path).await?;
        let raw: LocationResponse = ApiResponse::from_value(value)?.into_result()?.data()?;
        let location = Location::try_from(raw)?;
        debug!("Location {} offers {} services", location.id, location.services.len());
        Ok(location)
    }

    async fn services(
        &self,
        location_id: Option<&str>,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<Service>, AppError> {
        let location_id = self.resolve_location_id(location_id)?;
        let path = format!("/location/{location_id}/connectorsv2");
        info!("Getting services of location: {}", location_id);

        let body = ServicesRequest::new(service_type);
        let value = self.http_client.post(&path, &body).await?;
        let raw: Vec<ServiceResponse> = ApiResponse::from_value(value)?.into_result()?.data()?;
        debug!("Location {} has {} services", location_id, raw.len());

        raw.into_iter()
            .map(|service| Service::from_response(self.clone(), service))
            .collect()
    }

    async fn service(&self, service_id: &str) -> Result<Service, AppError> {
        let service_id = path_segment("service_id", service_id)?;
        let path = format!("/connector/{service_id}");
        info!("Getting service: {}", service_id);

        let value = self.http_client.get(&path).await?;
        let raw: ServiceResponse = ApiResponse::from_value(value)?.into_result()?.data()?;
        Service::from_response(self.clone(), raw)
    }

    async fn buy_service(&self, service_id: &str, safe: bool) -> Result<bool, AppError> {
        let service_id = path_segment("service_id", service_id)?;
        if safe {
            let current = self.service(service_id).await?;
            if self.config().is_unsafe_state(current.state) {
                warn!(
                    "Not buying service {}: it is in state {}",
                    service_id, current.state
                );
                return Ok(false);
            }
        }

        let path = format!("/connector/{service_id}/start");
        info!("Buying service: {}", service_id);

        let value = self
            .http_client
            .post(&path, &StartServiceRequest::default())
            .await?;
        ApiResponse::from_value(value)?.into_result()?;
        info!("Service {} started", service_id);
        Ok(true)
    }
}
