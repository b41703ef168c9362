use crate::error::AppError;
use crate::presentation::codes::ServiceType;
use crate::presentation::location::Location;
use crate::presentation::service::Service;
use async_trait::async_trait;

/// Interface for location and appliance operations
#[async_trait]
pub trait LaundryService: Send + Sync {
    /// Loads a location, the default one when `location_id` is `None`
    async fn location(&self, location_id: Option<&str>) -> Result<Location, AppError>;

    /// Lists the appliances of a location, the default one when `location_id` is `None`
    ///
    /// # Arguments
    /// * `location_id` - Location to list, or `None` for the configured default
    /// * `service_type` - Only list appliances of this kind
    ///
    /// # Returns
    /// The appliances in the order the API returns them
    async fn services(
        &self,
        location_id: Option<&str>,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<Service>, AppError>;

    /// Loads one appliance
    async fn service(&self, service_id: &str) -> Result<Service, AppError>;

    /// Starts a paid session on an appliance
    ///
    /// Calling this repeatedly cancels the previous session and bills again.
    ///
    /// # Arguments
    /// * `service_id` - Appliance to start
    /// * `safe` - Load the appliance first and decline if its state is unsafe
    ///
    /// # Returns
    /// * `Ok(true)` - The session was started
    /// * `Ok(false)` - The safe check declined; nothing was bought
    async fn buy_service(&self, service_id: &str, safe: bool) -> Result<bool, AppError>;
}
