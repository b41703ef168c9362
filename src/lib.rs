//! # AppWash Client
//!
//! Client for the AppWash laundry vending API: log in, look up a location and
//! its washing machines and dryers, and buy a session on one of them.
//!
//! ```ignore
//! use appwash_client::prelude::*;
//!
//! let config = Config::with_credentials("me@example.org", "secret").with_location_id("11111");
//! let client = AppWash::new(config).await?;
//!
//! let location = client.location(None).await?;
//! println!("{} offers {} kinds of appliances", location.name, location.services.len());
//!
//! if let Some(dryer) = client
//!     .services(None, Some(ServiceType::Dryer))
//!     .await?
//!     .into_iter()
//!     .find(|s| s.is_available())
//! {
//!     dryer.buy(true).await?;
//! }
//! ```
//!
//! Every remote failure (`errorCode != 0`) surfaces as an [`error::AppError`];
//! nothing is retried.

/// Authentication, client facade, configuration and service traits
pub mod application;
/// Fixed values of the AppWash API
pub mod constants;
/// Error types
pub mod error;
/// Wire types and request dispatching
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records and code sets
pub mod presentation;
/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
