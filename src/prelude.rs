/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # AppWash Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ```rust
//! use appwash_client::prelude::*;
//!
//! let config = Config::with_credentials("me@example.org", "secret");
//! assert_eq!(config.language, "EN");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the AppWash API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// The AppWash client
pub use crate::application::client::AppWash;

/// Session state machine
pub use crate::application::auth::{Auth, Session, SessionEvent, SessionState, check_credentials};

/// Location and appliance operations
pub use crate::application::interfaces::LaundryService;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request dispatcher
pub use crate::model::http::{HttpClient, HttpMethod};

// ============================================================================
// DOMAIN RECORDS
// ============================================================================

/// Locations, appliances and their code sets
pub use crate::presentation::{
    DomainCode, Location, LocationService, LocationType, Service, ServiceState, ServiceType,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use tracing::{debug, error, info, warn};
