use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS};
use crate::presentation::codes::{ServiceState, parse_service_states};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// States in which a safe purchase is refused unless configured otherwise
pub const DEFAULT_UNSAFE_STATES: [ServiceState; 2] =
    [ServiceState::Stoppable, ServiceState::SessionWaitOn];

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials of an AppWash account
///
/// The password is never serialized, so neither `Display` nor `Debug` print it.
pub struct Credentials {
    /// Email address of the account
    pub email: String,
    /// Password of the account
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the AppWash API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Location used when an operation is called without an explicit location id
    pub location_id: Option<String>,
    /// Language tag sent in the `language` header
    pub language: String,
    /// Whether requests carry `Accept: application/json`
    pub strict_json: bool,
    /// Appliance states that make a safe purchase decline
    pub unsafe_states: Vec<ServiceState>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the AppWash REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and a `.env` file if present)
    ///
    /// Reads `APPWASH_EMAIL`, `APPWASH_PASSWORD`, `APPWASH_LOCATION_ID`,
    /// `APPWASH_BASE_URL`, `APPWASH_TIMEOUT`, `APPWASH_LANGUAGE`,
    /// `APPWASH_STRICT_JSON` and `APPWASH_UNSAFE_STATES`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("APPWASH_EMAIL", String::new());
        let password = get_env_or_default("APPWASH_PASSWORD", String::new());

        if email.is_empty() {
            error!("APPWASH_EMAIL not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("APPWASH_PASSWORD not found in environment variables or .env file");
        }

        let unsafe_states = match get_env_or_none::<String>("APPWASH_UNSAFE_STATES") {
            Some(raw) => parse_service_states(&raw).unwrap_or_else(|e| {
                error!("Failed to parse APPWASH_UNSAFE_STATES: {e}, using default");
                DEFAULT_UNSAFE_STATES.to_vec()
            }),
            None => DEFAULT_UNSAFE_STATES.to_vec(),
        };

        Config {
            credentials: Credentials { email, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("APPWASH_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("APPWASH_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            location_id: get_env_or_none("APPWASH_LOCATION_ID"),
            language: get_env_or_default("APPWASH_LANGUAGE", String::from(DEFAULT_LANGUAGE)),
            strict_json: get_env_or_default("APPWASH_STRICT_JSON", true),
            unsafe_states,
        }
    }

    /// Creates a configuration with the given credentials and built-in defaults,
    /// without touching the environment
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                email: email.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            location_id: None,
            language: String::from(DEFAULT_LANGUAGE),
            strict_json: true,
            unsafe_states: DEFAULT_UNSAFE_STATES.to_vec(),
        }
    }

    /// Sets the default location id
    #[must_use]
    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Sets the base URL of the REST API
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the language tag sent with every request
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enables or disables the `Accept: application/json` header
    #[must_use]
    pub fn with_strict_json(mut self, strict_json: bool) -> Self {
        self.strict_json = strict_json;
        self
    }

    /// Replaces the states in which a safe purchase declines
    #[must_use]
    pub fn with_unsafe_states(mut self, states: Vec<ServiceState>) -> Self {
        self.unsafe_states = states;
        self
    }

    /// Whether a safe purchase must decline for an appliance in `state`
    #[must_use]
    pub fn is_unsafe_state(&self, state: ServiceState) -> bool {
        self.unsafe_states.contains(&state)
    }
}
