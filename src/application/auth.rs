/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the AppWash API
//!
//! This module owns the session token. The token lives in an explicit two
//! state machine ([`SessionState`]):
//! - `Unauthenticated`: no token yet, or the last login failed
//! - `Authenticated`: a token and its absolute expiry
//!
//! A token is usable while its expiry lies in the future. Reading it through
//! [`Auth::token`] logs in again when it is not.

use crate::application::config::{Config, Credentials};
use crate::constants::{LOGIN_ENDPOINT, SUCCESS_CODE, WRONG_CREDENTIALS_CODE};
use crate::error::AppError;
use crate::model::auth::LoginRequest;
use crate::model::http::{HttpMethod, build_http_client, make_http_request};
use crate::model::responses::ApiResponse;
use chrono::Utc;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session token and its absolute expiry
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token sent in the `token` header
    pub token: String,
    /// Unix timestamp when the token expires (seconds since epoch)
    pub expires_at: i64,
}

impl Session {
    /// Creates a new session
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Checks if the token is expired at `now` (epoch seconds)
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    /// Checks if the token is expired right now
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Gets the number of seconds until the token expires, negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        self.expires_at - Utc::now().timestamp()
    }

    /// Builds a session out of a login response
    ///
    /// # Returns
    /// * `Ok(Session)` - on `errorCode == 0`
    /// * `Err(AppError::WrongCredentials)` - on `errorCode == 61`
    /// * `Err(AppError::Api)` - on any other non-zero code
    pub fn from_login(response: ApiResponse, credentials: &Credentials) -> Result<Self, AppError> {
        match response.error_code {
            SUCCESS_CODE => {
                let token = response
                    .login
                    .map(|login| login.token)
                    .ok_or_else(|| AppError::Deserialization("login response has no token".into()))?;
                let expires_at = response.token_expire_ts.ok_or_else(|| {
                    AppError::Deserialization("login response has no token_expire_ts".into())
                })?;
                Ok(Session::new(token, expires_at))
            }
            WRONG_CREDENTIALS_CODE => Err(AppError::WrongCredentials {
                code: response.error_code,
                description: response.error_description,
                email: credentials.email.clone(),
                password: credentials.password.clone(),
            }),
            _ => Err(response.into_api_error()),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &format_args!("<{} chars>", self.token.len()))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// What happened to the session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A login returned a fresh token
    LoginSucceeded(Session),
    /// A login was answered with a non-zero `errorCode`
    LoginFailed,
    /// The session was discarded locally
    Cleared,
}

/// Authentication state of a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No token is held
    #[default]
    Unauthenticated,
    /// A token is held; it may have expired since
    Authenticated(Session),
}

impl SessionState {
    /// Applies an event and returns the resulting state
    #[must_use]
    pub fn transition(self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::LoginSucceeded(session) => SessionState::Authenticated(session),
            SessionEvent::LoginFailed | SessionEvent::Cleared => SessionState::Unauthenticated,
        }
    }

    /// Whether a token is held and still valid at `now`
    #[must_use]
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.usable_token(now).is_some()
    }

    /// Token that can be sent at `now`, if any
    #[must_use]
    pub fn usable_token(&self, now: i64) -> Option<&str> {
        match self {
            SessionState::Authenticated(session) if !session.is_expired_at(now) => {
                Some(session.token.as_str())
            }
            _ => None,
        }
    }

    /// The held session, expired or not
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }
}

/// Authentication manager for the AppWash API
///
/// Holds the credentials given at construction and the session state machine.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    state: RwLock<SessionState>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the login call
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            state: RwLock::new(SessionState::Unauthenticated),
        }
    }

    /// Logs in with the configured credentials, whatever the current state
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session, now stored
    /// * `Err(AppError)` - Wrong credentials, any other remote error, or a
    ///   transport failure. Remote errors leave the state `Unauthenticated`.
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        debug!("Sending login request");

        let body = LoginRequest::from(&self.config.credentials);
        let value = make_http_request(
            &self.client,
            &self.config,
            HttpMethod::Post,
            LOGIN_ENDPOINT,
            None,
            Some(&body),
            None,
        )
        .await?;
        let response = ApiResponse::from_value(value)?;

        let outcome = Session::from_login(response, &self.config.credentials);

        let mut state = self.state.write().await;
        let previous = std::mem::take(&mut *state);
        match outcome {
            Ok(session) => {
                *state = previous.transition(SessionEvent::LoginSucceeded(session.clone()));
                info!("Login successful, token valid until {}", session.expires_at);
                Ok(session)
            }
            Err(e) => {
                *state = previous.transition(SessionEvent::LoginFailed);
                warn!("Login failed: {}", e);
                Err(e)
            }
        }
    }

    /// Gets a usable session token
    ///
    /// Returns the stored token without any network call while it has not
    /// expired; otherwise logs in once and returns the fresh token.
    ///
    /// The expiry check and the login are not atomic: the read lock is
    /// released before logging in, so two tasks sharing one client may both
    /// log in when the token runs out. Callers sharing a client across tasks
    /// must serialise their calls if that matters.
    pub async fn token(&self) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        {
            let state = self.state.read().await;
            if let Some(token) = state.usable_token(now) {
                return Ok(token.to_string());
            }
        }

        debug!("No usable token, logging in");
        Ok(self.authenticate().await?.token)
    }

    /// Snapshot of the current session state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Whether a non-expired token is held
    pub async fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .await
            .is_authenticated_at(Utc::now().timestamp())
    }

    /// Forgets the current session; the next request logs in again
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        let previous = std::mem::take(&mut *state);
        *state = previous.transition(SessionEvent::Cleared);
        info!("Session cleared");
    }
}

/// Checks whether a pair of credentials is accepted, without touching any session
///
/// `config` only supplies transport settings (base URL, language, headers);
/// its own credentials are ignored.
///
/// # Returns
/// * `Ok(true)` - on `errorCode == 0`
/// * `Ok(false)` - on `errorCode == 61`
/// * `Err(AppError::Api)` - on any other non-zero code
pub async fn check_credentials(
    config: &Config,
    email: &str,
    password: &str,
) -> Result<bool, AppError> {
    let client = build_http_client(config)?;
    let body = LoginRequest::new(email, password);
    let value = make_http_request(
        &client,
        config,
        HttpMethod::Post,
        LOGIN_ENDPOINT,
        None,
        Some(&body),
        None,
    )
    .await?;

    let response = ApiResponse::from_value(value)?;
    match response.error_code {
        SUCCESS_CODE => Ok(true),
        WRONG_CREDENTIALS_CODE => Ok(false),
        _ => Err(response.into_api_error()),
    }
}
