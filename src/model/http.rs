/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request dispatching against the AppWash REST API
//!
//! [`make_http_request`] performs exactly one call and returns the decoded JSON
//! body. [`HttpClient`] wraps it and attaches the session token to every call
//! except the login call. Neither looks at `errorCode`; that is left to the
//! caller.

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::{LOGIN_ENDPOINT, PLATFORM, USER_AGENT};
use crate::error::AppError;
use crate::impl_domain_code_fmt;
use crate::presentation::codes::DomainCode;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl DomainCode for HttpMethod {
    const ALL: &'static [Self] = &[Self::Get, Self::Post, Self::Put, Self::Delete];

    fn code(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl_domain_code_fmt!(HttpMethod, "http method");

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Builds the underlying reqwest client with the configured timeout
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?)
}

/// Joins the configured base URL and an endpoint path
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Performs one HTTP request and returns the decoded JSON body
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `config` - Supplies base URL, language tag and the strict JSON switch
/// * `method` - HTTP verb
/// * `path` - Endpoint path, e.g. `/login`
/// * `token` - Session token sent in the `token` header, if any
/// * `body` - Optional request body (serialized to JSON)
/// * `query` - Optional query parameters
///
/// # Returns
///
/// * `Ok(Value)` - The parsed body, verbatim
/// * `Err(AppError)` - Transport failure or a body that is not JSON
///
/// There is no retry. The body is decoded whatever the HTTP status, since the
/// API reports failures through `errorCode`.
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    config: &Config,
    method: HttpMethod,
    path: &str,
    token: Option<&str>,
    body: Option<&B>,
    query: Option<&[(&str, &str)]>,
) -> Result<Value, AppError> {
    let url = endpoint_url(&config.rest_api.base_url, path);
    debug!("{} {}", method, url);

    let mut request = client
        .request(method.into(), &url)
        .header("platform", PLATFORM)
        .header("language", config.language.as_str());

    if config.strict_json {
        request = request.header("Accept", "application/json");
    }

    if let Some(token) = token {
        trace!("Using token (length): {}", token.len());
        request = request.header("token", token);
    }

    if let Some(params) = query {
        request = request.query(params);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);
    if !status.is_success() {
        warn!("{} {} answered with status {}", method, url, status);
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Request dispatcher with automatic token handling
///
/// Every call except `POST /login` carries a `token` header. The token is read
/// through [`Auth::token`], which logs in again when the current one is missing
/// or expired.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new dispatcher and performs initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated dispatcher ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.authenticate().await?;
        Ok(client)
    }

    /// Creates a new dispatcher without performing initial authentication
    ///
    /// Authentication happens on the first request that needs a token.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.request::<()>(HttpMethod::Get, path, None, None).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        self.request(HttpMethod::Post, path, Some(body), None).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        self.request(HttpMethod::Put, path, Some(body), None).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.request::<()>(HttpMethod::Delete, path, None, None).await
    }

    /// Makes a request, attaching the session token unless `path` is the login endpoint
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value, AppError> {
        let token = if path == LOGIN_ENDPOINT {
            None
        } else {
            Some(self.auth.token().await?)
        };

        make_http_request(
            &self.http_client,
            &self.config,
            method,
            path,
            token.as_deref(),
            body,
            query,
        )
        .await
    }

    /// Gets the configuration this dispatcher was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}
