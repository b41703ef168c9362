/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Credentials;
use serde::{Deserialize, Serialize};

/// Body of a `POST /login` call
#[derive(Serialize, Clone)]
pub struct LoginRequest<'a> {
    /// Email address of the account
    pub email: &'a str,
    /// Password of the account
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    /// Creates a login body from a pair of raw credentials
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self { email, password }
    }
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self::new(&credentials.email, &credentials.password)
    }
}

/// `login` object of a successful login response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Session token to send in the `token` header
    pub token: String,
    /// Email of the logged in account
    pub email: Option<String>,
    /// Account identifier
    pub external_id: Option<String>,
    /// Preferred language of the account
    pub language: Option<String>,
}
