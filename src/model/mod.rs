/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Login request and response payloads
pub mod auth;
/// Request dispatching against the AppWash REST API
pub mod http;
/// Request bodies for API calls
pub mod requests;
/// Response envelope and raw payloads returned by the API
pub mod responses;
