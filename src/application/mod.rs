/// Session state machine and credential checks
pub mod auth;
/// The AppWash client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
