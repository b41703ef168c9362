/// Default base URL of the AppWash REST API
pub const DEFAULT_BASE_URL: &str = "https://www.involtum-services.com/api-rest";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Language tag sent with every request unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "EN";
/// User agent string used in HTTP requests to identify this client to the AppWash API
pub const USER_AGENT: &str = "appwash-client/0.1.0";
/// Value of the `platform` header expected by the API
pub const PLATFORM: &str = "appWash";
/// Endpoint used to obtain a session token. It is the only call sent without a `token` header.
pub const LOGIN_ENDPOINT: &str = "/login";
/// Remote `errorCode` signalling success
pub const SUCCESS_CODE: i64 = 0;
/// Remote `errorCode` returned by the login endpoint when email or password are wrong
pub const WRONG_CREDENTIALS_CODE: i64 = 61;
/// Source channel reported when starting an appliance
pub const SOURCE_CHANNEL: &str = "WEBSITE";
/// Raw reservation marker meaning "cannot be reserved"
pub const NOT_RESERVABLE: &str = "NOT_RESERVABLE";
