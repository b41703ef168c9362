use appwash_client::error::AppError;
use std::error::Error;

fn wrong_credentials() -> AppError {
    AppError::WrongCredentials {
        code: 61,
        description: "Login failed".to_string(),
        email: "me@example.org".to_string(),
        password: "hunter2".to_string(),
    }
}

#[test]
fn test_app_error_display_wrong_credentials() {
    let error = wrong_credentials();
    assert_eq!(error.to_string(), "wrong credentials: 61: Login failed");
    assert!(!error.to_string().contains("hunter2"));
    assert!(!error.to_string().contains("me@example.org"));
}

#[test]
fn test_app_error_debug_hides_credentials() {
    let printed = format!("{:?}", wrong_credentials());
    assert!(printed.starts_with("WrongCredentials"));
    assert!(printed.contains("61"));
    assert!(printed.contains("Login failed"));
    assert!(!printed.contains("hunter2"));
    assert!(!printed.contains("me@example.org"));

    let pretty = format!("{:#?}", wrong_credentials());
    assert!(!pretty.contains("hunter2"));
}

#[test]
fn test_app_error_debug_keeps_other_variants() {
    let error = AppError::Api {
        code: 33,
        description: "not found".to_string(),
    };
    assert_eq!(
        format!("{error:?}"),
        "Api { code: 33, description: \"not found\" }"
    );
    assert_eq!(
        format!("{:?}", AppError::InvalidInput("x".to_string())),
        "InvalidInput(\"x\")"
    );
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        code: 33,
        description: "not found".to_string(),
    };
    assert_eq!(error.to_string(), "api error 33: not found");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("no location".to_string());
    assert_eq!(error.to_string(), "invalid input: no location");
}

#[test]
fn test_app_error_codes() {
    assert_eq!(wrong_credentials().code(), Some(61));
    assert_eq!(wrong_credentials().description(), Some("Login failed"));
    assert!(wrong_credentials().is_wrong_credentials());

    let other = AppError::Deserialization("bad".to_string());
    assert_eq!(other.code(), None);
    assert_eq!(other.description(), None);
    assert!(!other.is_wrong_credentials());
}

#[test]
fn test_app_error_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_err.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.source().is_some());
    assert!(error.to_string().starts_with("json error: "));
}
