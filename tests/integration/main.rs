// Live tests against the AppWash API
//
// They need APPWASH_EMAIL, APPWASH_PASSWORD and APPWASH_LOCATION_ID in the
// environment or a `.env` file, and are ignored by default. Buying is never
// exercised here since it bills the account.

use appwash_client::prelude::*;

async fn live_client() -> AppWash {
    setup_logger();
    AppWash::new(Config::new())
        .await
        .expect("Failed to login")
}

#[tokio::test]
#[ignore]
async fn test_login_and_token() {
    let client = live_client().await;
    let token = client.token().await.expect("Failed to get token");
    assert!(!token.is_empty());

    let state = client.http_client().auth().state().await;
    let session = state.session().expect("No session after login");
    assert!(!session.is_expired());
    info!("Token valid for {} more seconds", session.seconds_until_expiry());
}

#[tokio::test]
#[ignore]
async fn test_check_credentials() {
    setup_logger();
    let config = Config::new();
    let accepted = check_credentials(&config, &config.credentials.email, &config.credentials.password)
        .await
        .expect("Failed to check credentials");
    assert!(accepted);

    let rejected = check_credentials(&config, &config.credentials.email, "not-the-password")
        .await
        .expect("Failed to check credentials");
    assert!(!rejected);
}

#[tokio::test]
#[ignore]
async fn test_location() {
    let client = live_client().await;
    let location = client.location(None).await.expect("Failed to get location");

    info!("Location: {}", location);
    assert_eq!(Some(location.id.as_str()), client.location_id());
    assert!(!location.services.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_services() {
    let client = live_client().await;
    let services = client.services(None, None).await.expect("Failed to get services");

    for service in &services {
        info!("{} ({}) is {}", service.name, service.service_id, service.state);
        let again = client
            .service(&service.service_id)
            .await
            .expect("Failed to get service");
        assert_eq!(again.service_id, service.service_id);
        assert_eq!(again.service_type, service.service_type);
    }

    let dryers = client
        .services(None, Some(ServiceType::Dryer))
        .await
        .expect("Failed to get dryers");
    assert!(dryers.iter().all(|s| s.service_type == ServiceType::Dryer));
}

#[tokio::test]
#[ignore]
async fn test_unknown_location_is_an_api_error() {
    let client = live_client().await;
    let err = client.location(Some("0")).await.unwrap_err();
    assert!(matches!(err, AppError::Api { .. }));
}
