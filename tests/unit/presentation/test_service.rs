use crate::fixtures::*;
use appwash_client::model::responses::{ApiResponse, ServiceResponse};
use appwash_client::prelude::*;
use serde_json::json;

fn client() -> AppWash {
    AppWash::new_lazy(Config::with_credentials(EMAIL, PASSWORD)).unwrap()
}

fn raw_service(state: &str) -> ServiceResponse {
    ApiResponse::from_value(service_ok(state))
        .unwrap()
        .data()
        .unwrap()
}

#[test]
fn maps_raw_service() {
    let service = Service::from_response(client(), raw_service("OCCUPIED")).unwrap();

    assert_eq!(service.service_id, SERVICE_ID);
    assert_eq!(service.location_id, LOCATION_ID);
    assert_eq!(service.location_name.as_deref(), Some("Waschküche - Haus 2"));
    assert_eq!(service.name, "Waschmaschine");
    assert_eq!(service.cost_cents, 250);
    assert_eq!(service.state, ServiceState::Occupied);
    assert!(!service.is_available());
    assert!(!service.reservable);
}

#[test]
fn last_session_start_is_kept() {
    let mut raw = raw_service("STOPPABLE");
    raw.last_session_start = Some(1_657_714_551);
    let service = Service::from_response(client(), raw).unwrap();
    assert_eq!(service.session_start, Some(1_657_714_551));
}

#[test]
fn reservable_service() {
    let mut raw = raw_service("AVAILABLE");
    raw.reservable = "RESERVABLE".to_string();
    assert!(Service::from_response(client(), raw).unwrap().reservable);
}

#[test]
fn service_without_pricing_fails() {
    let mut raw = raw_service("AVAILABLE");
    raw.pricing.clear();
    let err = Service::from_response(client(), raw).unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
}

#[test]
fn serialized_record_leaves_client_out() {
    let service = Service::from_response(client(), raw_service("AVAILABLE")).unwrap();
    let value = serde_json::to_value(&service).unwrap();

    assert!(value.get("client").is_none());
    assert_eq!(value["state"], json!("AVAILABLE"));
    assert_eq!(value["service_type"], json!("WASHING_MACHINE"));
}
