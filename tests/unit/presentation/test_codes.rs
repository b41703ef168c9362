use appwash_client::presentation::codes::parse_service_states;
use appwash_client::prelude::*;

#[test]
fn service_type_codes() {
    assert_eq!(ServiceType::WashingMachine.code(), "WASHING_MACHINE");
    assert_eq!(ServiceType::from_code("DRYER"), Some(ServiceType::Dryer));
    assert_eq!(ServiceType::from_code("IRON"), None);
    assert!(ServiceType::Electricity.matches("ELECTRICITY"));
    assert!(!ServiceType::Electricity.matches("electricity"));
}

#[test]
fn has_checks_membership() {
    assert!(ServiceState::has("SESSION_WAIT_ON"));
    assert!(!ServiceState::has("RUNNING"));
    assert!(LocationType::has("STUDENT_HOME"));
    assert!(!LocationType::has(""));
}

#[test]
fn every_member_round_trips_through_its_code() {
    for state in ServiceState::ALL {
        assert_eq!(ServiceState::from_code(state.code()), Some(*state));
        assert_eq!(state.to_string(), state.code());
    }
    assert_eq!(LocationType::ALL.len(), 8);
}

#[test]
fn serde_uses_wire_codes() {
    assert_eq!(
        serde_json::to_string(&LocationType::SeniorResidence).unwrap(),
        "\"SENIOR_RESIDENCE\""
    );
    let state: ServiceState = serde_json::from_str("\"STOPPABLE\"").unwrap();
    assert_eq!(state, ServiceState::Stoppable);
}

#[test]
fn parsing_unknown_code_fails() {
    let err = "TOASTER".parse::<ServiceType>().unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.to_string(), "invalid input: unknown service type: TOASTER");
}

#[test]
fn parse_state_list() {
    assert_eq!(
        parse_service_states(" STOPPABLE, ,OCCUPIED ").unwrap(),
        vec![ServiceState::Stoppable, ServiceState::Occupied]
    );
    assert!(parse_service_states("").unwrap().is_empty());
    assert!(parse_service_states("STOPPABLE,NOPE").is_err());
}
