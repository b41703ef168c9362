//! Closed sets of codes used by the AppWash API
//!
//! The API exchanges these values as upper-snake strings. Every enum here
//! implements [`DomainCode`], which gives a parse constructor, a named
//! comparison against raw strings and a membership test, so decoded JSON
//! strings can be checked without going through the enum first.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Behaviour shared by all closed code sets of the API
pub trait DomainCode: Sized + Copy + 'static {
    /// Every member of the set
    const ALL: &'static [Self];

    /// Wire representation of this member
    fn code(&self) -> &'static str;

    /// Parses a raw API string into a member of the set
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.code() == code)
    }

    /// Compares the underlying code with a raw API string
    fn matches(&self, raw: &str) -> bool {
        self.code() == raw
    }

    /// Whether the raw string names a member of the set
    fn has(raw: &str) -> bool {
        Self::from_code(raw).is_some()
    }
}

/// Implements `Display` and `FromStr` for a [`DomainCode`] type
#[macro_export]
macro_rules! impl_domain_code_fmt {
    ($t:ty, $label:expr) => {
        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::presentation::codes::DomainCode::code(self))
            }
        }

        impl std::str::FromStr for $t {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$t as $crate::presentation::codes::DomainCode>::from_code(s).ok_or_else(|| {
                    $crate::error::AppError::InvalidInput(format!("unknown {}: {}", $label, s))
                })
            }
        }
    };
}

/// Kind of appliance or utility offered at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    /// Washing machine
    WashingMachine,
    /// Tumble dryer
    Dryer,
    /// Electricity outlet
    Electricity,
}

impl DomainCode for ServiceType {
    const ALL: &'static [Self] = &[Self::WashingMachine, Self::Dryer, Self::Electricity];

    fn code(&self) -> &'static str {
        match self {
            Self::WashingMachine => "WASHING_MACHINE",
            Self::Dryer => "DRYER",
            Self::Electricity => "ELECTRICITY",
        }
    }
}

impl_domain_code_fmt!(ServiceType, "service type");

/// Current state of an appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    /// Free to be started
    Available,
    /// In use by someone
    Occupied,
    /// Out of order
    Faulted,
    /// A session was bought and the appliance is waiting to be switched on
    SessionWaitOn,
    /// Running a session that can be stopped
    Stoppable,
}

impl DomainCode for ServiceState {
    const ALL: &'static [Self] = &[
        Self::Available,
        Self::Occupied,
        Self::Faulted,
        Self::SessionWaitOn,
        Self::Stoppable,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Faulted => "FAULTED",
            Self::SessionWaitOn => "SESSION_WAIT_ON",
            Self::Stoppable => "STOPPABLE",
        }
    }
}

impl_domain_code_fmt!(ServiceState, "service state");

/// Kind of site a location is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Apartment building
    ApartmentBuilding,
    /// Campsite
    Campsite,
    /// Hotel
    Hotel,
    /// Public laundromat
    Laundromat,
    /// Senior residence
    SeniorResidence,
    /// Serviced apartment
    ServicedApartment,
    /// Student home
    StudentHome,
    /// Anything else
    Other,
}

impl DomainCode for LocationType {
    const ALL: &'static [Self] = &[
        Self::ApartmentBuilding,
        Self::Campsite,
        Self::Hotel,
        Self::Laundromat,
        Self::SeniorResidence,
        Self::ServicedApartment,
        Self::StudentHome,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::ApartmentBuilding => "APARTMENT_BUILDING",
            Self::Campsite => "CAMPSITE",
            Self::Hotel => "HOTEL",
            Self::Laundromat => "LAUNDROMAT",
            Self::SeniorResidence => "SENIOR_RESIDENCE",
            Self::ServicedApartment => "SERVICED_APARTMENT",
            Self::StudentHome => "STUDENT_HOME",
            Self::Other => "OTHER",
        }
    }
}

impl_domain_code_fmt!(LocationType, "location type");

/// Parses a comma separated list of service states, e.g. `STOPPABLE,SESSION_WAIT_ON`
///
/// Blank entries are skipped; an unknown entry is an error.
pub fn parse_service_states(raw: &str) -> Result<Vec<ServiceState>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
