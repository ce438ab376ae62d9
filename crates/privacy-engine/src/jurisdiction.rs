//! Regions that establish a statutory nexus
//!
//! A client's footprint is described by two region sets:
//! - operating regions: where the client has an establishment or operations
//! - consumer regions: where the client's consumers or data subjects are

use std::fmt;
use std::str::FromStr;

use shared_types::{CheckboxLabel, Checkboxes, JurisdictionId};

use crate::error::PrivacyError;

/// Region tags offered by the footprint questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    EuropeanUnion,
    UnitedKingdom,
    California,
    Texas,
    Virginia,
    OtherUsState,
    RestOfWorld,
}

impl Region {
    /// Parse from region code, state code or name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        if let Some(region) = Region::from_label(s) {
            return Some(region);
        }
        match s.trim().to_uppercase().as_str() {
            "EU" | "EEA" | "EUROPEAN UNION" => Some(Region::EuropeanUnion),
            "UK" | "GB" | "UNITED KINGDOM" => Some(Region::UnitedKingdom),
            "CA" | "US-CA" | "CALIFORNIA" => Some(Region::California),
            "TX" | "US-TX" | "TEXAS" => Some(Region::Texas),
            "VA" | "US-VA" | "VIRGINIA" => Some(Region::Virginia),
            "US-OTHER" | "OTHER US STATE" => Some(Region::OtherUsState),
            "ROW" | "REST OF WORLD" | "OTHER" => Some(Region::RestOfWorld),
            _ => None,
        }
    }

    /// Statute whose territorial nexus this region establishes, if any
    pub fn nexus_for(&self) -> Option<JurisdictionId> {
        match self {
            Region::EuropeanUnion | Region::UnitedKingdom => Some(JurisdictionId::Gdpr),
            Region::California => Some(JurisdictionId::CcpaCpra),
            Region::Texas => Some(JurisdictionId::Tdpsa),
            Region::Virginia => Some(JurisdictionId::Vcdpa),
            Region::OtherUsState | Region::RestOfWorld => None,
        }
    }
}

impl CheckboxLabel for Region {
    const ALL: &'static [Self] = &[
        Region::EuropeanUnion,
        Region::UnitedKingdom,
        Region::California,
        Region::Texas,
        Region::Virginia,
        Region::OtherUsState,
        Region::RestOfWorld,
    ];

    fn label(&self) -> &'static str {
        match self {
            Region::EuropeanUnion => "European Union (EU)",
            Region::UnitedKingdom => "United Kingdom (UK)",
            Region::California => "California (US)",
            Region::Texas => "Texas (US)",
            Region::Virginia => "Virginia (US)",
            Region::OtherUsState => "Other US state",
            Region::RestOfWorld => "Rest of world",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = PrivacyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::parse_code(s).ok_or_else(|| PrivacyError::UnknownLabel {
            kind: "region",
            value: s.to_string(),
        })
    }
}

/// Regions of `set` that also appear in `wanted`, in declaration order
pub fn matching_regions(set: &Checkboxes<Region>, wanted: &[Region]) -> Vec<Region> {
    set.true_values()
        .into_iter()
        .filter(|r| wanted.contains(r))
        .collect()
}

/// Joins region labels for reason text (`European Union (EU), United Kingdom (UK)`)
pub fn join_labels(regions: &[Region]) -> String {
    regions
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}
