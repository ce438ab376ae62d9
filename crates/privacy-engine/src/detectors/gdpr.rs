//! GDPR territorial scope (Article 3)
//!
//! - Establishment test: the client operates in the EU or UK
//! - Targeting test: the client offers goods/services to, or monitors,
//!   data subjects in the EU or UK

use shared_types::{JurisdictionId, JurisdictionResult};

use crate::jurisdiction::{join_labels, matching_regions, Region};
use crate::profile::ClientProfile;

const EU_UK: &[Region] = &[Region::EuropeanUnion, Region::UnitedKingdom];

/// Determine whether GDPR applies
///
/// The establishment test takes priority in the reason text when both
/// tests match.
pub fn detect_gdpr(profile: &ClientProfile) -> JurisdictionResult {
    let established = matching_regions(&profile.operating_regions, EU_UK);
    if !established.is_empty() {
        return JurisdictionResult::applies(
            JurisdictionId::Gdpr,
            format!(
                "Client has an establishment in {}.",
                join_labels(&established)
            ),
        );
    }

    let targeted = matching_regions(&profile.consumer_regions, EU_UK);
    if !targeted.is_empty() {
        return JurisdictionResult::applies(
            JurisdictionId::Gdpr,
            format!(
                "Client processes personal data of residents in {}.",
                join_labels(&targeted)
            ),
        );
    }

    JurisdictionResult::does_not_apply(
        JurisdictionId::Gdpr,
        "No EU/UK establishment or consumer base detected.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Checkboxes;

    #[test]
    fn test_establishment_in_eu() {
        let profile = ClientProfile {
            operating_regions: Checkboxes::checked([Region::EuropeanUnion]),
            ..Default::default()
        };
        let result = detect_gdpr(&profile);
        assert!(result.applies);
        assert_eq!(
            result.reason,
            "Client has an establishment in European Union (EU)."
        );
    }

    #[test]
    fn test_targeting_uk_residents() {
        let profile = ClientProfile {
            operating_regions: Checkboxes::checked([Region::California]),
            consumer_regions: Checkboxes::checked([Region::UnitedKingdom]),
            ..Default::default()
        };
        let result = detect_gdpr(&profile);
        assert!(result.applies);
        assert_eq!(
            result.reason,
            "Client processes personal data of residents in United Kingdom (UK)."
        );
    }

    #[test]
    fn test_establishment_takes_priority_in_reason() {
        let profile = ClientProfile {
            operating_regions: Checkboxes::checked([Region::UnitedKingdom]),
            consumer_regions: Checkboxes::checked([Region::EuropeanUnion]),
            ..Default::default()
        };
        let result = detect_gdpr(&profile);
        assert!(result.applies);
        assert!(result.reason.starts_with("Client has an establishment in"));
        assert!(result.reason.contains("United Kingdom (UK)"));
        assert!(!result.reason.contains("European Union"));
    }

    #[test]
    fn test_both_eu_and_uk_named() {
        let profile = ClientProfile {
            operating_regions: Checkboxes::checked([Region::UnitedKingdom, Region::EuropeanUnion]),
            ..Default::default()
        };
        assert_eq!(
            detect_gdpr(&profile).reason,
            "Client has an establishment in European Union (EU), United Kingdom (UK)."
        );
    }

    #[test]
    fn test_no_eu_uk_footprint() {
        let profile = ClientProfile {
            operating_regions: Checkboxes::checked([Region::Texas]),
            consumer_regions: Checkboxes::checked([Region::RestOfWorld]),
            annual_revenue: Some(1_000_000_000),
            ..Default::default()
        };
        let result = detect_gdpr(&profile);
        assert!(!result.applies);
        assert_eq!(result.reason, "No EU/UK establishment or consumer base detected.");
    }
}
