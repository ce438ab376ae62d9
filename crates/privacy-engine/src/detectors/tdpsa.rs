//! TDPSA applicability (Tex. Bus. & Com. Code §541.002)
//!
//! Applies to entities doing business in Texas or targeting Texas residents
//! that process data of 100,000+ consumers. SBA small businesses are exempt.

use shared_types::{JurisdictionId, JurisdictionResult};

use crate::jurisdiction::Region;
use crate::numeric::group_thousands;
use crate::profile::ClientProfile;
use crate::thresholds::TDPSA_CONSUMER_THRESHOLD;

/// Determine whether TDPSA applies
///
/// The SBA small-business exemption overrides consumer volume.
pub fn detect_tdpsa(profile: &ClientProfile) -> JurisdictionResult {
    if !profile.has_nexus(Region::Texas) {
        return JurisdictionResult::does_not_apply(
            JurisdictionId::Tdpsa,
            "No Texas operations or consumer base detected.",
        );
    }

    if profile.is_sba_small_business {
        return JurisdictionResult::does_not_apply(
            JurisdictionId::Tdpsa,
            "Client qualifies as SBA small business and is exempt from TDPSA. \
             Verify classification.",
        );
    }

    let volume = profile.volume_or_zero();
    if volume >= TDPSA_CONSUMER_THRESHOLD {
        return JurisdictionResult::applies(
            JurisdictionId::Tdpsa,
            format!(
                "Client processes data of {} consumers (threshold: {}) and \
                 operates in or targets Texas.",
                group_thousands(volume),
                group_thousands(TDPSA_CONSUMER_THRESHOLD)
            ),
        );
    }

    JurisdictionResult::does_not_apply(
        JurisdictionId::Tdpsa,
        "Client operates in Texas but consumer volume does not appear to meet \
         the 100,000 threshold. Verify manually.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Checkboxes;

    fn texas(volume: Option<u64>) -> ClientProfile {
        ClientProfile {
            operating_regions: Checkboxes::checked([Region::Texas]),
            consumer_volume: volume,
            ..Default::default()
        }
    }

    #[test]
    fn test_volume_threshold() {
        let result = detect_tdpsa(&texas(Some(100_000)));
        assert!(result.applies);
        assert_eq!(
            result.reason,
            "Client processes data of 100,000 consumers (threshold: 100,000) and \
             operates in or targets Texas."
        );
    }

    #[test]
    fn test_sba_exemption_overrides_volume() {
        let profile = ClientProfile {
            is_sba_small_business: true,
            ..texas(Some(1_000_000))
        };
        let result = detect_tdpsa(&profile);
        assert!(!result.applies);
        assert!(result.reason.contains("SBA small business"));
    }

    #[test]
    fn test_below_threshold_advises_manual_check() {
        let result = detect_tdpsa(&texas(Some(99_999)));
        assert!(!result.applies);
        assert!(result.reason.ends_with("Verify manually."));
        assert!(!detect_tdpsa(&texas(None)).applies);
    }

    #[test]
    fn test_no_texas_nexus() {
        let profile = ClientProfile {
            consumer_regions: Checkboxes::checked([Region::Virginia]),
            consumer_volume: Some(5_000_000),
            ..Default::default()
        };
        let result = detect_tdpsa(&profile);
        assert!(!result.applies);
        assert_eq!(result.reason, "No Texas operations or consumer base detected.");
    }
}
