//! VCDPA applicability (Va. Code Ann. §59.1-576)
//!
//! Applies to persons doing business in Virginia or targeting Virginia
//! residents that control or process data of:
//! - 100,000+ Virginia consumers, or
//! - 25,000+ Virginia consumers while deriving revenue from data sales
//!
//! The statute's second branch requires 50%+ of gross revenue from data
//! sales. The interview does not collect a revenue share, so the branch is
//! evaluated as a consumer count plus the `sells_personal_information` flag.

use shared_types::{JurisdictionId, JurisdictionResult};

use crate::jurisdiction::Region;
use crate::numeric::group_thousands;
use crate::profile::ClientProfile;
use crate::thresholds::{VCDPA_CONSUMER_THRESHOLD, VCDPA_REVENUE_SHARE_THRESHOLD};

/// Determine whether VCDPA applies
pub fn detect_vcdpa(profile: &ClientProfile) -> JurisdictionResult {
    if !profile.has_nexus(Region::Virginia) {
        return JurisdictionResult::does_not_apply(
            JurisdictionId::Vcdpa,
            "No Virginia operations or consumer base detected.",
        );
    }

    let volume = profile.volume_or_zero();
    if volume >= VCDPA_CONSUMER_THRESHOLD {
        return JurisdictionResult::applies(
            JurisdictionId::Vcdpa,
            format!(
                "Client processes data of {} consumers (threshold: {}) and \
                 operates in or targets Virginia.",
                group_thousands(volume),
                group_thousands(VCDPA_CONSUMER_THRESHOLD)
            ),
        );
    }

    if volume >= VCDPA_REVENUE_SHARE_THRESHOLD && profile.sells_personal_information {
        return JurisdictionResult::applies(
            JurisdictionId::Vcdpa,
            format!(
                "Client processes data of {} Virginia consumers and derives \
                 revenue from sale of personal data.",
                group_thousands(volume)
            ),
        );
    }

    JurisdictionResult::does_not_apply(
        JurisdictionId::Vcdpa,
        "Client operates in Virginia but does not appear to meet consumer \
         volume thresholds. Verify manually.",
    )
}
