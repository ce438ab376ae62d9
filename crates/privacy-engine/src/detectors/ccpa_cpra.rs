//! CCPA/CPRA applicability (Cal. Civ. Code §1798.140(d))
//!
//! A for-profit business doing business in California is covered if it
//! meets at least one threshold:
//! - annual gross revenue of $25M or more
//! - buys, sells or shares PI of 100,000+ consumers or households
//! - derives revenue from selling or sharing PI

use shared_types::{JurisdictionId, JurisdictionResult};

use crate::jurisdiction::Region;
use crate::numeric::{format_dollars, group_thousands};
use crate::profile::ClientProfile;
use crate::thresholds::{CCPA_CONSUMER_THRESHOLD, CCPA_REVENUE_THRESHOLD};

/// Determine whether CCPA/CPRA applies
///
/// Every matched threshold is named in the reason, not just the first.
pub fn detect_ccpa_cpra(profile: &ClientProfile) -> JurisdictionResult {
    if !profile.has_nexus(Region::California) {
        return JurisdictionResult::does_not_apply(
            JurisdictionId::CcpaCpra,
            "No California operations or consumer base detected.",
        );
    }

    let mut reasons = Vec::new();

    let revenue = profile.revenue_or_zero();
    if revenue >= CCPA_REVENUE_THRESHOLD {
        reasons.push(format!(
            "Annual revenue ({}) meets or exceeds {} threshold.",
            format_dollars(revenue),
            format_dollars(CCPA_REVENUE_THRESHOLD)
        ));
    }

    let volume = profile.volume_or_zero();
    if volume >= CCPA_CONSUMER_THRESHOLD {
        reasons.push(format!(
            "Consumer volume ({}) meets or exceeds {} threshold.",
            group_thousands(volume),
            group_thousands(CCPA_CONSUMER_THRESHOLD)
        ));
    }

    if profile.sells_personal_information {
        reasons.push("Client derives revenue from selling personal information.".to_string());
    }

    if reasons.is_empty() {
        return JurisdictionResult::does_not_apply(
            JurisdictionId::CcpaCpra,
            "Client operates in California but does not appear to meet \
             revenue or volume thresholds. Verify manually.",
        );
    }

    JurisdictionResult::applies(JurisdictionId::CcpaCpra, reasons.join(" "))
}
