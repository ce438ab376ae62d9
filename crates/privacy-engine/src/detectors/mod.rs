//! Jurisdiction applicability detection
//!
//! One pure rule function per statute. Each consumes the slices of the
//! [`ClientProfile`] it needs and always returns a determination with a
//! reason, whether or not the statute applies. Detectors are independent of
//! one another; none short-circuits another.

pub mod ccpa_cpra;
pub mod gdpr;
pub mod tdpsa;
pub mod vcdpa;

pub use ccpa_cpra::detect_ccpa_cpra;
pub use gdpr::detect_gdpr;
pub use tdpsa::detect_tdpsa;
pub use vcdpa::detect_vcdpa;

use shared_types::{JurisdictionId, JurisdictionResult};

use crate::profile::ClientProfile;

/// Run the detector for one statute
pub fn detect(jurisdiction: JurisdictionId, profile: &ClientProfile) -> JurisdictionResult {
    match jurisdiction {
        JurisdictionId::Gdpr => detect_gdpr(profile),
        JurisdictionId::CcpaCpra => detect_ccpa_cpra(profile),
        JurisdictionId::Tdpsa => detect_tdpsa(profile),
        JurisdictionId::Vcdpa => detect_vcdpa(profile),
    }
}

/// Run every detector in evaluation order
///
/// Always returns four results, including negative determinations so the
/// host can surface close calls to the attorney.
pub fn detect_all(profile: &ClientProfile) -> Vec<JurisdictionResult> {
    JurisdictionId::ALL
        .iter()
        .map(|&jurisdiction| {
            let result = detect(jurisdiction, profile);
            tracing::debug!(
                jurisdiction = %result.name,
                applies = result.applies,
                reason = %result.reason,
                "Jurisdiction determination"
            );
            result
        })
        .collect()
}

/// Names of the statutes that were detected as applicable
pub fn applicable(results: &[JurisdictionResult]) -> Vec<JurisdictionId> {
    results.iter().filter(|r| r.applies).map(|r| r.name).collect()
}
