pub mod aggregate;
pub mod checklists;
pub mod detectors;
pub mod error;
pub mod jurisdiction;
pub mod matter;
pub mod numeric;
pub mod profile;
pub mod risk;
pub mod thresholds;

pub use aggregate::{aggregate, AggregateResult, FindingCounts, SeverityBuckets};
pub use checklists::{CcpaCpraPosture, Checklist, GdprPosture, TdpsaPosture, VcdpaPosture};
pub use detectors::detect_all;
pub use error::PrivacyError;
pub use jurisdiction::Region;
pub use matter::{run_gap_analysis, ConfirmedJurisdictions, Matter};
pub use profile::{ClientProfile, DataCategory, LawfulBasis, ProcessingPurpose, ProfileFlags};

use shared_types::JurisdictionResult;

/// PrivacyEngine entry point
///
/// Profile -> jurisdiction determinations -> (attorney confirms) ->
/// findings -> aggregate. Every call recomputes from its inputs.
pub struct PrivacyEngine;

impl PrivacyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Determine which statutes apply to the client
    pub fn detect(&self, profile: &ClientProfile) -> Vec<JurisdictionResult> {
        detectors::detect_all(profile)
    }

    /// Gap analysis over the matter's own confirmed jurisdictions
    pub fn analyse(&self, matter: &Matter) -> error::Result<AggregateResult> {
        run_gap_analysis(matter.confirmed(), matter)
    }

    /// Confirm every detected statute and analyse it (for unattended runs)
    pub fn run(
        &self,
        matter: &Matter,
    ) -> error::Result<(Vec<JurisdictionResult>, AggregateResult)> {
        let determinations = self.detect(&matter.profile);
        let confirmed = detectors::applicable(&determinations);
        let result = run_gap_analysis(&confirmed, matter)?;
        Ok((determinations, result))
    }
}

impl Default for PrivacyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Checkboxes, JurisdictionId, Severity};

    fn uk_retailer() -> Matter {
        Matter {
            profile: ClientProfile {
                operating_regions: Checkboxes::checked([Region::UnitedKingdom]),
                consumer_regions: Checkboxes::checked([Region::California]),
                consumer_volume: Some(40_000),
                ..Default::default()
            },
            confirmed_jurisdictions: Some(ConfirmedJurisdictions::new([JurisdictionId::Gdpr])),
            gdpr: Some(GdprPosture {
                lawful_basis_documented: false,
                ..GdprPosture::fully_compliant()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_detects_and_analyses() {
        let engine = PrivacyEngine::new();
        let matter = uk_retailer();

        let determinations = engine.detect(&matter.profile);
        assert_eq!(determinations.len(), 4);
        assert!(determinations[0].applies);
        assert!(!determinations[1].applies);

        let result = engine.analyse(&matter).unwrap();
        assert_eq!(result.counts.total, 1);
        assert_eq!(result.all[0].severity, Severity::MustFix);
    }

    #[test]
    fn test_engine_run_confirms_detected_statutes() {
        let mut matter = uk_retailer();
        matter.confirmed_jurisdictions = None;
        let (determinations, result) = PrivacyEngine::default().run(&matter).unwrap();
        assert_eq!(detectors::applicable(&determinations), vec![JurisdictionId::Gdpr]);
        assert_eq!(result.jurisdictions(), vec![JurisdictionId::Gdpr]);
    }

    #[test]
    fn test_engine_run_reports_missing_posture() {
        let mut matter = uk_retailer();
        matter.gdpr = None;
        assert!(matches!(
            PrivacyEngine::new().run(&matter),
            Err(PrivacyError::MissingPosture(JurisdictionId::Gdpr))
        ));
    }
}
