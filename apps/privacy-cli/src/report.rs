//! JSON report assembly
//!
//! The report is what the document renderer consumes: determinations for
//! the attorney to review, and the aggregated gap analysis for whatever set
//! of statutes was confirmed.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use privacy_engine::{
    detectors, risk, AggregateResult, ConfirmedJurisdictions, Matter, PrivacyEngine,
};
use serde::Serialize;
use shared_types::{JurisdictionId, JurisdictionResult};

/// Which stages of the pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Applicability determinations only
    Detect,
    /// Gap analysis over the confirmed statutes only
    Gap,
    /// Determinations, then gap analysis
    Full,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determinations: Option<Vec<Determination>>,
    /// Advisory DPIA flag from the generic high-risk lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpia_likely: Option<bool>,
    pub confirmed: Vec<JurisdictionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_analysis: Option<AggregateResult>,
}

/// A determination with the statute it concerns spelled out for the reader
#[derive(Debug, Serialize)]
pub struct Determination {
    #[serde(flatten)]
    pub result: JurisdictionResult,
    pub statute: &'static str,
    pub citation: &'static str,
}

impl From<JurisdictionResult> for Determination {
    fn from(result: JurisdictionResult) -> Self {
        Self {
            statute: result.name.statute_name(),
            citation: result.name.statute_citation(),
            result,
        }
    }
}

/// Build a report for `matter`
///
/// `confirm` overrides the matter's confirmed set. In full mode a matter
/// whose confirmation question was never answered falls back to every
/// statute detected as applicable. An answered but empty confirmation is
/// respected as is.
pub fn build_report(matter: &Matter, mode: Mode, confirm: Option<&[String]>) -> Result<Report> {
    let engine = PrivacyEngine::new();

    let confirmed = match confirm {
        Some(names) => Some(ConfirmedJurisdictions::from_names(
            names.iter().map(String::as_str),
        )),
        None => matter.confirmed_jurisdictions.clone(),
    };

    let results = match mode {
        Mode::Detect | Mode::Full => Some(engine.detect(&matter.profile)),
        Mode::Gap => None,
    };

    let confirmed: Vec<JurisdictionId> = match (confirmed, &results) {
        (Some(confirmed), _) => confirmed.as_slice().to_vec(),
        (None, Some(results)) if mode == Mode::Full => {
            tracing::info!("Confirmation unanswered, using detected statutes");
            detectors::applicable(results)
        }
        (None, _) => Vec::new(),
    };

    let gap_analysis = match mode {
        Mode::Detect => None,
        Mode::Gap | Mode::Full => Some(
            privacy_engine::run_gap_analysis(&confirmed, matter)
                .context("gap analysis failed")?,
        ),
    };

    let dpia_likely = results.as_ref().map(|_| {
        risk::requires_dpia_likely(
            &matter.profile.data_types_collected,
            &matter.profile.processing_purposes,
        )
    });

    let determinations = results.map(|results| {
        results
            .into_iter()
            .map(Determination::from)
            .collect::<Vec<_>>()
    });

    Ok(Report {
        generated_at: Utc::now(),
        mode,
        determinations,
        dpia_likely,
        confirmed,
        gap_analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use privacy_engine::{ClientProfile, DataCategory, GdprPosture, Region};
    use shared_types::Checkboxes;

    fn eu_matter() -> Matter {
        Matter {
            profile: ClientProfile {
                operating_regions: Checkboxes::checked([Region::EuropeanUnion]),
                data_types_collected: Checkboxes::checked([DataCategory::Biometric]),
                ..Default::default()
            },
            gdpr: Some(GdprPosture {
                staff_training_current: false,
                ..GdprPosture::fully_compliant()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_mode_skips_gap_analysis() {
        let report = build_report(&eu_matter(), Mode::Detect, None).unwrap();
        assert_eq!(report.determinations.as_ref().map(Vec::len), Some(4));
        assert_eq!(report.dpia_likely, Some(true));
        assert!(report.gap_analysis.is_none());
    }

    #[test]
    fn test_full_mode_falls_back_to_detected() {
        let report = build_report(&eu_matter(), Mode::Full, None).unwrap();
        assert_eq!(report.confirmed, vec![JurisdictionId::Gdpr]);
        let gap = report.gap_analysis.unwrap();
        assert_eq!(gap.counts.total, 1);
        assert_eq!(gap.all[0].requirement, "Staff Data Protection Training");
    }

    #[test]
    fn test_gap_mode_with_nothing_confirmed_is_empty() {
        let report = build_report(&eu_matter(), Mode::Gap, None).unwrap();
        assert!(report.determinations.is_none());
        assert!(report.dpia_likely.is_none());
        assert!(report.gap_analysis.unwrap().is_empty());
    }

    #[test]
    fn test_confirm_override_reports_missing_posture() {
        let names = vec!["gdpr".to_string(), "VCDPA".to_string(), "PIPL".to_string()];
        let err = build_report(&eu_matter(), Mode::Gap, Some(names.as_slice())).unwrap_err();
        assert!(format!("{err:#}").contains("VCDPA is confirmed but the matter has no posture"));
    }

    #[test]
    fn test_full_mode_respects_explicit_empty_confirmation() {
        let matter = Matter::from_json(
            r#"{
                "profile": {"operating_regions": {"European Union (EU)": true}},
                "confirmed_jurisdictions": {
                    "GDPR": false, "CCPA/CPRA": false, "TDPSA": false, "VCDPA": false
                }
            }"#,
        )
        .unwrap();
        let report = build_report(&matter, Mode::Full, None).unwrap();
        assert!(report.confirmed.is_empty());
        assert!(report.gap_analysis.unwrap().is_empty());
        assert!(report.determinations.unwrap()[0].result.applies);
    }

    #[test]
    fn test_confirm_override_with_only_unknown_names() {
        let names = vec!["PIPEDA".to_string()];
        let report = build_report(&eu_matter(), Mode::Full, Some(names.as_slice())).unwrap();
        assert!(report.confirmed.is_empty());
        assert!(report.gap_analysis.unwrap().is_empty());
    }

    #[test]
    fn test_determinations_carry_statute_metadata() {
        let report = build_report(&eu_matter(), Mode::Detect, None).unwrap();
        let determinations = report.determinations.unwrap();
        assert_eq!(
            determinations[3].statute,
            "Virginia Consumer Data Protection Act"
        );
        assert_eq!(determinations[1].citation, "Cal. Civ. Code §1798.100 et seq.");
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&eu_matter(), Mode::Detect, None).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "detect");
        assert_eq!(json["determinations"][0]["name"], "GDPR");
        assert_eq!(json["determinations"][0]["applies"], true);
        assert_eq!(
            json["determinations"][0]["citation"],
            "Regulation (EU) 2016/679; UK GDPR"
        );
        assert!(json.get("gap_analysis").is_none());
        assert!(json["generated_at"].is_string());
    }
}
