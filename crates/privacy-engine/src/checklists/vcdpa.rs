//! VCDPA Compliance Checklist
//!
//! Va. Code Ann. §59.1-575 et seq.

use serde::{Deserialize, Serialize};
use shared_types::{JurisdictionId, Severity};

use super::{Checklist, ChecklistRule};

/// VCDPA posture answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcdpaPosture {
    /// Client engages in targeted advertising, data sale or profiling
    #[serde(default)]
    pub include_opt_out_section: bool,
    pub privacy_notice_provided: bool,
    pub rights_procedure_45_days: bool,
    pub appeals_procedure: bool,
    pub opt_out_mechanism_in_place: bool,
    pub sensitive_data_consent_obtained: bool,
    pub dpa_contracts_in_place: bool,
    pub pia_assessments_completed: bool,
    pub third_party_contracts_updated: bool,
}

impl VcdpaPosture {
    /// A posture with every control in place and no opt-out activity
    pub fn fully_compliant() -> Self {
        Self {
            include_opt_out_section: false,
            privacy_notice_provided: true,
            rights_procedure_45_days: true,
            appeals_procedure: true,
            opt_out_mechanism_in_place: true,
            sensitive_data_consent_obtained: true,
            dpa_contracts_in_place: true,
            pia_assessments_completed: true,
            third_party_contracts_updated: true,
        }
    }
}

impl Checklist for VcdpaPosture {
    const JURISDICTION: JurisdictionId = JurisdictionId::Vcdpa;

    fn rules() -> &'static [ChecklistRule<Self>] {
        VCDPA_RULES
    }
}

pub const VCDPA_RULES: &[ChecklistRule<VcdpaPosture>] = &[
    ChecklistRule {
        requirement: "Privacy Notice",
        authority: "Va. Code Ann. §59.1-578(A)",
        current_state: "No VCDPA-compliant privacy notice provided to Virginia consumers.",
        gap: "Controllers must provide consumers with a reasonably accessible \
              privacy notice that includes all disclosures required by §59.1-578.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.privacy_notice_provided,
    },
    ChecklistRule {
        requirement: "Consumer Rights Response Procedure (45-day)",
        authority: "Va. Code Ann. §59.1-581(A)",
        current_state: "No documented procedure to respond to consumer requests within 45 days.",
        gap: "Controllers must respond to authenticated consumer rights requests \
              within 45 days. An additional 45-day extension is permitted with notice.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.rights_procedure_45_days,
    },
    ChecklistRule {
        requirement: "Consumer Appeals Procedure",
        authority: "Va. Code Ann. §59.1-581(C)",
        current_state: "No appeals procedure in place for denied consumer requests.",
        gap: "Controllers must establish and make available an internal process \
              for consumers to appeal the denial of any rights request.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.appeals_procedure,
    },
    ChecklistRule {
        requirement: "Opt-Out Mechanism for Targeted Advertising / Sale / Profiling",
        authority: "Va. Code Ann. §59.1-578(A)(5)",
        current_state: "No opt-out mechanism in place for applicable processing activities.",
        gap: "The client engages in targeted advertising, sale of personal data, \
              or profiling with significant effects but has not provided a \
              mechanism for consumers to opt out.",
        severity: Severity::MustFix,
        triggered: |p, _| p.include_opt_out_section && !p.opt_out_mechanism_in_place,
    },
    ChecklistRule {
        requirement: "Sensitive Data Opt-In Consent",
        authority: "Va. Code Ann. §59.1-578(B)",
        current_state: "Sensitive data processed without opt-in consent.",
        gap: "Processing of sensitive data requires the consumer's prior, \
              freely given, specific, and unambiguous opt-in consent. \
              No such mechanism is currently in place.",
        severity: Severity::MustFix,
        triggered: |p, f| f.processes_sensitive_data && !p.sensitive_data_consent_obtained,
    },
    ChecklistRule {
        requirement: "Data Processing Agreements with Processors",
        authority: "Va. Code Ann. §59.1-580",
        current_state: "Data Processing Agreements with processors not in place.",
        gap: "Controllers must enter into binding contracts with processors \
              governing the processing of personal data and including all \
              provisions required by §59.1-580.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.dpa_contracts_in_place,
    },
    ChecklistRule {
        requirement: "Data Protection Impact Assessments (PIAs)",
        authority: "Va. Code Ann. §59.1-582",
        current_state: "Data Protection Impact Assessments not completed for high-risk processing.",
        gap: "Controllers must conduct and document Data Protection Impact \
              Assessments for processing activities that present a heightened \
              risk of harm to consumers.",
        severity: Severity::MustFix,
        triggered: |p, _| p.include_opt_out_section && !p.pia_assessments_completed,
    },
    ChecklistRule {
        requirement: "Third-Party Contracts Updated for VCDPA",
        authority: "Va. Code Ann. §59.1-580",
        current_state: "Contracts with third parties not reviewed or updated for VCDPA compliance.",
        gap: "Existing contracts with third parties who receive personal data \
              should be reviewed and updated to include VCDPA-required provisions.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.third_party_contracts_updated,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileFlags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compliant_posture_has_no_findings() {
        let posture = VcdpaPosture {
            include_opt_out_section: true,
            ..VcdpaPosture::fully_compliant()
        };
        let flags = ProfileFlags {
            processes_sensitive_data: true,
            ..Default::default()
        };
        assert!(posture.evaluate(&flags).is_empty());
    }

    #[test]
    fn test_third_party_contracts_is_only_should_fix() {
        let should_fix: Vec<_> = VCDPA_RULES
            .iter()
            .filter(|r| r.severity != Severity::MustFix)
            .map(|r| r.requirement)
            .collect();
        assert_eq!(should_fix, vec!["Third-Party Contracts Updated for VCDPA"]);
    }

    #[test]
    fn test_opt_out_section_gates_opt_out_and_pia() {
        let posture = VcdpaPosture {
            include_opt_out_section: true,
            opt_out_mechanism_in_place: false,
            pia_assessments_completed: false,
            ..VcdpaPosture::fully_compliant()
        };
        let findings = posture.evaluate(&ProfileFlags::default());
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].requirement, "Data Protection Impact Assessments (PIAs)");

        let out_of_scope = VcdpaPosture {
            include_opt_out_section: false,
            ..posture
        };
        assert!(out_of_scope.evaluate(&ProfileFlags::default()).is_empty());
    }

    #[test]
    fn test_sensitive_data_consent_needs_sensitive_processing() {
        let posture = VcdpaPosture {
            sensitive_data_consent_obtained: false,
            ..VcdpaPosture::fully_compliant()
        };
        assert!(posture.evaluate(&ProfileFlags::default()).is_empty());

        let flags = ProfileFlags {
            processes_sensitive_data: true,
            ..Default::default()
        };
        let findings = posture.evaluate(&flags);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].requirement, "Sensitive Data Opt-In Consent");
        assert_eq!(findings[0].authority, "Va. Code Ann. §59.1-578(B)");
        assert_eq!(findings[0].severity, Severity::MustFix);
    }

    #[test]
    fn test_empty_posture_without_triggers() {
        let findings = VcdpaPosture::default().evaluate(&ProfileFlags::default());
        let names: Vec<_> = findings.iter().map(|f| f.requirement.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Privacy Notice",
                "Consumer Rights Response Procedure (45-day)",
                "Consumer Appeals Procedure",
                "Data Processing Agreements with Processors",
                "Third-Party Contracts Updated for VCDPA",
            ]
        );
    }
}
