//! TDPSA Compliance Checklist
//!
//! Tex. Bus. & Com. Code Ch. 541. Every control is a statutory obligation.

use serde::{Deserialize, Serialize};
use shared_types::{JurisdictionId, Severity};

use super::{Checklist, ChecklistRule};

/// TDPSA posture answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdpsaPosture {
    /// Client engages in targeted advertising, data sale or profiling, so
    /// the opt-out and assessment controls are in scope
    #[serde(default)]
    pub include_opt_out_section: bool,
    pub privacy_notice_provided: bool,
    pub rights_procedure_45_days: bool,
    pub appeals_procedure: bool,
    pub opt_out_mechanism_in_place: bool,
    pub uoom_supported: bool,
    pub sensitive_data_consent_obtained: bool,
    pub dpa_contracts_in_place: bool,
    pub dpa_assessments_completed: bool,
}

impl TdpsaPosture {
    /// A posture with every control in place and no opt-out activity
    pub fn fully_compliant() -> Self {
        Self {
            include_opt_out_section: false,
            privacy_notice_provided: true,
            rights_procedure_45_days: true,
            appeals_procedure: true,
            opt_out_mechanism_in_place: true,
            uoom_supported: true,
            sensitive_data_consent_obtained: true,
            dpa_contracts_in_place: true,
            dpa_assessments_completed: true,
        }
    }
}

impl Checklist for TdpsaPosture {
    const JURISDICTION: JurisdictionId = JurisdictionId::Tdpsa;

    fn rules() -> &'static [ChecklistRule<Self>] {
        TDPSA_RULES
    }
}

pub const TDPSA_RULES: &[ChecklistRule<TdpsaPosture>] = &[
    ChecklistRule {
        requirement: "Privacy Notice",
        authority: "Tex. Bus. & Com. Code §541.101",
        current_state: "No TDPSA-compliant privacy notice provided to Texas consumers.",
        gap: "Controllers must provide consumers with a reasonably accessible, \
              clear, and meaningful privacy notice covering required disclosures.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.privacy_notice_provided,
    },
    ChecklistRule {
        requirement: "Consumer Rights Response Procedure (45-day)",
        authority: "Tex. Bus. & Com. Code §541.052",
        current_state: "No documented procedure to respond to consumer requests within 45 days.",
        gap: "Controllers must respond to authenticated consumer rights requests \
              within 45 days, with a possible 45-day extension on notice.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.rights_procedure_45_days,
    },
    ChecklistRule {
        requirement: "Consumer Appeals Procedure",
        authority: "Tex. Bus. & Com. Code §541.053",
        current_state: "No appeals procedure in place for denied consumer requests.",
        gap: "Controllers must establish an internal appeals process for \
              consumers to appeal the denial of a rights request.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.appeals_procedure,
    },
    ChecklistRule {
        requirement: "Opt-Out Mechanism for Targeted Advertising / Sale / Profiling",
        authority: "Tex. Bus. & Com. Code §541.051",
        current_state: "No opt-out mechanism in place for applicable processing activities.",
        gap: "The client engages in targeted advertising, sale of personal data, \
              or profiling with significant effects but has not provided a clear \
              mechanism for consumers to opt out.",
        severity: Severity::MustFix,
        triggered: |p, _| p.include_opt_out_section && !p.opt_out_mechanism_in_place,
    },
    ChecklistRule {
        requirement: "Universal Opt-Out Mechanism (UOOM)",
        authority: "Tex. Bus. & Com. Code §541.056",
        current_state: "Universal Opt-Out Mechanism not supported.",
        gap: "Controllers must honour a universal opt-out mechanism recognised \
              by the Texas Attorney General. The client does not currently \
              support any such mechanism.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.uoom_supported,
    },
    ChecklistRule {
        requirement: "Sensitive Data Opt-In Consent",
        authority: "Tex. Bus. & Com. Code §541.101(b)",
        current_state: "Sensitive data processed without opt-in consent mechanism.",
        gap: "Processing of sensitive personal data requires the consumer's \
              prior opt-in consent. No consent mechanism is currently in place.",
        severity: Severity::MustFix,
        triggered: |p, f| f.processes_sensitive_data && !p.sensitive_data_consent_obtained,
    },
    ChecklistRule {
        requirement: "Data Processing Agreements with Processors",
        authority: "Tex. Bus. & Com. Code §541.104",
        current_state: "Data Processing Agreements with processors not in place.",
        gap: "Controllers must enter into binding contracts with processors \
              that include required data protection provisions.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.dpa_contracts_in_place,
    },
    ChecklistRule {
        requirement: "Data Protection Assessments",
        authority: "Tex. Bus. & Com. Code §541.105",
        current_state: "Data Protection Assessments not completed for high-risk processing.",
        gap: "Controllers must conduct and document Data Protection Assessments \
              before engaging in processing that presents a heightened risk of harm.",
        severity: Severity::MustFix,
        triggered: |p, _| p.include_opt_out_section && !p.dpa_assessments_completed,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileFlags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_rules_are_must_fix() {
        assert_eq!(TDPSA_RULES.len(), 8);
        assert!(TDPSA_RULES.iter().all(|r| r.severity == Severity::MustFix));
    }

    #[test]
    fn test_compliant_posture_has_no_findings() {
        let posture = TdpsaPosture {
            include_opt_out_section: true,
            ..TdpsaPosture::fully_compliant()
        };
        let flags = ProfileFlags {
            processes_sensitive_data: true,
            ..Default::default()
        };
        assert!(posture.evaluate(&flags).is_empty());
    }

    #[test]
    fn test_opt_out_section_gates_two_rules() {
        let posture = TdpsaPosture {
            opt_out_mechanism_in_place: false,
            dpa_assessments_completed: false,
            ..TdpsaPosture::fully_compliant()
        };
        assert!(posture.evaluate(&ProfileFlags::default()).is_empty());

        let in_scope = TdpsaPosture {
            include_opt_out_section: true,
            ..posture
        };
        let findings = in_scope.evaluate(&ProfileFlags::default());
        let names: Vec<_> = findings.iter().map(|f| f.requirement.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Opt-Out Mechanism for Targeted Advertising / Sale / Profiling",
                "Data Protection Assessments",
            ]
        );
    }

    #[test]
    fn test_sensitive_data_consent_needs_sensitive_processing() {
        let posture = TdpsaPosture {
            sensitive_data_consent_obtained: false,
            ..TdpsaPosture::fully_compliant()
        };
        assert!(posture.evaluate(&ProfileFlags::default()).is_empty());

        let flags = ProfileFlags {
            processes_sensitive_data: true,
            ..Default::default()
        };
        let findings = posture.evaluate(&flags);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].authority, "Tex. Bus. & Com. Code §541.101(b)");
    }

    #[test]
    fn test_opt_out_flag_defaults_to_false() {
        let posture: TdpsaPosture = serde_json::from_str(
            r#"{
                "privacy_notice_provided": true,
                "rights_procedure_45_days": true,
                "appeals_procedure": true,
                "opt_out_mechanism_in_place": false,
                "uoom_supported": true,
                "sensitive_data_consent_obtained": true,
                "dpa_contracts_in_place": true,
                "dpa_assessments_completed": false
            }"#,
        )
        .unwrap();
        assert!(!posture.include_opt_out_section);
        assert!(posture.evaluate(&ProfileFlags::default()).is_empty());
    }
}
