//! GDPR Compliance Checklist
//!
//! Regulation (EU) 2016/679 and the UK GDPR. Fourteen controls covering
//! documentation, notices and consent, rights and contracts, and security.

use serde::{Deserialize, Serialize};
use shared_types::{JurisdictionId, Severity};

use super::{Checklist, ChecklistRule};

/// GDPR posture answers, one boolean per control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdprPosture {
    pub lawful_basis_documented: bool,
    pub ropa_maintained: bool,
    pub retention_schedule_documented: bool,
    pub lia_documented: bool,
    pub privacy_notice_provided: bool,
    pub cookie_consent_compliant: bool,
    pub consent_records_maintained: bool,
    pub rights_procedure_documented: bool,
    pub article28_contracts_in_place: bool,
    pub transfer_mechanism_in_place: bool,
    pub breach_procedure_documented: bool,
    pub dpia_conducted: bool,
    pub privacy_by_design: bool,
    pub staff_training_current: bool,
}

impl GdprPosture {
    /// A posture with every control in place
    pub fn fully_compliant() -> Self {
        Self {
            lawful_basis_documented: true,
            ropa_maintained: true,
            retention_schedule_documented: true,
            lia_documented: true,
            privacy_notice_provided: true,
            cookie_consent_compliant: true,
            consent_records_maintained: true,
            rights_procedure_documented: true,
            article28_contracts_in_place: true,
            transfer_mechanism_in_place: true,
            breach_procedure_documented: true,
            dpia_conducted: true,
            privacy_by_design: true,
            staff_training_current: true,
        }
    }
}

impl Checklist for GdprPosture {
    const JURISDICTION: JurisdictionId = JurisdictionId::Gdpr;

    fn rules() -> &'static [ChecklistRule<Self>] {
        GDPR_RULES
    }
}

pub const GDPR_RULES: &[ChecklistRule<GdprPosture>] = &[
    // ========================================================================
    // Documentation
    // ========================================================================
    ChecklistRule {
        requirement: "Lawful Basis Documentation",
        authority: "Article 6 GDPR",
        current_state: "No documented lawful basis for processing activities.",
        gap: "The client has not documented the lawful basis relied upon for \
              each category of processing activity. Controllers must be able \
              to demonstrate compliance with Article 5(2) accountability principle.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.lawful_basis_documented,
    },
    ChecklistRule {
        requirement: "Record of Processing Activities (RoPA)",
        authority: "Article 30 GDPR",
        current_state: "No RoPA maintained.",
        gap: "The client does not maintain a Record of Processing Activities. \
              This is a mandatory requirement for most controllers and processors.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.ropa_maintained,
    },
    ChecklistRule {
        requirement: "Data Retention Schedule",
        authority: "Article 5(1)(e) GDPR (storage limitation)",
        current_state: "No documented data retention schedule.",
        gap: "The client has no documented schedule defining how long personal \
              data is retained and the criteria used to determine retention periods.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.retention_schedule_documented,
    },
    ChecklistRule {
        requirement: "Legitimate Interests Assessment (LIA)",
        authority: "Article 6(1)(f) GDPR",
        current_state: "Legitimate interests relied upon but no LIA documented.",
        gap: "Where legitimate interests is used as a lawful basis, a Legitimate \
              Interests Assessment should be documented to demonstrate the \
              balancing test has been performed.",
        severity: Severity::Consider,
        triggered: |p, f| f.relies_on_legitimate_interests && !p.lia_documented,
    },
    // ========================================================================
    // Notices and Consent
    // ========================================================================
    ChecklistRule {
        requirement: "Privacy Notice at Collection",
        authority: "Articles 13 and 14 GDPR",
        current_state: "No privacy notice provided to data subjects at point of collection.",
        gap: "The client does not currently provide a compliant privacy notice \
              at or before the point of data collection as required by Articles 13/14.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.privacy_notice_provided,
    },
    ChecklistRule {
        requirement: "Cookie Consent Mechanism",
        authority: "ePrivacy Directive; GDPR Article 6",
        current_state: "Cookie consent mechanism absent or non-compliant.",
        gap: "The client does not have a compliant cookie consent mechanism. \
              Non-essential cookies require prior, freely given, specific, \
              informed, and unambiguous consent.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.cookie_consent_compliant,
    },
    ChecklistRule {
        requirement: "Consent Records",
        authority: "Article 7(1) GDPR",
        current_state: "Consent relied upon but no mechanism to record or evidence consent.",
        gap: "Where consent is the lawful basis, the controller must be able to \
              demonstrate that the data subject has consented. No consent \
              recording mechanism is currently in place.",
        severity: Severity::MustFix,
        triggered: |p, f| f.relies_on_consent && !p.consent_records_maintained,
    },
    // ========================================================================
    // Rights and Contracts
    // ========================================================================
    ChecklistRule {
        requirement: "Data Subject Rights Procedure",
        authority: "Articles 15–22 GDPR",
        current_state: "No documented procedure for handling data subject rights requests.",
        gap: "The client has no documented procedure for receiving, verifying, \
              and responding to data subject rights requests within the one-month \
              statutory deadline.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.rights_procedure_documented,
    },
    ChecklistRule {
        requirement: "Processor Contracts (Article 28 DPAs)",
        authority: "Article 28 GDPR",
        current_state: "Article 28-compliant Data Processing Agreements not in place with all processors.",
        gap: "The client does not have compliant Data Processing Agreements \
              with all processors. This is a mandatory requirement wherever \
              a processor handles personal data on the controller's behalf.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.article28_contracts_in_place,
    },
    ChecklistRule {
        requirement: "International Transfer Mechanism",
        authority: "Articles 44–49 GDPR",
        current_state: "Personal data transferred outside UK/EEA without an adequate transfer mechanism.",
        gap: "The client transfers personal data to third countries but does not \
              have an appropriate transfer mechanism (adequacy decision, SCCs, BCRs, \
              or IDTA) in place as required by Chapter V GDPR.",
        severity: Severity::MustFix,
        triggered: |p, f| f.has_international_transfers && !p.transfer_mechanism_in_place,
    },
    // ========================================================================
    // Security and Breach
    // ========================================================================
    ChecklistRule {
        requirement: "Data Breach Response Procedure",
        authority: "Articles 33 and 34 GDPR",
        current_state: "No documented breach detection, assessment, and notification procedure.",
        gap: "The client has no documented procedure for detecting, assessing, \
              and notifying the supervisory authority (within 72 hours) and \
              affected data subjects of personal data breaches.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.breach_procedure_documented,
    },
    ChecklistRule {
        requirement: "Data Protection Impact Assessment (DPIA)",
        authority: "Article 35 GDPR",
        current_state: "High-risk processing identified but no DPIA conducted.",
        gap: "The client's processing activities indicate that a DPIA is likely \
              required under Article 35, but none has been conducted. A DPIA is \
              mandatory before commencing high-risk processing.",
        severity: Severity::MustFix,
        triggered: |p, f| f.requires_dpia && !p.dpia_conducted,
    },
    ChecklistRule {
        requirement: "Privacy by Design and Default",
        authority: "Article 25 GDPR",
        current_state: "Privacy by design principles not embedded in new projects or systems.",
        gap: "The client does not currently implement data protection by design \
              and by default when developing new products, services, or systems.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.privacy_by_design,
    },
    ChecklistRule {
        requirement: "Staff Data Protection Training",
        authority: "Article 5(2) GDPR (accountability); Article 39(1)(b)",
        current_state: "Staff have not received data protection training in the last 12 months.",
        gap: "No evidence of current staff data protection training. Regular \
              training is a key element of the accountability principle and \
              a DPO obligation where a DPO is appointed.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.staff_training_current,
    },
];
