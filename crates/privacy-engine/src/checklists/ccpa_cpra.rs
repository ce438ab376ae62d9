//! CCPA/CPRA Compliance Checklist
//!
//! Cal. Civ. Code §1798.100 et seq. and the CPPA regulations.

use serde::{Deserialize, Serialize};
use shared_types::{JurisdictionId, Severity};

use super::{Checklist, ChecklistRule};

/// CCPA/CPRA posture answers, one boolean per control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcpaCpraPosture {
    pub notice_at_collection: bool,
    pub policy_updated_12mo: bool,
    pub policy_disclosures_complete: bool,
    pub opt_out_mechanism_in_place: bool,
    pub gpc_honoured: bool,
    pub spi_limit_mechanism_in_place: bool,
    pub rights_procedure_45_days: bool,
    pub service_provider_contracts_compliant: bool,
    pub staff_trained: bool,
    pub deletion_verification_in_place: bool,
}

impl CcpaCpraPosture {
    /// A posture with every control in place
    pub fn fully_compliant() -> Self {
        Self {
            notice_at_collection: true,
            policy_updated_12mo: true,
            policy_disclosures_complete: true,
            opt_out_mechanism_in_place: true,
            gpc_honoured: true,
            spi_limit_mechanism_in_place: true,
            rights_procedure_45_days: true,
            service_provider_contracts_compliant: true,
            staff_trained: true,
            deletion_verification_in_place: true,
        }
    }
}

impl Checklist for CcpaCpraPosture {
    const JURISDICTION: JurisdictionId = JurisdictionId::CcpaCpra;

    fn rules() -> &'static [ChecklistRule<Self>] {
        CCPA_CPRA_RULES
    }
}

pub const CCPA_CPRA_RULES: &[ChecklistRule<CcpaCpraPosture>] = &[
    ChecklistRule {
        requirement: "Notice at Collection",
        authority: "Cal. Civ. Code §1798.100(a)",
        current_state: "No privacy notice at collection provided to California consumers.",
        gap: "The client does not provide a notice at or before the point of \
              collecting personal information disclosing the categories of PI \
              collected and the purposes for which it is used.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.notice_at_collection,
    },
    ChecklistRule {
        requirement: "Privacy Policy Currency",
        authority: "Cal. Civ. Code §1798.130(a)(5)",
        current_state: "Published privacy policy not updated within the last 12 months.",
        gap: "Businesses subject to CCPA must update their privacy policy at \
              least once every 12 months.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.policy_updated_12mo,
    },
    ChecklistRule {
        requirement: "Required Privacy Policy Disclosures",
        authority: "Cal. Civ. Code §1798.130(a)(5)",
        current_state: "Privacy policy does not include all required CCPA/CPRA disclosures.",
        gap: "The client's current privacy policy is missing one or more of the \
              disclosures required by CCPA/CPRA, including categories of PI \
              collected, sources, purposes, third-party disclosures, and \
              consumer rights.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.policy_disclosures_complete,
    },
    ChecklistRule {
        requirement: "\"Do Not Sell or Share\" Opt-Out Mechanism",
        authority: "Cal. Civ. Code §1798.120",
        current_state: "Client sells/shares PI but no opt-out mechanism is in place.",
        gap: "The client sells or shares personal information but has not \
              implemented a \"Do Not Sell or Share My Personal Information\" \
              link or equivalent mechanism as required.",
        severity: Severity::MustFix,
        triggered: |p, f| f.sells_personal_information && !p.opt_out_mechanism_in_place,
    },
    ChecklistRule {
        requirement: "Global Privacy Control (GPC) Signal",
        authority: "CPPA Regulations §999.315(d)",
        current_state: "Global Privacy Control signal not honoured.",
        gap: "The client does not automatically honour the Global Privacy Control \
              opt-out signal. This is required under CPPA regulations for businesses \
              subject to CCPA/CPRA.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.gpc_honoured,
    },
    ChecklistRule {
        requirement: "\"Limit Use of Sensitive Personal Information\" Mechanism",
        authority: "Cal. Civ. Code §1798.121",
        current_state: "SPI used beyond primary purpose but no limit mechanism in place.",
        gap: "The client uses sensitive personal information beyond what is \
              necessary for the primary purpose but has not provided a mechanism \
              for consumers to limit such use as required by §1798.121.",
        severity: Severity::MustFix,
        triggered: |p, f| {
            f.uses_sensitive_data_beyond_primary_purpose && !p.spi_limit_mechanism_in_place
        },
    },
    ChecklistRule {
        requirement: "Consumer Rights Request Procedure (45-day)",
        authority: "Cal. Civ. Code §1798.105, §1798.106",
        current_state: "No documented procedure to respond to consumer rights requests within 45 days.",
        gap: "The client has no documented procedure for receiving and responding \
              to consumer rights requests within the 45-day statutory deadline \
              (extendable by an additional 45 days with notice).",
        severity: Severity::MustFix,
        triggered: |p, _| !p.rights_procedure_45_days,
    },
    ChecklistRule {
        requirement: "Service Provider and Contractor Contracts",
        authority: "Cal. Civ. Code §1798.140(ag)",
        current_state: "Service provider/contractor agreements do not include required CPRA provisions.",
        gap: "Contracts with service providers, contractors, and third parties \
              must include specific provisions required by CPRA. Current contracts \
              do not meet these requirements.",
        severity: Severity::MustFix,
        triggered: |p, _| !p.service_provider_contracts_compliant,
    },
    ChecklistRule {
        requirement: "Staff Training on Consumer Rights",
        authority: "Cal. Civ. Code §1798.135(a)(3)",
        current_state: "Staff who handle consumer rights requests have not been trained.",
        gap: "Businesses must train all individuals responsible for handling \
              consumer inquiries about CCPA/CPRA privacy practices.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.staff_trained,
    },
    ChecklistRule {
        requirement: "Two-Step Verification for Deletion Requests",
        authority: "CPPA Regulations §999.323",
        current_state: "No two-step verification process for deletion requests implemented.",
        gap: "A two-step verification process for online deletion requests is \
              recommended under CPPA regulations to reduce fraudulent requests.",
        severity: Severity::ShouldFix,
        triggered: |p, _| !p.deletion_verification_in_place,
    },
];
