//! Statutory control checklists
//!
//! Each statute's checklist is a declarative, ordered table of rules. A rule
//! pairs a trigger predicate over the posture record (and cross-cutting
//! profile flags) with the static text of the finding it produces. One
//! generic runner evaluates any table:
//!
//! - a triggered rule emits exactly one [`Finding`]
//! - an untriggered rule emits nothing
//! - findings come out in table order
//!
//! Conditional controls put their activity condition in the trigger, so a
//! control that is not required is never flagged as missing.

pub mod ccpa_cpra;
pub mod gdpr;
pub mod tdpsa;
pub mod vcdpa;

pub use ccpa_cpra::CcpaCpraPosture;
pub use gdpr::GdprPosture;
pub use tdpsa::TdpsaPosture;
pub use vcdpa::VcdpaPosture;

use shared_types::{Finding, JurisdictionId, Severity};

use crate::profile::ProfileFlags;

/// One row of a checklist table
pub struct ChecklistRule<P> {
    /// Short name of the requirement
    pub requirement: &'static str,
    /// Statutory citation or regulatory reference
    pub authority: &'static str,
    /// What the client has (or lacks) right now
    pub current_state: &'static str,
    /// Narrative description of the gap
    pub gap: &'static str,
    pub severity: Severity,
    /// True when the control is required and absent
    pub triggered: fn(&P, &ProfileFlags) -> bool,
}

impl<P> ChecklistRule<P> {
    fn finding(&self, jurisdiction: JurisdictionId) -> Finding {
        Finding {
            jurisdiction,
            requirement: self.requirement.to_string(),
            authority: self.authority.to_string(),
            current_state: self.current_state.to_string(),
            gap: self.gap.to_string(),
            severity: self.severity,
        }
    }
}

/// A posture record with a fixed checklist
pub trait Checklist: Sized + 'static {
    const JURISDICTION: JurisdictionId;

    /// The statute's rules, in checklist order
    fn rules() -> &'static [ChecklistRule<Self>];

    /// Evaluate this posture record against its checklist
    fn evaluate(&self, flags: &ProfileFlags) -> Vec<Finding> {
        run_checklist(Self::JURISDICTION, Self::rules(), self, flags)
    }
}

/// Evaluate a rule table against a posture record
pub fn run_checklist<P>(
    jurisdiction: JurisdictionId,
    rules: &[ChecklistRule<P>],
    posture: &P,
    flags: &ProfileFlags,
) -> Vec<Finding> {
    let findings: Vec<Finding> = rules
        .iter()
        .filter(|rule| (rule.triggered)(posture, flags))
        .map(|rule| rule.finding(jurisdiction))
        .collect();

    tracing::debug!(
        jurisdiction = %jurisdiction,
        rules = rules.len(),
        findings = findings.len(),
        "Checklist evaluated"
    );

    findings
}

/// Requirement names of a checklist, in order
pub fn requirements<P>(rules: &[ChecklistRule<P>]) -> Vec<&'static str> {
    rules.iter().map(|r| r.requirement).collect()
}
