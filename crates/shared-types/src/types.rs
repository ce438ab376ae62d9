//! Contract types exchanged between the engine, the interview host and the
//! document renderer.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Privacy statutes the engine knows how to detect and evaluate
///
/// Declaration order is the evaluation order used everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JurisdictionId {
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "CCPA/CPRA")]
    CcpaCpra,
    #[serde(rename = "TDPSA")]
    Tdpsa,
    #[serde(rename = "VCDPA")]
    Vcdpa,
}

impl JurisdictionId {
    /// All statutes in evaluation order
    pub const ALL: [JurisdictionId; 4] = [
        JurisdictionId::Gdpr,
        JurisdictionId::CcpaCpra,
        JurisdictionId::Tdpsa,
        JurisdictionId::Vcdpa,
    ];

    /// Short name used as the map key in interview answers and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            JurisdictionId::Gdpr => "GDPR",
            JurisdictionId::CcpaCpra => "CCPA/CPRA",
            JurisdictionId::Tdpsa => "TDPSA",
            JurisdictionId::Vcdpa => "VCDPA",
        }
    }

    /// Get the full statute name
    pub fn statute_name(&self) -> &'static str {
        match self {
            JurisdictionId::Gdpr => "General Data Protection Regulation (EU/UK)",
            JurisdictionId::CcpaCpra => {
                "California Consumer Privacy Act, as amended by the California Privacy Rights Act"
            }
            JurisdictionId::Tdpsa => "Texas Data Privacy and Security Act",
            JurisdictionId::Vcdpa => "Virginia Consumer Data Protection Act",
        }
    }

    /// Get the primary statutory citation
    pub fn statute_citation(&self) -> &'static str {
        match self {
            JurisdictionId::Gdpr => "Regulation (EU) 2016/679; UK GDPR",
            JurisdictionId::CcpaCpra => "Cal. Civ. Code §1798.100 et seq.",
            JurisdictionId::Tdpsa => "Tex. Bus. & Com. Code Ch. 541",
            JurisdictionId::Vcdpa => "Va. Code Ann. §59.1-575 et seq.",
        }
    }

    /// Parse from the short name (case-insensitive, surrounding whitespace ignored)
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GDPR" | "UK GDPR" | "EU GDPR" => Some(JurisdictionId::Gdpr),
            "CCPA/CPRA" | "CCPA" | "CPRA" => Some(JurisdictionId::CcpaCpra),
            "TDPSA" => Some(JurisdictionId::Tdpsa),
            "VCDPA" => Some(JurisdictionId::Vcdpa),
            _ => None,
        }
    }
}

impl fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one applicability detector
///
/// `reason` is populated whether or not the statute applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionResult {
    pub name: JurisdictionId,
    pub applies: bool,
    pub reason: String,
}

impl JurisdictionResult {
    pub fn applies(name: JurisdictionId, reason: impl Into<String>) -> Self {
        Self {
            name,
            applies: true,
            reason: reason.into(),
        }
    }

    pub fn does_not_apply(name: JurisdictionId, reason: impl Into<String>) -> Self {
        Self {
            name,
            applies: false,
            reason: reason.into(),
        }
    }
}

/// Legal-risk rating of a finding
///
/// Ordered by risk: `MustFix > ShouldFix > Consider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Statutory requirement; non-compliance creates direct legal exposure
    MustFix,
    /// Best practice or regulatory expectation; material risk if absent
    ShouldFix,
    /// Recommended enhancement; lower risk if absent
    Consider,
}

impl Severity {
    /// Bucket order used in reports, highest risk first
    pub const ALL: [Severity; 3] = [Severity::MustFix, Severity::ShouldFix, Severity::Consider];

    /// Label shown to the attorney
    pub fn label(&self) -> &'static str {
        match self {
            Severity::MustFix => "Must Fix",
            Severity::ShouldFix => "Should Fix",
            Severity::Consider => "Consider Fixing",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Severity::MustFix => 2,
            Severity::ShouldFix => 1,
            Severity::Consider => 0,
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single compliance gap. No remediation text; the attorney adds that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub jurisdiction: JurisdictionId,
    pub requirement: String,
    pub authority: String,
    pub current_state: String,
    pub gap: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_severity_ordering_by_risk() {
        assert!(Severity::MustFix > Severity::ShouldFix);
        assert!(Severity::ShouldFix > Severity::Consider);
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::MustFix));
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(
            serde_json::to_string(&Severity::MustFix).unwrap(),
            "\"MUST_FIX\""
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"CONSIDER\"").unwrap(),
            Severity::Consider
        );
        assert_eq!(Severity::Consider.label(), "Consider Fixing");
    }

    #[test]
    fn test_jurisdiction_wire_names_match_short_names() {
        for id in JurisdictionId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            assert_eq!(JurisdictionId::parse_name(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_jurisdiction_parsing() {
        assert_eq!(JurisdictionId::parse_name("gdpr"), Some(JurisdictionId::Gdpr));
        assert_eq!(JurisdictionId::parse_name(" CCPA "), Some(JurisdictionId::CcpaCpra));
        assert_eq!(JurisdictionId::parse_name("PIPEDA"), None);
        assert_eq!(JurisdictionId::parse_name(""), None);
    }

    #[test]
    fn test_statute_metadata() {
        assert_eq!(
            JurisdictionId::Tdpsa.statute_name(),
            "Texas Data Privacy and Security Act"
        );
        assert_eq!(
            JurisdictionId::CcpaCpra.statute_citation(),
            "Cal. Civ. Code §1798.100 et seq."
        );
        assert_eq!(JurisdictionId::Vcdpa.to_string(), "VCDPA");
    }

    #[test]
    fn test_jurisdiction_order_is_evaluation_order() {
        let mut ids = vec![
            JurisdictionId::Vcdpa,
            JurisdictionId::Gdpr,
            JurisdictionId::Tdpsa,
            JurisdictionId::CcpaCpra,
        ];
        ids.sort();
        assert_eq!(ids, JurisdictionId::ALL.to_vec());
    }
}
