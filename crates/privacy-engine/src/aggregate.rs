//! Finding aggregation
//!
//! Groups a finding sequence by jurisdiction (first-seen order) and by
//! severity (MUST_FIX, SHOULD_FIX, CONSIDER). Nothing is filtered or
//! deduplicated: identical findings from distinct rules stay distinct.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use shared_types::{Finding, JurisdictionId, Severity};

/// Consolidated gap-analysis output handed to the document renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub all: Vec<Finding>,
    #[serde(serialize_with = "serialize_buckets")]
    pub by_jurisdiction: Vec<(JurisdictionId, Vec<Finding>)>,
    pub by_severity: SeverityBuckets,
    pub counts: FindingCounts,
}

impl AggregateResult {
    /// Findings for one jurisdiction, empty if it produced none
    pub fn for_jurisdiction(&self, jurisdiction: JurisdictionId) -> &[Finding] {
        self.by_jurisdiction
            .iter()
            .find(|(j, _)| *j == jurisdiction)
            .map(|(_, findings)| findings.as_slice())
            .unwrap_or(&[])
    }

    /// Jurisdictions that produced at least one finding, in first-seen order
    pub fn jurisdictions(&self) -> Vec<JurisdictionId> {
        self.by_jurisdiction.iter().map(|(j, _)| *j).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Findings partitioned by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBuckets {
    #[serde(rename = "MUST_FIX")]
    pub must_fix: Vec<Finding>,
    #[serde(rename = "SHOULD_FIX")]
    pub should_fix: Vec<Finding>,
    #[serde(rename = "CONSIDER")]
    pub consider: Vec<Finding>,
}

impl SeverityBuckets {
    pub fn get(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::MustFix => &self.must_fix,
            Severity::ShouldFix => &self.should_fix,
            Severity::Consider => &self.consider,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<Finding> {
        match severity {
            Severity::MustFix => &mut self.must_fix,
            Severity::ShouldFix => &mut self.should_fix,
            Severity::Consider => &mut self.consider,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FindingCounts {
    pub total: usize,
    pub must_fix: usize,
    pub should_fix: usize,
    pub consider: usize,
}

/// Partition findings and compute counts
pub fn aggregate(findings: Vec<Finding>) -> AggregateResult {
    let mut by_jurisdiction: Vec<(JurisdictionId, Vec<Finding>)> = Vec::new();
    let mut by_severity = SeverityBuckets::default();

    for finding in &findings {
        match by_jurisdiction
            .iter_mut()
            .find(|(j, _)| *j == finding.jurisdiction)
        {
            Some((_, bucket)) => bucket.push(finding.clone()),
            None => by_jurisdiction.push((finding.jurisdiction, vec![finding.clone()])),
        }
        by_severity
            .bucket_mut(finding.severity)
            .push(finding.clone());
    }

    let counts = FindingCounts {
        total: findings.len(),
        must_fix: by_severity.must_fix.len(),
        should_fix: by_severity.should_fix.len(),
        consider: by_severity.consider.len(),
    };

    AggregateResult {
        all: findings,
        by_jurisdiction,
        by_severity,
        counts,
    }
}

fn serialize_buckets<S: Serializer>(
    buckets: &[(JurisdictionId, Vec<Finding>)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(buckets.len()))?;
    for (jurisdiction, findings) in buckets {
        map.serialize_entry(jurisdiction.as_str(), findings)?;
    }
    map.end()
}
