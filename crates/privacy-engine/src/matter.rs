//! Matter data and the gap-analysis dispatcher
//!
//! A matter bundles the client profile, the attorney-confirmed set of
//! jurisdictions and one posture record per statute. Only confirmed
//! statutes are evaluated; posture data for anything else is ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_types::{Finding, JurisdictionId};

use crate::aggregate::{aggregate, AggregateResult};
use crate::checklists::{CcpaCpraPosture, Checklist, GdprPosture, TdpsaPosture, VcdpaPosture};
use crate::error::{PrivacyError, Result};
use crate::profile::{ClientProfile, ProfileFlags};

/// Everything the interview collected for one client engagement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    #[serde(default)]
    pub profile: ClientProfile,
    /// Absent until the attorney has answered the confirmation question
    #[serde(default)]
    pub confirmed_jurisdictions: Option<ConfirmedJurisdictions>,
    #[serde(default)]
    pub gdpr: Option<GdprPosture>,
    #[serde(default)]
    pub ccpa_cpra: Option<CcpaCpraPosture>,
    #[serde(default)]
    pub tdpsa: Option<TdpsaPosture>,
    #[serde(default)]
    pub vcdpa: Option<VcdpaPosture>,
}

impl Matter {
    /// Parse a matter document. A posture record missing any control key is
    /// rejected here.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Confirmed statutes, empty when the question is unanswered
    pub fn confirmed(&self) -> &[JurisdictionId] {
        self.confirmed_jurisdictions
            .as_ref()
            .map(ConfirmedJurisdictions::as_slice)
            .unwrap_or(&[])
    }

    /// Run the checklist for one statute
    pub fn evaluate(
        &self,
        jurisdiction: JurisdictionId,
        flags: &ProfileFlags,
    ) -> Result<Vec<Finding>> {
        let missing = || PrivacyError::MissingPosture(jurisdiction);
        let findings = match jurisdiction {
            JurisdictionId::Gdpr => self.gdpr.as_ref().ok_or_else(missing)?.evaluate(flags),
            JurisdictionId::CcpaCpra => self
                .ccpa_cpra
                .as_ref()
                .ok_or_else(missing)?
                .evaluate(flags),
            JurisdictionId::Tdpsa => self.tdpsa.as_ref().ok_or_else(missing)?.evaluate(flags),
            JurisdictionId::Vcdpa => self.vcdpa.as_ref().ok_or_else(missing)?.evaluate(flags),
        };
        Ok(findings)
    }
}

/// Attorney-confirmed jurisdictions
///
/// Arrives as a checkbox mapping of jurisdiction name to bool. Names outside
/// the four known statutes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmedJurisdictions {
    confirmed: Vec<JurisdictionId>,
}

impl ConfirmedJurisdictions {
    pub fn new(jurisdictions: impl IntoIterator<Item = JurisdictionId>) -> Self {
        let mut confirmed: Vec<JurisdictionId> = jurisdictions.into_iter().collect();
        confirmed.sort();
        confirmed.dedup();
        Self { confirmed }
    }

    /// Build from free-form names, ignoring anything unrecognised
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(names.into_iter().filter_map(|name| {
            let parsed = JurisdictionId::parse_name(name);
            if parsed.is_none() {
                tracing::warn!(name, "Ignoring unrecognised jurisdiction");
            }
            parsed
        }))
    }

    /// Confirmed statutes in evaluation order
    pub fn as_slice(&self) -> &[JurisdictionId] {
        &self.confirmed
    }

    pub fn contains(&self, jurisdiction: JurisdictionId) -> bool {
        self.confirmed.contains(&jurisdiction)
    }
}

impl Serialize for ConfirmedJurisdictions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, bool> = JurisdictionId::ALL
            .iter()
            .map(|j| (j.as_str(), self.contains(*j)))
            .collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfirmedJurisdictions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let answers = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(Self::from_names(
            answers
                .iter()
                .filter(|(_, checked)| **checked)
                .map(|(name, _)| name.as_str()),
        ))
    }
}

/// Evaluate the confirmed statutes and aggregate their findings
///
/// Statutes run in the fixed order GDPR, CCPA/CPRA, TDPSA, VCDPA no matter
/// how `confirmed` is ordered. A confirmed statute without a posture record
/// is a schema mismatch between the collector and the rule engine.
pub fn run_gap_analysis(confirmed: &[JurisdictionId], matter: &Matter) -> Result<AggregateResult> {
    let flags = matter.profile.flags();
    let mut findings = Vec::new();

    for jurisdiction in JurisdictionId::ALL {
        if confirmed.contains(&jurisdiction) {
            findings.extend(matter.evaluate(jurisdiction, &flags)?);
        }
    }

    let result = aggregate(findings);
    tracing::info!(
        jurisdictions = confirmed.len(),
        total = result.counts.total,
        must_fix = result.counts.must_fix,
        should_fix = result.counts.should_fix,
        consider = result.counts.consider,
        "Gap analysis complete"
    );
    Ok(result)
}
