//! Error types for the privacy engine
//!
//! Inapplicable statutes and missing controls are results, not errors. These
//! variants cover integration faults between the interview host and the
//! rule engine.

use shared_types::JurisdictionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrivacyError {
    #[error("unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("{0} is confirmed but the matter has no posture record for it")]
    MissingPosture(JurisdictionId),

    #[error("malformed matter document: {0}")]
    MalformedMatter(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrivacyError>;
