//! DPIA / PIA risk flags
//!
//! Two tests exist for "is an impact assessment likely required". The
//! generic one follows the US state-law heightened-risk categories; the GDPR
//! one follows the GDPR interview's own category list. They are kept apart
//! on purpose and must not be merged.

use shared_types::Checkboxes;

use crate::profile::{DataCategory, ProcessingPurpose};

/// High-risk data categories for the generic test
pub const HIGH_RISK_DATA: &[DataCategory] = &[
    DataCategory::HealthOrMedical,
    DataCategory::Biometric,
    DataCategory::PreciseGeolocation,
    DataCategory::ChildrenUnder13Or16,
    DataCategory::RacialOrEthnicOrigin,
    DataCategory::CriminalConviction,
    DataCategory::Genetic,
];

/// High-risk processing purposes for the generic test
pub const HIGH_RISK_PURPOSES: &[ProcessingPurpose] = &[
    ProcessingPurpose::TargetedAdvertising,
    ProcessingPurpose::ProfilingWithSignificantEffects,
    ProcessingPurpose::SharingOrSellingToThirdParties,
];

/// High-risk data categories for the GDPR test
pub const GDPR_HIGH_RISK_DATA: &[DataCategory] = &[
    DataCategory::HealthOrMedical,
    DataCategory::ChildrenUnder16,
    DataCategory::FinancialInformation,
    DataCategory::LocationData,
];

/// High-risk processing purposes for the GDPR test
pub const GDPR_HIGH_RISK_PURPOSES: &[ProcessingPurpose] = &[
    ProcessingPurpose::AnalyticsAndServiceImprovement,
    ProcessingPurpose::FraudPreventionAndSecurity,
];

/// Flags whether a DPIA/PIA is likely required under the generic test
pub fn requires_dpia_likely(
    data_types_collected: &Checkboxes<DataCategory>,
    processing_purposes: &Checkboxes<ProcessingPurpose>,
) -> bool {
    data_types_collected.any_of(HIGH_RISK_DATA) || processing_purposes.any_of(HIGH_RISK_PURPOSES)
}

/// Flags whether a DPIA is likely required under Article 35 GDPR
pub fn gdpr_requires_dpia_likely(
    data_types_collected: &Checkboxes<DataCategory>,
    processing_purposes: &Checkboxes<ProcessingPurpose>,
) -> bool {
    data_types_collected.any_of(GDPR_HIGH_RISK_DATA)
        || processing_purposes.any_of(GDPR_HIGH_RISK_PURPOSES)
}
