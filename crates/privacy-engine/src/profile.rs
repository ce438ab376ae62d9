//! Client profile supplied by the interview host
//!
//! The profile is an immutable snapshot of organisational facts. Numeric
//! answers are optional; an absent value never meets a threshold.

use serde::{Deserialize, Serialize};
use shared_types::{CheckboxLabel, Checkboxes};

use crate::jurisdiction::Region;
use crate::risk;

/// Organisational footprint and cross-cutting posture answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProfile {
    pub operating_regions: Checkboxes<Region>,
    pub consumer_regions: Checkboxes<Region>,
    /// Annual gross revenue in whole US dollars
    pub annual_revenue: Option<u64>,
    /// Distinct consumers or households in the reporting period
    pub consumer_volume: Option<u64>,
    pub sells_personal_information: bool,
    pub is_sba_small_business: bool,
    pub processes_sensitive_data: bool,
    pub uses_sensitive_data_beyond_primary_purpose: bool,
    /// Explicit DPIA answer. When absent it is derived from the data
    /// categories and processing purposes.
    pub requires_dpia: Option<bool>,
    pub has_international_transfers: bool,
    pub lawful_bases: Checkboxes<LawfulBasis>,
    pub data_types_collected: Checkboxes<DataCategory>,
    pub processing_purposes: Checkboxes<ProcessingPurpose>,
}

impl ClientProfile {
    /// Client operates in or has consumers in `region`
    pub fn has_nexus(&self, region: Region) -> bool {
        self.operating_regions.get(region) || self.consumer_regions.get(region)
    }

    /// Annual revenue, treating an absent answer as zero
    pub fn revenue_or_zero(&self) -> u64 {
        self.annual_revenue.unwrap_or(0)
    }

    /// Consumer volume, treating an absent answer as zero
    pub fn volume_or_zero(&self) -> u64 {
        self.consumer_volume.unwrap_or(0)
    }

    /// Whether a DPIA is required for GDPR purposes
    pub fn dpia_required(&self) -> bool {
        self.requires_dpia.unwrap_or_else(|| {
            risk::gdpr_requires_dpia_likely(&self.data_types_collected, &self.processing_purposes)
        })
    }

    /// Flags consumed by the conditional checklist rules
    pub fn flags(&self) -> ProfileFlags {
        ProfileFlags {
            sells_personal_information: self.sells_personal_information,
            processes_sensitive_data: self.processes_sensitive_data,
            uses_sensitive_data_beyond_primary_purpose: self
                .uses_sensitive_data_beyond_primary_purpose,
            requires_dpia: self.dpia_required(),
            has_international_transfers: self.has_international_transfers,
            relies_on_consent: self.lawful_bases.get(LawfulBasis::Consent),
            relies_on_legitimate_interests: self
                .lawful_bases
                .get(LawfulBasis::LegitimateInterests),
        }
    }
}

/// Cross-cutting profile flags that gate conditional checklist rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileFlags {
    pub sells_personal_information: bool,
    pub processes_sensitive_data: bool,
    pub uses_sensitive_data_beyond_primary_purpose: bool,
    pub requires_dpia: bool,
    pub has_international_transfers: bool,
    pub relies_on_consent: bool,
    pub relies_on_legitimate_interests: bool,
}

/// GDPR Article 6 lawful bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LawfulBasis {
    Consent,
    Contract,
    LegalObligation,
    VitalInterests,
    PublicTask,
    LegitimateInterests,
}

impl CheckboxLabel for LawfulBasis {
    const ALL: &'static [Self] = &[
        LawfulBasis::Consent,
        LawfulBasis::Contract,
        LawfulBasis::LegalObligation,
        LawfulBasis::VitalInterests,
        LawfulBasis::PublicTask,
        LawfulBasis::LegitimateInterests,
    ];

    fn label(&self) -> &'static str {
        match self {
            LawfulBasis::Consent => "Consent (Article 6(1)(a))",
            LawfulBasis::Contract => "Contract (Article 6(1)(b))",
            LawfulBasis::LegalObligation => "Legal obligation (Article 6(1)(c))",
            LawfulBasis::VitalInterests => "Vital interests (Article 6(1)(d))",
            LawfulBasis::PublicTask => "Public task (Article 6(1)(e))",
            LawfulBasis::LegitimateInterests => "Legitimate interests (Article 6(1)(f))",
        }
    }
}

/// Categories of personal data the client collects
///
/// The list is the union of what the generic and the GDPR interview ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataCategory {
    ContactDetails,
    OnlineIdentifiers,
    FinancialInformation,
    LocationData,
    PreciseGeolocation,
    HealthOrMedical,
    Biometric,
    Genetic,
    RacialOrEthnicOrigin,
    CriminalConviction,
    ChildrenUnder16,
    ChildrenUnder13Or16,
}

impl CheckboxLabel for DataCategory {
    const ALL: &'static [Self] = &[
        DataCategory::ContactDetails,
        DataCategory::OnlineIdentifiers,
        DataCategory::FinancialInformation,
        DataCategory::LocationData,
        DataCategory::PreciseGeolocation,
        DataCategory::HealthOrMedical,
        DataCategory::Biometric,
        DataCategory::Genetic,
        DataCategory::RacialOrEthnicOrigin,
        DataCategory::CriminalConviction,
        DataCategory::ChildrenUnder16,
        DataCategory::ChildrenUnder13Or16,
    ];

    fn label(&self) -> &'static str {
        match self {
            DataCategory::ContactDetails => "Contact details",
            DataCategory::OnlineIdentifiers => "Online identifiers",
            DataCategory::FinancialInformation => "Financial information",
            DataCategory::LocationData => "Location data",
            DataCategory::PreciseGeolocation => "Precise geolocation data",
            DataCategory::HealthOrMedical => "Health or medical data",
            DataCategory::Biometric => "Biometric data",
            DataCategory::Genetic => "Genetic data",
            DataCategory::RacialOrEthnicOrigin => "Racial or ethnic origin",
            DataCategory::CriminalConviction => "Criminal conviction data",
            DataCategory::ChildrenUnder16 => "Children's data (under 16)",
            DataCategory::ChildrenUnder13Or16 => "Data relating to children (under 13 / under 16)",
        }
    }
}

/// Purposes for which the client processes personal data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProcessingPurpose {
    ServiceDelivery,
    MarketingCommunications,
    AnalyticsAndServiceImprovement,
    FraudPreventionAndSecurity,
    TargetedAdvertising,
    ProfilingWithSignificantEffects,
    SharingOrSellingToThirdParties,
}

impl CheckboxLabel for ProcessingPurpose {
    const ALL: &'static [Self] = &[
        ProcessingPurpose::ServiceDelivery,
        ProcessingPurpose::MarketingCommunications,
        ProcessingPurpose::AnalyticsAndServiceImprovement,
        ProcessingPurpose::FraudPreventionAndSecurity,
        ProcessingPurpose::TargetedAdvertising,
        ProcessingPurpose::ProfilingWithSignificantEffects,
        ProcessingPurpose::SharingOrSellingToThirdParties,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProcessingPurpose::ServiceDelivery => "Providing goods or services",
            ProcessingPurpose::MarketingCommunications => "Marketing communications",
            ProcessingPurpose::AnalyticsAndServiceImprovement => {
                "Analytics and service improvement"
            }
            ProcessingPurpose::FraudPreventionAndSecurity => "Fraud prevention and security",
            ProcessingPurpose::TargetedAdvertising => "Targeted or behavioural advertising",
            ProcessingPurpose::ProfilingWithSignificantEffects => {
                "Profiling with significant effects"
            }
            ProcessingPurpose::SharingOrSellingToThirdParties => {
                "Sharing or selling to third parties"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_defaults_from_empty_object() {
        let profile: ClientProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, ClientProfile::default());
        assert_eq!(profile.revenue_or_zero(), 0);
        assert_eq!(profile.volume_or_zero(), 0);
        assert!(!profile.dpia_required());
    }

    #[test]
    fn test_profile_deserializes_interview_labels() {
        let profile: ClientProfile = serde_json::from_str(
            r#"{
                "operating_regions": {"California (US)": true, "Texas (US)": false},
                "consumer_regions": {"European Union (EU)": true},
                "annual_revenue": 30000000,
                "lawful_bases": {"Consent (Article 6(1)(a))": true}
            }"#,
        )
        .unwrap();
        assert!(profile.has_nexus(Region::California));
        assert!(profile.has_nexus(Region::EuropeanUnion));
        assert!(!profile.has_nexus(Region::Texas));
        assert_eq!(profile.annual_revenue, Some(30_000_000));
        assert!(profile.flags().relies_on_consent);
        assert!(!profile.flags().relies_on_legitimate_interests);
    }

    #[test]
    fn test_profile_rejects_unknown_region() {
        let result =
            serde_json::from_str::<ClientProfile>(r#"{"operating_regions": {"Narnia": true}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_dpia_answer_wins() {
        let profile = ClientProfile {
            requires_dpia: Some(false),
            data_types_collected: Checkboxes::checked([DataCategory::HealthOrMedical]),
            ..Default::default()
        };
        assert!(!profile.dpia_required());
    }

    #[test]
    fn test_dpia_derived_when_unanswered() {
        let profile = ClientProfile {
            data_types_collected: Checkboxes::checked([DataCategory::HealthOrMedical]),
            ..Default::default()
        };
        assert!(profile.dpia_required());
        assert!(profile.flags().requires_dpia);
    }

    #[test]
    fn test_lawful_basis_labels() {
        let bases = Checkboxes::checked([LawfulBasis::LegitimateInterests, LawfulBasis::Contract]);
        assert_eq!(
            bases.true_labels(),
            vec![
                "Contract (Article 6(1)(b))",
                "Legitimate interests (Article 6(1)(f))"
            ]
        );
    }
}
