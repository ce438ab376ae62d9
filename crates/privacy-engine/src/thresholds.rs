//! Statutory applicability thresholds
//!
//! These are legal facts, fixed at compile time.

/// CCPA/CPRA: annual gross revenue, in US dollars
pub const CCPA_REVENUE_THRESHOLD: u64 = 25_000_000;

/// CCPA/CPRA: consumers or households bought, sold or shared per year
pub const CCPA_CONSUMER_THRESHOLD: u64 = 100_000;

/// CCPA/CPRA: share of annual revenue derived from selling or sharing PI.
/// Not consumed by detection: the interview never collects a revenue share,
/// so the selling criterion is the `sells_personal_information` flag alone.
pub const CCPA_REVENUE_SHARE_THRESHOLD: f64 = 0.50;

/// TDPSA: Texas consumers whose data is processed
pub const TDPSA_CONSUMER_THRESHOLD: u64 = 100_000;

/// VCDPA: Virginia consumers whose data is controlled or processed
pub const VCDPA_CONSUMER_THRESHOLD: u64 = 100_000;

/// VCDPA: consumer count for the data-sale branch. The statute pairs this
/// with a 50% revenue-share test that detection does not evaluate.
pub const VCDPA_REVENUE_SHARE_THRESHOLD: u64 = 25_000;
