pub mod checkbox;
pub mod types;

pub use checkbox::{CheckboxLabel, Checkboxes};
pub use types::{Finding, JurisdictionId, JurisdictionResult, Severity};
