//! Validated domain types for the patient vitals record system.
//!
//! Every value that crosses the store boundary is represented by a type whose
//! constructor enforces its clinical range, so raw primitives never reach the
//! store. Deserialisation re-runs the same validation.

mod date;
mod id;
mod visit;
mod vitals;

pub use date::VisitDate;
pub use id::{PatientId, PatientSelector};
pub use visit::Visit;
pub use vitals::{
    Diastolic, HeartRate, OxygenSaturation, RespiratoryRate, Systolic, Temperature,
};

/// Errors that can occur when constructing validated vitals types.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    /// A vital-sign value fell outside its permitted clinical range.
    #[error("invalid {field} value ({value}): expected {min} to {max} {unit}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },
    /// The date was not shaped like `YYYY-MM-DD`.
    #[error("invalid date '{0}': expected format YYYY-MM-DD")]
    DateFormat(String),
    /// The date was well-shaped but its month or day was out of range.
    #[error("invalid date '{0}': month must be 1-12 and day 1-31")]
    DateValue(String),
    /// The patient id was zero or not a positive integer.
    #[error("patient id must be a positive integer")]
    PatientId,
}

/// Convenience alias for fallible constructors in this crate.
pub type VitalsResult<T> = std::result::Result<T, VitalsError>;
