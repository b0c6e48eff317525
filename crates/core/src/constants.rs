//! Constants used throughout the vitals core crate.

/// Default backing file when no explicit path is configured.
pub const DEFAULT_DATA_FILE: &str = "patients.txt";

/// Number of comma-separated fields per record line.
pub const FIELDS_PER_LINE: usize = 8;

// Follow-up thresholds. These classify already-valid readings as abnormal and
// are intentionally narrower than, and independent of, the ingestion ranges
// enforced by `vitals-types`.

/// Heart rate above this needs follow-up (bpm).
pub const FOLLOW_UP_HEART_RATE_HIGH: i32 = 100;

/// Heart rate below this needs follow-up (bpm).
pub const FOLLOW_UP_HEART_RATE_LOW: i32 = 60;

/// Systolic blood pressure above this needs follow-up (mmHg).
pub const FOLLOW_UP_SYSTOLIC_HIGH: i32 = 140;

/// Diastolic blood pressure above this needs follow-up (mmHg).
pub const FOLLOW_UP_DIASTOLIC_HIGH: i32 = 90;

/// Oxygen saturation below this needs follow-up (%).
pub const FOLLOW_UP_SPO2_LOW: i32 = 90;
