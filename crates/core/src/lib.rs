//! # Vitals Core
//!
//! Core logic for the patient vitals record system.
//!
//! This crate owns the Patient Record Store: an insertion-ordered mapping
//! from patient id to visit sequence, mirrored by a comma-delimited backing
//! file. It covers:
//! - parsing the backing file into typed visit records, skipping and
//!   reporting malformed lines
//! - appending validated visits to file and memory
//! - per-patient and fleet-wide vital-sign averages
//! - filtering visits by year and/or month
//! - flagging patients whose vitals cross follow-up thresholds
//! - deleting a patient with an atomic file rewrite
//!
//! **No presentation concerns**: prompting, menus, and listing layout belong
//! to the `vitals-cli` crate.

pub mod constants;
pub mod error;
pub mod parse;
pub mod query;
pub mod stats;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use parse::{LineError, RejectedLine};
pub use stats::VitalsSummary;
pub use store::PatientStore;
