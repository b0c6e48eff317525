//! Record line parsing and formatting.
//!
//! The backing file holds one visit per line, comma-separated, no header:
//! `id,date,temperature,heartRate,respRate,systolic,diastolic,spo2`.
//! Temperature is written with one decimal place, the integer vitals bare,
//! the date as `YYYY-MM-DD`.

use std::str::FromStr;

use vitals_types::{PatientId, Visit, VitalsError};

use crate::constants::FIELDS_PER_LINE;

/// Why a record line was rejected.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("invalid number of fields ({0}), expected {FIELDS_PER_LINE}")]
    FieldCount(usize),
    #[error("invalid patient id '{0}'")]
    PatientId(String),
    #[error("unparseable {field} value '{value}'")]
    NotNumeric {
        field: &'static str,
        value: String,
    },
    #[error(transparent)]
    Vitals(#[from] VitalsError),
}

/// A line skipped during load, with enough context to report it.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number in the backing file.
    pub line_no: usize,
    /// The raw line as read, without the trailing newline.
    pub line: String,
    pub reason: LineError,
}

impl std::fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in line {}: {}", self.reason, self.line_no, self.line)
    }
}

/// Parses one record line into a patient id and a validated visit.
///
/// Splits on `,` expecting exactly [`FIELDS_PER_LINE`] fields, then parses
/// and range-checks each numeric field. The first failing field rejects the
/// whole line; no partial record is produced.
pub fn parse_line(line: &str) -> Result<(PatientId, Visit), LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(LineError::FieldCount(fields.len()));
    }

    let patient = fields[0]
        .parse::<PatientId>()
        .map_err(|_| LineError::PatientId(fields[0].trim().to_owned()))?;

    let temperature: f64 = parse_field("temperature", fields[2])?;
    let heart_rate: i32 = parse_field("heart rate", fields[3])?;
    let respiratory_rate: i32 = parse_field("respiratory rate", fields[4])?;
    let systolic: i32 = parse_field("systolic blood pressure", fields[5])?;
    let diastolic: i32 = parse_field("diastolic blood pressure", fields[6])?;
    let oxygen_saturation: i32 = parse_field("oxygen saturation", fields[7])?;

    let visit = Visit::from_raw(
        fields[1],
        temperature,
        heart_rate,
        respiratory_rate,
        systolic,
        diastolic,
        oxygen_saturation,
    )?;

    Ok((patient, visit))
}

/// Formats a visit as one record line, trailing newline included.
pub fn format_line(patient: PatientId, visit: &Visit) -> String {
    format!(
        "{},{},{:.1},{},{},{},{},{}\n",
        patient,
        visit.date,
        visit.temperature.value(),
        visit.heart_rate,
        visit.respiratory_rate,
        visit.systolic,
        visit.diastolic,
        visit.oxygen_saturation,
    )
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, LineError> {
    raw.trim().parse().map_err(|_| LineError::NotNumeric {
        field,
        value: raw.trim().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_line() {
        let (patient, visit) =
            parse_line("7,2024-01-01,36.5,70,16,120,80,98").expect("should parse");
        assert_eq!(patient.get(), 7);
        assert_eq!(visit.date.as_str(), "2024-01-01");
        assert_eq!(visit.temperature.value(), 36.5);
        assert_eq!(visit.heart_rate.value(), 70);
        assert_eq!(visit.oxygen_saturation.value(), 98);
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        let err = parse_line("7,2024-01-01,36.5,70,16,120,80").expect_err("should reject");
        assert!(matches!(err, LineError::FieldCount(7)), "got {err:?}");
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let err = parse_line("7,2024-01-01,43.0,70,16,120,80,98").expect_err("should reject");
        let msg = err.to_string();
        assert!(msg.contains("temperature"), "message: {msg}");
        assert!(msg.contains("43"), "message: {msg}");
    }

    #[test]
    fn test_rejects_non_numeric_field() {
        let err = parse_line("7,2024-01-01,36.5,fast,16,120,80,98").expect_err("should reject");
        assert!(
            matches!(err, LineError::NotNumeric { field: "heart rate", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_rejects_zero_patient_id() {
        let err = parse_line("0,2024-01-01,36.5,70,16,120,80,98").expect_err("should reject");
        assert!(matches!(err, LineError::PatientId(_)), "got {err:?}");
    }

    #[test]
    fn test_format_line_round_trips() {
        let (patient, visit) =
            parse_line("12,2024-06-30,37.0,88,18,135,85,95").expect("should parse");
        assert_eq!(
            format_line(patient, &visit),
            "12,2024-06-30,37.0,88,18,135,85,95\n"
        );
    }
}
