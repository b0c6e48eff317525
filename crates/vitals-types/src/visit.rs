//! A single clinical visit record.

use serde::{Deserialize, Serialize};

use crate::{
    Diastolic, HeartRate, OxygenSaturation, RespiratoryRate, Systolic, Temperature, VisitDate,
    VitalsResult,
};

/// One clinical observation: a date plus six validated vital signs.
///
/// Immutable once constructed; a visit has no identity beyond its position in
/// a patient's sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub date: VisitDate,
    pub temperature: Temperature,
    pub heart_rate: HeartRate,
    pub respiratory_rate: RespiratoryRate,
    pub systolic: Systolic,
    pub diastolic: Diastolic,
    pub oxygen_saturation: OxygenSaturation,
}

impl Visit {
    /// Validates raw field values into a visit.
    ///
    /// Checks run in a fixed order (date, then temperature, heart rate,
    /// respiratory rate, systolic, diastolic, oxygen saturation) and stop at
    /// the first failure, so the returned error always names the first
    /// offending field.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        date: &str,
        temperature: f64,
        heart_rate: i32,
        respiratory_rate: i32,
        systolic: i32,
        diastolic: i32,
        oxygen_saturation: i32,
    ) -> VitalsResult<Self> {
        Ok(Self {
            date: VisitDate::new(date)?,
            temperature: Temperature::new(temperature)?,
            heart_rate: HeartRate::new(heart_rate)?,
            respiratory_rate: RespiratoryRate::new(respiratory_rate)?,
            systolic: Systolic::new(systolic)?,
            diastolic: Diastolic::new(diastolic)?,
            oxygen_saturation: OxygenSaturation::new(oxygen_saturation)?,
        })
    }
}
