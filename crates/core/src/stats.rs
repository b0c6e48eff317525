//! Vital-sign averages over a visit selection.

use vitals_types::{PatientSelector, Visit};

use crate::error::{StoreError, StoreResult};
use crate::store::PatientStore;

/// Arithmetic means of the six vital fields over a non-empty visit set.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsSummary {
    /// Number of visits in the selection.
    pub visits: usize,
    pub temperature: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub systolic: f64,
    pub diastolic: f64,
    pub oxygen_saturation: f64,
}

impl PatientStore {
    /// Computes the mean of each vital field across the selected visit set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownPatient`] for a specific patient not in
    /// the store, and [`StoreError::NoData`] when the selection holds no
    /// visits; neither case computes an average.
    pub fn vitals_summary(&self, selector: PatientSelector) -> StoreResult<VitalsSummary> {
        let visits: Vec<&Visit> = match selector {
            PatientSelector::One(patient) => self
                .visits(patient)
                .ok_or(StoreError::UnknownPatient(patient))?
                .iter()
                .collect(),
            PatientSelector::All => self.iter().flat_map(|(_, visits)| visits).collect(),
        };

        if visits.is_empty() {
            return Err(StoreError::NoData);
        }

        let count = visits.len() as f64;
        let mut summary = VitalsSummary {
            visits: visits.len(),
            temperature: 0.0,
            heart_rate: 0.0,
            respiratory_rate: 0.0,
            systolic: 0.0,
            diastolic: 0.0,
            oxygen_saturation: 0.0,
        };

        for visit in visits {
            summary.temperature += visit.temperature.value();
            summary.heart_rate += f64::from(visit.heart_rate.value());
            summary.respiratory_rate += f64::from(visit.respiratory_rate.value());
            summary.systolic += f64::from(visit.systolic.value());
            summary.diastolic += f64::from(visit.diastolic.value());
            summary.oxygen_saturation += f64::from(visit.oxygen_saturation.value());
        }

        summary.temperature /= count;
        summary.heart_rate /= count;
        summary.respiratory_rate /= count;
        summary.systolic /= count;
        summary.diastolic /= count;
        summary.oxygen_saturation /= count;

        Ok(summary)
    }
}
