//! Read-only queries over the store: date filtering and follow-up detection.

use vitals_types::{PatientId, Visit};

use crate::constants::{
    FOLLOW_UP_DIASTOLIC_HIGH, FOLLOW_UP_HEART_RATE_HIGH, FOLLOW_UP_HEART_RATE_LOW,
    FOLLOW_UP_SPO2_LOW, FOLLOW_UP_SYSTOLIC_HIGH,
};
use crate::store::PatientStore;

impl PatientStore {
    /// Finds visits whose date matches every supplied component.
    ///
    /// `None` means no filter on that component; no filters at all returns
    /// every visit. Encounter order is preserved: patients in insertion
    /// order, visits in stored order.
    pub fn find_visits_by_date(
        &self,
        year: Option<u16>,
        month: Option<u8>,
    ) -> Vec<(PatientId, &Visit)> {
        let mut matches = Vec::new();
        for (patient, visits) in self.iter() {
            for visit in visits {
                if year.is_some_and(|y| visit.date.year() != y) {
                    continue;
                }
                if month.is_some_and(|m| visit.date.month() != m) {
                    continue;
                }
                matches.push((patient, visit));
            }
        }
        matches
    }

    /// Patients with at least one visit breaching a follow-up threshold.
    ///
    /// Each qualifying patient appears once, ordered by first qualifying
    /// encounter.
    pub fn follow_up_candidates(&self) -> Vec<PatientId> {
        self.iter()
            .filter(|(_, visits)| visits.iter().any(needs_follow_up))
            .map(|(patient, _)| patient)
            .collect()
    }
}

fn needs_follow_up(visit: &Visit) -> bool {
    visit.heart_rate.value() > FOLLOW_UP_HEART_RATE_HIGH
        || visit.heart_rate.value() < FOLLOW_UP_HEART_RATE_LOW
        || visit.systolic.value() > FOLLOW_UP_SYSTOLIC_HIGH
        || visit.diastolic.value() > FOLLOW_UP_DIASTOLIC_HIGH
        || visit.oxygen_saturation.value() < FOLLOW_UP_SPO2_LOW
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_fixture(dir: &TempDir, lines: &[&str]) -> PatientStore {
        let path = dir.path().join("patients.txt");
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).expect("should write fixture");
        let (store, rejected) = PatientStore::load(&path).expect("should load");
        assert!(rejected.is_empty(), "fixture should be clean");
        store
    }

    fn patient(id: u32) -> PatientId {
        PatientId::new(id).expect("test id should be positive")
    }

    #[test]
    fn test_year_filter_matches_across_patients_in_encounter_order() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = load_fixture(
            &dir,
            &[
                "5,2023-12-30,36.5,70,16,120,80,98",
                "5,2024-01-05,36.6,71,16,121,80,98",
                "2,2024-03-10,36.7,72,17,122,81,97",
                "2,2023-03-10,36.8,73,17,123,81,97",
            ],
        );

        let matches = store.find_visits_by_date(Some(2024), None);
        let found: Vec<(u32, &str)> = matches
            .iter()
            .map(|(id, visit)| (id.get(), visit.date.as_str()))
            .collect();
        assert_eq!(found, vec![(5, "2024-01-05"), (2, "2024-03-10")]);
    }

    #[test]
    fn test_year_and_month_filter() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = load_fixture(
            &dir,
            &[
                "1,2024-01-05,36.6,71,16,121,80,98",
                "1,2024-02-05,36.6,71,16,121,80,98",
                "1,2023-02-05,36.6,71,16,121,80,98",
            ],
        );

        let matches = store.find_visits_by_date(Some(2024), Some(2));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1.date.as_str(), "2024-02-05");

        // Month alone spans years.
        let matches = store.find_visits_by_date(None, Some(2));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_no_filters_returns_every_visit() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = load_fixture(
            &dir,
            &[
                "1,2024-01-05,36.6,71,16,121,80,98",
                "2,2023-02-05,36.6,71,16,121,80,98",
            ],
        );

        assert_eq!(store.find_visits_by_date(None, None).len(), 2);
    }

    #[test]
    fn test_follow_up_lists_qualifying_patient_once() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = load_fixture(
            &dir,
            &[
                // Patient 4 breaches the heart-rate threshold twice.
                "4,2024-01-01,36.5,110,16,120,80,98",
                "4,2024-02-01,36.5,70,16,120,80,98",
                "4,2024-03-01,36.5,115,16,120,80,98",
            ],
        );

        assert_eq!(store.follow_up_candidates(), vec![patient(4)]);
    }

    #[test]
    fn test_follow_up_thresholds_cover_each_vital() {
        let dir = TempDir::new().expect("should create temp dir");
        let store = load_fixture(
            &dir,
            &[
                "1,2024-01-01,36.5,70,16,120,80,98",  // normal
                "2,2024-01-01,36.5,55,16,120,80,98",  // low heart rate
                "3,2024-01-01,36.5,70,16,150,80,98",  // high systolic
                "4,2024-01-01,36.5,70,16,120,95,98",  // high diastolic
                "5,2024-01-01,36.5,70,16,120,80,85",  // low oxygen saturation
            ],
        );

        assert_eq!(
            store.follow_up_candidates(),
            vec![patient(2), patient(3), patient(4), patient(5)]
        );
    }

    #[test]
    fn test_follow_up_boundary_values_do_not_qualify() {
        let dir = TempDir::new().expect("should create temp dir");
        // Exactly at each threshold: hr 100 and 60, systolic 140, diastolic
        // 90, spo2 90. None strictly crosses.
        let store = load_fixture(
            &dir,
            &[
                "1,2024-01-01,36.5,100,16,140,90,90",
                "2,2024-01-01,36.5,60,16,120,80,98",
            ],
        );

        assert!(store.follow_up_candidates().is_empty());
    }
}
