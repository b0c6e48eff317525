//! The Patient Record Store.
//!
//! An insertion-ordered mapping from patient id to visit sequence, mirrored
//! by a comma-delimited backing file. The store is built once at startup and
//! every mutation updates memory and file together; the file is never
//! re-parsed during normal operation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use vitals_types::{PatientId, Visit};

use crate::error::{StoreError, StoreResult};
use crate::parse::{format_line, parse_line, RejectedLine};

/// In-memory patient records plus the path of the backing file.
#[derive(Debug)]
pub struct PatientStore {
    path: PathBuf,
    patients: IndexMap<PatientId, Vec<Visit>>,
}

impl PatientStore {
    /// Builds the store by parsing the backing file.
    ///
    /// Every malformed line is reported in the returned list (and logged)
    /// and skipped; parsing always continues to the next line. A missing
    /// file yields an empty store rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileRead`] only for I/O failures other than the
    /// file not existing.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<(Self, Vec<RejectedLine>)> {
        let path = path.into();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "patient data file {} not found, starting with an empty store",
                    path.display()
                );
                return Ok((
                    Self {
                        path,
                        patients: IndexMap::new(),
                    },
                    Vec::new(),
                ));
            }
            Err(e) => return Err(StoreError::FileRead(e)),
        };

        let mut patients: IndexMap<PatientId, Vec<Visit>> = IndexMap::new();
        let mut rejected = Vec::new();

        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok((patient, visit)) => patients.entry(patient).or_default().push(visit),
                Err(reason) => {
                    let rejection = RejectedLine {
                        line_no: idx + 1,
                        line: line.to_owned(),
                        reason,
                    };
                    tracing::warn!("skipping record: {rejection}");
                    rejected.push(rejection);
                }
            }
        }

        Ok((Self { path, patients }, rejected))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of patients with at least one visit.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn contains(&self, patient: PatientId) -> bool {
        self.patients.contains_key(&patient)
    }

    /// Visits for one patient, in stored order. `None` when the patient is
    /// not in the store.
    pub fn visits(&self, patient: PatientId) -> Option<&[Visit]> {
        self.patients.get(&patient).map(Vec::as_slice)
    }

    /// Iterates patients in insertion order, each with its visit sequence.
    pub fn iter(&self) -> impl Iterator<Item = (PatientId, &[Visit])> + '_ {
        self.patients.iter().map(|(id, visits)| (*id, visits.as_slice()))
    }

    /// Records a validated visit: one line appended to the backing file,
    /// then the in-memory sequence, creating the patient entry if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileAppend`] if the file cannot be written, in
    /// which case memory is left untouched.
    pub fn add_visit(&mut self, patient: PatientId, visit: Visit) -> StoreResult<()> {
        let mut file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(StoreError::FileAppend)?;
        file.write_all(format_line(patient, &visit).as_bytes())
            .map_err(StoreError::FileAppend)?;

        self.patients.entry(patient).or_default().push(visit);
        tracing::info!("recorded visit for patient {patient}");
        Ok(())
    }

    /// Removes all visits of one patient, rewriting the backing file to
    /// reflect the remaining patients in their current in-memory order.
    ///
    /// The rewrite goes through a temp file in the same directory which is
    /// renamed into place, so an interrupted delete leaves the original file
    /// intact. Memory is only updated once the rename has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownPatient`] when the patient has no data;
    /// nothing changes in that case.
    pub fn delete_patient(&mut self, patient: PatientId) -> StoreResult<usize> {
        if !self.patients.contains_key(&patient) {
            return Err(StoreError::UnknownPatient(patient));
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(StoreError::TempFile)?;
        for (id, visits) in &self.patients {
            if *id == patient {
                continue;
            }
            for visit in visits {
                staged
                    .write_all(format_line(*id, visit).as_bytes())
                    .map_err(StoreError::TempFile)?;
            }
        }
        staged
            .persist(&self.path)
            .map_err(|e| StoreError::Replace(e.error))?;

        let removed = self
            .patients
            .shift_remove(&patient)
            .map(|visits| visits.len())
            .unwrap_or(0);
        tracing::info!("deleted {removed} visits for patient {patient}");
        Ok(removed)
    }
}
