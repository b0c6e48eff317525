use vitals_types::PatientId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read patient data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to append to patient data file: {0}")]
    FileAppend(std::io::Error),
    #[error("failed to stage rewritten patient data file: {0}")]
    TempFile(std::io::Error),
    #[error("failed to replace patient data file: {0}")]
    Replace(std::io::Error),
    #[error("no data found for patient with ID {0}")]
    UnknownPatient(PatientId),
    #[error("no visit data to summarise")]
    NoData,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
