//! Patient identifiers and selection.

use crate::{VitalsError, VitalsResult};

/// A positive integer patient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(u32);

impl PatientId {
    /// Validates that `id` is positive.
    pub fn new(id: u32) -> VitalsResult<Self> {
        if id == 0 {
            return Err(VitalsError::PatientId);
        }
        Ok(Self(id))
    }

    /// Returns the numeric identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PatientId {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<u32>().map_err(|_| VitalsError::PatientId)?;
        PatientId::new(id)
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        PatientId::new(id).map_err(serde::de::Error::custom)
    }
}

/// Selects either a single patient or the whole store.
///
/// The interactive surface uses `0` as the "all patients" sentinel; this type
/// keeps that convention out of the store operations themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSelector {
    /// Every patient in the store.
    All,
    /// One specific patient.
    One(PatientId),
}

impl PatientSelector {
    /// Maps the raw menu convention: `0` selects all patients.
    pub fn from_raw(id: u32) -> Self {
        match PatientId::new(id) {
            Ok(id) => Self::One(id),
            Err(_) => Self::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_id() {
        assert!(PatientId::new(0).is_err());
        assert_eq!(PatientId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_from_str_parses_and_validates() {
        assert_eq!(" 12 ".parse::<PatientId>().unwrap().get(), 12);
        assert!("0".parse::<PatientId>().is_err());
        assert!("-3".parse::<PatientId>().is_err());
        assert!("seven".parse::<PatientId>().is_err());
    }

    #[test]
    fn test_selector_treats_zero_as_all() {
        assert_eq!(PatientSelector::from_raw(0), PatientSelector::All);
        assert_eq!(
            PatientSelector::from_raw(4),
            PatientSelector::One(PatientId::new(4).unwrap())
        );
    }
}
