//! Visit dates in `YYYY-MM-DD` string form.

use crate::{VitalsError, VitalsResult};

/// A visit date, validated against a fixed-width `YYYY-MM-DD` shape.
///
/// The check is deliberately lenient: month must be 1-12 and day 1-31, but
/// month lengths and leap years are not enforced, so `2023-02-31` is
/// accepted. This preserves the behaviour the backing file format has always
/// had; tightening it would silently reject existing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitDate {
    raw: String,
    year: u16,
    month: u8,
    day: u8,
}

impl VisitDate {
    /// Parses and validates a date string.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::DateFormat`] when the input is not ten
    /// characters of digits with `-` at positions 5 and 8, and
    /// [`VitalsError::DateValue`] when the month or day is out of range.
    pub fn new(input: impl AsRef<str>) -> VitalsResult<Self> {
        let raw = input.as_ref().trim();
        let bytes = raw.as_bytes();

        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !shape_ok {
            return Err(VitalsError::DateFormat(raw.to_owned()));
        }

        // Digits are checked above, so these cannot fail.
        let year = raw[0..4]
            .parse()
            .map_err(|_| VitalsError::DateFormat(raw.to_owned()))?;
        let month = raw[5..7]
            .parse()
            .map_err(|_| VitalsError::DateFormat(raw.to_owned()))?;
        let day = raw[8..10]
            .parse()
            .map_err(|_| VitalsError::DateFormat(raw.to_owned()))?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(VitalsError::DateValue(raw.to_owned()));
        }

        Ok(Self {
            raw: raw.to_owned(),
            year,
            month,
            day,
        })
    }

    /// Returns the date in its `YYYY-MM-DD` string form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for VisitDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for VisitDate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl serde::Serialize for VisitDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> serde::Deserialize<'de> for VisitDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VisitDate::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_date() {
        let date = VisitDate::new("2024-01-15").expect("should accept");
        assert_eq!(date.as_str(), "2024-01-15");
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_rejects_month_thirteen() {
        let err = VisitDate::new("2024-13-01").expect_err("should reject month 13");
        assert!(matches!(err, VitalsError::DateValue(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_zero_month_and_day() {
        assert!(VisitDate::new("2024-00-10").is_err());
        assert!(VisitDate::new("2024-05-00").is_err());
        assert!(VisitDate::new("2024-05-32").is_err());
    }

    #[test]
    fn test_rejects_malformed_shapes() {
        assert!(VisitDate::new("2024-1-15").is_err());
        assert!(VisitDate::new("2024/01/15").is_err());
        assert!(VisitDate::new("15-01-2024X").is_err());
        assert!(VisitDate::new("").is_err());
        assert!(VisitDate::new("2024-01-1a").is_err());
    }

    #[test]
    fn test_month_length_is_not_enforced() {
        // Lenient by design: see the type-level docs.
        assert!(VisitDate::new("2023-02-31").is_ok());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let date = VisitDate::new(" 2024-06-01 ").expect("should accept");
        assert_eq!(date.as_str(), "2024-06-01");
    }
}
