//! Bounded vital-sign value types.
//!
//! Each type wraps a single measurement and guarantees it sits inside the
//! canonical ingestion range. The ranges bound what a plausible reading looks
//! like; they are deliberately wider than the "abnormal" follow-up thresholds
//! applied downstream.

use crate::{VitalsError, VitalsResult};

macro_rules! bounded_vital {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty), $field:expr, $min:expr, $max:expr, $unit:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name($inner);

        impl $name {
            /// Lowest accepted value, inclusive.
            pub const MIN: $inner = $min;
            /// Highest accepted value, inclusive.
            pub const MAX: $inner = $max;
            /// Human-readable field name used in diagnostics.
            pub const FIELD: &'static str = $field;
            /// Unit suffix used in diagnostics and listings.
            pub const UNIT: &'static str = $unit;

            /// Validates `value` against the permitted range.
            pub fn new(value: $inner) -> VitalsResult<Self> {
                if !(Self::MIN..=Self::MAX).contains(&value) {
                    return Err(VitalsError::OutOfRange {
                        field: Self::FIELD,
                        value: value as f64,
                        min: Self::MIN as f64,
                        max: Self::MAX as f64,
                        unit: Self::UNIT,
                    });
                }
                Ok(Self(value))
            }

            /// Returns the inner measurement.
            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <$inner>::deserialize(deserializer)?;
                $name::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

bounded_vital!(
    /// Body temperature in degrees Celsius.
    Temperature(f64), "temperature", 35.0, 42.0, "C"
);

bounded_vital!(
    /// Heart rate in beats per minute.
    HeartRate(i32), "heart rate", 30, 180, "bpm"
);

bounded_vital!(
    /// Respiratory rate in breaths per minute.
    RespiratoryRate(i32), "respiratory rate", 5, 40, "breaths/min"
);

bounded_vital!(
    /// Systolic blood pressure in mmHg.
    Systolic(i32), "systolic blood pressure", 70, 200, "mmHg"
);

bounded_vital!(
    /// Diastolic blood pressure in mmHg.
    Diastolic(i32), "diastolic blood pressure", 40, 120, "mmHg"
);

bounded_vital!(
    /// Oxygen saturation as a percentage.
    OxygenSaturation(i32), "oxygen saturation", 70, 100, "%"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_accepts_range_boundaries() {
        assert_eq!(Temperature::new(35.0).unwrap().value(), 35.0);
        assert_eq!(Temperature::new(42.0).unwrap().value(), 42.0);
        assert_eq!(Temperature::new(36.5).unwrap().value(), 36.5);
    }

    #[test]
    fn test_temperature_rejects_out_of_range() {
        let err = Temperature::new(43.0).expect_err("should reject 43.0");
        assert!(
            matches!(err, VitalsError::OutOfRange { field: "temperature", .. }),
            "unexpected error: {err}"
        );
        assert!(Temperature::new(34.9).is_err());
    }

    #[test]
    fn test_heart_rate_boundaries() {
        assert!(HeartRate::new(30).is_ok());
        assert!(HeartRate::new(180).is_ok());
        assert!(HeartRate::new(29).is_err());
        assert!(HeartRate::new(181).is_err());
    }

    #[test]
    fn test_respiratory_rate_boundaries() {
        assert!(RespiratoryRate::new(5).is_ok());
        assert!(RespiratoryRate::new(40).is_ok());
        assert!(RespiratoryRate::new(4).is_err());
        assert!(RespiratoryRate::new(41).is_err());
    }

    #[test]
    fn test_blood_pressure_boundaries() {
        assert!(Systolic::new(70).is_ok());
        assert!(Systolic::new(200).is_ok());
        assert!(Systolic::new(201).is_err());
        assert!(Diastolic::new(40).is_ok());
        assert!(Diastolic::new(120).is_ok());
        assert!(Diastolic::new(39).is_err());
    }

    #[test]
    fn test_oxygen_saturation_boundaries() {
        assert!(OxygenSaturation::new(70).is_ok());
        assert!(OxygenSaturation::new(100).is_ok());
        assert!(OxygenSaturation::new(69).is_err());
        assert!(OxygenSaturation::new(101).is_err());
    }

    #[test]
    fn test_deserialize_revalidates() {
        assert!(serde_json::from_str::<Temperature>("36.6").is_ok());
        assert!(serde_json::from_str::<Temperature>("50.0").is_err());
        assert!(serde_json::from_str::<OxygenSaturation>("98").is_ok());
        assert!(serde_json::from_str::<OxygenSaturation>("12").is_err());
    }

    #[test]
    fn test_out_of_range_message_names_field_and_value() {
        let err = HeartRate::new(200).expect_err("should reject 200");
        let msg = err.to_string();
        assert!(msg.contains("heart rate"), "message: {msg}");
        assert!(msg.contains("200"), "message: {msg}");
        assert!(msg.contains("30 to 180"), "message: {msg}");
    }
}
