//! Boundary normalization for loosely-typed wire data.
//!
//! Source systems deliver times as `HH:MM` strings, weekdays as 0–6 indices
//! (0 = Sunday), and availability flags as booleans, numbers, or strings.
//! Everything is normalized here, once, at the serde boundary, so the
//! business logic only ever sees clean `chrono` types and real booleans.

use chrono::{NaiveTime, Weekday};

use crate::error::{EngineError, EngineResult};

/// Parses a 24-hour `HH:MM` string into a [`NaiveTime`].
///
/// # Example
///
/// ```
/// use roster_engine::models::parse_hhmm;
/// use chrono::NaiveTime;
///
/// let time = parse_hhmm("09:30").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(parse_hhmm("25:61").is_err());
/// ```
pub fn parse_hhmm(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| EngineError::InvalidTime {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Formats a [`NaiveTime`] as a 24-hour `HH:MM` string.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Converts a 0–6 weekday index (0 = Sunday) into a [`Weekday`].
///
/// Returns `None` for indices outside 0–6.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Converts a [`Weekday`] into its 0–6 index (0 = Sunday).
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Serde adapter for `HH:MM` time fields.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a time as an `HH:MM` string.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*time))
    }

    /// Deserializes an `HH:MM` string into a time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|e| {
            serde::de::Error::custom(format!("invalid HH:MM time '{}': {}", raw, e))
        })
    }
}

/// Serde adapter for optional `HH:MM` time fields.
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional time as an `HH:MM` string or null.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&super::format_hhmm(*t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an `HH:MM` string or null into an optional time.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| {
            NaiveTime::parse_from_str(&value, "%H:%M").map_err(|e| {
                serde::de::Error::custom(format!("invalid HH:MM time '{}': {}", value, e))
            })
        })
        .transpose()
    }
}

/// Serde adapter for weekday fields carried as 0–6 indices (0 = Sunday).
pub mod weekday_as_index {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a weekday as its 0–6 index.
    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(super::weekday_index(*weekday))
    }

    /// Deserializes a 0–6 index into a weekday.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let index = u8::deserialize(deserializer)?;
        super::weekday_from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("weekday index {} out of range 0-6", index))
        })
    }
}

/// Serde adapter for availability flags that may arrive as a boolean, a
/// number, or a string. Always serializes back as a plain boolean.
pub mod loose_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    /// Serializes the flag as a plain boolean.
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }

    /// Deserializes a boolean, number, or string into a boolean.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Bool(flag) => Ok(flag),
            Raw::Int(number) => Ok(number != 0),
            Raw::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" | "" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "unrecognized availability flag '{}'",
                    other
                ))),
            },
        }
    }
}
