//! Field decoders for attributes whose JSON shape has drifted between
//! protocol versions.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default instead of failing.
///
/// Used for collections, where an empty value cannot be mistaken for data.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer that may arrive as a number, a numeric string, or `null`.
///
/// `null` and `""` decode to `None`, never to zero.
pub fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlexibleIntVisitor)
}

struct FlexibleIntVisitor;

impl<'de> Visitor<'de> for FlexibleIntVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, a numeric string or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(Some(value as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "flexible_int")]
        cap: Option<i64>,
        #[serde(default, deserialize_with = "null_as_default")]
        roles: Vec<String>,
    }

    fn cap(json: &str) -> Option<i64> {
        serde_json::from_str::<Sample>(json).unwrap().cap
    }

    #[test]
    fn flexible_int_accepts_every_observed_shape() {
        assert_eq!(cap(r#"{"cap": 500}"#), Some(500));
        assert_eq!(cap(r#"{"cap": "500"}"#), Some(500));
        assert_eq!(cap(r#"{"cap": 0}"#), Some(0));
        assert_eq!(cap(r#"{"cap": null}"#), None);
        assert_eq!(cap(r#"{"cap": ""}"#), None);
        assert_eq!(cap(r#"{}"#), None);
    }

    #[test]
    fn flexible_int_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"cap": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"cap": 1.25}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"cap": [1]}"#).is_err());
    }

    #[test]
    fn float_past_i64_range_is_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"cap": 9223372036854775808.0}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"cap": -9223372036854775809.0e3}"#).is_err());
        assert_eq!(cap(r#"{"cap": 1200.0}"#), Some(1200));
    }

    #[test]
    fn null_collection_is_empty() {
        let sample: Sample = serde_json::from_str(r#"{"roles": null}"#).unwrap();
        assert!(sample.roles.is_empty());
        let sample: Sample = serde_json::from_str(r#"{"roles": ["123"]}"#).unwrap();
        assert_eq!(sample.roles, vec!["123".to_string()]);
    }
}
