//! Serde helpers for scores that may be infinite.
//!
//! JSON has no representation for non-finite numbers, so `-inf` / `inf` are
//! written as strings while finite scores stay plain numbers.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Number(f64),
    Text(String),
}

impl ScoreRepr {
    fn into_score<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            ScoreRepr::Number(value) => Ok(value),
            ScoreRepr::Text(text) => parse_score(&text)
                .ok_or_else(|| E::custom(format!("invalid score literal '{text}'"))),
        }
    }
}

/// Render a score the way it appears in trace descriptions and serialized output.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        value.to_string()
    }
}

/// Parse the textual forms produced by `format_score`.
pub fn parse_score(text: &str) -> Option<f64> {
    match text.trim() {
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        "nan" => Some(f64::NAN),
        other => other.parse().ok(),
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_score(*value))
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    ScoreRepr::deserialize(deserializer)?.into_score()
}

/// Same encoding for optional scores; `None` stays `null`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<ScoreRepr>::deserialize(deserializer)? {
            Some(repr) => repr.into_score().map(Some),
            None => Ok(None),
        }
    }
}
