//! Typed submission record parsed from a request body.
//!
//! Every field is optional and read leniently, so that a missing or
//! mistyped value reaches the validation rules and is reported alongside
//! the other violations, instead of failing deserialization on the first
//! gap. Only a body that is not JSON at all is rejected outright.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One author as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSubmission {
    /// Full name.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Gender code, expected `M` or `F`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    /// National identifier, expected 11 digits.
    #[serde(default, deserialize_with = "lenient_text")]
    pub national_id: Option<String>,
}

/// A work submission as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSubmission {
    /// Work title.
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Area code, expected one of the five fixed areas.
    #[serde(default, deserialize_with = "lenient_text")]
    pub area: Option<String>,
    /// Work code, e.g. `CAE01`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    /// Authors in submission order. `None` when the field is absent, null,
    /// or not a JSON array. Elements that are not objects become an empty
    /// author, which then fails every per-author rule.
    #[serde(default, deserialize_with = "authors_if_array")]
    pub authors: Option<Vec<AuthorSubmission>>,
}

/// Reads a scalar as text. Numbers and booleans keep their JSON spelling
/// (`10987654321` becomes `"10987654321"`); null, arrays and objects read
/// as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn authors_if_array<'de, D>(deserializer: D) -> Result<Option<Vec<AuthorSubmission>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(elements) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    elements
        .into_iter()
        .map(|element| match element {
            Value::Object(_) => serde_json::from_value(element).map_err(de::Error::custom),
            _ => Ok(AuthorSubmission::default()),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
