//! Wire types for the Hasura `ads` query.
//!
//! ## Observed shape
//!
//! ### `code_number`
//! A `bigint`/`numeric` column. Hasura serializes it as a JSON number for
//! small values and may serialize it as a string for large ones. Either way
//! it is kept as decimal text. Numbers are read from the raw document so
//! values wider than `u64` keep every digit. `null` or absent becomes `""`
//! and the projector drops the ad later.
//!
//! ### `attributes`
//! A `jsonb` column holding the listing wizard state
//! (`{"stepsData": [...]}`). Kept as an opaque [`serde_json::Value`] so one
//! bad blob only affects its own ad.
//!
//! ### Nullable text columns
//! `draft_id` and `description` are nullable; `null` is read as `""`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

/// GraphQL request envelope.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: AdsQueryVariables,
}

/// Variables for the ads query.
#[derive(Debug, Serialize)]
pub struct AdsQueryVariables {
    /// RFC 3339 lower bound for `updated_at`.
    #[serde(rename = "last24Hours")]
    pub last_24_hours: String,
}

/// GraphQL response envelope. `data` may be absent when `errors` is set.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of the ads query.
#[derive(Debug, Deserialize)]
pub struct AdsData {
    pub ads: Vec<RawAd>,
}

/// One ad row exactly as returned by the source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAd {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub draft_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Opaque attribute document, decoded per ad downstream.
    #[serde(default)]
    pub attributes: serde_json::Value,

    #[serde(default, deserialize_with = "code_number_as_text")]
    pub code_number: String,
}

/// Reads a nullable string column, mapping `null` to `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `code_number` as decimal text from either a JSON number or string.
///
/// Numbers are copied from the source literal, never round-tripped through
/// `u64`/`f64`.
fn code_number_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
        return Ok(String::new());
    };
    let literal = raw.get();

    if literal.starts_with('"') {
        return serde_json::from_str::<String>(literal).map_err(D::Error::custom);
    }

    serde_json::from_str::<serde_json::Number>(literal).map_err(|_| {
        D::Error::custom(format!(
            "code_number must be a number or a string, got {literal}"
        ))
    })?;
    Ok(literal.to_owned())
}
