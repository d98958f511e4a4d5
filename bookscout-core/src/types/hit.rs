//! Raw catalog search records, prior to normalization

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a catalog search response
///
/// Only `docs` is read; other upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<SearchHit>,
}

/// One raw search hit as returned by the catalog
///
/// Fields are decoded leniently: a value of an unexpected type is treated as absent so
/// one odd hit never fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Opaque catalog key, e.g. `/works/OL45804W`
    #[serde(default, deserialize_with = "lenient_string")]
    pub key: Option<String>,

    /// Numeric cover identifier; integral floats such as `12345.0` are accepted
    #[serde(default, deserialize_with = "lenient_cover_id")]
    pub cover_i: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    /// Non-string entries are skipped
    #[serde(default, deserialize_with = "lenient_names")]
    pub author_name: Option<Vec<String>>,

    /// Non-string entries are skipped
    #[serde(default, deserialize_with = "lenient_names")]
    pub publisher: Option<Vec<String>>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_cover_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    Ok(id)
}

fn lenient_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => Some(
            entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
