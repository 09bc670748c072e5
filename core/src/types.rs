//! Domain DTOs for the products API.
//!
//! # Design
//! `Product` is both the request payload and the response payload. The remote
//! service may hand back a modified copy (a recalculated price, extra fields
//! such as an assigned `id`), so decoding is lenient: unknown keys are
//! ignored, and missing or `null` keys fall back to the zero value of their
//! type. Encoding always writes all five keys, even when a field is empty.

use serde::{Deserialize, Deserializer, Serialize};

/// A product record exchanged with the remote API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
