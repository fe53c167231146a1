//! Field decoders for documents written by arbitrary clients.
//!
//! Full-document replace stores whatever JSON it is given, so any field may
//! come back as `null`. These helpers keep such documents loadable.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field decodes the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tells an explicit `null` apart from an absent field.
///
/// With `#[serde(default)]`, an absent field is `None` and `null` is
/// `Some(None)`.
pub fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
