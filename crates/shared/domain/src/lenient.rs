//! Deserialization helpers for hand-edited documents.
//!
//! A wrongly typed optional field must never cost the whole document, so each helper
//! falls back to the field's empty value instead of failing.

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Either a well-formed `T` or anything else, consumed and discarded.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

/// Scalars that upstream editors store either as numbers or as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        };
        value.filter(|value: &f64| value.is_finite())
    }
}

/// `null` or a value of the wrong type becomes `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.into_option().unwrap_or_default())
}

/// Text field; numbers and booleans are kept in their textual form.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Lenient::<Scalar>::deserialize(deserializer)?.into_option() {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(value)) => value.to_string(),
        Some(Scalar::Float(value)) => value.to_string(),
        Some(Scalar::Flag(value)) => value.to_string(),
        None => String::new(),
    })
}

/// Floating point field; numeric text such as `"4.97"` is parsed.
pub(crate) fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Lenient::<NumberLike>::deserialize(deserializer)?
        .into_option()
        .and_then(|number| number.as_f64())
        .unwrap_or_default())
}

/// Non-negative count; `"12"` and `12.0` are accepted, fractions and negatives are not.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    let to_count = |value: f64| {
        (value >= 0.0 && value.trunc() == value && value <= f64::from(u32::MAX)).then_some(value as u32)
    };

    Ok(Lenient::<NumberLike>::deserialize(deserializer)?
        .into_option()
        .and_then(|number| number.as_f64())
        .and_then(to_count)
        .unwrap_or_default())
}

/// Keyed child collection.
///
/// Accepts an object, or the array the store exports when every key is a small integer
/// (indices become keys, `null` holes are skipped). Children that fail to deserialize
/// are skipped; anything that is not a collection reads as empty.
pub(crate) fn keyed<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let keyed = Lenient::<Keyed<V>>::deserialize(deserializer)?.into_option();
    Ok(keyed.map(|keyed| keyed.0).unwrap_or_default())
}

struct Keyed<V>(BTreeMap<String, V>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Keyed<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyedVisitor(PhantomData))
    }
}

struct KeyedVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for KeyedVisitor<V> {
    type Value = Keyed<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a keyed collection")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Keyed(BTreeMap::new()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut children = BTreeMap::new();
        while let Some((key, child)) = map.next_entry::<String, Option<Lenient<V>>>()? {
            if let Some(child) = child.and_then(Lenient::into_option) {
                children.insert(key, child);
            }
        }
        Ok(Keyed(children))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut children = BTreeMap::new();
        let mut index = 0usize;
        while let Some(child) = seq.next_element::<Option<Lenient<V>>>()? {
            if let Some(child) = child.and_then(Lenient::into_option) {
                children.insert(index.to_string(), child);
            }
            index += 1;
        }
        Ok(Keyed(children))
    }
}
