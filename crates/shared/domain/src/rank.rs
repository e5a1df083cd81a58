use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A display rank exactly as the document store holds it.
///
/// Editors type ranks into free-text fields, so the same catalog mixes `"2"`, `2` and
/// occasionally `2.0`. Nothing is coerced at deserialization time; callers decide what
/// counts as a usable integer through [`RawRank::as_integer`]. Values that are neither
/// text nor numbers (`true`, objects, arrays) are kept as [`RawRank::Invalid`] so the
/// owning record still loads and the bad rank can be reported against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawRank {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Short rendering of an unusable value, e.g. `true` or `{..}`.
    Invalid(String),
}

impl RawRank {
    /// Returns the rank as an integer, if it is one.
    ///
    /// Text is trimmed and must parse as a base-10 integer in full (`"3"` and `" 3 "` are
    /// fine, `"3rd"` and `""` are not). Floats are accepted only when they have no
    /// fractional part.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
            Self::Float(value) => {
                let truncated = value.trunc();
                (value.is_finite() && truncated == *value && truncated.abs() < 9.0e15)
                    .then_some(truncated as i64)
            },
            Self::Text(text) => text.trim().parse().ok(),
            Self::Invalid(_) => None,
        }
    }
}

impl fmt::Display for RawRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) | Self::Invalid(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for RawRank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawRankVisitor)
    }
}

struct RawRankVisitor;

impl<'de> Visitor<'de> for RawRankVisitor {
    type Value = RawRank;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rank")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<RawRank, E> {
        Ok(RawRank::Invalid(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawRank, E> {
        Ok(RawRank::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawRank, E> {
        Ok(i64::try_from(value).map_or_else(|_| RawRank::Invalid(value.to_string()), RawRank::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawRank, E> {
        Ok(RawRank::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawRank, E> {
        Ok(RawRank::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RawRank, E> {
        Ok(RawRank::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawRank, E> {
        Ok(RawRank::Invalid("null".to_owned()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawRank, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawRank::Invalid("[..]".to_owned()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawRank, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawRank::Invalid("{..}".to_owned()))
    }
}

impl From<&str> for RawRank {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i64> for RawRank {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_in_any_encoding() {
        assert_eq!(RawRank::from("3").as_integer(), Some(3));
        assert_eq!(RawRank::from(" 12 ").as_integer(), Some(12));
        assert_eq!(RawRank::from("-1").as_integer(), Some(-1));
        assert_eq!(RawRank::from(7).as_integer(), Some(7));
        assert_eq!(RawRank::Float(4.0).as_integer(), Some(4));
    }

    #[test]
    fn non_integers_are_rejected() {
        assert_eq!(RawRank::from("").as_integer(), None);
        assert_eq!(RawRank::from("3rd").as_integer(), None);
        assert_eq!(RawRank::from("1.5").as_integer(), None);
        assert_eq!(RawRank::Float(1.5).as_integer(), None);
        assert_eq!(RawRank::Float(f64::NAN).as_integer(), None);
    }

    #[test]
    fn deserializes_text_and_numbers() {
        let ranks: Vec<RawRank> = serde_json::from_str(r#"["1", 2, 3.0]"#).unwrap();
        assert_eq!(ranks, vec![RawRank::from("1"), RawRank::Integer(2), RawRank::Float(3.0)]);
    }

    #[test]
    fn other_json_values_deserialize_as_invalid() {
        let ranks: Vec<RawRank> = serde_json::from_str(r#"[true, {"n": 1}, [1, 2]]"#).unwrap();
        assert_eq!(
            ranks,
            vec![
                RawRank::Invalid("true".to_owned()),
                RawRank::Invalid("{..}".to_owned()),
                RawRank::Invalid("[..]".to_owned()),
            ]
        );
        assert!(ranks.iter().all(|rank| rank.as_integer().is_none()));
    }
}
