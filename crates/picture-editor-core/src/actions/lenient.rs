//! Forgiving number fields for form-posted parameters.
//!
//! A form may post a percentage or a crop coordinate as an integer, a float,
//! a numeric string or null. These deserializers accept all of them:
//!
//! - integers are taken as is
//! - floats and float strings are rounded half to even
//! - null and blank strings mean "not set" and yield the field default
//! - anything else (out of range, non-numeric, booleans, arrays, objects)
//!   logs a `tracing::warn!` and yields the field default
//!
//! Use them with `#[serde(deserialize_with = "...")]`.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Brightness in percent, default 0.
pub fn brightness<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    int_or(deserializer, "brightness", 0)
}

/// Contrast in percent, default 100.
pub fn contrast<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    int_or(deserializer, "contrast", 100)
}

/// Saturation in percent, default 100.
pub fn saturation<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    int_or(deserializer, "saturation", 100)
}

/// A signed pixel offset, default 0.
pub fn offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    int_or(deserializer, "offset", 0)
}

/// An unsigned pixel extent, default 0. Negative values fall back too.
pub fn extent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    int_or(deserializer, "extent", 0)
}

fn int_or<'de, D, T>(deserializer: D, field: &'static str, default: T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Copy + fmt::Debug,
{
    let value = match deserializer.deserialize_any(LooseVisitor)?.to_int() {
        Ok(None) => default,
        Ok(Some(v)) => T::try_from(v).unwrap_or_else(|_| {
            tracing::warn!(field, value = v, ?default, "parameter out of range, using default");
            default
        }),
        Err(raw) => {
            tracing::warn!(field, value = %raw, ?default, "parameter is not a number, using default");
            default
        }
    };
    Ok(value)
}

/// A number as posted, before conversion.
#[derive(Debug, Clone, PartialEq)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
    Invalid(&'static str),
}

impl Loose {
    /// `Ok(None)` when unset, `Err` with a printable form when unconvertible.
    fn to_int(&self) -> Result<Option<i64>, String> {
        match self {
            Loose::Int(v) => Ok(Some(*v)),
            Loose::Float(f) => round_float(*f).map(Some).ok_or_else(|| f.to_string()),
            Loose::Null => Ok(None),
            Loose::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                if let Ok(v) = s.parse::<i64>() {
                    return Ok(Some(v));
                }
                s.parse::<f64>()
                    .ok()
                    .and_then(round_float)
                    .map(Some)
                    .ok_or_else(|| s.to_string())
            }
            Loose::Invalid(kind) => Err((*kind).to_string()),
        }
    }
}

fn round_float(f: f64) -> Option<i64> {
    let rounded = f.round_ties_even();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    (rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64)
        .then_some(rounded as i64)
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Loose, E> {
        Ok(Loose::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Loose, E> {
        Ok(i64::try_from(v).map_or(Loose::Float(v as f64), Loose::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Loose, E> {
        Ok(Loose::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Loose, E> {
        Ok(Loose::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Loose, E> {
        Ok(Loose::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Loose, E> {
        Ok(Loose::Invalid("boolean"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Loose, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Loose, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose::Invalid("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Loose, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Invalid("object"))
    }
}
