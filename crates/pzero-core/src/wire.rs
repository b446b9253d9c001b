//! Lenient numeric fields.
//!
//! Saved scenarios carry form values verbatim, so any number may arrive as a
//! JSON number or as its text (`"0.9"`, `"2"`, or `""` for a blank field).
//! These helpers are used with `#[serde(deserialize_with = ...)]`.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// `None` for null or blank, the parsed value otherwise.
fn read<'de, D>(deserializer: D) -> Result<Option<NumberOrText>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => None,
        other => other,
    })
}

/// Real-valued field. Blank or unparseable text is not computable.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(read(deserializer)?.map(|value| match value {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
    }))
}

/// Like [`opt_number`], with blank mapped to NaN.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_number(deserializer)?.unwrap_or(f64::NAN))
}

/// Count or index field. Blank is `None`; anything else must be a
/// non-negative integer.
pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    read(deserializer)?.map(to_u32::<D::Error>).transpose()
}

/// Like [`opt_count`], with blank mapped to zero.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_count(deserializer)?.unwrap_or(0))
}

/// Like [`count`], widened to an index.
pub fn index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let index = count(deserializer)?;
    usize::try_from(index).map_err(D::Error::custom)
}

fn to_u32<E: Error>(value: NumberOrText) -> Result<u32, E> {
    let n = match value {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected a whole number, got {text:?}")))?,
    };
    if n.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&n) {
        return Err(E::custom(format!("expected a whole number, got {n}")));
    }
    Ok(n as u32)
}
