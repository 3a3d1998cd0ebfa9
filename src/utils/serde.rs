use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserializes an optional UUID from query strings, treating an empty
/// string the same as an absent parameter.
pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn coerce_fee<E: serde::de::Error>(value: NumberOrString) -> Result<f64, E> {
    let fee = match value {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom("fee must be a number"))?,
    };

    if !fee.is_finite() || fee < 0.0 {
        return Err(E::custom("fee must be a non-negative number"));
    }

    Ok(fee)
}

/// Deserializes a course fee from either a JSON number or a numeric string.
/// Clients historically sent both forms; non-finite and negative values are
/// rejected here rather than reaching the database.
pub fn deserialize_fee<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    coerce_fee(NumberOrString::deserialize(deserializer)?)
}

/// Optional variant of [`deserialize_fee`] for partial updates.
pub fn deserialize_optional_fee<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => coerce_fee(value).map(Some),
        None => Ok(None),
    }
}
