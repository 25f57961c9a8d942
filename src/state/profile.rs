//! The persisted user profile.
//!
//! DESIGN
//! ======
//! Exactly one `Profile` lives in browser storage at a time. Its JSON shape
//! is `{ name, age, gender?, email? }`; optional members are omitted rather
//! than written as `null`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::state::auth_flow::FormField;

/// The single current-user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: Age,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_gender",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Age in whole years.
///
/// Always written as a JSON number. Reads also accept numeric text, which
/// is how earlier builds stored the raw form value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(pub u32);

impl Age {
    /// Parse the age form input. Surrounding whitespace is ignored; the rest
    /// must be ASCII digits only, so signs are rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing(FormField::Age));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidAge(trimmed.to_owned()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidAge(trimmed.to_owned()))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_u64() {
                    return u32::try_from(int)
                        .map(Self)
                        .map_err(|_| D::Error::custom(format!("age {int} out of range")));
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                if let Some(float) = number.as_f64()
                    && float.is_finite()
                    && float.fract() == 0.0
                    && float >= 0.0
                    && float <= f64::from(u32::MAX)
                {
                    return Ok(Self(float as u32));
                }
                Err(D::Error::custom(format!("age {number} is not a whole number of years")))
            }
            serde_json::Value::String(text) => {
                Self::parse(&text).map_err(|_| D::Error::custom(format!("age \"{text}\" is not numeric")))
            }
            other => Err(D::Error::custom(format!("expected age as number or numeric string, got {other}"))),
        }
    }
}

/// Closed gender choice offered by the modal's selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(alias = "na")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Parse a selector value. Empty input means "no selection".
    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        match raw.trim() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "prefer-not-to-say" | "na" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

fn deserialize_optional_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Gender::from_value(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown gender \"{value}\""))),
    }
}
