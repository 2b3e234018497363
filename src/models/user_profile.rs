use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_GOAL: &str = "general fitness";
pub const DEFAULT_FITNESS_LEVEL: &str = "beginner";
pub const DEFAULT_EQUIPMENT: &str = "full gym";
pub const DEFAULT_FREQUENCY: &str = "3 days per week";

/// A profile field as sent by the frontend: either free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Number(serde_json::Number),
    Text(String),
}

impl ProfileValue {
    /// Empty text and zero carry no information and are treated as not provided.
    pub fn is_blank(&self) -> bool {
        match self {
            ProfileValue::Text(text) => text.is_empty(),
            ProfileValue::Number(number) => number.as_f64().map_or(false, |n| n == 0.0),
        }
    }
}

impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValue::Number(number) => write!(f, "{}", number),
            ProfileValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::Text(value.to_string())
    }
}

impl From<u32> for ProfileValue {
    fn from(value: u32) -> Self {
        ProfileValue::Number(value.into())
    }
}

/// Fitness profile submitted to the plan generator. Every field is optional;
/// `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub goal: Option<ProfileValue>,
    pub fitness_level: Option<ProfileValue>,
    pub equipment: Option<ProfileValue>,
    pub frequency: Option<ProfileValue>,
    /// Kilograms
    pub weight: Option<ProfileValue>,
    /// Centimetres
    pub height: Option<ProfileValue>,
    pub age: Option<ProfileValue>,
    pub gender: Option<ProfileValue>,
}

impl UserProfile {
    pub fn goal(&self) -> String {
        or_default(&self.goal, DEFAULT_GOAL)
    }

    pub fn fitness_level(&self) -> String {
        or_default(&self.fitness_level, DEFAULT_FITNESS_LEVEL)
    }

    pub fn equipment(&self) -> String {
        or_default(&self.equipment, DEFAULT_EQUIPMENT)
    }

    pub fn frequency(&self) -> String {
        or_default(&self.frequency, DEFAULT_FREQUENCY)
    }

    pub fn weight(&self) -> Option<&ProfileValue> {
        provided(&self.weight)
    }

    pub fn height(&self) -> Option<&ProfileValue> {
        provided(&self.height)
    }

    pub fn age(&self) -> Option<&ProfileValue> {
        provided(&self.age)
    }

    pub fn gender(&self) -> Option<&ProfileValue> {
        provided(&self.gender)
    }
}

fn or_default(value: &Option<ProfileValue>, default: &str) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn provided(value: &Option<ProfileValue>) -> Option<&ProfileValue> {
    value.as_ref().filter(|v| !v.is_blank())
}
