use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::prelude::*;

/// Construction options for a [`Stat`].
///
/// Every field is optional. `Stat::new` fills in the defaults:
///
/// | option                     | default                      |
/// |----------------------------|------------------------------|
/// | `base_value`               | `0`                          |
/// | `proxy_value`              | `base_value`                 |
/// | `minimum_value`            | `-inf`                       |
/// | `maximum_value`            | `+inf`                       |
/// | `minimum_boundary`         | `-10`                        |
/// | `maximum_boundary`         | `10`                         |
/// | `increment_by`             | disabled                     |
/// | `round_to_increment`       | `false`                      |
/// | `cancel_on_min_max_breach` | `false`                      |
///
/// When loaded from JSON the numeric options take numbers or numeric strings and
/// quietly fall back to the default for anything else. Flags follow truthiness,
/// so `1` and `"yes"` are on while `0` and `""` are off.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatConfig {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub base_value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub proxy_value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub minimum_boundary: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub maximum_value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub maximum_boundary: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub increment_by: Option<f64>,
    #[serde(deserialize_with = "lenient_flag")]
    pub round_to_increment: Option<bool>,
    #[serde(deserialize_with = "lenient_flag")]
    pub cancel_on_min_max_breach: Option<bool>,
}

impl StatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> StatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> StatResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_base_value(mut self, value: f64) -> Self {
        self.base_value = Some(value);
        self
    }

    pub fn with_proxy_value(mut self, value: f64) -> Self {
        self.proxy_value = Some(value);
        self
    }

    pub fn with_minimum_value(mut self, value: f64) -> Self {
        self.minimum_value = Some(value);
        self
    }

    pub fn with_maximum_value(mut self, value: f64) -> Self {
        self.maximum_value = Some(value);
        self
    }

    /// Sets both enforced bounds at once.
    pub fn with_bounds(self, minimum: f64, maximum: f64) -> Self {
        self.with_minimum_value(minimum).with_maximum_value(maximum)
    }

    pub fn with_minimum_boundary(mut self, value: f64) -> Self {
        self.minimum_boundary = Some(value);
        self
    }

    pub fn with_maximum_boundary(mut self, value: f64) -> Self {
        self.maximum_boundary = Some(value);
        self
    }

    pub fn with_increment_by(mut self, increment: f64) -> Self {
        self.increment_by = Some(increment);
        self
    }

    pub fn with_round_to_increment(mut self, round: bool) -> Self {
        self.round_to_increment = Some(round);
        self
    }

    pub fn with_cancel_on_min_max_breach(mut self, cancel: bool) -> Self {
        self.cancel_on_min_max_breach = Some(cancel);
        self
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_number(&Value::deserialize(deserializer)?))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_flag(&Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_text(&Value::deserialize(deserializer)?))
}

pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|val| !val.is_nan())
}

pub(crate) fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => Some(number.as_f64().is_some_and(|val| val != 0.0)),
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}

pub(crate) fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
