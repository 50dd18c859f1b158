use std::fmt;

use serde::Serialize;

/// A single option value as read through [`Stat::get`](crate::stat::Stat::get) or
/// written through [`Stat::set`](crate::stat::Stat::set).
///
/// A disabled `increment_by` reads back as `Flag(false)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl OptionValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            OptionValue::Number(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(val) => Some(val),
            _ => None,
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            OptionValue::Number(_) => "a number",
            OptionValue::Flag(_) => "a boolean",
            OptionValue::Text(_) => "a string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(val) => write!(f, "{}", val),
            OptionValue::Flag(val) => write!(f, "{}", val),
            OptionValue::Text(val) => write!(f, "{}", val),
        }
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Number(value as f64)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(value as f64)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}
