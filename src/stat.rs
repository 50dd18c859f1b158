use std::collections::BTreeMap;
use std::fmt;

use log::info;
use serde::Serialize;

use super::prelude::*;

/// The option set a [`Stat`] carries. Serialized by [`Stat::config`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub proxy_value_previous: f64,
    pub base_value: f64,
    pub proxy_value: f64,
    /// Lowest the stat may ever go. Enforced by the modifier pipeline.
    pub minimum_value: f64,
    /// Lowest the stat is presented as going, e.g. the empty end of a gauge. Never enforced.
    pub minimum_boundary: f64,
    pub maximum_value: f64,
    /// Presentation-only counterpart of `maximum_value`.
    pub maximum_boundary: f64,
    /// Unit every modded value must be a multiple of. `None` disables the rule.
    #[serde(serialize_with = "serialize_increment")]
    pub increment_by: Option<f64>,
    pub round_to_increment: bool,
    pub cancel_on_min_max_breach: bool,
}

fn serialize_increment<S>(increment: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match increment {
        Some(increment) => serializer.serialize_f64(*increment),
        None => serializer.serialize_bool(false),
    }
}

/// A single bounded stat: a base value, an effective ("proxy") value, the rules
/// that constrain modifications, and the hooks that watch the proxy value.
///
/// ```
/// use gauge_stat::prelude::*;
///
/// let mut health = Stat::new(StatConfig::new().with_base_value(10.0).with_bounds(0.0, 10.0));
/// assert_eq!(health.modify_proxy(-4.0, ModMode::Commit).unwrap(), ModOutcome::Committed(6.0));
/// assert_eq!(health.reset(), 10.0);
/// ```
pub struct Stat {
    pub(crate) options: StatOptions,
    pub(crate) hooks: BTreeMap<String, StatHook>,
}

impl Stat {
    pub fn new(config: StatConfig) -> Self {
        let base_value = number_or(config.base_value, 0.0);
        let proxy_value = number_or(config.proxy_value, base_value);

        let options = StatOptions {
            id: config.id,
            name: config.name,
            proxy_value_previous: proxy_value,
            base_value,
            proxy_value,
            minimum_value: number_or(config.minimum_value, f64::NEG_INFINITY),
            minimum_boundary: number_or(config.minimum_boundary, -10.0),
            maximum_value: number_or(config.maximum_value, f64::INFINITY),
            maximum_boundary: number_or(config.maximum_boundary, 10.0),
            increment_by: enabled_increment(config.increment_by),
            round_to_increment: config.round_to_increment.unwrap_or(false),
            cancel_on_min_max_breach: config.cancel_on_min_max_breach.unwrap_or(false),
        };

        Self {
            options,
            hooks: BTreeMap::new(),
        }
    }

    /// Builds a stat straight from a JSON configuration object.
    pub fn from_json(json: &str) -> StatResult<Self> {
        Ok(Self::new(StatConfig::from_json(json)?))
    }

    /// Reads any option by name. Unknown names, and an unset `id` or `name`, give `None`.
    pub fn get(&self, property_name: &str) -> Option<OptionValue> {
        let property = StatProperty::parse(property_name)?;
        self.read(property)
    }

    /// Overwrites an existing option without any validation and returns the written value.
    ///
    /// Hooks do not fire and `proxy_value_previous` is left alone, even when
    /// writing `proxy_value` directly.
    pub fn set(&mut self, property_name: &str, value: impl Into<OptionValue>) -> StatResult<OptionValue> {
        let Some(property) = StatProperty::parse(property_name) else {
            return Err(StatError::UnknownProperty {
                property: property_name.to_string(),
            });
        };
        let value = value.into();
        self.write(property, &value)?;
        Ok(value)
    }

    /// The current effective value.
    pub fn value(&self) -> f64 {
        self.options.proxy_value
    }

    pub fn base_value(&self) -> f64 {
        self.options.base_value
    }

    /// The proxy value as it was right before the last committed proxy mod.
    pub fn previous_value(&self) -> f64 {
        self.options.proxy_value_previous
    }

    pub fn options(&self) -> &StatOptions {
        &self.options
    }

    /// Drops every temporary change: the proxy value goes back to the base value.
    ///
    /// `proxy_value_previous` keeps whatever the last committed mod left there.
    pub fn reset(&mut self) -> f64 {
        self.options.proxy_value = self.options.base_value;
        self.options.proxy_value
    }

    /// Dumps the option set as JSON for inspection and logs it at info level.
    ///
    /// The format is not stable. Infinite bounds come out as `null`.
    pub fn config(&self) -> String {
        let dump = serde_json::to_string(&self.options).unwrap_or_else(|err| format!("{{\"error\":\"{}\"}}", err));
        info!("{}", dump);
        dump
    }

    pub(crate) fn read(&self, property: StatProperty) -> Option<OptionValue> {
        let options = &self.options;
        let value = match property {
            StatProperty::Id => OptionValue::Text(options.id.clone()?),
            StatProperty::Name => OptionValue::Text(options.name.clone()?),
            StatProperty::IncrementBy => match options.increment_by {
                Some(increment) => OptionValue::Number(increment),
                None => OptionValue::Flag(false),
            },
            StatProperty::RoundToIncrement => OptionValue::Flag(options.round_to_increment),
            StatProperty::CancelOnMinMaxBreach => OptionValue::Flag(options.cancel_on_min_max_breach),
            numeric => OptionValue::Number(self.number(numeric)?),
        };
        Some(value)
    }

    fn write(&mut self, property: StatProperty, value: &OptionValue) -> StatResult<()> {
        let mismatch = || StatError::PropertyTypeMismatch {
            property: property.to_string(),
            expected: property.kind().describe(),
            found: value.kind_name(),
        };

        match (property.kind(), value) {
            (OptionKind::Text, OptionValue::Text(text)) => {
                let slot = if property == StatProperty::Id {
                    &mut self.options.id
                } else {
                    &mut self.options.name
                };
                *slot = Some(text.clone());
            }
            (OptionKind::Number, OptionValue::Number(number)) => {
                if let Some(slot) = self.number_mut(property) {
                    *slot = *number;
                }
            }
            (OptionKind::Increment, OptionValue::Number(number)) => {
                self.options.increment_by = enabled_increment(Some(*number));
            }
            (OptionKind::Increment, OptionValue::Flag(false)) => {
                self.options.increment_by = None;
            }
            (OptionKind::Flag, OptionValue::Flag(flag)) => {
                if property == StatProperty::RoundToIncrement {
                    self.options.round_to_increment = *flag;
                } else {
                    self.options.cancel_on_min_max_breach = *flag;
                }
            }
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    /// Reads a plain numeric option.
    pub(crate) fn number(&self, property: StatProperty) -> Option<f64> {
        let options = &self.options;
        match property {
            StatProperty::BaseValue => Some(options.base_value),
            StatProperty::ProxyValue => Some(options.proxy_value),
            StatProperty::ProxyValuePrevious => Some(options.proxy_value_previous),
            StatProperty::MinimumValue => Some(options.minimum_value),
            StatProperty::MinimumBoundary => Some(options.minimum_boundary),
            StatProperty::MaximumValue => Some(options.maximum_value),
            StatProperty::MaximumBoundary => Some(options.maximum_boundary),
            _ => None,
        }
    }

    pub(crate) fn number_mut(&mut self, property: StatProperty) -> Option<&mut f64> {
        let options = &mut self.options;
        match property {
            StatProperty::BaseValue => Some(&mut options.base_value),
            StatProperty::ProxyValue => Some(&mut options.proxy_value),
            StatProperty::ProxyValuePrevious => Some(&mut options.proxy_value_previous),
            StatProperty::MinimumValue => Some(&mut options.minimum_value),
            StatProperty::MinimumBoundary => Some(&mut options.minimum_boundary),
            StatProperty::MaximumValue => Some(&mut options.maximum_value),
            StatProperty::MaximumBoundary => Some(&mut options.maximum_boundary),
            _ => None,
        }
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self::new(StatConfig::default())
    }
}

impl From<StatConfig> for Stat {
    fn from(config: StatConfig) -> Self {
        Self::new(config)
    }
}

impl fmt::Debug for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stat")
            .field("options", &self.options)
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn number_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|val| !val.is_nan()).unwrap_or(default)
}

fn enabled_increment(increment: Option<f64>) -> Option<f64> {
    increment.filter(|val| *val != 0.0 && !val.is_nan())
}
