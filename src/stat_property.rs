/// Names of every option a [`Stat`](crate::stat::Stat) carries.
///
/// The string form is the snake_case option name used by `get`, `set` and
/// `modify_property`, e.g. `"base_value"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum StatProperty {
    Id,
    Name,
    BaseValue,
    ProxyValue,
    ProxyValuePrevious,
    MinimumValue,
    MinimumBoundary,
    MaximumValue,
    MaximumBoundary,
    IncrementBy,
    RoundToIncrement,
    CancelOnMinMaxBreach,
}

/// The only properties `modify_property` accepts.
pub const MODDABLE_PROPERTIES: &[StatProperty] = &[StatProperty::BaseValue];

/// What kind of [`OptionValue`](crate::value_type::OptionValue) a property holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    Number,
    Flag,
    /// A number, or `false` for "no increment"
    Increment,
}

impl OptionKind {
    pub fn describe(self) -> &'static str {
        match self {
            OptionKind::Text => "a string",
            OptionKind::Number => "a number",
            OptionKind::Flag => "a boolean",
            OptionKind::Increment => "a number or false",
        }
    }
}

impl StatProperty {
    pub const ALL: [StatProperty; 12] = [
        StatProperty::Id,
        StatProperty::Name,
        StatProperty::BaseValue,
        StatProperty::ProxyValue,
        StatProperty::ProxyValuePrevious,
        StatProperty::MinimumValue,
        StatProperty::MinimumBoundary,
        StatProperty::MaximumValue,
        StatProperty::MaximumBoundary,
        StatProperty::IncrementBy,
        StatProperty::RoundToIncrement,
        StatProperty::CancelOnMinMaxBreach,
    ];

    /// Looks a property up by its option name. Case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn is_moddable(self) -> bool {
        MODDABLE_PROPERTIES.contains(&self)
    }

    pub fn kind(self) -> OptionKind {
        match self {
            StatProperty::Id | StatProperty::Name => OptionKind::Text,
            StatProperty::IncrementBy => OptionKind::Increment,
            StatProperty::RoundToIncrement | StatProperty::CancelOnMinMaxBreach => OptionKind::Flag,
            _ => OptionKind::Number,
        }
    }
}

/// Comma-separated list of the moddable property names, for diagnostics.
pub fn moddable_property_names() -> String {
    MODDABLE_PROPERTIES
        .iter()
        .map(|property| property.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_snake_case() {
        for property in StatProperty::ALL {
            assert_eq!(StatProperty::parse(property.as_ref()), Some(property));
        }
        assert_eq!(StatProperty::CancelOnMinMaxBreach.to_string(), "cancel_on_min_max_breach");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(StatProperty::parse("BaseValue"), None);
        assert_eq!(StatProperty::parse("Base_Value"), None);
        assert_eq!(StatProperty::parse("hooks"), None);
    }

    #[test]
    fn only_base_value_is_moddable() {
        let moddable: Vec<_> = StatProperty::ALL.into_iter().filter(|p| p.is_moddable()).collect();
        assert_eq!(moddable, vec![StatProperty::BaseValue]);
        assert_eq!(moddable_property_names(), "base_value");
    }
}
