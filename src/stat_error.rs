use thiserror::Error;

/// Error type for the stat system
///
/// Every variant leaves the stat untouched. The `Display` text doubles as the
/// diagnostic the modifier pipeline logs.
#[derive(Error, Debug)]
pub enum StatError {
    /// `modify_property` was pointed at a property outside the moddable set
    #[error("'{property}' is not a mod-able property. Mod-able properties include: {allowed}")]
    NotModdable { property: String, allowed: String },

    /// The mod amount was not a number
    #[error("Mod amount must be a number, got {amount}")]
    InvalidAmount { amount: f64 },

    /// No option by that name
    #[error("Stat has no property named '{property}'")]
    UnknownProperty { property: String },

    /// `set` was given a value of the wrong kind for the option
    #[error("Property '{property}' expects {expected}, got {found}")]
    PropertyTypeMismatch {
        property: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The mod would leave the min-max range and `cancel_on_min_max_breach` is on
    #[error("The mod resulted in a min-max breach ({candidate} outside [{minimum}, {maximum}]). Mod failed.")]
    BoundsBreach {
        candidate: f64,
        minimum: f64,
        maximum: f64,
    },

    /// A test-mode mod would have needed clamping
    #[error(
        "Min-max breach ({candidate} outside [{minimum}, {maximum}]), but cancel_on_min_max_breach is false. \
         The mod would clamp the result, but is technically invalid for testing purposes."
    )]
    TestBoundsBreach {
        candidate: f64,
        minimum: f64,
        maximum: f64,
    },

    /// The result is not a multiple of `increment_by` and rounding is off
    #[error("The mod result {candidate} did not fit the increment {increment}, and round_to_increment is turned off. Mod failed.")]
    IncrementMismatch { candidate: f64, increment: f64 },

    /// Rounding to the increment pushed the result out of bounds
    #[error("Increment rounding to {rounded} resulted in a min-max breach of [{minimum}, {maximum}]. Mod failed.")]
    RoundedOutOfBounds {
        rounded: f64,
        minimum: f64,
        maximum: f64,
    },

    /// `toggle_hook` on an unregistered name
    #[error("No hook named '{name}'")]
    HookNotFound { name: String },

    /// The configuration was not valid JSON
    #[error("Invalid stat configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

// Type alias for Result with StatError
pub type StatResult<T> = Result<T, StatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_moddable_message_lists_allowed_properties() {
        let err = StatError::NotModdable {
            property: "maximum_value".to_string(),
            allowed: "base_value".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("maximum_value"));
        assert!(message.ends_with("Mod-able properties include: base_value"));
    }

    #[test]
    fn invalid_json_converts_into_config_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: StatError = parse_error.into();
        assert!(matches!(err, StatError::InvalidConfig(_)));
    }
}
