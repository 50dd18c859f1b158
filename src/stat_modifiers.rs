use log::{debug, warn};

use super::prelude::*;

/// Whether a mod is applied or only validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModMode {
    #[default]
    Commit,
    /// Dry run: runs every check, changes nothing, fires no hooks.
    Test,
}

/// What a successful mod did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModOutcome {
    /// The value written to the targeted property.
    Committed(f64),
    /// A [`ModMode::Test`] mod that would have succeeded.
    Validated,
}

impl ModOutcome {
    /// The committed value, if anything was written.
    pub fn value(self) -> Option<f64> {
        match self {
            ModOutcome::Committed(value) => Some(value),
            ModOutcome::Validated => None,
        }
    }
}

impl Stat {
    /// Adds `amount` to the proxy value under the stat's bounds and increment rules.
    ///
    /// On commit, `proxy_value_previous` takes the old proxy value and the hooks
    /// are checked against the new one before it is written.
    pub fn modify_proxy(&mut self, amount: f64, mode: ModMode) -> StatResult<ModOutcome> {
        self.apply_mod(StatProperty::ProxyValue, amount, mode)
    }

    /// Adds `amount` to a named moddable property (see [`MODDABLE_PROPERTIES`]).
    /// Never fires hooks.
    pub fn modify_property(&mut self, property_name: &str, amount: f64, mode: ModMode) -> StatResult<ModOutcome> {
        let property = StatProperty::parse(property_name).filter(|property| property.is_moddable());
        let Some(property) = property else {
            let err = StatError::NotModdable {
                property: property_name.to_string(),
                allowed: moddable_property_names(),
            };
            warn!("{}", err);
            return Err(err);
        };
        self.apply_mod(property, amount, mode)
    }

    /// Shorthand for a [`ModMode::Test`] proxy mod.
    pub fn can_modify_proxy(&self, amount: f64) -> bool {
        let current = self.options.proxy_value;
        self.resolve_candidate(current, amount, ModMode::Test).is_ok()
    }

    fn apply_mod(&mut self, property: StatProperty, amount: f64, mode: ModMode) -> StatResult<ModOutcome> {
        let Some(current) = self.number(property) else {
            return Err(StatError::UnknownProperty {
                property: property.to_string(),
            });
        };

        let candidate = self
            .resolve_candidate(current, amount, mode)
            .inspect_err(|err| warn!("{}", err))?;

        if mode == ModMode::Test {
            return Ok(ModOutcome::Validated);
        }

        if property == StatProperty::ProxyValue {
            self.options.proxy_value_previous = self.options.proxy_value;
            self.check_hooks(candidate);
        }

        if let Some(slot) = self.number_mut(property) {
            *slot = candidate;
        }
        debug!("{} modded by {}: {} -> {}", property, amount, current, candidate);

        Ok(ModOutcome::Committed(candidate))
    }

    /// Runs the bounds and increment checks and returns the value a commit would write.
    fn resolve_candidate(&self, current: f64, amount: f64, mode: ModMode) -> StatResult<f64> {
        if amount.is_nan() {
            return Err(StatError::InvalidAmount { amount });
        }

        let options = &self.options;
        let mut candidate = current + amount;

        if !self.within_bounds(candidate) {
            if options.cancel_on_min_max_breach {
                return Err(StatError::BoundsBreach {
                    candidate,
                    minimum: options.minimum_value,
                    maximum: options.maximum_value,
                });
            }
            if mode == ModMode::Test {
                return Err(StatError::TestBoundsBreach {
                    candidate,
                    minimum: options.minimum_value,
                    maximum: options.maximum_value,
                });
            }
            candidate = self.clamp_to_bounds(candidate);
        }

        if let Some(increment) = options.increment_by {
            if !fits_increment(candidate, increment) {
                if !options.round_to_increment {
                    return Err(StatError::IncrementMismatch { candidate, increment });
                }

                let rounded = round_to_increment(candidate, increment);
                // No clamp fallback here: a rounded value outside the bounds fails the mod.
                if !self.within_bounds(rounded) {
                    return Err(StatError::RoundedOutOfBounds {
                        rounded,
                        minimum: options.minimum_value,
                        maximum: options.maximum_value,
                    });
                }
                candidate = rounded;
            }
        }

        Ok(candidate)
    }

    fn within_bounds(&self, value: f64) -> bool {
        !(value > self.options.maximum_value || value < self.options.minimum_value)
    }

    fn clamp_to_bounds(&self, value: f64) -> f64 {
        if value > self.options.maximum_value {
            return self.options.maximum_value;
        }
        if value < self.options.minimum_value {
            return self.options.minimum_value;
        }
        value
    }
}

pub(crate) fn fits_increment(value: f64, increment: f64) -> bool {
    value % increment == 0.0
}

/// Snaps `value` to a multiple of `increment`. A remainder ratio of exactly 0.5
/// rounds up; the remainder keeps the sign of `value`, so negatives snap toward zero.
pub(crate) fn round_to_increment(value: f64, increment: f64) -> f64 {
    let remainder = value % increment;
    if remainder / increment < 0.5 {
        value - remainder
    } else {
        value - remainder + increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_fit_uses_the_remainder() {
        assert!(fits_increment(10.0, 5.0));
        assert!(fits_increment(-10.0, 5.0));
        assert!(fits_increment(1.5, 0.5));
        assert!(!fits_increment(7.0, 5.0));
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_to_increment(7.5, 5.0), 10.0);
        assert_eq!(round_to_increment(7.0, 5.0), 5.0);
        assert_eq!(round_to_increment(8.0, 5.0), 10.0);
        assert_eq!(round_to_increment(12.4, 1.0), 12.0);
        assert_eq!(round_to_increment(12.5, 1.0), 13.0);
    }

    #[test]
    fn rounding_negatives_truncates_toward_zero() {
        assert_eq!(round_to_increment(-2.75, 1.0), -2.0);
        assert_eq!(round_to_increment(-7.5, 5.0), -5.0);
    }

    #[test]
    fn outcome_value() {
        assert_eq!(ModOutcome::Committed(3.0).value(), Some(3.0));
        assert_eq!(ModOutcome::Validated.value(), None);
        assert_eq!(ModMode::default(), ModMode::Commit);
    }
}
