use std::cell::Cell;
use std::rc::Rc;

use gauge_stat::prelude::*;
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = StatConfig> {
    (
        -100.0f64..100.0,
        prop::option::of((-200.0f64..0.0, 0.0f64..200.0)),
        prop::option::of(prop::sample::select(vec![0.5f64, 1.0, 2.0, 5.0])),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(base, bounds, increment, round, cancel)| {
            let mut config = StatConfig::new()
                .with_base_value(base)
                .with_round_to_increment(round)
                .with_cancel_on_min_max_breach(cancel);
            if let Some((min, max)) = bounds {
                config = config.with_bounds(min, max);
            }
            if let Some(increment) = increment {
                config = config.with_increment_by(increment);
            }
            config
        })
}

proptest! {
    /// A dry run never changes the stat or fires a hook.
    #[test]
    fn prop_test_mode_is_pure(config in any_config(), amount in -500.0f64..500.0) {
        let mut stat = Stat::new(config);
        let fired = Rc::new(Cell::new(0));
        for (name, comparison) in [("below", "<"), ("above", ">"), ("equal", "=")] {
            let handle = fired.clone();
            stat.register_hook(name, 0.0, comparison, false, move |_| handle.set(handle.get() + 1), true);
        }
        let before = stat.options().clone();

        let _ = stat.modify_proxy(amount, ModMode::Test);
        let _ = stat.modify_property("base_value", amount, ModMode::Test);

        prop_assert_eq!(stat.options(), &before);
        prop_assert_eq!(fired.get(), 0);
    }

    /// Out-of-range mods without cancel land exactly on the breached bound.
    #[test]
    fn prop_clamp_lands_on_bound(
        base in -50.0f64..50.0,
        min in -100.0f64..-50.0,
        max in 50.0f64..100.0,
        overshoot in 1.0f64..1000.0,
        upward in any::<bool>(),
    ) {
        let mut stat = Stat::new(StatConfig::new().with_base_value(base).with_bounds(min, max));
        let amount = if upward { max - base + overshoot } else { min - base - overshoot };

        let outcome = stat.modify_proxy(amount, ModMode::Commit).unwrap();
        let expected = if upward { max } else { min };
        prop_assert_eq!(outcome, ModOutcome::Committed(expected));
        prop_assert_eq!(stat.value(), expected);
    }

    /// Without rounding, every committed value is a multiple of the increment.
    #[test]
    fn prop_increment_conformance(
        steps in prop::collection::vec(-20i32..20, 1..30),
        increment in prop::sample::select(vec![1.0f64, 2.0, 5.0, 0.5, 0.25]),
    ) {
        let mut stat = Stat::new(StatConfig::new().with_bounds(-1000.0, 1000.0).with_increment_by(increment));

        for step in steps {
            let amount = step as f64 * 0.25;
            if stat.modify_proxy(amount, ModMode::Commit).is_ok() {
                prop_assert_eq!(stat.value() % increment, 0.0);
            }
        }
    }

    /// Committed proxy values stay inside the enforced bounds.
    #[test]
    fn prop_committed_values_in_bounds(config in any_config(), amounts in prop::collection::vec(-300.0f64..300.0, 1..20)) {
        let mut stat = Stat::new(config);
        let (min, max) = (stat.options().minimum_value, stat.options().maximum_value);
        prop_assume!(stat.value() >= min && stat.value() <= max);

        for amount in amounts {
            let before = stat.value();
            match stat.modify_proxy(amount, ModMode::Commit) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.value(), Some(stat.value()));
                    prop_assert!(stat.value() >= min && stat.value() <= max);
                    prop_assert_eq!(stat.previous_value(), before);
                }
                Err(_) => {
                    prop_assert_eq!(stat.value(), before);
                }
            }
        }
    }

    /// Reset always returns to the base value.
    #[test]
    fn prop_reset_law(config in any_config(), amounts in prop::collection::vec(-300.0f64..300.0, 0..10)) {
        let mut stat = Stat::new(config);
        for amount in amounts {
            let _ = stat.modify_proxy(amount, ModMode::Commit);
        }
        let base = stat.base_value();

        prop_assert_eq!(stat.reset(), base);
        prop_assert_eq!(stat.value(), base);
    }
}
