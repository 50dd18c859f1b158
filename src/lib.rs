//! A single bounded game stat.
//!
//! A [`Stat`](stat::Stat) holds a base value and an effective "proxy" value,
//! enforces minimum/maximum and increment rules when it is modded, and runs
//! threshold hooks as the proxy value moves.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use gauge_stat::prelude::*;
//!
//! let mut stamina = Stat::new(
//!     StatConfig::new()
//!         .with_base_value(10.0)
//!         .with_bounds(0.0, 10.0)
//!         .with_increment_by(1.0),
//! );
//!
//! let exhausted = Rc::new(Cell::new(false));
//! let flag = exhausted.clone();
//! stamina.register_hook("exhausted", 3.0, "<", true, move |_| flag.set(true), true);
//!
//! // Dry run first, then spend.
//! assert!(stamina.can_modify_proxy(-8.0));
//! stamina.modify_proxy(-8.0, ModMode::Commit).unwrap();
//!
//! assert_eq!(stamina.value(), 2.0);
//! assert!(exhausted.get());
//! ```

pub mod prelude;
pub mod stat;
pub mod stat_config;
pub mod stat_error;
pub mod stat_hooks;
pub mod stat_modifiers;
pub mod stat_property;
pub mod value_type;
