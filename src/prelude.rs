pub use crate::stat::{Stat, StatOptions};
pub use crate::stat_config::StatConfig;
pub use crate::stat_error::{StatError, StatResult};
pub use crate::stat_hooks::{Comparison, HookCallback, StatHook};
pub use crate::stat_modifiers::{ModMode, ModOutcome};
pub use crate::stat_property::{MODDABLE_PROPERTIES, OptionKind, StatProperty, moddable_property_names};
pub use crate::value_type::OptionValue;
