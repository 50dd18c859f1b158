use std::fmt;

use log::{debug, trace};

use super::prelude::*;

/// Code run when a hook's threshold condition is met. Receives the stat that fired it.
pub type HookCallback = Box<dyn FnMut(&mut Stat)>;

/// How a hook compares the new proxy value against its threshold.
///
/// Built from the operator strings `"<"`, `">"` and `"="`. Anything else is kept
/// as `Unrecognized` and never fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// `"<"`: new value below the threshold
    Below,
    /// `">"`: new value above the threshold
    Above,
    /// `"="`: new value exactly at the threshold
    Equal,
    Unrecognized(String),
}

impl From<&str> for Comparison {
    fn from(operator: &str) -> Self {
        match operator {
            "<" => Comparison::Below,
            ">" => Comparison::Above,
            "=" => Comparison::Equal,
            other => Comparison::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Comparison {
    fn from(operator: String) -> Self {
        Comparison::from(operator.as_str())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Below => write!(f, "<"),
            Comparison::Above => write!(f, ">"),
            Comparison::Equal => write!(f, "="),
            Comparison::Unrecognized(operator) => write!(f, "{}", operator),
        }
    }
}

/// A threshold watcher on the proxy value.
///
/// With `cross_to_activate` on, `<` and `>` hooks only fire on the mod that
/// actually crosses the threshold, not on every mod that lands beyond it.
/// Equality hooks ignore the flag.
pub struct StatHook {
    threshold_value: f64,
    comparison: Comparison,
    cross_to_activate: bool,
    enabled: bool,
    // Taken out while the callback runs.
    callback: Option<HookCallback>,
}

impl StatHook {
    /// An enabled hook that fires on every qualifying mod.
    pub fn new(
        threshold_value: f64,
        comparison: impl Into<Comparison>,
        callback: impl FnMut(&mut Stat) + 'static,
    ) -> Self {
        Self {
            threshold_value,
            comparison: comparison.into(),
            cross_to_activate: false,
            enabled: true,
            callback: Some(Box::new(callback)),
        }
    }

    pub fn cross_to_activate(mut self, cross_to_activate: bool) -> Self {
        self.cross_to_activate = cross_to_activate;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn threshold_value(&self) -> f64 {
        self.threshold_value
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn requires_crossing(&self) -> bool {
        self.cross_to_activate
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this hook's condition holds for a proxy value moving from
    /// `previous_value` to `new_value`. Ignores the enabled flag.
    pub fn is_triggered(&self, new_value: f64, previous_value: f64) -> bool {
        let threshold = self.threshold_value;
        match self.comparison {
            Comparison::Equal => new_value == threshold,
            Comparison::Below => new_value < threshold && (!self.cross_to_activate || previous_value >= threshold),
            Comparison::Above => new_value > threshold && (!self.cross_to_activate || previous_value <= threshold),
            Comparison::Unrecognized(_) => false,
        }
    }
}

impl fmt::Debug for StatHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatHook")
            .field("threshold_value", &self.threshold_value)
            .field("comparison", &self.comparison)
            .field("cross_to_activate", &self.cross_to_activate)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Stat {
    /// Registers `callback` under `name`, replacing any hook already there.
    ///
    /// The operator is not validated; an unknown one just never fires.
    pub fn register_hook(
        &mut self,
        name: impl Into<String>,
        threshold_value: f64,
        comparison: impl Into<Comparison>,
        cross_to_activate: bool,
        callback: impl FnMut(&mut Stat) + 'static,
        enabled: bool,
    ) {
        let hook = StatHook::new(threshold_value, comparison, callback)
            .cross_to_activate(cross_to_activate)
            .enabled(enabled);
        self.insert_hook(name, hook);
    }

    /// Registers a prebuilt hook, returning the one it replaced.
    pub fn insert_hook(&mut self, name: impl Into<String>, hook: StatHook) -> Option<StatHook> {
        self.hooks.insert(name.into(), hook)
    }

    pub fn toggle_hook(&mut self, name: &str, enabled: bool) -> StatResult<()> {
        let hook = self.hooks.get_mut(name).ok_or_else(|| StatError::HookNotFound {
            name: name.to_string(),
        })?;
        hook.enabled = enabled;
        Ok(())
    }

    pub fn remove_hook(&mut self, name: &str) -> Option<StatHook> {
        self.hooks.remove(name)
    }

    pub fn has_hook(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    pub fn hook(&self, name: &str) -> Option<&StatHook> {
        self.hooks.get(name)
    }

    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Runs every enabled hook whose condition holds for `new_value`, in name order,
    /// and returns how many fired.
    ///
    /// Crossing is judged against `proxy_value_previous`. The modifier pipeline
    /// calls this before writing the new proxy value, so callbacks still see the
    /// old one through [`Stat::value`].
    ///
    /// Callbacks may register, toggle or remove hooks. A hook does not re-enter
    /// itself if its callback mods the stat again.
    pub fn check_hooks(&mut self, new_value: f64) -> usize {
        let names: Vec<String> = self.hooks.keys().cloned().collect();
        let mut fired = 0;

        for name in names {
            let previous_value = self.options.proxy_value_previous;
            // Removed by an earlier callback.
            let Some(hook) = self.hooks.get_mut(&name) else {
                continue;
            };
            if !hook.enabled || !hook.is_triggered(new_value, previous_value) {
                trace!("hook '{}' skipped for {} (previous {})", name, new_value, previous_value);
                continue;
            }
            let Some(mut callback) = hook.callback.take() else {
                continue;
            };

            debug!(
                "hook '{}' fired: {} {} {} (previous {})",
                name, new_value, hook.comparison, hook.threshold_value, previous_value
            );
            callback(self);
            fired += 1;

            // Put the callback back unless it replaced or removed its own hook.
            if let Some(hook) = self.hooks.get_mut(&name) {
                if hook.callback.is_none() {
                    hook.callback = Some(callback);
                }
            }
        }

        fired
    }
}
