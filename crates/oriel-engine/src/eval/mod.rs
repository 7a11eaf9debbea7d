//! Evaluation plugins and their registry.
//!
//! An evaluation scores a position in the AI side's frame: larger is
//! better for the AI. Every plugin must keep terminal scores monotonic in
//! depth (faster wins strictly higher, faster losses strictly lower) and
//! keep draw/heuristic scores strictly smaller in magnitude than any
//! terminal score.

pub mod positional;
pub mod terminal;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use oriel_core::{GameState, Player};

use crate::error::EngineError;

/// Name of the built-in terminal-only evaluation.
pub const DEFAULT_EVAL: &str = "default";

/// Name of the built-in positional evaluation.
pub const POSITIONAL_EVAL: &str = "positional";

/// The scoring function signature shared by all plugins.
///
/// `winner` is the detected winning side, or `None` for draws and
/// non-terminal heuristic calls.
pub type EvalFn = dyn Fn(&GameState, Option<Player>, Player, u8) -> i32 + Send + Sync;

/// A named evaluation plugin.
#[derive(Clone)]
pub struct Evaluator {
    name: Arc<str>,
    func: Arc<EvalFn>,
}

impl Evaluator {
    /// Wrap a scoring function under a name.
    pub fn new<F>(name: &str, func: F) -> Evaluator
    where
        F: Fn(&GameState, Option<Player>, Player, u8) -> i32 + Send + Sync + 'static,
    {
        Evaluator {
            name: Arc::from(name),
            func: Arc::new(func),
        }
    }

    /// Return the plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score `state` for `ai` at the given search depth.
    #[inline]
    pub fn score(&self, state: &GameState, winner: Option<Player>, ai: Player, depth: u8) -> i32 {
        (self.func)(state, winner, ai, depth)
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("name", &self.name)
            .finish()
    }
}

/// A keyed store of evaluation plugins.
///
/// The registry is an explicit value: callers construct one, optionally
/// register extra plugins, and hand lookups to the search driver. Lookup
/// falls back to the `default` plugin for unknown names.
pub struct EvalRegistry {
    default: Evaluator,
    entries: BTreeMap<String, Evaluator>,
}

impl EvalRegistry {
    /// Create a registry populated with the two built-ins.
    pub fn with_builtins() -> EvalRegistry {
        let default = Evaluator::new(DEFAULT_EVAL, terminal::evaluate);
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_EVAL.to_string(), default.clone());
        entries.insert(
            POSITIONAL_EVAL.to_string(),
            Evaluator::new(POSITIONAL_EVAL, positional::evaluate),
        );
        EvalRegistry { default, entries }
    }

    /// Register a plugin under `name`.
    ///
    /// Fails with [`EngineError::InvalidPlugin`] when the name is empty.
    /// Re-registering a name replaces the previous plugin.
    pub fn register<F>(&mut self, name: &str, func: F) -> Result<(), EngineError>
    where
        F: Fn(&GameState, Option<Player>, Player, u8) -> i32 + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(EngineError::InvalidPlugin {
                name: name.to_string(),
            });
        }
        self.entries
            .insert(name.to_string(), Evaluator::new(name, func));
        Ok(())
    }

    /// Look up a plugin by name, falling back to `default`.
    pub fn get(&self, name: &str) -> Evaluator {
        self.entries
            .get(name)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Return `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over the registered plugin names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for EvalRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for EvalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
