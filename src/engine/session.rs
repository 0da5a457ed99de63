//! Engine session.
//!
//! Owns the engine handle and tracks which size-specific rule file is
//! loaded. Exactly one rule file is active at a time; asking for another
//! board size unloads the current file and consults the new one.

use std::path::PathBuf;

use crate::error::BridgeError;
use crate::protocol::term::Bindings;
use crate::rules::{CacheStatus, RuleFileCache};

use super::{LogicEngine, STACK_LIMIT_FLAG};

/// Which rule file, if any, the engine has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unloaded,
    Loaded { size: usize, path: PathBuf },
}

/// A logic engine plus the rule file currently consulted into it.
pub struct EngineSession<E: LogicEngine> {
    engine: E,
    cache: RuleFileCache,
    stack_limit: u64,
    limits_applied: bool,
    state: SessionState,
    loads: u64,
    reloads: u64,
    verbose: bool,
}

impl<E: LogicEngine> EngineSession<E> {
    /// Creates an unloaded session. `stack_limit` is applied to the engine
    /// before the first rule file is loaded.
    pub fn new(engine: E, cache: RuleFileCache, stack_limit: u64) -> Self {
        EngineSession {
            engine,
            cache,
            stack_limit,
            limits_applied: false,
            state: SessionState::Unloaded,
            loads: 0,
            reloads: 0,
            verbose: false,
        }
    }

    /// Logs load transitions to stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Size of the loaded rule file, if any.
    pub fn loaded_size(&self) -> Option<usize> {
        match self.state {
            SessionState::Loaded { size, .. } => Some(size),
            SessionState::Unloaded => None,
        }
    }

    /// Number of rule files consulted so far.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Number of switches from one loaded size to another.
    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Makes the rule file for `size` the active one.
    ///
    /// Returns true if a file was consulted, false if it was already loaded.
    pub fn ensure_loaded(&mut self, size: usize) -> Result<bool, BridgeError> {
        if !self.limits_applied {
            self.engine
                .set_flag(STACK_LIMIT_FLAG, &self.stack_limit.to_string())?;
            self.limits_applied = true;
        }

        if self.loaded_size() == Some(size) {
            return Ok(false);
        }

        let (path, status) = self.cache.ensure(size)?;
        if self.verbose && status == CacheStatus::Generated {
            eprintln!("generated rule file {}", path.display());
        }

        if let SessionState::Loaded {
            path: old,
            size: old_size,
        } = &self.state
        {
            self.engine.unload(old)?;
            self.reloads += 1;
            if self.verbose {
                eprintln!("switching rules from size {} to {}", old_size, size);
            }
            self.state = SessionState::Unloaded;
        }

        self.engine.consult(&path)?;
        self.loads += 1;
        self.state = SessionState::Loaded { size, path };
        Ok(true)
    }

    /// Runs a goal against the loaded rules.
    pub fn query(&mut self, goal: &str, max: Option<usize>) -> Result<Vec<Bindings>, BridgeError> {
        Ok(self.engine.query(goal, max)?)
    }
}
