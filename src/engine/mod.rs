//! Logic engine interface.
//!
//! The bridge treats the logic engine as an opaque oracle: it can load a
//! rule file, run a goal, and return zero or more solutions as variable
//! bindings. By default loading, unloading and flag setting are spelled as
//! goals, so an engine only has to implement `query`; engines with a native
//! API for them override the provided methods.

pub mod scryer;
pub mod session;

use std::io;
use std::path::Path;

use crate::protocol::term::{quote_atom, Bindings};

pub use scryer::ScryerEngine;
pub use session::{EngineSession, SessionState};

/// Engine flag that bounds working memory.
pub const STACK_LIMIT_FLAG: &str = "stack_limit";

/// Errors reported by a logic engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read rule file: {0}")]
    Io(#[from] io::Error),

    #[error("unsupported answer term: {0}")]
    Unsupported(String),

    #[error("goal raised an error: {0}")]
    Query(String),

    #[error("goal failed: {0}")]
    Failed(String),

    #[error("answer has no binding for {0}")]
    MissingBinding(String),
}

/// A logic engine that can run goals.
pub trait LogicEngine {
    /// Runs `goal` and returns up to `max` solutions (all when `None`).
    /// A goal with no solutions returns an empty vector, not an error.
    fn query(&mut self, goal: &str, max: Option<usize>) -> Result<Vec<Bindings>, EngineError>;

    /// Runs `goal` and requires at least one solution.
    fn run(&mut self, goal: &str) -> Result<(), EngineError> {
        if self.query(goal, Some(1))?.is_empty() {
            return Err(EngineError::Failed(goal.to_string()));
        }
        Ok(())
    }

    /// Loads a rule file.
    fn consult(&mut self, path: &Path) -> Result<(), EngineError> {
        self.run(&format!("consult({})", quote_atom(&path.to_string_lossy())))
    }

    /// Unloads a previously consulted rule file.
    fn unload(&mut self, path: &Path) -> Result<(), EngineError> {
        self.run(&format!(
            "unload_file({})",
            quote_atom(&path.to_string_lossy())
        ))
    }

    /// Sets a global engine flag.
    fn set_flag(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        self.run(&format!("set_prolog_flag({}, {})", name, value))
    }
}

impl<E: LogicEngine + ?Sized> LogicEngine for Box<E> {
    fn query(&mut self, goal: &str, max: Option<usize>) -> Result<Vec<Bindings>, EngineError> {
        (**self).query(goal, max)
    }

    fn consult(&mut self, path: &Path) -> Result<(), EngineError> {
        (**self).consult(path)
    }

    fn unload(&mut self, path: &Path) -> Result<(), EngineError> {
        (**self).unload(path)
    }

    fn set_flag(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        (**self).set_flag(name, value)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Records every goal and answers from a script. Goals without a
    /// scripted answer succeed once with no bindings.
    #[derive(Default)]
    pub(crate) struct ScriptedEngine {
        pub goals: Vec<String>,
        pub answers: VecDeque<(String, Vec<Bindings>)>,
    }

    impl ScriptedEngine {
        /// Queues `solutions` for the next goal starting with `prefix`.
        pub fn answer(&mut self, prefix: &str, solutions: Vec<Bindings>) {
            self.answers.push_back((prefix.to_string(), solutions));
        }
    }

    impl LogicEngine for ScriptedEngine {
        fn query(&mut self, goal: &str, _max: Option<usize>) -> Result<Vec<Bindings>, EngineError> {
            self.goals.push(goal.to_string());
            if let Some(pos) = self.answers.iter().position(|(p, _)| goal.starts_with(p.as_str())) {
                let (_, solutions) = self.answers.remove(pos).unwrap_or_default();
                return Ok(solutions);
            }
            Ok(vec![Bindings::new()])
        }
    }

    #[test]
    fn provided_goals_are_spelled_for_the_engine() {
        let mut engine = ScriptedEngine::default();
        engine.consult(Path::new("rules/3-tic-tac-toe.pl")).unwrap();
        engine.unload(Path::new("rules/3-tic-tac-toe.pl")).unwrap();
        engine.set_flag("stack_limit", "4000000000").unwrap();
        assert_eq!(
            engine.goals,
            vec![
                "consult('rules/3-tic-tac-toe.pl')",
                "unload_file('rules/3-tic-tac-toe.pl')",
                "set_prolog_flag(stack_limit, 4000000000)",
            ]
        );
    }

    #[test]
    fn run_fails_without_solutions() {
        let mut engine = ScriptedEngine::default();
        engine.answer("consult(", vec![]);
        let err = engine.consult(Path::new("missing.pl")).unwrap_err();
        assert!(matches!(err, EngineError::Failed(goal) if goal == "consult('missing.pl')"));
    }

    /// Overrides loading so it can be told apart from the goal spelling.
    #[derive(Default)]
    struct NativeLoader {
        consulted: Vec<String>,
    }

    impl LogicEngine for NativeLoader {
        fn query(&mut self, _goal: &str, _max: Option<usize>) -> Result<Vec<Bindings>, EngineError> {
            Ok(vec![])
        }

        fn consult(&mut self, path: &Path) -> Result<(), EngineError> {
            self.consulted.push(path.display().to_string());
            Ok(())
        }
    }

    #[test]
    fn boxed_engine_forwards_queries() {
        let mut engine: Box<dyn LogicEngine> = Box::new(ScriptedEngine::default());
        assert_eq!(engine.query("true", None).unwrap().len(), 1);
        engine.set_flag("a", "b").unwrap();
    }

    #[test]
    fn boxed_engine_keeps_overrides() {
        let mut engine = Box::new(NativeLoader::default());
        engine.consult(Path::new("4-tic-tac-toe.pl")).unwrap();
        assert_eq!(engine.consulted, vec!["4-tic-tac-toe.pl"]);
        // the goal spelling would have failed with no solutions
        assert!(matches!(
            engine.unload(Path::new("4-tic-tac-toe.pl")),
            Err(EngineError::Failed(_))
        ));
    }
}
