//! Embedded Scryer Prolog engine.
//!
//! Runs the rule program inside the process. Rule files are consulted
//! through the machine's consult API under one compilation unit, and
//! answers come back as typed bindings that are narrowed to the bridge's
//! term subset.

use std::fs;
use std::path::Path;

use scryer_prolog::{LeafAnswer, Machine, MachineBuilder, Term as PrologTerm};

use crate::protocol::term::{Bindings, Term};

use super::{EngineError, LogicEngine, STACK_LIMIT_FLAG};

/// Compilation unit every rule file is consulted under.
const RULES_UNIT: &str = "tic_tac_toe_rules";

/// A Scryer Prolog machine with the bridge's rules.
pub struct ScryerEngine {
    machine: Machine,
}

impl ScryerEngine {
    pub fn new() -> Self {
        ScryerEngine {
            machine: MachineBuilder::default().build(),
        }
    }

    /// Loads rule text directly, without a file.
    pub fn consult_text(&mut self, program: &str) {
        self.machine
            .consult_module_string(RULES_UNIT, program.to_string());
    }
}

impl Default for ScryerEngine {
    fn default() -> Self {
        ScryerEngine::new()
    }
}

/// Narrows an answer term to atoms, integers and lists.
fn convert(term: PrologTerm) -> Result<Term, EngineError> {
    match term {
        PrologTerm::Atom(name) => Ok(Term::Atom(name)),
        PrologTerm::Integer(n) => {
            let text = n.to_string();
            text.parse::<i64>()
                .map(Term::Int)
                .map_err(|_| EngineError::Unsupported(text))
        }
        PrologTerm::List(items) => items
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()
            .map(Term::List),
        // a list of one-character atoms comes back as a string
        PrologTerm::String(s) => Ok(Term::List(
            s.chars().map(|c| Term::Atom(c.to_string())).collect(),
        )),
        other => Err(EngineError::Unsupported(format!("{:?}", other))),
    }
}

fn convert_bindings(
    bindings: impl IntoIterator<Item = (String, PrologTerm)>,
) -> Result<Bindings, EngineError> {
    bindings
        .into_iter()
        .map(|(name, value)| convert(value).map(|term| (name, term)))
        .collect()
}

impl LogicEngine for ScryerEngine {
    /// Runs `goal` and collects up to `max` answers.
    ///
    /// Any failure returns straight away. Dropping the answer iterator
    /// discards the rest of the query, so the next goal starts clean.
    fn query(&mut self, goal: &str, max: Option<usize>) -> Result<Vec<Bindings>, EngineError> {
        let mut solutions = Vec::new();
        let mut answers = self.machine.run_query(format!("{}.", goal));
        while max.map_or(true, |m| solutions.len() < m) {
            let answer = match answers.next() {
                Some(answer) => answer,
                None => break,
            };
            match answer {
                Ok(LeafAnswer::True) => solutions.push(Bindings::new()),
                Ok(LeafAnswer::False) => break,
                Ok(LeafAnswer::LeafAnswer { bindings, .. }) => {
                    solutions.push(convert_bindings(bindings)?);
                }
                Ok(LeafAnswer::Exception(error)) | Err(error) => {
                    return Err(EngineError::Query(format!("{:?}", error)));
                }
            }
        }
        Ok(solutions)
    }

    fn consult(&mut self, path: &Path) -> Result<(), EngineError> {
        let program = fs::read_to_string(path)?;
        self.consult_text(&program);
        Ok(())
    }

    /// Size-specific clauses only match boards of their own size, so the
    /// next consult can go into the same unit without retracting anything.
    fn unload(&mut self, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn set_flag(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if name == STACK_LIMIT_FLAG {
            eprintln!(
                "scryer-prolog has no {} flag; ignoring {}",
                STACK_LIMIT_FLAG, value
            );
            return Ok(());
        }
        self.run(&format!("set_prolog_flag({}, {})", name, value))
    }
}
