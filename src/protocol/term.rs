//! Engine terms.
//!
//! The subset of engine terms the bridge exchanges with the rule program:
//! atoms, integers and proper lists. Answers arrive already parsed from the
//! embedded engine; this side only needs to write goals.
//!
//! ```text
//! [x, o, 0]   'a quoted atom'   -3   []
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

/// Variable name to value, for one solution of a query.
pub type Bindings = BTreeMap<String, Term>;

/// A ground engine term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(String),
    Int(i64),
    List(Vec<Term>),
}

impl Term {
    pub fn atom(name: &str) -> Term {
        Term::Atom(name.to_string())
    }

    /// Returns the list elements, or None for non-list terms.
    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Term::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Returns true if `s` can be written as a bare atom.
fn is_bare_atom(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Quotes `s` as an engine atom.
///
/// Quotes, backslashes and control characters are escaped, so the engine
/// reads back exactly `s`.
pub fn quote_atom(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:x}\\", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(a) if is_bare_atom(a) => f.write_str(a),
            Term::Atom(a) => f.write_str(&quote_atom(a)),
            Term::Int(n) => write!(f, "{}", n),
            Term::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}
