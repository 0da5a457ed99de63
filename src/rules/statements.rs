//! Size-specific rule statements.
//!
//! The rule language cannot match "N of a kind" over a list of unknown
//! length, so `equal/N+1`, `isProperSize/1` and `isWinning/2` are written out
//! for each board size. For N = 3:
//!
//! ```text
//! equal(X, X, X, X).
//! isProperSize([_, _, _, _, _, _, _, _, _]).
//! isWinning(P, [X1, X2, X3, X4, X5, X6, X7, X8, X9]) :-
//!     equal(P, X1, X4, X7);
//!     ...
//!     equal(P, X3, X5, X7).
//! ```

use super::patterns::WinPatterns;

/// Name of the rule variable bound to cell `index`.
fn cell_var(index: usize) -> String {
    format!("X{}", index + 1)
}

/// Generates the board statements for an N×N board.
///
/// The output starts and ends with a newline and is identical for every
/// call with the same `size`.
pub fn board_statements(size: usize) -> String {
    let patterns = WinPatterns::for_size(size);
    let cell_count = size * size;
    let mut lines: Vec<String> = Vec::with_capacity(patterns.len() + 3);

    lines.push(format!("equal({}).", vec!["X"; size + 1].join(", ")));
    lines.push(format!(
        "isProperSize([{}]).",
        vec!["_"; cell_count].join(", ")
    ));

    let board_vars: Vec<String> = (0..cell_count).map(cell_var).collect();
    lines.push(format!("isWinning(P, [{}]) :-", board_vars.join(", ")));

    let last = patterns.len().saturating_sub(1);
    for (i, line) in patterns.lines().iter().enumerate() {
        let vars: Vec<String> = line.iter().map(|&c| cell_var(c)).collect();
        let end = if i == last { '.' } else { ';' };
        lines.push(format!("\tequal(P, {}){}", vars.join(", "), end));
    }

    format!("\n{}\n", lines.join("\n"))
}

/// Counts the `equal(P, ...)` disjuncts in generated statements.
pub fn winning_clause_count(statements: &str) -> usize {
    statements
        .lines()
        .filter(|l| l.trim_start().starts_with("equal(P,"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE_THREE: &str = "
equal(X, X, X, X).
isProperSize([_, _, _, _, _, _, _, _, _]).
isWinning(P, [X1, X2, X3, X4, X5, X6, X7, X8, X9]) :-
\tequal(P, X1, X4, X7);
\tequal(P, X2, X5, X8);
\tequal(P, X3, X6, X9);
\tequal(P, X1, X2, X3);
\tequal(P, X4, X5, X6);
\tequal(P, X7, X8, X9);
\tequal(P, X1, X5, X9);
\tequal(P, X3, X5, X7).
";

    #[test]
    fn size_three_text() {
        assert_eq!(board_statements(3), SIZE_THREE);
    }

    #[test]
    fn clause_count_is_two_n_plus_two() {
        assert_eq!(winning_clause_count(&board_statements(3)), 8);
        for n in 2..=7 {
            assert_eq!(winning_clause_count(&board_statements(n)), 2 * n + 2);
        }
    }

    #[test]
    fn arities_scale_with_size() {
        let text = board_statements(4);
        assert!(text.contains("equal(X, X, X, X, X)."));
        assert!(text.contains(&format!("isProperSize([{}]).", vec!["_"; 16].join(", "))));
        assert!(text.contains("isWinning(P, [X1, X2, X3, X4, X5, X6, X7, X8, X9, X10, X11, X12, X13, X14, X15, X16]) :-"));
        assert!(text.contains("\tequal(P, X4, X7, X10, X13).\n"));
    }

    #[test]
    fn generation_is_deterministic() {
        for n in 1..=6 {
            assert_eq!(board_statements(n), board_statements(n));
        }
    }

    #[test]
    fn only_the_last_clause_ends_the_rule() {
        let text = board_statements(5);
        let clauses: Vec<&str> = text.lines().filter(|l| l.starts_with('\t')).collect();
        assert_eq!(clauses.len(), 12);
        assert!(clauses[..11].iter().all(|c| c.ends_with(';')));
        assert!(clauses[11].ends_with('.'));
    }
}
