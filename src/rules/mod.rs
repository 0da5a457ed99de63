//! Rule generation.
//!
//! Winning lines as data, the size-specific rule statements generated from
//! them, and the on-disk cache of rendered rule files.

pub mod patterns;
pub mod statements;
pub mod template;

pub use patterns::WinPatterns;
pub use statements::{board_statements, winning_clause_count};
pub use template::{
    CacheStatus, RuleFileCache, RuleTemplate, TemplateError, BASE_RULE_FILE, BUILTIN_TEMPLATE,
    PLACEHOLDER,
};
