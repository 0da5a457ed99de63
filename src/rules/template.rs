//! Rule-file rendering and caching.
//!
//! A rule file is the base rule template with the size-specific board
//! statements substituted in. One file is written per board size, named
//! `<N>-<base name>` next to the base template, and never rewritten once it
//! exists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::statements::board_statements;

/// Placeholder replaced by the generated board statements.
pub const PLACEHOLDER: &str = "{{ board_statements }}";

/// Compact spelling of the placeholder, also accepted.
const PLACEHOLDER_COMPACT: &str = "{{board_statements}}";

/// The base rule program shipped with the crate.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../rules/tic-tac-toe.pl");

/// Default file name of the base rule template.
pub const BASE_RULE_FILE: &str = "tic-tac-toe.pl";

/// Errors that can occur while loading or rendering rule files.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("rule template has no '{{{{ board_statements }}}}' placeholder")]
    MissingPlaceholder,

    #[error("rule file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    fn io(path: &Path, source: io::Error) -> Self {
        TemplateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A rule template with a board-statements placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTemplate {
    text: String,
}

impl RuleTemplate {
    /// Wraps template text. Fails if the placeholder is missing.
    pub fn new(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        if !text.contains(PLACEHOLDER) && !text.contains(PLACEHOLDER_COMPACT) {
            return Err(TemplateError::MissingPlaceholder);
        }
        Ok(RuleTemplate { text })
    }

    /// The template embedded in the crate.
    pub fn builtin() -> Self {
        RuleTemplate {
            text: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Reads a template from disk.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        RuleTemplate::new(text)
    }

    /// Substitutes `statements` for every placeholder.
    pub fn render(&self, statements: &str) -> String {
        self.text
            .replace(PLACEHOLDER, statements)
            .replace(PLACEHOLDER_COMPACT, statements)
    }

    /// Renders the rule program for an N×N board.
    pub fn render_for_size(&self, size: usize) -> String {
        self.render(&board_statements(size))
    }
}

/// Whether `RuleFileCache::ensure` wrote a new file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Generated,
    Reused,
}

/// Size-keyed rule files on disk.
#[derive(Debug, Clone)]
pub struct RuleFileCache {
    dir: PathBuf,
    base_name: String,
    template: RuleTemplate,
}

impl RuleFileCache {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>, template: RuleTemplate) -> Self {
        RuleFileCache {
            dir: dir.into(),
            base_name: base_name.into(),
            template,
        }
    }

    /// Opens the cache for `dir/base_name`. Uses the template file on disk
    /// when present and the built-in template otherwise.
    pub fn open(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Result<Self, TemplateError> {
        let dir = dir.into();
        let base_name = base_name.into();
        let base_path = dir.join(&base_name);
        let template = if base_path.exists() {
            RuleTemplate::load(&base_path)?
        } else {
            RuleTemplate::builtin()
        };
        Ok(RuleFileCache::new(dir, base_name, template))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the rule file for an N×N board.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(format!("{}-{}", size, self.base_name))
    }

    /// Returns the rule file for `size`, generating it if absent.
    pub fn ensure(&self, size: usize) -> Result<(PathBuf, CacheStatus), TemplateError> {
        let path = self.path_for(size);
        if path.exists() {
            return Ok((path, CacheStatus::Reused));
        }

        fs::create_dir_all(&self.dir).map_err(|e| TemplateError::io(&self.dir, e))?;

        // Write beside the target and rename so a reader never sees a
        // partial file.
        let tmp = self
            .dir
            .join(format!(".{}-{}.{}.tmp", size, self.base_name, std::process::id()));
        fs::write(&tmp, self.template.render_for_size(size))
            .map_err(|e| TemplateError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| TemplateError::io(&path, e))?;

        Ok((path, CacheStatus::Generated))
    }
}
