//! Symbol sources for a populate run.
//!
//! A run takes its symbols either from an explicit list or from a delimited
//! file whose first field per row is a symbol. Either way the source is
//! resolved once, up front, into a [`SymbolSet`]: unique, non-empty symbols in
//! first-seen order.
//!
//! File symbols are sanitized: each of [`DISALLOWED_SYMBOL_CHARS`] becomes `-`
//! (e.g. `BRK/B` → `BRK-B`, `^GSPC` → `-GSPC`) and surrounding whitespace is
//! trimmed.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use thiserror::Error;
use tracing::warn;

/// Characters replaced by `-` in symbols read from a file.
pub const DISALLOWED_SYMBOL_CHARS: [char; 5] = ['/', ':', '^', '%', '\\'];

/// Unique symbols in first-seen order.
pub type SymbolSet = IndexSet<String>;

/// Where a populate run gets its symbols from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSource {
    /// Symbols given directly; trimmed and de-duplicated but not sanitized.
    Explicit(SymbolSet),
    /// Delimited file; the first field of each row is a symbol.
    File(PathBuf),
}

/// Errors raised while reading a symbol file.
#[derive(Debug, Error)]
pub enum SymbolFileError {
    /// The file could not be opened or a row could not be read.
    #[error("failed to read symbol file {}", path.display())]
    Read {
        /// The symbol file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

impl SymbolSource {
    /// Builds an explicit source from any list of symbols.
    pub fn explicit<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(symbols.into_iter().map(Into::into).collect())
    }

    /// Resolves the source into the set of symbols to load.
    pub fn resolve(&self) -> Result<SymbolSet, SymbolFileError> {
        match self {
            Self::Explicit(symbols) => Ok(symbols
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect()),
            Self::File(path) => load_symbol_file(path),
        }
    }
}

/// Replaces every character in [`DISALLOWED_SYMBOL_CHARS`] with `-`.
///
/// All other characters, whitespace included, are kept as they are.
pub fn sanitize_symbol(raw: &str) -> String {
    raw.chars()
        .map(|c| if DISALLOWED_SYMBOL_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Reads the first field of every row of a header-less delimited file.
///
/// Rows may have any number of fields. Symbols are sanitized and trimmed; rows
/// whose symbol ends up empty are dropped.
pub fn load_symbol_file(path: &Path) -> Result<SymbolSet, SymbolFileError> {
    let read_err = |source| SymbolFileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let mut symbols = SymbolSet::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(read_err)?;
        let Some(first) = record.get(0) else {
            continue;
        };

        let symbol = sanitize_symbol(first).trim().to_string();
        if symbol.is_empty() {
            warn!(row = row + 1, path = %path.display(), "skipping row without a symbol");
            continue;
        }
        symbols.insert(symbol);
    }

    Ok(symbols)
}
