//! Table-driven linguistic backends for the jyutdict importers.
//!
//! Implements the [`ScriptConverter`], [`Romanizer`] and [`FrequencyScorer`]
//! interfaces from `jyutdict-types` with plain lookup tables read from a data
//! directory:
//!
//! | file | table |
//! |---|---|
//! | `ts_characters.txt` | [`ScriptTable`] (`TRAD SIMP...`) |
//! | `pinyin.txt` | [`ReadingTable`] (`CHAR READING...`) |
//! | `jyutping.txt` | [`ReadingTable`] (`CHAR READING...`) |
//! | `frequency_<locale>.txt` | [`FrequencyTable`] (`WORD SCORE`) |
//!
//! The data directory must exist. Files inside it are optional; missing ones
//! are treated as empty. Malformed lines are load errors.
//!
//! # Example
//! ```no_run
//! use jyutdict_hanzi::HanziTables;
//! use jyutdict_types::{Romanizer, ScriptConverter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let tables = HanziTables::load("/path/to/data")?;
//! println!("{}", tables.script.to_simplified("我們")?);
//! println!("{}", tables.jyutping.romanize("我哋")?);
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p jyutdict-hanzi --example convert -- <data-dir> <text>`.

mod frequency;
mod reading;
mod script;
mod table;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::table::ensure_dir;

pub use frequency::FrequencyTable;
pub use reading::ReadingTable;
pub use script::ScriptTable;

pub use jyutdict_types::{FrequencyScorer, Romanizer, ScriptConverter};

pub const SCRIPT_FILE: &str = "ts_characters.txt";
pub const PINYIN_FILE: &str = "pinyin.txt";
pub const JYUTPING_FILE: &str = "jyutping.txt";

/// Script and romanization tables loaded from one data directory.
///
/// The frequency list is loaded on its own with [`FrequencyTable::load`],
/// since only the lexicon pipeline scores words.
#[derive(Clone, Debug, Default)]
pub struct HanziTables {
    pub script: ScriptTable,
    pub pinyin: ReadingTable,
    pub jyutping: ReadingTable,
}

impl HanziTables {
    /// Load the conversion and reading tables from `data_dir`.
    ///
    /// The directory itself must exist; any of its files may be missing.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        ensure_dir(dir)?;
        let tables = Self {
            script: ScriptTable::load(dir.join(SCRIPT_FILE))
                .with_context(|| format!("load script table from {}", dir.display()))?,
            pinyin: ReadingTable::load(dir.join(PINYIN_FILE))
                .with_context(|| format!("load pinyin table from {}", dir.display()))?,
            jyutping: ReadingTable::load(dir.join(JYUTPING_FILE))
                .with_context(|| format!("load jyutping table from {}", dir.display()))?,
        };
        info!(
            "loaded {} script mappings, {} pinyin and {} jyutping readings",
            tables.script.len(),
            tables.pinyin.len(),
            tables.jyutping.len()
        );
        Ok(tables)
    }

    /// Tables that convert and romanize nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tables_pass_text_through() {
        let tables = HanziTables::empty();
        assert_eq!(tables.script.to_traditional("们").unwrap(), "们");
        assert_eq!(tables.pinyin.romanize("你好 嗎").unwrap(), "你好 嗎");
        assert!(tables.jyutping.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = HanziTables::load("/nonexistent/jyutdict-data").unwrap_err();
        assert_eq!(
            err.to_string(),
            "data directory /nonexistent/jyutdict-data does not exist"
        );
        assert!(FrequencyTable::load("/nonexistent/jyutdict-data", "zh").is_err());
    }

    #[test]
    fn missing_files_in_existing_directory_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tables = HanziTables::load(dir.path()).unwrap();
        assert!(tables.script.is_empty());
        assert!(tables.pinyin.is_empty());
        let frequency = FrequencyTable::load(dir.path(), "yue").unwrap();
        assert!(frequency.is_empty());
        assert_eq!(frequency.locale(), "yue");
    }
}
