//! Lexicon import: dictionary entries, Cantonese readings, frequencies.
//!
//! The pipeline is strictly parse, then merge and enrich, then write:
//! [`parse_entries`] builds the [`EntryMap`], [`merge_readings`] attaches
//! jyutping by traditional key, [`assign_frequencies`] scores every entry, and
//! [`write_lexicon`] materializes the result with its FTS mirrors.

mod entries;
mod frequency;
mod readings;
mod writer;

use std::path::Path;

use jyutdict_types::{EntryMap, FrequencyScorer};
use tracing::info;

pub use entries::{parse_entries, parse_entry_line};
pub use frequency::{DEFAULT_LOCALE, assign_frequencies};
pub use readings::{MergeStats, merge_readings, parse_reading_line};
pub use writer::{DuplicatePolicy, LexiconStats, write_lexicon};

use crate::error::Result;
use crate::{input, store};

/// Files and settings for one lexicon run.
#[derive(Clone, Debug)]
pub struct LexiconImport<'a> {
    pub dictionary: &'a Path,
    pub readings: &'a Path,
    pub source_name: &'a str,
    pub locale: &'a str,
    pub duplicates: DuplicatePolicy,
}

impl<'a> LexiconImport<'a> {
    pub fn new(dictionary: &'a Path, readings: &'a Path, source_name: &'a str) -> Self {
        Self {
            dictionary,
            readings,
            source_name,
            locale: DEFAULT_LOCALE,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Run the whole pipeline and rebuild the lexicon tables in the store at `db_path`.
    ///
    /// The store is only opened once every entry has been parsed, merged and scored.
    pub fn run<S>(&self, db_path: &Path, scorer: &S) -> Result<LexiconStats>
    where
        S: FrequencyScorer + ?Sized,
    {
        let mut entries = EntryMap::new();
        parse_entries(input::open(self.dictionary)?, &mut entries)?;
        merge_readings(input::open(self.readings)?, &mut entries)?;
        assign_frequencies(&mut entries, scorer, self.locale)?;

        let mut conn = store::open(db_path)?;
        let stats = write_lexicon(&mut conn, self.source_name, &entries, self.duplicates)?;
        store::close(conn)?;
        info!("lexicon import into {} complete", db_path.display());
        Ok(stats)
    }
}
