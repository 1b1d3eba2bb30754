//! Sentence corpus import: Chinese sentences, translations, and the links
//! between them.
//!
//! [`parse_sentences`] reads the whole corpus, [`read_links`] streams the
//! candidate links, [`resolve_links`] keeps the links whose endpoints exist and
//! the translations they reach, and [`write_sentences`] rebuilds the store.

mod corpus;
mod links;
mod writer;

use std::path::Path;

use jyutdict_types::Source;
use tracing::info;

pub use corpus::{Converters, Languages, ParsedSentences, parse_sentences, split_sentence_line};
pub use links::{LinkedCorpus, parse_link_line, read_links, resolve_links};
pub use writer::{SCHEMA_VERSION, SentenceStats, write_sentences};

use crate::error::Result;
use crate::{input, store};

/// Files and settings for one sentence run.
#[derive(Clone, Debug)]
pub struct SentenceImport<'a> {
    pub sentences: &'a Path,
    pub links: &'a Path,
    pub languages: Languages<'a>,
    pub source: &'a Source,
}

impl SentenceImport<'_> {
    /// Run the whole pipeline and rebuild the sentence tables in the store at `db_path`.
    pub fn run(&self, db_path: &Path, converters: Converters<'_>) -> Result<SentenceStats> {
        let parsed = parse_sentences(input::open(self.sentences)?, self.languages, converters)?;
        let corpus = resolve_links(parsed, read_links(input::open(self.links)?))?;

        let mut conn = store::open(db_path)?;
        let stats = write_sentences(&mut conn, self.source, &corpus)?;
        store::close(conn)?;
        info!("sentence import into {} complete", db_path.display());
        Ok(stats)
    }
}
