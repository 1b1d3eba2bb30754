//! Shared record types for the jyutdict corpus importers.
//!
//! The lexicon pipeline produces [`Entry`] records grouped by traditional form
//! in an [`EntryMap`]; the sentence pipeline produces [`ChineseSentence`] and
//! [`NonChineseSentence`] records joined by [`SentenceLink`]s. Every run is
//! attributed to one [`Source`].
//!
//! The linguistic functions the pipelines depend on (script classification and
//! conversion, romanization, word frequency) are expressed as traits so the
//! pipeline logic never depends on a concrete backend:
//!
//! ```rust
//! use jyutdict_types::{EnrichmentError, FrequencyScorer};
//!
//! let scorer = |word: &str, _locale: &str| -> Result<f64, EnrichmentError> {
//!     Ok(word.chars().count() as f64)
//! };
//! assert_eq!(scorer.score("你好", "zh").unwrap(), 2.0);
//! ```

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

/// Entries keyed by traditional form, preserving file order for keys and for
/// the homographs under each key.
pub type EntryMap = IndexMap<String, Vec<Entry>>;

/// Sentence identifier as used by the corpus files.
pub type SentenceId = i64;

/// One dictionary record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub jyutping: String,
    pub frequency: f64,
    pub definitions: Vec<String>,
}

impl Entry {
    pub fn new(
        traditional: impl Into<String>,
        simplified: impl Into<String>,
        pinyin: impl Into<String>,
        definitions: Vec<String>,
    ) -> Self {
        Self {
            traditional: traditional.into(),
            simplified: simplified.into(),
            pinyin: pinyin.into(),
            definitions,
            ..Self::default()
        }
    }

    /// The natural key used for deduplication in the store.
    pub fn identity(&self) -> EntryIdentity<'_> {
        EntryIdentity {
            traditional: &self.traditional,
            simplified: &self.simplified,
            pinyin: &self.pinyin,
            jyutping: &self.jyutping,
        }
    }
}

/// `(traditional, simplified, pinyin, jyutping)` tuple identifying an entry row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EntryIdentity<'a> {
    pub traditional: &'a str,
    pub simplified: &'a str,
    pub pinyin: &'a str,
    pub jyutping: &'a str,
}

/// A sentence in the configured Chinese source language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChineseSentence {
    pub id: SentenceId,
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    /// Empty unless a Cantonese romanizer was supplied.
    pub jyutping: String,
    pub language: String,
}

/// A sentence in the configured target (translation) language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NonChineseSentence {
    pub id: SentenceId,
    pub sentence: String,
    pub language: String,
}

/// Association between a Chinese sentence and one of its translations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SentenceLink {
    pub chinese: SentenceId,
    pub nonchinese: SentenceId,
}

/// Provenance metadata for one import run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub short_name: String,
    pub version: String,
    pub description: String,
    pub legal: String,
    pub link: String,
    pub update_url: String,
    pub other: String,
}

impl Source {
    /// A source carrying only a name; every other field is empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Written variant of a piece of Chinese text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Script {
    Traditional,
    Simplified,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Script::Traditional => "traditional",
            Script::Simplified => "simplified",
        })
    }
}

/// Failure of an external linguistic function. Always fatal for a run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnrichmentError {
    #[error("no frequency list loaded for locale {0:?}")]
    UnsupportedLocale(String),
    #[error("{operation} failed for {text:?}: {reason}")]
    Failed {
        operation: &'static str,
        text: String,
        reason: String,
    },
}

/// Classifies and converts between traditional and simplified script.
pub trait ScriptConverter {
    fn classify(&self, text: &str) -> Script;
    fn to_traditional(&self, text: &str) -> Result<String, EnrichmentError>;
    fn to_simplified(&self, text: &str) -> Result<String, EnrichmentError>;
}

/// Produces a space-separated romanization of Chinese text.
pub trait Romanizer {
    fn romanize(&self, text: &str) -> Result<String, EnrichmentError>;
}

/// Scores how common a word is in a given locale.
pub trait FrequencyScorer {
    fn score(&self, word: &str, locale: &str) -> Result<f64, EnrichmentError>;
}

impl<F> FrequencyScorer for F
where
    F: Fn(&str, &str) -> Result<f64, EnrichmentError>,
{
    fn score(&self, word: &str, locale: &str) -> Result<f64, EnrichmentError> {
        self(word, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_covers_both_romanizations() {
        let mut a = Entry::new("你好", "你好", "ni3 hao3", vec!["hello".into()]);
        let b = a.clone();
        assert_eq!(a.identity(), b.identity());

        a.jyutping = "nei5 hou2".into();
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn closures_act_as_scorers() {
        let scorer = |_: &str, locale: &str| {
            if locale == "zh" {
                Ok(4.5)
            } else {
                Err(EnrichmentError::UnsupportedLocale(locale.to_string()))
            }
        };
        assert_eq!(scorer.score("好", "zh"), Ok(4.5));
        assert!(matches!(
            scorer.score("好", "fr"),
            Err(EnrichmentError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn named_source_leaves_metadata_empty() {
        let source = Source::named("CC-CEDICT");
        assert_eq!(source.name, "CC-CEDICT");
        assert!(source.short_name.is_empty());
        assert!(source.update_url.is_empty());
    }
}
