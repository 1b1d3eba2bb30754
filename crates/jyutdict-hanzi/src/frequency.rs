use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jyutdict_types::{EnrichmentError, FrequencyScorer};
use tracing::info;

use crate::table::{ensure_dir, open_optional, read_records};

/// Word frequency scores for a single locale (`WORD SCORE` lines).
///
/// Unknown words score `0.0`. Scoring for any other locale fails with
/// [`EnrichmentError::UnsupportedLocale`].
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    locale: String,
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    /// File name holding the list for `locale` inside a data directory.
    pub fn file_name(locale: &str) -> String {
        format!("frequency_{locale}.txt")
    }

    /// Load `frequency_<locale>.txt` from `data_dir`; a missing file gives an
    /// empty list for that locale, a missing directory is an error.
    pub fn load(data_dir: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let dir = data_dir.as_ref();
        ensure_dir(dir)?;
        let path = dir.join(Self::file_name(locale));
        let table = match open_optional(&path)? {
            Some(reader) => Self::from_reader(reader, &path.display().to_string(), locale)?,
            None => Self::empty(locale),
        };
        info!("loaded {} {locale} frequencies", table.len());
        Ok(table)
    }

    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            scores: HashMap::new(),
        }
    }

    pub fn from_reader<R: BufRead>(reader: R, origin: &str, locale: &str) -> Result<Self> {
        let mut table = Self::empty(locale);
        read_records(reader, origin, |_, fields| {
            let [word, score, ..] = fields[..] else {
                bail!("expected a word and a score");
            };
            let score: f64 = score
                .parse()
                .with_context(|| format!("score {score:?} is not a number"))?;
            table.scores.insert(word.to_string(), score);
            Ok(())
        })?;
        Ok(table)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FrequencyScorer for FrequencyTable {
    fn score(&self, word: &str, locale: &str) -> Result<f64, EnrichmentError> {
        if locale != self.locale {
            return Err(EnrichmentError::UnsupportedLocale(locale.to_string()));
        }
        Ok(self.scores.get(word).copied().unwrap_or(0.0))
    }
}
