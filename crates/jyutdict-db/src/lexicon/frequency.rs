use jyutdict_types::{EntryMap, FrequencyScorer};
use tracing::info;

use crate::error::Result;

/// Locale used when scoring dictionary headwords.
pub const DEFAULT_LOCALE: &str = "zh";

/// Score every entry's traditional form and store the result on the entry.
///
/// The first scorer failure aborts the pass.
pub fn assign_frequencies<S>(entries: &mut EntryMap, scorer: &S, locale: &str) -> Result<usize>
where
    S: FrequencyScorer + ?Sized,
{
    let mut scored = 0usize;
    for entry in entries.values_mut().flatten() {
        entry.frequency = scorer.score(&entry.traditional, locale)?;
        scored += 1;
    }
    info!("assigned {locale} frequencies to {scored} entries");
    Ok(scored)
}
