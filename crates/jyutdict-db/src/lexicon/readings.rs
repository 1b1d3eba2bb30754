use std::io::BufRead;

use jyutdict_types::EntryMap;
use tracing::{debug, info};

use crate::error::{ImportError, Result};
use crate::input::InputLines;

/// Outcome of a reading merge pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeStats {
    /// Lines whose key matched at least one entry.
    pub merged: usize,
    /// Lines whose key is not in the dictionary; they create nothing.
    pub missing: usize,
}

/// Attach Cantonese readings (`TRAD ... {JYUTPING}`) to parsed entries.
///
/// A reading is broadcast to every homograph under its traditional key; the
/// file carries no finer disambiguation. Keys absent from `entries` are
/// ignored, but every line must still be well formed.
pub fn merge_readings<R: BufRead>(lines: InputLines<R>, entries: &mut EntryMap) -> Result<MergeStats> {
    let origin = lines.origin().to_path_buf();
    let mut stats = MergeStats::default();
    for line in lines {
        let line = line?;
        let (traditional, jyutping) = parse_reading_line(&line.text)
            .map_err(|reason| ImportError::parse(&origin, line.number, reason))?;

        let Some(homographs) = entries.get_mut(traditional) else {
            debug!("no entry for reading key {traditional}");
            stats.missing += 1;
            continue;
        };
        for entry in homographs.iter_mut() {
            entry.jyutping = jyutping.to_string();
        }
        stats.merged += 1;
    }
    info!(
        "merged {} readings from {} ({} keys not in dictionary)",
        stats.merged,
        origin.display(),
        stats.missing
    );
    Ok(stats)
}

/// Split a reading line into its traditional key and the text inside `{...}`.
pub fn parse_reading_line(line: &str) -> Result<(&str, &str), &'static str> {
    let traditional = line
        .split_whitespace()
        .next()
        .ok_or("expected traditional form")?;
    let open = line.find('{').ok_or("missing '{' before jyutping")?;
    let close = line[open + 1..]
        .find('}')
        .map(|idx| open + 1 + idx)
        .ok_or("missing '}' after jyutping")?;
    Ok((traditional, &line[open + 1..close]))
}
