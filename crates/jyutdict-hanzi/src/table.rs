use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use tracing::debug;

/// Feed every record line of a whitespace-separated table to `record`.
///
/// Blank lines and `#` comments are skipped, as is a byte-order mark on the
/// first line. `record` receives the 1-based line number and the fields.
pub(crate) fn read_records<R, F>(reader: R, origin: &str, mut record: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, Vec<&str>) -> Result<()>,
{
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {origin}", lineno + 1))?;
        let line = if lineno == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        record(lineno + 1, trimmed.split_whitespace().collect())
            .with_context(|| format!("{origin}:{}", lineno + 1))?;
    }
    Ok(())
}

/// Open an optional table file. A missing file yields `None`.
pub(crate) fn open_optional(path: &Path) -> Result<Option<BufReader<File>>> {
    if !path.exists() {
        debug!("table {} not found, using an empty table", path.display());
        return Ok(None);
    }
    let file = File::open(path).with_context(|| format!("open table {}", path.display()))?;
    Ok(Some(BufReader::new(file)))
}

/// A configured data directory must exist, even though its files are optional.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    ensure!(dir.is_dir(), "data directory {} does not exist", dir.display());
    Ok(())
}

/// The single character a key field must consist of.
pub(crate) fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
