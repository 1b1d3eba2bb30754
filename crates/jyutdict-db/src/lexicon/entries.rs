use std::io::BufRead;

use jyutdict_types::{Entry, EntryMap};
use tracing::info;

use crate::error::{ImportError, Result};
use crate::input::InputLines;

/// Parse a CEDICT-format dictionary (`TRAD SIMP [PINYIN] /def1/def2/.../`)
/// into `entries`, appending homographs under their traditional form.
///
/// Returns the number of entries read. The first malformed line aborts.
pub fn parse_entries<R: BufRead>(lines: InputLines<R>, entries: &mut EntryMap) -> Result<usize> {
    let origin = lines.origin().to_path_buf();
    let mut count = 0usize;
    for line in lines {
        let line = line?;
        let entry = parse_entry_line(&line.text)
            .map_err(|reason| ImportError::parse(&origin, line.number, reason))?;
        entries
            .entry(entry.traditional.clone())
            .or_default()
            .push(entry);
        count += 1;
    }
    info!(
        "parsed {count} entries under {} keys from {}",
        entries.len(),
        origin.display()
    );
    Ok(count)
}

/// Parse one dictionary line into an [`Entry`] with empty jyutping and zero frequency.
pub fn parse_entry_line(line: &str) -> Result<Entry, &'static str> {
    let mut tokens = line.split_whitespace();
    let (Some(traditional), Some(simplified)) = (tokens.next(), tokens.next()) else {
        return Err("expected traditional and simplified forms");
    };

    let open = line.find('[').ok_or("missing '[' before pinyin")?;
    let close = line[open + 1..]
        .find(']')
        .map(|idx| open + 1 + idx)
        .ok_or("missing ']' after pinyin")?;
    let pinyin = &line[open + 1..close];

    let slash = line.find('/').ok_or("missing '/' before definitions")?;
    let body = line[slash + 1..]
        .trim_end()
        .strip_suffix('/')
        .ok_or("definitions must end with '/'")?;
    let definitions = body.split('/').map(str::to_string).collect();

    Ok(Entry::new(traditional, simplified, pinyin, definitions))
}
