use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Result, bail};
use jyutdict_types::{EnrichmentError, Script, ScriptConverter};

use crate::table::{open_optional, read_records, single_char};

/// Character-level traditional/simplified mapping.
///
/// Built from `TRAD SIMP...` lines; when a line lists several simplified
/// candidates the first wins, and when several traditional characters share a
/// simplified form the first line wins for the reverse direction.
#[derive(Clone, Debug, Default)]
pub struct ScriptTable {
    to_simplified: HashMap<char, char>,
    to_traditional: HashMap<char, char>,
}

impl ScriptTable {
    /// Load `path`; a missing file gives an empty table that converts nothing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match open_optional(path)? {
            Some(reader) => Self::from_reader(reader, &path.display().to_string()),
            None => Ok(Self::default()),
        }
    }

    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut table = Self::default();
        read_records(reader, origin, |_, fields| {
            let [trad, simp, ..] = fields[..] else {
                bail!("expected a traditional and a simplified character");
            };
            let (Some(trad), Some(simp)) = (single_char(trad), single_char(simp)) else {
                bail!("mapping fields must be single characters");
            };
            table.to_simplified.entry(trad).or_insert(simp);
            if trad != simp {
                table.to_traditional.entry(simp).or_insert(trad);
            }
            Ok(())
        })?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.to_simplified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_simplified.is_empty()
    }

    fn is_traditional_only(&self, c: char) -> bool {
        self.to_simplified.get(&c).is_some_and(|s| *s != c) && !self.to_traditional.contains_key(&c)
    }

    fn is_simplified_only(&self, c: char) -> bool {
        self.to_traditional.contains_key(&c) && !self.to_simplified.contains_key(&c)
    }
}

impl ScriptConverter for ScriptTable {
    fn classify(&self, text: &str) -> Script {
        let mut simplified = false;
        for c in text.chars() {
            if self.is_traditional_only(c) {
                return Script::Traditional;
            }
            simplified |= self.is_simplified_only(c);
        }
        if simplified {
            Script::Simplified
        } else {
            Script::Traditional
        }
    }

    fn to_traditional(&self, text: &str) -> Result<String, EnrichmentError> {
        Ok(text
            .chars()
            .map(|c| self.to_traditional.get(&c).copied().unwrap_or(c))
            .collect())
    }

    fn to_simplified(&self, text: &str) -> Result<String, EnrichmentError> {
        Ok(text
            .chars()
            .map(|c| self.to_simplified.get(&c).copied().unwrap_or(c))
            .collect())
    }
}
