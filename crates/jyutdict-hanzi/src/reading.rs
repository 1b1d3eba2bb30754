use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Result, bail};
use jyutdict_types::{EnrichmentError, Romanizer};

use crate::table::{open_optional, read_records, single_char};

/// Per-character reading table (`CHAR READING...`, first reading wins).
///
/// Used for both pinyin and jyutping; which one depends only on the file.
#[derive(Clone, Debug, Default)]
pub struct ReadingTable {
    readings: HashMap<char, String>,
}

impl ReadingTable {
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
            let [key, reading, ..] = fields[..] else {
                bail!("expected a character and a reading");
            };
            let Some(key) = single_char(key) else {
                bail!("reading key {key:?} is not a single character");
            };
            table
                .readings
                .entry(key)
                .or_insert_with(|| reading.to_lowercase());
            Ok(())
        })?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn reading(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }
}

impl Romanizer for ReadingTable {
    /// One syllable per known character; unknown runs are kept verbatim as a
    /// single token and whitespace only separates tokens.
    fn romanize(&self, text: &str) -> Result<String, EnrichmentError> {
        let mut tokens: Vec<String> = Vec::new();
        let mut run = String::new();
        for c in text.chars() {
            if let Some(reading) = self.reading(c) {
                flush(&mut run, &mut tokens);
                tokens.push(reading.to_string());
            } else if c.is_whitespace() {
                flush(&mut run, &mut tokens);
            } else {
                run.push(c);
            }
        }
        flush(&mut run, &mut tokens);
        Ok(tokens.join(" "))
    }
}

fn flush(run: &mut String, tokens: &mut Vec<String>) {
    if !run.is_empty() {
        tokens.push(std::mem::take(run));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jyutping() -> ReadingTable {
        ReadingTable::from_reader(
            "我 ngo5\n哋 dei6 dei2\n食 SIK6\n飯 faan6\n啦 laa1\n".as_bytes(),
            "jyutping",
        )
        .unwrap()
    }

    #[test]
    fn romanizes_known_characters() {
        let table = jyutping();
        assert_eq!(table.romanize("我哋食飯啦").unwrap(), "ngo5 dei6 sik6 faan6 laa1");
        assert_eq!(table.reading('哋'), Some("dei6"));
    }

    #[test]
    fn keeps_unknown_runs_as_tokens() {
        let table = jyutping();
        assert_eq!(table.romanize("我 iPhone 飯!").unwrap(), "ngo5 iPhone faan6 !");
        assert_eq!(table.romanize("  ").unwrap(), "");
        assert_eq!(table.romanize("").unwrap(), "");
    }

    #[test]
    fn first_reading_wins() {
        let table = ReadingTable::from_reader("長 cheung4\n長 zoeng2\n".as_bytes(), "j").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.reading('長'), Some("cheung4"));
    }

    #[test]
    fn missing_reading_is_a_load_error() {
        assert!(ReadingTable::from_reader("我\n".as_bytes(), "j").is_err());
    }
}
