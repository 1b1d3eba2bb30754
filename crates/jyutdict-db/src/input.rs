//! Line-oriented reading shared by every corpus format.
//!
//! All four input formats are UTF-8 text, one record per line. Blank lines and
//! lines starting with `#` never carry records, a byte-order mark on the first
//! line is ignored, and both `\n` and `\r\n` endings are accepted.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{ImportError, Result};

/// A record-bearing line and its 1-based position in the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

/// Iterator over the record-bearing lines of one input.
pub struct InputLines<R> {
    lines: io::Lines<R>,
    origin: PathBuf,
    number: usize,
}

/// Open `path` for buffered line-by-line reading.
pub fn open(path: impl AsRef<Path>) -> Result<InputLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ImportError::io(path, e))?;
    Ok(InputLines::new(BufReader::new(file), path))
}

impl<R: BufRead> InputLines<R> {
    /// Wrap any buffered reader; `origin` names the input in error messages.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            origin: origin.into(),
            number: 0,
        }
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = Result<InputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(ImportError::io(&self.origin, e))),
            };
            self.number += 1;

            let text = if self.number == 1 {
                match raw.strip_prefix('\u{feff}') {
                    Some(rest) => rest.to_string(),
                    None => raw,
                }
            } else {
                raw
            };

            if text.trim().is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(Ok(InputLine {
                number: self.number,
                text,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<InputLine> {
        InputLines::new(input.as_bytes(), "inline")
            .collect::<Result<Vec<_>>>()
            .expect("in-memory input")
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let lines = collect("# header\n\nfirst\n   \n#another\nsecond\n");
        assert_eq!(
            lines,
            vec![
                InputLine {
                    number: 3,
                    text: "first".into()
                },
                InputLine {
                    number: 6,
                    text: "second".into()
                },
            ]
        );
    }

    #[test]
    fn strips_bom_and_crlf() {
        let lines = collect("\u{feff}# comment\r\nrecord\r\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "record");
        assert_eq!(lines[0].number, 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = match open(dir.path().join("absent.txt")) {
            Ok(_) => panic!("opening a missing file should fail"),
            Err(err) => err,
        };
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
