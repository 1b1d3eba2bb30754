//! Build jyutdict SQLite stores from raw dictionary and sentence corpora.
//!
//! Two independent batch pipelines share the same shape (parse, then merge and
//! filter, then write) and the same store conventions: each run drops and
//! recreates every table it owns inside one transaction on one connection,
//! and the first error aborts the run with nothing committed.
//!
//! - [`lexicon`]: CEDICT-format entries, Cantonese readings, frequency scores,
//!   normalized `entries`/`definitions`/`sources` tables plus FTS5 mirrors.
//! - [`sentences`]: a tab-separated multilingual corpus and its link file,
//!   normalized into `chinese_sentences`/`nonchinese_sentences`/`sentence_links`.
//!
//! Linguistic work (script conversion, romanization, frequency) is injected
//! through the traits in [`jyutdict_types`].
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! use jyutdict_db::lexicon::LexiconImport;
//! use jyutdict_types::EnrichmentError;
//!
//! # fn main() -> Result<(), jyutdict_db::ImportError> {
//! let scorer = |_: &str, _: &str| -> Result<f64, EnrichmentError> { Ok(0.0) };
//! let stats = LexiconImport::new(
//!     Path::new("cedict_ts.u8"),
//!     Path::new("cccanto-readings.txt"),
//!     "CC-CEDICT",
//! )
//! .run(Path::new("dict.db"), &scorer)?;
//! println!("{} entries", stats.entries);
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p jyutdict-db --example stats -- <cedict-file>`.

pub mod error;
pub mod input;
pub mod lexicon;
pub mod sentences;
mod store;

pub use error::{ImportError, Result};
pub use lexicon::{DuplicatePolicy, LexiconImport, LexiconStats};
pub use sentences::{Converters, Languages, SentenceImport, SentenceStats};
