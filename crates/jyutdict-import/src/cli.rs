use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jyutdict_db::DuplicatePolicy;
use jyutdict_types::Source;

pub const DEFAULT_LOCALE: &str = "zh";

#[derive(Debug, Parser)]
#[command(name = "jyutdict-import")]
#[command(about = "Build jyutdict SQLite stores from dictionary and sentence corpora")]
pub struct Cli {
    /// Directory holding the linguistic tables; it must exist, its files are optional.
    ///
    /// `cedict` reads only frequency_<locale>.txt; `tatoeba` reads ts_characters.txt,
    /// pinyin.txt and jyutping.txt.
    #[arg(long, global = true, env = "JYUTDICT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import a CEDICT-format dictionary with Cantonese readings.
    Cedict(CedictArgs),
    /// Import a Tatoeba sentence export and its links.
    Tatoeba(TatoebaArgs),
}

#[derive(Debug, Args)]
pub struct CedictArgs {
    pub db: PathBuf,
    pub cedict_file: PathBuf,
    pub readings_file: PathBuf,
    pub source_name: String,

    /// Locale passed to the frequency scorer.
    #[arg(long, env = "JYUTDICT_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// What to do with the definitions of an entry that duplicates an earlier row.
    #[arg(long, value_enum, default_value_t = DuplicateDefinitions::Merge)]
    pub duplicate_definitions: DuplicateDefinitions,
}

#[derive(Debug, Args)]
pub struct TatoebaArgs {
    pub db: PathBuf,
    pub sentences_file: PathBuf,
    pub links_file: PathBuf,
    /// Language tag of the Chinese sentences, e.g. yue or cmn.
    pub source_lang: String,
    /// Language tag of the translations, e.g. eng.
    pub target_lang: String,
    pub name: String,
    pub short_name: String,
    #[arg(value_name = "VERSION")]
    pub source_version: String,
    pub description: String,
    pub legal: String,
    pub link: String,
    pub update_url: String,
    pub other: String,
}

impl TatoebaArgs {
    pub fn source(&self) -> Source {
        Source {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            version: self.source_version.clone(),
            description: self.description.clone(),
            legal: self.legal.clone(),
            link: self.link.clone(),
            update_url: self.update_url.clone(),
            other: self.other.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DuplicateDefinitions {
    Merge,
    Drop,
}

impl From<DuplicateDefinitions> for DuplicatePolicy {
    fn from(value: DuplicateDefinitions) -> Self {
        match value {
            DuplicateDefinitions::Merge => DuplicatePolicy::Merge,
            DuplicateDefinitions::Drop => DuplicatePolicy::Drop,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn parses_cedict_positionals_and_defaults() {
        let cli = Cli::try_parse_from([
            "jyutdict-import",
            "cedict",
            "dict.db",
            "cedict_ts.u8",
            "readings.txt",
            "CC-CEDICT",
        ])
        .unwrap();
        let Command::Cedict(args) = cli.command else {
            panic!("expected cedict");
        };
        assert_eq!(args.db, PathBuf::from("dict.db"));
        assert_eq!(args.readings_file, PathBuf::from("readings.txt"));
        assert_eq!(args.source_name, "CC-CEDICT");
        assert_eq!(args.duplicate_definitions, DuplicateDefinitions::Merge);
    }

    #[test]
    fn parses_cedict_options() {
        let cli = Cli::try_parse_from([
            "jyutdict-import",
            "cedict",
            "--duplicate-definitions",
            "drop",
            "--locale",
            "zh",
            "--data-dir",
            "/data",
            "dict.db",
            "cedict_ts.u8",
            "readings.txt",
            "CC-CEDICT",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/data")));
        let Command::Cedict(args) = cli.command else {
            panic!("expected cedict");
        };
        assert_eq!(args.locale, "zh");
        assert_eq!(
            DuplicatePolicy::from(args.duplicate_definitions),
            DuplicatePolicy::Drop
        );
    }

    #[test]
    fn parses_tatoeba_metadata() {
        let cli = Cli::try_parse_from([
            "jyutdict-import",
            "tatoeba",
            "sentences.db",
            "sentences.csv",
            "links.csv",
            "yue",
            "eng",
            "Tatoeba",
            "TTB",
            "2018-07-09",
            "Tatoeba is a collection of sentences.",
            "CC BY 2.0 FR",
            "https://tatoeba.org/eng/downloads",
            "",
            "",
        ])
        .unwrap();
        let Command::Tatoeba(args) = cli.command else {
            panic!("expected tatoeba");
        };
        assert_eq!(args.source_lang, "yue");
        assert_eq!(args.target_lang, "eng");
        let source = args.source();
        assert_eq!(source.name, "Tatoeba");
        assert_eq!(source.short_name, "TTB");
        assert_eq!(source.link, "https://tatoeba.org/eng/downloads");
        assert!(source.update_url.is_empty());
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        let err = Cli::try_parse_from(["jyutdict-import", "cedict", "dict.db", "cedict_ts.u8"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from([
            "jyutdict-import",
            "cedict",
            "a",
            "b",
            "c",
            "d",
            "e",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        assert!(Cli::try_parse_from(["jyutdict-import", "tatoeba", "sentences.db"]).is_err());
    }

    #[test]
    fn rejects_unknown_duplicate_policy() {
        let err = Cli::try_parse_from([
            "jyutdict-import",
            "cedict",
            "--duplicate-definitions",
            "keep",
            "a",
            "b",
            "c",
            "d",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
