mod cli;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use jyutdict_db::{Converters, Languages, LexiconImport, SentenceImport};
use jyutdict_hanzi::{FrequencyTable, HanziTables, Romanizer};
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{CedictArgs, Cli, Command, TatoebaArgs};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();
    match &cli.command {
        Command::Cedict(args) => {
            let scorer = load_frequencies(data_dir, &args.locale)?;
            import_cedict(args, &scorer)
        }
        Command::Tatoeba(args) => {
            let tables = load_tables(data_dir)?;
            import_tatoeba(args, &tables)
        }
    }
}

fn load_frequencies(data_dir: Option<&Path>, locale: &str) -> Result<FrequencyTable> {
    match data_dir {
        Some(dir) => {
            info!("using {locale} frequencies from {}", dir.display());
            FrequencyTable::load(dir, locale)
        }
        None => {
            warn!("no --data-dir given; every frequency is 0");
            Ok(FrequencyTable::empty(locale))
        }
    }
}

fn load_tables(data_dir: Option<&Path>) -> Result<HanziTables> {
    match data_dir {
        Some(dir) => {
            info!("using linguistic tables from {}", dir.display());
            HanziTables::load(dir)
        }
        None => {
            warn!("no --data-dir given; script conversion and romanization are disabled");
            Ok(HanziTables::empty())
        }
    }
}

fn import_cedict(args: &CedictArgs, scorer: &FrequencyTable) -> Result<()> {
    let start = Instant::now();
    let mut import = LexiconImport::new(&args.cedict_file, &args.readings_file, &args.source_name);
    import.locale = args.locale.as_str();
    import.duplicates = args.duplicate_definitions.into();

    let stats = import.run(&args.db, scorer).with_context(|| {
        format!(
            "importing {} into {}",
            args.cedict_file.display(),
            args.db.display()
        )
    })?;
    info!(
        "{} entries ({} duplicates) and {} definitions written in {} ms",
        stats.entries,
        stats.duplicates,
        stats.definitions,
        start.elapsed().as_millis()
    );
    Ok(())
}

fn import_tatoeba(args: &TatoebaArgs, tables: &HanziTables) -> Result<()> {
    let start = Instant::now();
    let source = args.source();
    let jyutping: Option<&dyn Romanizer> = if tables.jyutping.is_empty() {
        None
    } else {
        Some(&tables.jyutping)
    };
    let converters = Converters {
        script: &tables.script,
        pinyin: &tables.pinyin,
        jyutping,
    };
    let import = SentenceImport {
        sentences: &args.sentences_file,
        links: &args.links_file,
        languages: Languages {
            source: &args.source_lang,
            target: &args.target_lang,
        },
        source: &source,
    };

    let stats = import.run(&args.db, converters).with_context(|| {
        format!(
            "importing {} into {}",
            args.sentences_file.display(),
            args.db.display()
        )
    })?;
    info!(
        "{} chinese sentences, {} translations and {} links written in {} ms",
        stats.chinese,
        stats.nonchinese,
        stats.links,
        start.elapsed().as_millis()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
