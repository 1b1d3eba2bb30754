use jyutdict_types::Source;
use rusqlite::{Connection, params};
use tracing::info;

use super::links::LinkedCorpus;
use crate::error::{ImportError, Result};

/// Value of `PRAGMA user_version` in a sentence store.
pub const SCHEMA_VERSION: i64 = 2;

const SENTENCE_SCHEMA: &str = "
    DROP TABLE IF EXISTS chinese_sentences;
    DROP TABLE IF EXISTS sources;
    DROP TABLE IF EXISTS nonchinese_sentences;
    DROP TABLE IF EXISTS sentence_links;
    DROP INDEX IF EXISTS fk_chinese_sentence_id_index;
    DROP INDEX IF EXISTS fk_non_chinese_sentence_id_index;

    CREATE TABLE chinese_sentences(
        chinese_sentence_id INTEGER PRIMARY KEY,
        traditional TEXT,
        simplified TEXT,
        pinyin TEXT,
        jyutping TEXT,
        language TEXT,
        fk_source_id INTEGER,
        FOREIGN KEY(fk_source_id) REFERENCES sources(source_id)
    );

    CREATE TABLE sources(
        source_id INTEGER PRIMARY KEY,
        sourcename TEXT UNIQUE ON CONFLICT ABORT,
        sourceshortname TEXT,
        version TEXT,
        description TEXT,
        legal TEXT,
        link TEXT,
        update_url TEXT,
        other TEXT
    );

    CREATE TABLE nonchinese_sentences(
        non_chinese_sentence_id INTEGER PRIMARY KEY,
        sentence TEXT,
        language TEXT,
        fk_source_id INTEGER,
        FOREIGN KEY(fk_source_id) REFERENCES sources(source_id)
    );

    CREATE TABLE sentence_links(
        fk_chinese_sentence_id INTEGER,
        fk_non_chinese_sentence_id INTEGER,
        FOREIGN KEY(fk_chinese_sentence_id) REFERENCES chinese_sentences(chinese_sentence_id),
        FOREIGN KEY(fk_non_chinese_sentence_id) REFERENCES nonchinese_sentences(non_chinese_sentence_id)
    );
";

/// Row counts written by [`write_sentences`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SentenceStats {
    pub chinese: usize,
    pub nonchinese: usize,
    pub links: usize,
}

/// Replace the sentence tables in `conn` with `corpus`, attributed to `source`.
///
/// Runs in a single transaction. A source name that already exists in the
/// fresh `sources` table is a [`ImportError::Constraint`] and nothing is kept.
pub fn write_sentences(
    conn: &mut Connection,
    source: &Source,
    corpus: &LinkedCorpus,
) -> Result<SentenceStats> {
    let tx = conn.transaction()?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.execute_batch(SENTENCE_SCHEMA)?;

    let source_id = insert_source(&tx, source)?;
    let stats = insert_rows(&tx, source_id, corpus)?;
    tx.commit()?;

    info!(
        "wrote {} chinese sentences, {} translations and {} links for source {}",
        stats.chinese, stats.nonchinese, stats.links, source.name
    );
    Ok(stats)
}

pub(crate) fn insert_source(conn: &Connection, source: &Source) -> Result<i64> {
    conn.execute(
        "INSERT INTO sources(sourcename, sourceshortname, version, description, legal, link, update_url, other)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            source.name,
            source.short_name,
            source.version,
            source.description,
            source.legal,
            source.link,
            source.update_url,
            source.other,
        ],
    )
    .map_err(|err| ImportError::from_insert("sources", err))?;
    Ok(conn.last_insert_rowid())
}

fn insert_rows(conn: &Connection, source_id: i64, corpus: &LinkedCorpus) -> Result<SentenceStats> {
    let mut stats = SentenceStats::default();

    let mut insert_chinese = conn.prepare(
        "INSERT INTO chinese_sentences(chinese_sentence_id, traditional, simplified, pinyin, jyutping, language, fk_source_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for sentence in corpus.chinese.values() {
        insert_chinese.execute(params![
            sentence.id,
            sentence.traditional,
            sentence.simplified,
            sentence.pinyin,
            sentence.jyutping,
            sentence.language,
            source_id,
        ])?;
        stats.chinese += 1;
    }

    let mut insert_nonchinese = conn.prepare(
        "INSERT INTO nonchinese_sentences(non_chinese_sentence_id, sentence, language, fk_source_id)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for sentence in corpus.nonchinese.values() {
        insert_nonchinese.execute(params![
            sentence.id,
            sentence.sentence,
            sentence.language,
            source_id
        ])?;
        stats.nonchinese += 1;
    }

    let mut insert_link = conn.prepare(
        "INSERT INTO sentence_links(fk_chinese_sentence_id, fk_non_chinese_sentence_id) VALUES (?1, ?2)",
    )?;
    for link in &corpus.links {
        insert_link.execute(params![link.chinese, link.nonchinese])?;
        stats.links += 1;
    }

    Ok(stats)
}
