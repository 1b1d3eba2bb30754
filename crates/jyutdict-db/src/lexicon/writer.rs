use jyutdict_types::{Entry, EntryMap};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::error::Result;

const LEXICON_SCHEMA: &str = "
    DROP TABLE IF EXISTS definitions_fts;
    DROP TABLE IF EXISTS entries_fts;
    DROP TABLE IF EXISTS definitions;
    DROP TABLE IF EXISTS sources;
    DROP TABLE IF EXISTS entries;

    CREATE TABLE entries(
        entry_id INTEGER PRIMARY KEY,
        traditional TEXT,
        simplified TEXT,
        pinyin TEXT,
        jyutping TEXT,
        frequency REAL,
        UNIQUE(traditional, simplified, pinyin, jyutping) ON CONFLICT IGNORE
    );
    CREATE VIRTUAL TABLE entries_fts USING fts5(pinyin, jyutping);

    CREATE TABLE sources(
        source_id INTEGER PRIMARY KEY,
        sourcename TEXT UNIQUE ON CONFLICT IGNORE
    );

    CREATE TABLE definitions(
        definition_id INTEGER PRIMARY KEY,
        definition TEXT,
        fk_entry_id INTEGER,
        fk_source_id INTEGER,
        FOREIGN KEY(fk_entry_id) REFERENCES entries(entry_id) ON UPDATE CASCADE,
        FOREIGN KEY(fk_source_id) REFERENCES sources(source_id) ON DELETE CASCADE
    );
    CREATE VIRTUAL TABLE definitions_fts USING fts5(definition);
";

const REBUILD_MIRRORS: &str = "
    INSERT INTO entries_fts(rowid, pinyin, jyutping)
        SELECT entry_id, pinyin, jyutping FROM entries;
    INSERT INTO definitions_fts(rowid, definition)
        SELECT definition_id, definition FROM definitions;
";

/// What to do with the definitions of an entry whose row already exists.
///
/// Entries are unique on `(traditional, simplified, pinyin, jyutping)`; a
/// repeated tuple never creates a second row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Attach the duplicate's definitions to the existing row.
    #[default]
    Merge,
    /// Discard the duplicate's definitions.
    Drop,
}

/// Row counts written by [`write_lexicon`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LexiconStats {
    pub entries: usize,
    pub duplicates: usize,
    pub definitions: usize,
}

/// Replace the lexicon tables in `conn` with `entries`, attributed to `source_name`.
///
/// Everything happens in one transaction: existing tables are dropped and
/// recreated, rows are inserted, and both FTS mirrors are rebuilt from the
/// normalized tables before the single commit.
pub fn write_lexicon(
    conn: &mut Connection,
    source_name: &str,
    entries: &EntryMap,
    duplicates: DuplicatePolicy,
) -> Result<LexiconStats> {
    let tx = conn.transaction()?;
    tx.execute_batch(LEXICON_SCHEMA)?;

    tx.execute(
        "INSERT INTO sources(sourcename) VALUES (?1)",
        params![source_name],
    )?;
    let source_id = tx.last_insert_rowid();

    let stats = insert_entries(&tx, source_id, entries, duplicates)?;

    tx.execute_batch(REBUILD_MIRRORS)?;
    tx.commit()?;

    info!(
        "wrote {} entries and {} definitions for source {source_name} ({} duplicates suppressed)",
        stats.entries, stats.definitions, stats.duplicates
    );
    Ok(stats)
}

fn insert_entries(
    conn: &Connection,
    source_id: i64,
    entries: &EntryMap,
    duplicates: DuplicatePolicy,
) -> Result<LexiconStats> {
    let mut insert_entry = conn.prepare(
        "INSERT INTO entries(traditional, simplified, pinyin, jyutping, frequency)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    let mut find_entry = conn.prepare(
        "SELECT entry_id FROM entries
         WHERE traditional = ?1 AND simplified = ?2 AND pinyin = ?3 AND jyutping = ?4",
    )?;
    let mut insert_definition = conn.prepare(
        "INSERT INTO definitions(definition, fk_entry_id, fk_source_id) VALUES (?1, ?2, ?3)",
    )?;

    let mut stats = LexiconStats::default();
    for entry in entries.values().flatten() {
        let changed = insert_entry.execute(params![
            entry.traditional,
            entry.simplified,
            entry.pinyin,
            entry.jyutping,
            entry.frequency,
        ])?;

        // Only a row this statement created may be read back via last_insert_rowid.
        let entry_id = if changed == 1 {
            stats.entries += 1;
            conn.last_insert_rowid()
        } else {
            stats.duplicates += 1;
            debug!(
                "duplicate entry {} {} [{}] {{{}}}",
                entry.traditional, entry.simplified, entry.pinyin, entry.jyutping
            );
            match duplicates {
                DuplicatePolicy::Drop => continue,
                DuplicatePolicy::Merge => match existing_entry_id(&mut find_entry, entry)? {
                    Some(id) => id,
                    None => continue,
                },
            }
        };

        for definition in &entry.definitions {
            insert_definition.execute(params![definition, entry_id, source_id])?;
            stats.definitions += 1;
        }
    }
    Ok(stats)
}

fn existing_entry_id(find_entry: &mut rusqlite::Statement<'_>, entry: &Entry) -> Result<Option<i64>> {
    let id = find_entry
        .query_row(
            params![
                entry.traditional,
                entry.simplified,
                entry.pinyin,
                entry.jyutping
            ],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}
