use std::path::{Path, PathBuf};

use jyutdict_db::sentences::SCHEMA_VERSION;
use jyutdict_db::{Converters, ImportError, Languages, SentenceImport, SentenceStats};
use jyutdict_types::{EnrichmentError, Romanizer, Script, ScriptConverter, Source};
use rusqlite::Connection;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Maps 們/们 and 飯/饭; everything else is shared by both scripts.
struct TwoCharScript;

const PAIRS: [(char, char); 2] = [('們', '们'), ('飯', '饭')];

impl ScriptConverter for TwoCharScript {
    fn classify(&self, text: &str) -> Script {
        if text.chars().any(|c| PAIRS.iter().any(|(_, s)| *s == c)) {
            Script::Simplified
        } else {
            Script::Traditional
        }
    }

    fn to_traditional(&self, text: &str) -> Result<String, EnrichmentError> {
        Ok(text
            .chars()
            .map(|c| PAIRS.iter().find(|(_, s)| *s == c).map_or(c, |(t, _)| *t))
            .collect())
    }

    fn to_simplified(&self, text: &str) -> Result<String, EnrichmentError> {
        Ok(text
            .chars()
            .map(|c| PAIRS.iter().find(|(t, _)| *t == c).map_or(c, |(_, s)| *s))
            .collect())
    }
}

/// Spells each character as its code point.
struct CodePoints;

impl Romanizer for CodePoints {
    fn romanize(&self, text: &str) -> Result<String, EnrichmentError> {
        Ok(text
            .chars()
            .map(|c| format!("u{:x}", c as u32))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

fn converters() -> Converters<'static> {
    Converters {
        script: &TwoCharScript,
        pinyin: &CodePoints,
        jyutping: Some(&CodePoints),
    }
}

const YUE_TO_ENG: Languages<'static> = Languages {
    source: "yue",
    target: "eng",
};

fn source() -> Source {
    Source {
        short_name: "TTB".into(),
        version: "2018-07-09".into(),
        ..Source::named("Tatoeba")
    }
}

fn import(dir: &Path, sentences: &str, links: &str) -> jyutdict_db::Result<SentenceStats> {
    let sentence_path = dir.join("sentences.tsv");
    let link_path = dir.join("links.tsv");
    std::fs::write(&sentence_path, sentences).unwrap();
    std::fs::write(&link_path, links).unwrap();
    let source = source();
    SentenceImport {
        sentences: &sentence_path,
        links: &link_path,
        languages: YUE_TO_ENG,
        source: &source,
    }
    .run(&dir.join("sentences.db"), converters())
}

fn ids(conn: &Connection, sql: &str) -> Vec<i64> {
    conn.prepare(sql)
        .unwrap()
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap()
}

fn links(conn: &Connection) -> Vec<(i64, i64)> {
    conn.prepare(
        "SELECT fk_chinese_sentence_id, fk_non_chinese_sentence_id FROM sentence_links
         ORDER BY 1, 2",
    )
    .unwrap()
    .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
    .unwrap()
    .collect::<rusqlite::Result<_>>()
    .unwrap()
}

#[test]
fn linked_pair_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let stats = import(dir.path(), "1\tyue\t你好\n2\teng\thello", "1 2").unwrap();
    assert_eq!(
        stats,
        SentenceStats {
            chinese: 1,
            nonchinese: 1,
            links: 1
        }
    );

    let conn = Connection::open(dir.path().join("sentences.db")).unwrap();
    let (traditional, simplified, pinyin, jyutping): (String, String, String, String) = conn
        .query_row(
            "SELECT traditional, simplified, pinyin, jyutping FROM chinese_sentences
             WHERE chinese_sentence_id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .unwrap();
    assert_eq!(traditional, "你好");
    assert_eq!(simplified, "你好");
    assert_eq!(pinyin, "u4f60 u597d");
    assert_eq!(jyutping, pinyin);

    assert_eq!(ids(&conn, "SELECT non_chinese_sentence_id FROM nonchinese_sentences"), vec![2]);
    assert_eq!(links(&conn), vec![(1, 2)]);
}

#[test]
fn link_to_unknown_sentence_orphans_translation() {
    let dir = tempfile::tempdir().unwrap();
    let stats = import(dir.path(), "1\tyue\t你好\n2\teng\thello", "1 3").unwrap();
    assert_eq!(stats.links, 0);
    assert_eq!(stats.nonchinese, 0);

    let conn = Connection::open(dir.path().join("sentences.db")).unwrap();
    assert!(links(&conn).is_empty());
    assert!(ids(&conn, "SELECT non_chinese_sentence_id FROM nonchinese_sentences").is_empty());
    assert_eq!(ids(&conn, "SELECT chinese_sentence_id FROM chinese_sentences"), vec![1]);
}

#[test]
fn imports_fixture_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("sentences.db");
    let sentences = fixture("sentences.tsv");
    let link_file = fixture("links.tsv");
    let source = source();

    let stats = SentenceImport {
        sentences: &sentences,
        links: &link_file,
        languages: YUE_TO_ENG,
        source: &source,
    }
    .run(&db, converters())
    .unwrap();
    assert_eq!(
        stats,
        SentenceStats {
            chinese: 2,
            nonchinese: 2,
            links: 2
        }
    );

    let conn = Connection::open(&db).unwrap();
    assert_eq!(links(&conn), vec![(1, 2), (3, 4)]);
    assert_eq!(
        ids(&conn, "SELECT non_chinese_sentence_id FROM nonchinese_sentences ORDER BY 1"),
        vec![2, 4]
    );

    let simplified: String = conn
        .query_row(
            "SELECT simplified FROM chinese_sentences WHERE chinese_sentence_id = 3",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(simplified, "我哋食饭啦");

    let version: i64 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);

    let name: String = conn
        .query_row("SELECT sourcename FROM sources", [], |r| r.get(0))
        .unwrap();
    assert_eq!(name, "Tatoeba");
}

#[test]
fn non_integer_link_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = import(dir.path(), "1\tyue\t你好\n2\teng\thello\n", "1 2\n1 two\n").unwrap_err();
    match err {
        ImportError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = source();
    let missing = dir.path().join("missing.tsv");
    let err = SentenceImport {
        sentences: &missing,
        links: &missing,
        languages: YUE_TO_ENG,
        source: &source,
    }
    .run(&dir.path().join("sentences.db"), converters())
    .unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}
