use std::io::BufRead;

use indexmap::IndexMap;
use jyutdict_types::{
    ChineseSentence, EnrichmentError, NonChineseSentence, Romanizer, Script, ScriptConverter,
    SentenceId,
};
use tracing::info;

use crate::error::{ImportError, Result};
use crate::input::InputLines;

/// Language tags selecting which corpus lines are kept.
#[derive(Clone, Copy, Debug)]
pub struct Languages<'a> {
    /// Tag of the Chinese variant, e.g. `yue` or `cmn`.
    pub source: &'a str,
    /// Tag of the translation language, e.g. `eng`.
    pub target: &'a str,
}

/// Linguistic functions applied to Chinese sentences.
#[derive(Clone, Copy)]
pub struct Converters<'a> {
    pub script: &'a dyn ScriptConverter,
    pub pinyin: &'a dyn Romanizer,
    /// Cantonese romanization; `jyutping` stays empty when absent.
    pub jyutping: Option<&'a dyn Romanizer>,
}

/// Every sentence of interest in a corpus, before link filtering.
#[derive(Clone, Debug, Default)]
pub struct ParsedSentences {
    pub chinese: IndexMap<SentenceId, ChineseSentence>,
    pub nonchinese: IndexMap<SentenceId, NonChineseSentence>,
}

/// Parse `ID<TAB>LANG<TAB>TEXT` lines.
///
/// Lines tagged with the source language become [`ChineseSentence`]s with both
/// script variants and romanizations derived; lines tagged with the target
/// language become [`NonChineseSentence`]s; all others are skipped. A repeated
/// id replaces the earlier record.
pub fn parse_sentences<R: BufRead>(
    lines: InputLines<R>,
    languages: Languages<'_>,
    converters: Converters<'_>,
) -> Result<ParsedSentences> {
    let origin = lines.origin().to_path_buf();
    let mut parsed = ParsedSentences::default();
    let mut skipped = 0usize;
    for line in lines {
        let line = line?;
        let (id, language, text) = split_sentence_line(&line.text)
            .map_err(|reason| ImportError::parse(&origin, line.number, reason))?;

        let mut matched = false;
        if language == languages.source {
            let sentence = chinese_sentence(id, language, text.trim(), converters)?;
            parsed.chinese.insert(id, sentence);
            matched = true;
        }
        if language == languages.target {
            parsed.nonchinese.insert(
                id,
                NonChineseSentence {
                    id,
                    sentence: text.trim().to_string(),
                    language: language.to_string(),
                },
            );
            matched = true;
        }
        if !matched {
            skipped += 1;
        }
    }
    info!(
        "parsed {} {} and {} {} sentences from {} ({skipped} other lines)",
        parsed.chinese.len(),
        languages.source,
        parsed.nonchinese.len(),
        languages.target,
        origin.display()
    );
    Ok(parsed)
}

/// Split a corpus line into id, language tag and raw text.
pub fn split_sentence_line(line: &str) -> Result<(SentenceId, &str, &str), &'static str> {
    let mut fields = line.splitn(3, '\t');
    let (Some(id), Some(language), Some(text)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err("expected ID<TAB>LANG<TAB>TEXT");
    };
    let id = id
        .trim()
        .parse::<SentenceId>()
        .map_err(|_| "sentence id is not an integer")?;
    Ok((id, language.trim(), text))
}

fn chinese_sentence(
    id: SentenceId,
    language: &str,
    text: &str,
    converters: Converters<'_>,
) -> Result<ChineseSentence, EnrichmentError> {
    let (traditional, simplified) = match converters.script.classify(text) {
        Script::Simplified => (converters.script.to_traditional(text)?, text.to_string()),
        Script::Traditional => (text.to_string(), converters.script.to_simplified(text)?),
    };
    let pinyin = converters.pinyin.romanize(text)?;
    let jyutping = match converters.jyutping {
        Some(romanizer) => romanizer.romanize(text)?,
        None => String::new(),
    };
    Ok(ChineseSentence {
        id,
        traditional,
        simplified,
        pinyin,
        jyutping,
        language: language.to_string(),
    })
}
