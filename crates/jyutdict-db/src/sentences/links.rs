use std::collections::HashSet;
use std::io::BufRead;

use indexmap::{IndexMap, IndexSet};
use jyutdict_types::{ChineseSentence, NonChineseSentence, SentenceId, SentenceLink};
use tracing::{debug, info};

use super::corpus::ParsedSentences;
use crate::error::{ImportError, Result};
use crate::input::InputLines;

/// Sentences and links that are eligible for writing.
///
/// `nonchinese` holds exactly the translations reachable from at least one
/// link in `links`; every link joins two sentences present here.
#[derive(Clone, Debug, Default)]
pub struct LinkedCorpus {
    pub chinese: IndexMap<SentenceId, ChineseSentence>,
    pub nonchinese: IndexMap<SentenceId, NonChineseSentence>,
    pub links: IndexSet<SentenceLink>,
    /// Candidate links rejected because an endpoint is unknown.
    pub dropped_links: usize,
    /// Parsed translations no retained link reaches.
    pub orphaned: usize,
}

/// Lazily read `SOURCE_ID TARGET_ID` pairs without judging them.
pub fn read_links<R: BufRead>(lines: InputLines<R>) -> impl Iterator<Item = Result<SentenceLink>> {
    let origin = lines.origin().to_path_buf();
    lines.map(move |line| {
        let line = line?;
        parse_link_line(&line.text).map_err(|reason| ImportError::parse(&origin, line.number, reason))
    })
}

pub fn parse_link_line(line: &str) -> Result<SentenceLink, &'static str> {
    let mut ids = line.split_whitespace();
    let (Some(chinese), Some(nonchinese)) = (ids.next(), ids.next()) else {
        return Err("expected two sentence ids");
    };
    let chinese = chinese
        .parse()
        .map_err(|_| "source sentence id is not an integer")?;
    let nonchinese = nonchinese
        .parse()
        .map_err(|_| "target sentence id is not an integer")?;
    Ok(SentenceLink {
        chinese,
        nonchinese,
    })
}

/// Keep the links whose endpoints both exist, then reduce the translations to
/// those reachable through a kept link.
///
/// Candidates are checked as they stream in, so only retained links are held
/// in memory. The result depends only on the set of candidates, not on their
/// order in the links file; translations keep corpus order. The first
/// candidate error aborts.
pub fn resolve_links<I>(parsed: ParsedSentences, candidates: I) -> Result<LinkedCorpus>
where
    I: IntoIterator<Item = Result<SentenceLink>>,
{
    let ParsedSentences {
        chinese,
        mut nonchinese,
    } = parsed;

    let mut links = IndexSet::new();
    let mut dropped_links = 0usize;
    let mut read = 0usize;
    for link in candidates {
        let link = link?;
        read += 1;
        if chinese.contains_key(&link.chinese) && nonchinese.contains_key(&link.nonchinese) {
            links.insert(link);
        } else {
            dropped_links += 1;
        }
    }
    debug!("{read} candidate links read");

    let reachable: HashSet<SentenceId> = links.iter().map(|link| link.nonchinese).collect();
    let before = nonchinese.len();
    nonchinese.retain(|id, _| reachable.contains(id));
    let orphaned = before - nonchinese.len();

    info!(
        "kept {} links ({dropped_links} dropped), {} reachable translations ({orphaned} orphaned)",
        links.len(),
        nonchinese.len()
    );
    Ok(LinkedCorpus {
        chinese,
        nonchinese,
        links,
        dropped_links,
        orphaned,
    })
}
