use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use jyutdict_db::input;
use jyutdict_db::lexicon::{merge_readings, parse_entries};
use jyutdict_types::EntryMap;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let cedict = args.next().map(PathBuf::from).context(
        "usage: cargo run -p jyutdict-db --example stats -- <cedict-file> [readings-file]",
    )?;
    let readings = args.next().map(PathBuf::from);

    let mut entries = EntryMap::new();
    let parsed = parse_entries(input::open(&cedict)?, &mut entries)
        .with_context(|| format!("parsing {}", cedict.display()))?;

    let homograph_keys = entries.values().filter(|group| group.len() > 1).count();
    let definitions: usize = entries
        .values()
        .flatten()
        .map(|entry| entry.definitions.len())
        .sum();

    println!("Dictionary   : {}", cedict.display());
    println!("Entries      : {parsed}");
    println!("Keys         : {}", entries.len());
    println!("Homograph keys: {homograph_keys}");
    println!("Definitions  : {definitions}");

    if let Some(readings) = readings {
        let merged = merge_readings(input::open(&readings)?, &mut entries)
            .with_context(|| format!("merging {}", readings.display()))?;
        let with_jyutping = entries
            .values()
            .flatten()
            .filter(|entry| !entry.jyutping.is_empty())
            .count();
        println!("Readings merged: {}", merged.merged);
        println!("Readings without entry: {}", merged.missing);
        println!("Entries with jyutping: {with_jyutping}");
    }

    // Spot-check a common headword.
    for key in ["你好", "長"] {
        match entries.get(key) {
            Some(group) => println!("'{key}': {} reading(s)", group.len()),
            None => println!("'{key}': absent"),
        }
    }

    Ok(())
}
