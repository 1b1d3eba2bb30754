use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use jyutdict_hanzi::{FrequencyScorer, FrequencyTable, HanziTables, Romanizer, ScriptConverter};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let data_dir = args.next().map(PathBuf::from).context(
        "usage: cargo run -p jyutdict-hanzi --example convert -- <data-dir> <text> [locale]",
    )?;
    let text = args.next().context("missing text to convert")?;
    let locale = args.next().unwrap_or_else(|| "zh".to_string());
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let tables = HanziTables::load(&data_dir)
        .with_context(|| format!("loading tables from {}", data_dir.display()))?;
    let frequency = FrequencyTable::load(&data_dir, &locale)
        .with_context(|| format!("loading {locale} frequencies from {}", data_dir.display()))?;

    println!("Text       : {text}");
    println!("Script     : {}", tables.script.classify(&text));
    println!("Traditional: {}", tables.script.to_traditional(&text)?);
    println!("Simplified : {}", tables.script.to_simplified(&text)?);
    println!("Pinyin     : {}", tables.pinyin.romanize(&text)?);
    println!("Jyutping   : {}", tables.jyutping.romanize(&text)?);
    println!("Frequency  : {}", frequency.score(&text, &locale)?);
    Ok(())
}
