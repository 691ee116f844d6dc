use anyhow::{Context, Result};
use crossterm::style::Stylize;
use log::LevelFilter;
use std::env;
use std::io::{stdin, BufRead};
use std::path::PathBuf;
use text2id::{EncoderConfig, Text2Id};

const CONFIG_ENV: &str = "TEXT2ID_CONFIG";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let config = match env::var_os(CONFIG_ENV).map(PathBuf::from) {
        Some(path) => EncoderConfig::from_file(&path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => EncoderConfig::default(),
    };
    let t2i = Text2Id::from_config(&config).context("building encoder")?;

    println!("{} {:?}", "Supported symbols:".bold(), Text2Id::list_symbols());

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return run_sample(&t2i, &args.join(" "));
    }

    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        run_sample(&t2i, &line)?;
    }
    Ok(())
}

fn run_sample(t2i: &Text2Id, text: &str) -> Result<()> {
    println!("\n{} {}", "Input:".bold(), text);
    for use_dictionary in [true, false] {
        let sequence = t2i.text_to_sequence(text, None, use_dictionary)?;
        let label = if use_dictionary { "with dictionary" } else { "plain" };
        println!("  {} {}", format!("{label}:").cyan(), serde_json::to_string(&sequence)?);
        println!("  {} {}", "decoded:".green(), Text2Id::sequence_to_text(&sequence));
    }
    Ok(())
}
