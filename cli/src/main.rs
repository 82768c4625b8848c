use anyhow::Result;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use fuzzy_core::config::{Highlight, SearchConfig};
use fuzzy_core::logger::Logger;
use fuzzy_core::render::{render_json, render_text, Theme};
use fuzzy_core::FuzzySearch;
use std::io::IsTerminal;
use std::path::PathBuf;

const USAGE: &str = "Usage: fuzzy <search-term> <directory>";

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode { Auto, Always, Never }

#[derive(Clone, Copy, ValueEnum)]
enum Format { Text, Json }

#[derive(Clone, Copy, ValueEnum)]
enum HighlightMode { All, Matched }

#[derive(Parser)]
#[command(name = "fuzzy", about = "Recursive fuzzy text search", override_usage = "fuzzy <search-term> <directory> [OPTIONS]")]
struct Cli {
    /// Term to look for
    #[arg(allow_hyphen_values = true)]
    query: Option<String>,
    /// Directory (or file) to search
    directory: Option<PathBuf>,
    /// Anything past the first two positionals is ignored.
    #[arg(hide = true)]
    #[allow(dead_code)]
    extra: Vec<String>,
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    /// Which copies of a fuzzy-matched word get highlighted
    #[arg(long, value_enum, default_value = "all")]
    highlight: HighlightMode,
    /// Files scanned in parallel
    #[arg(short, long, default_value = "1")]
    jobs: usize,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (Some(query), Some(directory)) = (cli.query, cli.directory) else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut config = SearchConfig::new(query, directory);
    config.jobs = cli.jobs;
    config.verbose = cli.verbose;
    config.highlight = match cli.highlight {
        HighlightMode::All => Highlight::AllOccurrences,
        HighlightMode::Matched => Highlight::MatchedOccurrence,
    };

    let rid = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(1).max(1);
    let logger = Logger::new(rid).with_verbose(config.verbose);
    let search = FuzzySearch::new(config, logger);
    let report = search.run()?;

    let config = search.config();
    let output = match cli.format {
        Format::Json => render_json(&report, &config.query)? + "\n",
        Format::Text => {
            let colored = match cli.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => std::io::stdout().is_terminal(),
            };
            let theme = if colored { Theme::ANSI } else { Theme::PLAIN };
            render_text(&report, &config.query, &theme, config.highlight)
        }
    };
    print!("{output}");
    Ok(())
}
