//! Flavor Prep - build a monocolor flavor-text corpus
//!
//! Reuses a cached download while it is fresh and in the requested language,
//! otherwise pulls the bulk card data again, then labels, cleans and exports
//! it.

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use flavor_prep::age;
use flavor_prep::cache;
use flavor_prep::export::{self, OutputFormat};
use flavor_prep::fetch::fetch_bulk_cards_with_summary;
use flavor_prep::monocolor::label_monocolor;
use flavor_prep::sanitize::Sanitizer;
use flavor_prep::{Card, FetchConfig};

/// Flavor Prep - monocolor flavor-text corpus builder
#[derive(FromArgs)]
struct Args {
    /// where to cache the filtered card data (default: cards.json)
    #[argh(option, short = 'c', default = "String::from(\"cards.json\")")]
    cache: String,

    /// reuse the cache if younger than this many hours (default: 24)
    #[argh(option, short = 'm', default = "24.0")]
    max_age: f64,

    /// ignore the cache and download again
    #[argh(switch, short = 'r')]
    refresh: bool,

    /// output path, `-` for stdout (default: flavor_corpus.jsonl)
    #[argh(option, short = 'o', default = "String::from(\"flavor_corpus.jsonl\")")]
    output: String,

    /// output format: jsonl or csv (default: from output extension)
    #[argh(option, short = 'f')]
    format: Option<String>,

    /// language code to keep (default: en)
    #[argh(option, default = "String::from(\"en\")")]
    lang: String,

    /// keep flavor text as downloaded (lowercased only, not sanitized)
    #[argh(switch)]
    raw: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    // Progress goes to stdout unless the corpus itself does.
    let log_writer = if args.output == "-" {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_writer)
        .init();

    let format = match args.format.as_deref() {
        Some(name) => match OutputFormat::parse(name) {
            Some(format) => format,
            None => bail!("Unknown output format: {} (expected jsonl or csv)", name),
        },
        None => OutputFormat::detect(&args.output),
    };

    let config = FetchConfig::new().with_lang(args.lang.as_str());
    let cards = load_or_fetch(&args, &config)?;

    let mut corpus = label_monocolor(&cards);
    info!("{} monocolor cards", corpus.len());

    if !args.raw {
        let sanitizer = Sanitizer::new();
        for card in &mut corpus {
            card.flavor_text = sanitizer.clean(&card.flavor_text);
        }
    }

    export::export_cards(&args.output, &corpus, format)
        .with_context(|| format!("Failed to export corpus to {}", args.output))?;

    info!("Output written to: {}", args.output);
    Ok(())
}

/// Use the cache when it is fresh, otherwise download and refresh it.
fn load_or_fetch(args: &Args, config: &FetchConfig) -> Result<Vec<Card>> {
    if !args.refresh {
        if let Some(cards) = cached_cards(args, config)? {
            return Ok(cards);
        }
    }

    let (cards, summary) =
        fetch_bulk_cards_with_summary(config).context("Failed to fetch bulk card data")?;
    info!("{}", summary.summary());

    if let Err(e) = cache::save_cards(&args.cache, &cards) {
        warn!("Could not write cache {}: {}", args.cache, e);
    }
    Ok(cards)
}

/// Cached cards, if the cache is younger than `max_age` and was built for
/// `config.lang`.
fn cached_cards(args: &Args, config: &FetchConfig) -> Result<Option<Vec<Card>>> {
    match age::file_age_hours(&args.cache) {
        Ok(hours) if hours < args.max_age => {
            info!("Cache {} is {:.1} hours old", args.cache, hours);
        }
        Ok(hours) => {
            info!("Cache {} is {:.1} hours old, refreshing", args.cache, hours);
            return Ok(None);
        }
        Err(e) if e.is_not_found() => {
            info!("No cache at {}, downloading", args.cache);
            return Ok(None);
        }
        Err(e) => return Err(e).context("Failed to inspect cache"),
    }

    let cards = cache::load_cards(&args.cache)
        .with_context(|| format!("Failed to load cache: {}", args.cache))?;
    if let Some(other) = cards.iter().find(|c| c.lang != config.lang) {
        info!(
            "Cache {} holds {:?} cards, not {:?}; refreshing",
            args.cache, other.lang, config.lang
        );
        return Ok(None);
    }

    info!("Reusing {} cached cards", cards.len());
    Ok(Some(cards))
}
