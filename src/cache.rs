//! Flavor Prep - On-disk cache of filtered cards
//!
//! The filtered card list is stored as one JSON array. Whether to reuse
//! it is the caller's call, usually via [`crate::age::is_stale`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use memmap2::Mmap;
use tracing::info;

use crate::card::Card;
use crate::error::{Error, Result};

/// Load a card cache written by [`save_cards`].
pub fn load_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let size = file.metadata().map_err(|e| Error::io(path, e))?.len();
    if size == 0 {
        return Err(Error::schema(format!("{} is empty", path.display())));
    }

    // Safety: the cache is only ever replaced by rename, never rewritten in place.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::io(path, e))?;
    let cards: Vec<Card> = serde_json::from_slice(&mmap)?;

    info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Write `cards` to `path`, going through `<path>.tmp` so a crash never
/// leaves a half-written cache behind.
pub fn save_cards<P: AsRef<Path>>(path: P, cards: &[Card]) -> Result<()> {
    let path = path.as_ref();
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = Path::new(&temp);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file = File::create(temp).map_err(|e| Error::io(temp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, cards).map_err(|e| Error::io(temp, e.into()))?;
    writer.flush().map_err(|e| Error::io(temp, e))?;
    drop(writer);

    std::fs::rename(temp, path).map_err(|e| Error::io(path, e))?;
    info!("Cached {} cards to {}", cards.len(), path.display());
    Ok(())
}
