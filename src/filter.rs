//! Flavor Prep - Card filtering and flavor-text deduplication
//!
//! Filters run in a fixed order (set type, language, flavor text present),
//! then flavor text is lowercased and exact duplicates are dropped,
//! keeping the first occurrence. Cards without any color data are skipped
//! and counted.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::card::{Card, RawCard};
use crate::config::FetchConfig;

/// Counts of what each stage removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub total: usize,
    pub excluded_set_type: usize,
    pub wrong_lang: usize,
    pub missing_flavor: usize,
    pub missing_colors: usize,
    pub duplicates: usize,
    pub retained: usize,
}

impl FilterSummary {
    /// Human-readable summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} total | {} novelty | {} other language | {} no flavor text | {} no colors | {} duplicates | {} retained",
            self.total,
            self.excluded_set_type,
            self.wrong_lang,
            self.missing_flavor,
            self.missing_colors,
            self.duplicates,
            self.retained,
        )
    }
}

/// Predicate set applied to the raw bulk download.
#[derive(Debug, Clone)]
pub struct CardFilter {
    lang: String,
    excluded_set_type: String,
}

impl CardFilter {
    pub fn new(lang: impl Into<String>, excluded_set_type: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            excluded_set_type: excluded_set_type.into(),
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.lang.as_str(), config.excluded_set_type.as_str())
    }

    /// Filter, normalize and deduplicate `raw`, preserving input order.
    pub fn apply(&self, raw: Vec<RawCard>) -> (Vec<Card>, FilterSummary) {
        let mut summary = FilterSummary {
            total: raw.len(),
            ..Default::default()
        };

        let mut kept = Vec::with_capacity(raw.len() / 4);
        for card in raw {
            if card.set_type == self.excluded_set_type {
                summary.excluded_set_type += 1;
                continue;
            }
            if card.lang != self.lang {
                summary.wrong_lang += 1;
                continue;
            }
            if card.flavor_text.is_none() {
                summary.missing_flavor += 1;
                continue;
            }

            let mut card = match card.into_card() {
                Ok(card) => card,
                Err(e) => {
                    warn!("Skipping card: {}", e);
                    summary.missing_colors += 1;
                    continue;
                }
            };
            card.flavor_text = card.flavor_text.to_lowercase();
            kept.push(card);
        }

        let (cards, duplicates) = dedup_by_flavor(kept);
        summary.duplicates = duplicates;
        summary.retained = cards.len();

        debug!("{}", summary.summary());
        info!("{} cards with unique flavor text", summary.retained);

        (cards, summary)
    }
}

/// Drop cards whose flavor text exactly matches an earlier card's.
///
/// Returns the survivors in their original order and the number dropped.
pub fn dedup_by_flavor(cards: Vec<Card>) -> (Vec<Card>, usize) {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(cards.len());
    let mut unique = Vec::with_capacity(cards.len());
    let mut duplicates = 0;

    for (i, card) in cards.into_iter().enumerate() {
        match seen.entry(card.flavor_text.clone()) {
            Entry::Occupied(e) => {
                debug!("{:?} repeats flavor text of card #{}", card.name, e.get());
                duplicates += 1;
            }
            Entry::Vacant(e) => {
                e.insert(i);
                unique.push(card);
            }
        }
    }

    (unique, duplicates)
}
