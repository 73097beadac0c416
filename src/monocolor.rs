//! Flavor Prep - Monocolor labeling
//!
//! Keeps only cards of exactly one color and orders them W, U, B, R, G.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, Colors};

/// Per-color membership flags for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLabels {
    pub white: bool,
    pub blue: bool,
    pub black: bool,
    pub red: bool,
    pub green: bool,
}

impl ColorLabels {
    pub fn of(colors: Colors) -> Self {
        let [white, blue, black, red, green] = colors.membership();
        Self {
            white,
            blue,
            black,
            red,
            green,
        }
    }

    fn flags(self) -> [bool; 5] {
        [self.white, self.blue, self.black, self.red, self.green]
    }

    /// Exactly one flag set.
    pub fn is_monocolor(self) -> bool {
        self.flags().iter().filter(|&&f| f).count() == 1
    }

    /// The single color, if exactly one flag is set.
    pub fn single(self) -> Option<Color> {
        if !self.is_monocolor() {
            return None;
        }
        Color::ALL
            .into_iter()
            .zip(self.flags())
            .find_map(|(color, set)| set.then_some(color))
    }
}

/// A single-color card as emitted by [`label_monocolor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonocolorCard {
    pub name: String,
    /// Concatenated color symbols, always one letter here.
    pub colors: String,
    pub flavor_text: String,
}

impl MonocolorCard {
    /// The card's color, parsed back from its symbol column.
    pub fn color(&self) -> Option<Color> {
        Color::from_symbol(&self.colors)
    }
}

/// Return the monocolor subset of `cards` as a new table, stably sorted by
/// color. `cards` itself is not touched.
pub fn label_monocolor(cards: &[Card]) -> Vec<MonocolorCard> {
    let mut labeled: Vec<(Color, MonocolorCard)> = cards
        .iter()
        .filter_map(|card| {
            let color = ColorLabels::of(card.colors).single()?;
            let row = MonocolorCard {
                name: card.name.clone(),
                colors: card.colors.symbols(),
                flavor_text: card.flavor_text.clone(),
            };
            Some((color, row))
        })
        .collect();

    // `sort_by_key` is stable: equal colors keep input order.
    labeled.sort_by_key(|(color, _)| *color);
    labeled.into_iter().map(|(_, row)| row).collect()
}
