//! Flavor Prep - Card records
//!
//! `RawCard` mirrors the catalog's JSON just closely enough to filter on;
//! `Card` is the typed record the rest of the pipeline works with.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

// ─── Color ──────────────────────────────────────────────────────────────────

/// One of the five color identifiers.
///
/// Declaration order is the canonical sort order: W < U < B < R < G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "W" => Some(Color::White),
            "U" => Some(Color::Blue),
            "B" => Some(Color::Black),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            _ => None,
        }
    }

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ─── Colors ─────────────────────────────────────────────────────────────────

/// Set of color identifiers packed into one byte, one bit per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct Colors(u8);

impl Colors {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from catalog symbols. Symbols outside W/U/B/R/G are
    /// dropped: they never match any color.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut colors = Self::empty();
        for symbol in symbols {
            match Color::from_symbol(symbol.as_ref()) {
                Some(color) => colors.insert(color),
                None => warn!("Ignoring unknown color symbol {:?}", symbol.as_ref()),
            }
        }
        colors
    }

    #[inline(always)]
    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    #[inline(always)]
    pub fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Contained colors in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }

    /// One membership flag per color, in canonical order.
    pub fn membership(self) -> [bool; 5] {
        Color::ALL.map(|c| self.contains(c))
    }

    /// Concatenated symbols, e.g. `"WU"`; empty for colorless.
    pub fn symbols(self) -> String {
        self.iter().map(Color::symbol).collect()
    }
}

impl FromIterator<Color> for Colors {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut colors = Self::empty();
        for color in iter {
            colors.insert(color);
        }
        colors
    }
}

impl From<Colors> for Vec<String> {
    fn from(colors: Colors) -> Self {
        colors.iter().map(|c| c.symbol().to_string()).collect()
    }
}

impl From<Vec<String>> for Colors {
    fn from(symbols: Vec<String>) -> Self {
        Colors::from_symbols(symbols)
    }
}

// ─── RawCard ────────────────────────────────────────────────────────────────

/// A card object as it appears in the bulk download.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub name: String,
    pub colors: Option<Vec<String>>,
    pub flavor_text: Option<String>,
    pub set_type: String,
    pub lang: String,
    /// Multi-faced cards carry colors per face instead of at the top level.
    pub card_faces: Option<Vec<RawCardFace>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCardFace {
    pub colors: Option<Vec<String>>,
}

impl RawCard {
    /// Top-level colors, or the union of the faces' colors.
    fn resolve_colors(&self) -> Option<Colors> {
        if let Some(ref symbols) = self.colors {
            return Some(Colors::from_symbols(symbols));
        }
        let faces = self.card_faces.as_ref()?;
        faces
            .iter()
            .filter_map(|face| face.colors.as_ref())
            .map(Colors::from_symbols)
            .reduce(Colors::union)
    }

    /// Convert into a typed record. Fails if flavor text or colors are absent.
    pub fn into_card(self) -> Result<Card> {
        let colors = self.resolve_colors().ok_or_else(|| {
            Error::schema(format!("card {:?} has no `colors` field", self.name))
        })?;
        let flavor_text = self.flavor_text.ok_or_else(|| {
            Error::schema(format!("card {:?} has no `flavor_text` field", self.name))
        })?;

        Ok(Card {
            name: self.name,
            colors,
            flavor_text,
            set_type: self.set_type,
            lang: self.lang,
        })
    }
}

/// Parse a bulk download body (a JSON array of card objects).
pub fn parse_cards(body: &[u8]) -> Result<Vec<RawCard>> {
    Ok(serde_json::from_slice(body)?)
}

// ─── Card ───────────────────────────────────────────────────────────────────

/// A filtered card with guaranteed flavor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub colors: Colors,
    pub flavor_text: String,
    pub set_type: String,
    pub lang: String,
}
