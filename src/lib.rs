//! Flavor Prep — flavor-text corpus preparation for trading-card data.
//!
//! Pulls the bulk card dump from the public catalog, keeps English cards
//! with unique flavor text, labels the single-color ones and cleans their
//! text for NLP work.
//!
//! ## Pipeline
//!
//! - **Age check** (`age`) — how many hours old a saved download is.
//! - **Bulk fetch** (`fetch`) — catalog → `default_cards` → filter → dedup.
//! - **Monocolor labeling** (`monocolor`) — one-color cards, sorted W U B R G.
//! - **Sanitization** (`sanitize`) — ASCII letters, digits and whitespace only.

pub mod age;
pub mod cache;
pub mod card;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod monocolor;
pub mod sanitize;

#[cfg(test)]
mod testutil;

pub use age::{file_age_hours, is_stale};
pub use card::{Card, Color, Colors};
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetch::fetch_bulk_cards;
pub use monocolor::{label_monocolor, MonocolorCard};
pub use sanitize::sanitize_text;
