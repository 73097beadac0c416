//! Flavor Prep - Bulk fetch
//!
//! Catalog query → descriptor selection → download → parse → filter.

use tracing::info;

use crate::card::{self, Card};
use crate::catalog;
use crate::client::CatalogClient;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::filter::{CardFilter, FilterSummary};

/// Download the default card set and reduce it to cards with unique,
/// lowercased flavor text in the configured language.
pub fn fetch_bulk_cards(config: &FetchConfig) -> Result<Vec<Card>> {
    fetch_bulk_cards_with_summary(config).map(|(cards, _)| cards)
}

/// As [`fetch_bulk_cards`], also returning per-stage filter counts.
pub fn fetch_bulk_cards_with_summary(config: &FetchConfig) -> Result<(Vec<Card>, FilterSummary)> {
    let client = CatalogClient::new(config.clone())?;

    let manifest = client.fetch_manifest()?;
    let descriptor = catalog::select_descriptor(&manifest, &config.bulk_type)?;

    let body = client.download(descriptor)?;
    let raw = card::parse_cards(&body)?;
    drop(body);
    info!("Parsed {} card records", raw.len());

    Ok(CardFilter::from_config(config).apply(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testutil::{Route, TestServer};
    use std::collections::HashSet;
    use std::time::Duration;

    const CARDS: &str = r#"[
        {"name": "Bolt", "colors": ["R"], "flavor_text": "The Spark.", "set_type": "core", "lang": "en"},
        {"name": "Squirrel", "colors": ["G"], "flavor_text": "Nuts!", "set_type": "funny", "lang": "en"},
        {"name": "Eclair", "colors": ["R"], "flavor_text": "Foudre.", "set_type": "core", "lang": "fr"},
        {"name": "Bear", "colors": ["G"], "flavor_text": null, "set_type": "core", "lang": "en"},
        {"name": "Echo", "colors": ["U"], "flavor_text": "THE SPARK.", "set_type": "expansion", "lang": "en"},
        {"name": "Charm", "card_faces": [{"colors": ["W"]}, {"colors": ["B"]}],
         "flavor_text": "Two Minds.", "set_type": "expansion", "lang": "en"}
    ]"#;

    fn routes(base: &str, cards: &str) -> Vec<Route> {
        let manifest = format!(
            r#"{{"object": "list", "data": [
                {{"type": "oracle_cards", "size": 1, "download_uri": "{base}/oracle.json"}},
                {{"type": "default_cards", "size": {}, "download_uri": "{base}/cards.json",
                  "name": "Default Cards"}}
            ]}}"#,
            cards.len()
        );
        vec![
            ("/bulk-data", 200, manifest),
            ("/cards.json", 200, cards.to_string()),
        ]
    }

    fn config_for(server: &TestServer) -> FetchConfig {
        FetchConfig::new()
            .with_catalog_url(format!("{}/bulk-data", server.base))
            .with_courtesy_delay(Duration::ZERO)
            .with_request_timeout(Duration::from_secs(10))
            .without_proxy()
    }

    #[test]
    fn test_fetch_filters_and_dedups_download() {
        let server = TestServer::start(|base| routes(base, CARDS));
        let (cards, summary) = fetch_bulk_cards_with_summary(&config_for(&server)).unwrap();

        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bolt", "Charm"]);
        assert_eq!(cards[0].flavor_text, "the spark.");
        assert_eq!(cards[1].colors.symbols(), "WB");

        let mut seen = HashSet::new();
        for card in &cards {
            assert_ne!(card.set_type, "funny");
            assert_eq!(card.lang, "en");
            assert_eq!(card.flavor_text, card.flavor_text.to_lowercase());
            assert!(seen.insert(card.flavor_text.clone()));
        }

        assert_eq!(summary.total, 6);
        assert_eq!(summary.excluded_set_type, 1);
        assert_eq!(summary.wrong_lang, 1);
        assert_eq!(summary.missing_flavor, 1);
        assert_eq!(summary.duplicates, 1);

        let paths: Vec<String> = server.hits().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, ["/bulk-data", "/cards.json"]);
    }

    #[test]
    fn test_fetch_respects_configured_lang() {
        let server = TestServer::start(|base| routes(base, CARDS));
        let cards = fetch_bulk_cards(&config_for(&server).with_lang("fr")).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Eclair");
        assert_eq!(cards[0].flavor_text, "foudre.");
    }

    #[test]
    fn test_missing_bulk_type_skips_download() {
        let server = TestServer::start(|base| routes(base, CARDS));
        let config = config_for(&server).with_bulk_type("rulings");

        assert!(matches!(fetch_bulk_cards(&config), Err(Error::Schema(_))));
        let paths: Vec<String> = server.hits().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, ["/bulk-data"]);
    }

    #[test]
    fn test_download_failure_is_status_error() {
        let server = TestServer::start(|base| {
            let mut routes = routes(base, CARDS);
            routes.retain(|(path, _, _)| *path != "/cards.json");
            routes
        });

        assert!(matches!(
            fetch_bulk_cards(&config_for(&server)),
            Err(Error::Status { status, .. }) if status.as_u16() == 404
        ));
    }

    #[test]
    fn test_malformed_download_is_parse_error() {
        let server = TestServer::start(|base| routes(base, "[{\"name\": "));
        assert!(matches!(
            fetch_bulk_cards(&config_for(&server)),
            Err(Error::Parse(_))
        ));
    }
}
