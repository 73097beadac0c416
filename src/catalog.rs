//! Flavor Prep - Bulk data catalog
//!
//! The catalog endpoint answers with a list object whose `data` array
//! describes every downloadable bulk file.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Response from the bulk-data catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct BulkManifest {
    pub data: Vec<BulkDescriptor>,
}

/// One downloadable bulk dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    /// Compressed size in bytes.
    pub size: u64,
    pub download_uri: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_encoding: Option<String>,
}

impl BulkDescriptor {
    /// Friendly display name.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.updated_at) {
            (Some(name), Some(updated)) => format!("{} ({})", name, updated),
            (Some(name), None) => name.clone(),
            _ => self.kind.clone(),
        }
    }
}

/// Parse a catalog response body.
pub fn parse_manifest(body: &[u8]) -> Result<BulkManifest> {
    Ok(serde_json::from_slice(body)?)
}

/// Pick the one descriptor whose type is `kind`.
///
/// Zero or several matches are both reported as schema errors rather than
/// guessing.
pub fn select_descriptor<'a>(manifest: &'a BulkManifest, kind: &str) -> Result<&'a BulkDescriptor> {
    let mut matches = manifest.data.iter().filter(|d| d.kind == kind);

    let first = matches.next().ok_or_else(|| {
        let available: Vec<&str> = manifest.data.iter().map(|d| d.kind.as_str()).collect();
        Error::schema(format!(
            "no bulk dataset of type {:?} in catalog (available: {})",
            kind,
            available.join(", ")
        ))
    })?;

    let extra = matches.count();
    if extra > 0 {
        return Err(Error::schema(format!(
            "catalog lists {} bulk datasets of type {:?}, expected exactly one",
            extra + 1,
            kind
        )));
    }

    Ok(first)
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    format!("{:.1} MB", bytes as f64 / MB as f64)
}
