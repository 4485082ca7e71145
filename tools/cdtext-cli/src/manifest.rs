//! cdtext.toml manifest parsing
//!
//! A manifest lists CD-TEXT items in disc order. Each entry names its pack
//! type by TOC keyword and carries exactly one payload form.

use anyhow::{Context, Result};
use cdtext::{BlockNumber, CdTextItem, PackType};
use serde::Deserialize;
use std::path::Path;

/// cdtext.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct CdTextManifest {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemEntry>,
}

/// Single item entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemEntry {
    /// TOC keyword, e.g. "TITLE", "ISRC", "SIZE_INFO"
    pub pack_type: String,

    /// CD-TEXT block (0-7). Default: 0
    #[serde(default)]
    pub block: u8,

    /// Track the item belongs to. Default: 0 (disc level)
    #[serde(default)]
    pub track: u32,

    pub text: Option<String>,
    pub bytes: Option<Vec<u8>>,
    pub genre: Option<GenreEntry>,
}

/// Genre payload: two code bytes plus optional description
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreEntry {
    pub code: [u8; 2],
    pub description: Option<String>,
}

impl ItemEntry {
    /// Build the item this entry describes
    pub fn to_item(&self) -> Result<CdTextItem> {
        let pack_type: PackType = self.pack_type.parse()?;
        let block = BlockNumber::new(self.block)?;

        if self.pack_type == "ISRC" && self.track == 0 {
            tracing::warn!("ISRC given for disc-level item, it will render as UPC_EAN");
        }

        let mut item = match (&self.text, &self.bytes, &self.genre) {
            (Some(text), None, None) => {
                if pack_type.is_binary() {
                    anyhow::bail!(
                        "{} holds binary data, use `bytes` or `genre` instead of `text`",
                        pack_type
                    );
                }
                CdTextItem::text(pack_type, block, text)
            }
            (None, Some(bytes), None) => CdTextItem::binary(pack_type, block, bytes),
            (None, None, Some(genre)) => {
                if pack_type != PackType::Genre {
                    anyhow::bail!("`genre` payload given for {} item", pack_type);
                }
                CdTextItem::genre(block, genre.code, genre.description.as_deref().map(str::as_bytes))
            }
            (None, None, None) => anyhow::bail!("Missing payload: set one of `text`, `bytes` or `genre`"),
            _ => anyhow::bail!("Ambiguous payload: set only one of `text`, `bytes` or `genre`"),
        };

        item.set_track_number(self.track);
        Ok(item)
    }
}

impl CdTextManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse cdtext.toml")
    }

    /// Build all items in manifest order, each linked to the next by index
    pub fn build_items(&self) -> Result<Vec<CdTextItem>> {
        let mut items = Vec::with_capacity(self.items.len());
        for (i, entry) in self.items.iter().enumerate() {
            let item = entry
                .to_item()
                .with_context(|| format!("Invalid item #{} ({})", i + 1, entry.pack_type))?;
            items.push(item);
        }

        let count = items.len();
        for (i, item) in items.iter_mut().enumerate() {
            item.set_successor((i + 1 < count).then_some(i + 1));
        }

        tracing::debug!(count, "Built CD-TEXT items");
        Ok(items)
    }
}
