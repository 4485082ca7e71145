//! Render and json commands - print the items of a manifest

use anyhow::{Context, Result};
use cdtext::CdTextItem;
use clap::Args;
use std::path::PathBuf;

use crate::manifest::CdTextManifest;

/// Arguments for the render command
#[derive(Args)]
pub struct RenderArgs {
    /// Manifest to read
    #[arg(default_value = "cdtext.toml")]
    pub manifest: PathBuf,

    /// Only print items of this CD-TEXT block
    #[arg(long)]
    pub block: Option<u8>,
}

/// Arguments for the json command
#[derive(Args)]
pub struct JsonArgs {
    /// Manifest to read
    #[arg(default_value = "cdtext.toml")]
    pub manifest: PathBuf,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

/// TOC-file fragments of `items`, one line per item
pub fn render_items<'a>(items: impl IntoIterator<Item = &'a CdTextItem>, block: Option<u8>) -> String {
    let mut out = String::new();
    for item in items {
        if block.is_some_and(|b| b != item.block().get()) {
            continue;
        }
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out
}

/// Execute the render command
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let items = CdTextManifest::load(&args.manifest)?.build_items()?;
    tracing::info!("Rendering {} item(s) from {}", items.len(), args.manifest.display());
    print!("{}", render_items(&items, args.block));
    Ok(())
}

/// Execute the json command
pub fn execute_json(args: JsonArgs) -> Result<()> {
    let items = CdTextManifest::load(&args.manifest)?.build_items()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&items)
    } else {
        serde_json::to_string(&items)
    }
    .context("Failed to serialize items")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdtext::{BlockNumber, PackType};

    #[test]
    fn test_render_items_filters_block() {
        let items = vec![
            CdTextItem::text(PackType::Title, BlockNumber::ZERO, "English"),
            CdTextItem::text(PackType::Title, BlockNumber::new(1).unwrap(), "Deutsch"),
        ];

        assert_eq!(
            render_items(&items, None),
            "TITLE \"English\"\nTITLE \"Deutsch\"\n"
        );
        assert_eq!(render_items(&items, Some(1)), "TITLE \"Deutsch\"\n");
        assert_eq!(render_items(&items, Some(5)), "");
    }
}
