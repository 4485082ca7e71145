//! Decode command - classify raw CD-TEXT pack type codes
//!
//! Codes are accepted in decimal (`142`) or hex (`0x8e`).

use anyhow::{Context, Result};
use cdtext::{PackType, decode_pack_type};
use clap::Args;

/// Arguments for the decode command
#[derive(Args)]
pub struct DecodeArgs {
    /// Pack type codes, e.g. 0x80 or 128
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Use track-level keywords (ISRC instead of UPC_EAN)
    #[arg(long)]
    pub track: bool,

    /// Fail on codes outside 0x80-0x8F instead of decoding them as TITLE
    #[arg(long)]
    pub strict: bool,
}

/// Parse a decimal or 0x-prefixed hex byte
pub fn parse_code(s: &str) -> Result<u8> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.with_context(|| format!("Invalid pack type code: {}", s))
}

/// One output line: code, keyword and payload encoding
pub fn describe(code: u8, is_track_item: bool, strict: bool) -> Result<String> {
    let pack_type = if strict {
        PackType::try_from(code)?
    } else {
        decode_pack_type(code)
    };
    let encoding = if pack_type.is_binary() { "binary" } else { "text" };
    Ok(format!(
        "0x{:02X} {} {}",
        code,
        pack_type.keyword(is_track_item),
        encoding
    ))
}

/// Execute the decode command
pub fn execute(args: DecodeArgs) -> Result<()> {
    for raw in &args.codes {
        let code = parse_code(raw)?;
        if !args.strict && PackType::try_from(code).is_err() {
            tracing::warn!("Code 0x{:02X} is not a CD-TEXT pack type", code);
        }
        println!("{}", describe(code, args.track, args.strict)?);
    }
    Ok(())
}
