//! CD-TEXT item model for audio disc authoring
//!
//! CD-TEXT stores titles, performers, ISRCs and similar metadata in the
//! lead-in of an audio CD. This crate models one entry of that data area, a
//! [`CdTextItem`]: a typed payload for one pack type in one of the eight
//! CD-TEXT blocks, optionally bound to a track.
//!
//! Assembling items into 18-byte packs and computing their CRC is left to
//! the container that owns the items.
//!
//! # Usage
//!
//! ```
//! use cdtext::{BlockNumber, CdTextItem, PackType};
//!
//! let block = BlockNumber::new(0).unwrap();
//! let title = CdTextItem::text(PackType::Title, block, "My Disc");
//! assert_eq!(title.len(), 8);
//! assert_eq!(title.to_string(), "TITLE \"My Disc\"");
//!
//! let genre = CdTextItem::genre(block, [1, 5], None);
//! assert_eq!(genre.to_string(), "GENRE { 1,  5}");
//! ```

mod block;
mod error;
mod item;
mod pack_type;
mod render;

pub use block::BlockNumber;
pub use error::{CdTextError, Result};
pub use item::{CdTextItem, Encoding};
pub use pack_type::{
    PackType, UNKNOWN_KEYWORD, decode_pack_type, is_binary_pack_type, keyword_for_code,
    pack_type_to_keyword,
};
pub use render::{BYTES_PER_LINE, write_byte_list, write_escaped_text};

/// Number of CD-TEXT blocks on a disc
pub const MAX_BLOCKS: u8 = 8;

/// Lowest pack type code
pub const PACK_TYPE_FIRST: u8 = 0x80;

/// Highest pack type code
pub const PACK_TYPE_LAST: u8 = 0x8F;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MAX_BLOCKS, 8);
        assert_eq!(PACK_TYPE_FIRST, PackType::Title.code());
        assert_eq!(PACK_TYPE_LAST, PackType::SizeInfo.code());
    }
}
