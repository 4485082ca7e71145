//! CD-TEXT pack type taxonomy
//!
//! Every CD-TEXT pack carries a one-byte type code in 0x80..=0x8F. This
//! module maps those codes to [`PackType`], names them with the keywords a
//! TOC file uses, and decides which types hold binary rather than text data.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CdTextError, Result};

/// Keyword rendered for codes outside the pack type table
pub const UNKNOWN_KEYWORD: &str = "UNKNOWN";

/// Semantic category of a CD-TEXT item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PackType {
    Title = 0x80,
    Performer = 0x81,
    Songwriter = 0x82,
    Composer = 0x83,
    Arranger = 0x84,
    Message = 0x85,
    DiscId = 0x86,
    Genre = 0x87,
    TocInfo1 = 0x88,
    TocInfo2 = 0x89,
    Reserved1 = 0x8A,
    Reserved2 = 0x8B,
    Reserved3 = 0x8C,
    Closed = 0x8D,
    /// UPC/EAN on disc level, ISRC on track level
    UpcEanOrIsrc = 0x8E,
    SizeInfo = 0x8F,
}

impl PackType {
    /// All pack types in code order
    pub const ALL: [PackType; 16] = [
        PackType::Title,
        PackType::Performer,
        PackType::Songwriter,
        PackType::Composer,
        PackType::Arranger,
        PackType::Message,
        PackType::DiscId,
        PackType::Genre,
        PackType::TocInfo1,
        PackType::TocInfo2,
        PackType::Reserved1,
        PackType::Reserved2,
        PackType::Reserved3,
        PackType::Closed,
        PackType::UpcEanOrIsrc,
        PackType::SizeInfo,
    ];

    /// On-disc type code
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// TOC-file keyword for this pack type
    ///
    /// `UpcEanOrIsrc` is spelled `ISRC` for track items and `UPC_EAN` for
    /// disc-level items.
    pub const fn keyword(self, is_track_item: bool) -> &'static str {
        match self {
            PackType::Title => "TITLE",
            PackType::Performer => "PERFORMER",
            PackType::Songwriter => "SONGWRITER",
            PackType::Composer => "COMPOSER",
            PackType::Arranger => "ARRANGER",
            PackType::Message => "MESSAGE",
            PackType::DiscId => "DISC_ID",
            PackType::Genre => "GENRE",
            PackType::TocInfo1 => "TOC_INFO1",
            PackType::TocInfo2 => "TOC_INFO2",
            PackType::Reserved1 => "RESERVED1",
            PackType::Reserved2 => "RESERVED2",
            PackType::Reserved3 => "RESERVED3",
            PackType::Closed => "CLOSED",
            PackType::UpcEanOrIsrc => {
                if is_track_item {
                    "ISRC"
                } else {
                    "UPC_EAN"
                }
            }
            PackType::SizeInfo => "SIZE_INFO",
        }
    }

    /// Whether items of this type carry raw bytes instead of text
    #[inline]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            PackType::TocInfo1 | PackType::TocInfo2 | PackType::SizeInfo | PackType::Genre
        )
    }
}

/// Keyword for a pack type, see [`PackType::keyword`]
pub fn pack_type_to_keyword(pack_type: PackType, is_track_item: bool) -> &'static str {
    pack_type.keyword(is_track_item)
}

/// Keyword for a raw type code, [`UNKNOWN_KEYWORD`] if the code is not in the table
pub fn keyword_for_code(code: u8, is_track_item: bool) -> &'static str {
    PackType::try_from(code)
        .map(|pack_type| pack_type.keyword(is_track_item))
        .unwrap_or(UNKNOWN_KEYWORD)
}

/// Lenient decode of a raw type code
///
/// Codes outside 0x80..=0x8F decode as [`PackType::Title`]. Callers that
/// must detect corrupt codes use `PackType::try_from` instead.
pub fn decode_pack_type(code: u8) -> PackType {
    PackType::try_from(code).unwrap_or_else(|_| {
        tracing::debug!(code, "Unknown CD-TEXT pack type code, decoding as TITLE");
        PackType::Title
    })
}

/// Whether items of this type carry raw bytes, see [`PackType::is_binary`]
pub fn is_binary_pack_type(pack_type: PackType) -> bool {
    pack_type.is_binary()
}

impl TryFrom<u8> for PackType {
    type Error = CdTextError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            crate::PACK_TYPE_FIRST..=crate::PACK_TYPE_LAST => {
                Ok(PackType::ALL[(code - crate::PACK_TYPE_FIRST) as usize])
            }
            _ => Err(CdTextError::UnknownPackType(code)),
        }
    }
}

impl From<PackType> for u8 {
    fn from(pack_type: PackType) -> Self {
        pack_type.code()
    }
}

impl FromStr for PackType {
    type Err = CdTextError;

    fn from_str(keyword: &str) -> Result<Self> {
        if keyword == "ISRC" || keyword == "UPC_EAN" {
            return Ok(PackType::UpcEanOrIsrc);
        }
        PackType::ALL
            .into_iter()
            .find(|pack_type| pack_type.keyword(false) == keyword)
            .ok_or_else(|| CdTextError::UnknownKeyword(keyword.to_string()))
    }
}

/// Displays the disc-level keyword
impl fmt::Display for PackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword(false))
    }
}

impl Serialize for PackType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.keyword(false))
    }
}

impl<'de> Deserialize<'de> for PackType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let keyword = String::deserialize(deserializer)?;
        keyword.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_contiguous() {
        for (i, pack_type) in PackType::ALL.iter().enumerate() {
            assert_eq!(pack_type.code(), 0x80 + i as u8);
        }
        assert_eq!(PackType::Title.code(), 0x80);
        assert_eq!(PackType::SizeInfo.code(), 0x8F);
    }

    #[test]
    fn test_decode_inverts_code() {
        for pack_type in PackType::ALL {
            assert_eq!(decode_pack_type(pack_type.code()), pack_type);
            assert_eq!(PackType::try_from(pack_type.code()), Ok(pack_type));
        }
    }

    #[test]
    fn test_decode_fallback() {
        assert_eq!(decode_pack_type(0x00), PackType::Title);
        assert_eq!(decode_pack_type(0x7F), PackType::Title);
        assert_eq!(decode_pack_type(0x90), PackType::Title);
        assert_eq!(decode_pack_type(0xFF), PackType::Title);
    }

    #[test]
    fn test_strict_decode_rejects_unknown() {
        assert_eq!(
            PackType::try_from(0x90),
            Err(CdTextError::UnknownPackType(0x90))
        );
        assert_eq!(
            PackType::try_from(0x7F),
            Err(CdTextError::UnknownPackType(0x7F))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(pack_type_to_keyword(PackType::Title, false), "TITLE");
        assert_eq!(pack_type_to_keyword(PackType::DiscId, false), "DISC_ID");
        assert_eq!(pack_type_to_keyword(PackType::Reserved2, true), "RESERVED2");
        assert_eq!(pack_type_to_keyword(PackType::Closed, false), "CLOSED");
        assert_eq!(pack_type_to_keyword(PackType::SizeInfo, false), "SIZE_INFO");
        assert_eq!(pack_type_to_keyword(PackType::TocInfo1, false), "TOC_INFO1");
    }

    #[test]
    fn test_isrc_keyword_depends_on_track() {
        assert_eq!(pack_type_to_keyword(PackType::UpcEanOrIsrc, true), "ISRC");
        assert_eq!(pack_type_to_keyword(PackType::UpcEanOrIsrc, false), "UPC_EAN");
    }

    #[test]
    fn test_keyword_for_code() {
        assert_eq!(keyword_for_code(0x81, false), "PERFORMER");
        assert_eq!(keyword_for_code(0x8E, true), "ISRC");
        assert_eq!(keyword_for_code(0x42, false), UNKNOWN_KEYWORD);
    }

    #[test]
    fn test_binary_pack_types() {
        let binary: Vec<PackType> = PackType::ALL
            .into_iter()
            .filter(|p| is_binary_pack_type(*p))
            .collect();
        assert_eq!(
            binary,
            vec![
                PackType::Genre,
                PackType::TocInfo1,
                PackType::TocInfo2,
                PackType::SizeInfo
            ]
        );
    }

    #[test]
    fn test_parse_keyword() {
        for pack_type in PackType::ALL {
            assert_eq!(pack_type.keyword(false).parse::<PackType>(), Ok(pack_type));
            assert_eq!(pack_type.keyword(true).parse::<PackType>(), Ok(pack_type));
        }
        assert_eq!(
            "title".parse::<PackType>(),
            Err(CdTextError::UnknownKeyword("title".into()))
        );
    }

    #[test]
    fn test_serde_uses_keywords() {
        assert_eq!(serde_json::to_string(&PackType::DiscId).unwrap(), "\"DISC_ID\"");
        let parsed: PackType = serde_json::from_str("\"ISRC\"").unwrap();
        assert_eq!(parsed, PackType::UpcEanOrIsrc);
        assert!(serde_json::from_str::<PackType>("\"BOGUS\"").is_err());
    }
}
