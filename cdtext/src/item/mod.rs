//! CD-TEXT item: one payload for one pack type / block combination

use serde::Serialize;

use crate::block::BlockNumber;
use crate::pack_type::PackType;


/// How an item's payload is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Single-byte character text; payload ends with one NUL that counts toward its length
    Text,
    /// Raw bytes, no terminator
    Binary,
}

/// A single CD-TEXT entry, e.g. the disc TITLE of block 0 or the ISRC of a track
///
/// Items are plain values. The owning container assigns the track number
/// after construction and may chain items through [`CdTextItem::successor`],
/// an index into its own storage. Cloning never carries that link over.
#[derive(Debug, Serialize)]
pub struct CdTextItem {
    encoding: Encoding,
    pack_type: PackType,
    block: BlockNumber,
    track_number: u32,
    data: Vec<u8>,
    #[serde(skip)]
    successor: Option<usize>,
}

/// Bytes up to (not including) the first NUL
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl CdTextItem {
    fn with_data(encoding: Encoding, pack_type: PackType, block: BlockNumber, data: Vec<u8>) -> Self {
        Self {
            encoding,
            pack_type,
            block,
            track_number: 0,
            data,
            successor: None,
        }
    }

    /// Text item; the stored payload is `text` plus a NUL terminator
    ///
    /// Anything after an embedded NUL in `text` is dropped.
    pub fn text(pack_type: PackType, block: BlockNumber, text: impl AsRef<[u8]>) -> Self {
        let text = until_nul(text.as_ref());
        let mut data = Vec::with_capacity(text.len() + 1);
        data.extend_from_slice(text);
        data.push(0);
        Self::with_data(Encoding::Text, pack_type, block, data)
    }

    /// Binary item holding a copy of `data`
    pub fn binary(pack_type: PackType, block: BlockNumber, data: &[u8]) -> Self {
        Self::with_data(Encoding::Binary, pack_type, block, data.to_vec())
    }

    /// GENRE item: two genre code bytes, optionally followed by a
    /// NUL-terminated description
    pub fn genre(block: BlockNumber, code: [u8; 2], description: Option<&[u8]>) -> Self {
        let description = description.map(until_nul);
        let len = 2 + description.map_or(0, |d| d.len() + 1);

        let mut data = Vec::with_capacity(len);
        data.extend_from_slice(&code);
        if let Some(description) = description {
            data.extend_from_slice(description);
            data.push(0);
        }
        Self::with_data(Encoding::Binary, PackType::Genre, block, data)
    }

    /// Rebuild an item from raw pack data, picking the encoding from the pack type
    pub fn from_raw(pack_type: PackType, block: BlockNumber, data: &[u8]) -> Self {
        tracing::trace!(
            pack_type = pack_type.code(),
            block = block.get(),
            len = data.len(),
            "Rebuilding CD-TEXT item"
        );
        if pack_type.is_binary() {
            Self::binary(pack_type, block, data)
        } else {
            Self::text(pack_type, block, data)
        }
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[inline]
    pub fn pack_type(&self) -> PackType {
        self.pack_type
    }

    #[inline]
    pub fn block(&self) -> BlockNumber {
        self.block
    }

    /// 0 for disc-level items
    #[inline]
    pub fn track_number(&self) -> u32 {
        self.track_number
    }

    pub fn set_track_number(&mut self, track_number: u32) {
        self.track_number = track_number;
    }

    #[inline]
    pub fn is_track_item(&self) -> bool {
        self.track_number > 0
    }

    /// Full payload, including the terminator of text items
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload length, including the terminator of text items
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Text payload without its terminator, `None` for binary items
    pub fn text_bytes(&self) -> Option<&[u8]> {
        match self.encoding {
            Encoding::Text => Some(&self.data[..self.data.len().saturating_sub(1)]),
            Encoding::Binary => None,
        }
    }

    /// Keyword this item renders with
    pub fn keyword(&self) -> &'static str {
        self.pack_type.keyword(self.is_track_item())
    }

    /// Container-managed index of the next item in its list
    #[inline]
    pub fn successor(&self) -> Option<usize> {
        self.successor
    }

    pub fn set_successor(&mut self, successor: Option<usize>) {
        self.successor = successor;
    }
}

impl Clone for CdTextItem {
    fn clone(&self) -> Self {
        Self {
            encoding: self.encoding,
            pack_type: self.pack_type,
            block: self.block,
            track_number: self.track_number,
            data: self.data.clone(),
            successor: None,
        }
    }
}

/// Track number and list linkage do not take part in comparison
impl PartialEq for CdTextItem {
    fn eq(&self, other: &Self) -> bool {
        self.pack_type == other.pack_type
            && self.block == other.block
            && self.encoding == other.encoding
            && self.data == other.data
    }
}

impl Eq for CdTextItem {}
