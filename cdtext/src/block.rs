//! Validated CD-TEXT block index

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CdTextError, Result};

/// Index of one of the eight parallel CD-TEXT data sets (0..=7)
///
/// Blocks usually carry the same fields in different languages. The range
/// is checked once here so every [`crate::CdTextItem`] constructor can rely
/// on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BlockNumber(u8);

impl BlockNumber {
    /// Block 0, the only block most discs carry
    pub const ZERO: Self = Self(0);

    /// Highest valid block index
    pub const MAX: Self = Self(crate::MAX_BLOCKS - 1);

    /// Validate a raw block index
    pub fn new(block: u8) -> Result<Self> {
        if block < crate::MAX_BLOCKS {
            Ok(Self(block))
        } else {
            Err(CdTextError::InvalidBlock(block))
        }
    }

    /// Raw block index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BlockNumber {
    type Error = CdTextError;

    fn try_from(block: u8) -> Result<Self> {
        Self::new(block)
    }
}

impl From<BlockNumber> for u8 {
    fn from(block: BlockNumber) -> Self {
        block.0
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for n in 0..crate::MAX_BLOCKS {
            assert_eq!(BlockNumber::new(n).unwrap().get(), n);
        }
        assert_eq!(BlockNumber::MAX.get(), 7);
        assert_eq!(BlockNumber::default(), BlockNumber::ZERO);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(BlockNumber::new(8), Err(CdTextError::InvalidBlock(8)));
        assert_eq!(
            BlockNumber::try_from(255u8),
            Err(CdTextError::InvalidBlock(255))
        );
    }

    #[test]
    fn test_serde_validates() {
        let block: BlockNumber = serde_json::from_str("3").unwrap();
        assert_eq!(block.get(), 3);
        assert_eq!(serde_json::to_string(&block).unwrap(), "3");
        assert!(serde_json::from_str::<BlockNumber>("9").is_err());
    }
}
