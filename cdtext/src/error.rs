//! CD-TEXT error types

use thiserror::Error;

/// Errors raised while building or classifying CD-TEXT items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CdTextError {
    /// Block index outside 0..=7
    #[error("Invalid CD-TEXT block number: {0} (max {max})", max = crate::MAX_BLOCKS - 1)]
    InvalidBlock(u8),
    /// Raw pack type code outside 0x80..=0x8F
    #[error("Unknown CD-TEXT pack type code: 0x{0:02X}")]
    UnknownPackType(u8),
    /// Keyword that names no pack type
    #[error("Unknown CD-TEXT keyword: {0}")]
    UnknownKeyword(String),
}

/// Result alias for CD-TEXT operations
pub type Result<T> = std::result::Result<T, CdTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CdTextError::InvalidBlock(8).to_string(),
            "Invalid CD-TEXT block number: 8 (max 7)"
        );
        assert_eq!(
            CdTextError::UnknownPackType(0x7F).to_string(),
            "Unknown CD-TEXT pack type code: 0x7F"
        );
        assert_eq!(
            CdTextError::UnknownKeyword("TITEL".into()).to_string(),
            "Unknown CD-TEXT keyword: TITEL"
        );
    }
}
