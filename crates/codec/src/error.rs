use thiserror::Error;

/// Failure while decoding wire bytes or hex text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Input ended before a read of `needed` bytes could complete.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    /// A tag byte, compact integer or bitfield is outside its defined domain.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    /// Bytes remained after a whole-input decode.
    #[error("{remaining} trailing bytes after decoded value")]
    TrailingBytes { remaining: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl CodecError {
    pub fn is_unexpected_end(&self) -> bool {
        matches!(self, CodecError::UnexpectedEnd { .. })
    }

    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, CodecError::InvalidEncoding(_))
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Builds an `InvalidEncoding` error and records the rejection.
pub(crate) fn invalid(reason: &'static str) -> CodecError {
    tracing::debug!(reason, "rejecting malformed input");
    CodecError::InvalidEncoding(reason)
}
