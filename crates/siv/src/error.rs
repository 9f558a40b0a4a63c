//! The errors returned by this crate.

#![forbid(unsafe_code)]

use core::{error, fmt};

/// The block-cipher factory produced a cipher whose block size
/// is not 16 bytes.
///
/// SIV mode is defined over 128-bit block ciphers only, so this
/// is a configuration error: it is reported by
/// [`Siv::new`][crate::Siv::new] before any data is processed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidBlockSize {
    /// The block size, in bytes, of the ciphers the factory
    /// creates.
    pub got: usize,
}

impl fmt::Display for InvalidBlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block cipher must have a 16-byte block size (got {})",
            self.got
        )
    }
}

impl error::Error for InvalidBlockSize {}

/// The underlying cipher rejected the length of a supplied key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidKeySize;

impl InvalidKeySize {
    /// Returns a human-readable string describing the error.
    pub const fn as_str(&self) -> &'static str {
        "key size is invalid"
    }
}

impl fmt::Display for InvalidKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl error::Error for InvalidKeySize {}

/// An error from [`Siv::seal`][crate::Siv::seal].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SealError {
    /// The size of a key is incorrect.
    InvalidKeySize(InvalidKeySize),
    /// The plaintext is too long.
    PlaintextTooLong,
    /// The associated-data vector has more than
    /// [`MAX_ASSOCIATED_DATA`][crate::Siv::MAX_ASSOCIATED_DATA]
    /// items.
    TooManyAssociatedData,
}

impl SealError {
    /// Returns a human-readable string describing the error.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidKeySize(err) => err.as_str(),
            Self::PlaintextTooLong => "plaintext too long",
            Self::TooManyAssociatedData => "too many associated data items",
        }
    }
}

impl fmt::Display for SealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl error::Error for SealError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidKeySize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidKeySize> for SealError {
    fn from(err: InvalidKeySize) -> Self {
        Self::InvalidKeySize(err)
    }
}

/// An error from [`Siv::open`][crate::Siv::open].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpenError {
    /// The size of a key is incorrect.
    InvalidKeySize(InvalidKeySize),
    /// The associated-data vector has more than
    /// [`MAX_ASSOCIATED_DATA`][crate::Siv::MAX_ASSOCIATED_DATA]
    /// items.
    TooManyAssociatedData,
    /// The input is shorter than the 16-byte synthetic IV.
    ///
    /// This is kept distinct from
    /// [`Authentication`][Self::Authentication] so callers can
    /// log and alert on the two separately. On any channel an
    /// attacker can observe (e.g., a network response), report
    /// both identically.
    InvalidLength,
    /// The ciphertext could not be authenticated.
    ///
    /// No plaintext is released.
    Authentication,
}

impl OpenError {
    /// Returns a human-readable string describing the error.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidKeySize(err) => err.as_str(),
            Self::TooManyAssociatedData => "too many associated data items",
            Self::InvalidLength => "input shorter than the synthetic IV",
            Self::Authentication => "authentication error",
        }
    }
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl error::Error for OpenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidKeySize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidKeySize> for OpenError {
    fn from(err: InvalidKeySize) -> Self {
        Self::InvalidKeySize(err)
    }
}
