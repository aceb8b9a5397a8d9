//! Error types for reading primitives, writing primitives and flat decoding.

use thiserror::Error;

/// Errors produced by [crate::cursor::ByteCursor] reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Fewer bytes remain than the read requires.
    #[error("out of data: needed {needed} byte(s), {remaining} remaining")]
    OutOfBounds { needed: usize, remaining: usize },
    /// A variable-length integer is longer than 5 bytes or overflows 32 bits.
    #[error("invalid varuint32 encoding")]
    InvalidVarint,
    /// A bool byte other than 0 or 1.
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),
    /// String bytes are not valid UTF-8.
    #[error("string is not valid utf-8")]
    InvalidUtf8,
}

/// Errors produced by [crate::writer::ByteWriter].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// String length does not fit the varuint32 prefix.
    #[error("string of {0} bytes exceeds the varuint32 length prefix")]
    StringTooLong(usize),
}

/// Errors produced when converting text to name or symbol values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is longer than 13 characters")]
    NameTooLong,
    #[error("invalid character {0:?} in name")]
    InvalidNameChar(char),
    /// The 13th character of a name only has 4 bits available.
    #[error("invalid 13th character {0:?} in name")]
    InvalidLastChar(char),
    #[error("symbol code must be 1 to 7 characters")]
    InvalidSymbolLength,
    #[error("invalid character {0:?} in symbol code")]
    InvalidSymbolChar(char),
    #[error("invalid symbol {0:?}")]
    InvalidSymbol(String),
}

/// Errors produced when building a [crate::schema::Schema].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field names and field types have different lengths.
    #[error("schema has {names} name(s) but {types} type(s)")]
    LengthMismatch { names: usize, types: usize },
}

/// A primitive read failed while decoding a schema field.
///
/// No records are returned alongside this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode field #{index} {field:?} at byte {offset}: {source}")]
pub struct DecodeError {
    /// Position of the failing field in the schema.
    pub index: usize,
    /// Name of the failing field.
    pub field: String,
    /// Cursor position where the failing read started.
    pub offset: usize,
    #[source]
    pub source: ReadError,
}
