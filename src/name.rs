//! Account names and token symbols packed into 64-bit integers.
//!
//! A name holds up to 13 characters from `.12345abcdefghijklmnopqrstuvwxyz`:
//! twelve 5-bit characters starting at the high bits, then one 4-bit
//! character in the low nibble. A symbol code holds up to 7 ASCII letters,
//! one per byte, first character in the lowest byte.

use std::{fmt, str::FromStr};

use crate::errors::NameError;

const NAME_CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";
const NAME_MAX_LEN: usize = 13;
const SYMBOL_CODE_MAX_LEN: usize = 7;

/// Decodes a packed name, dropping trailing `.` padding.
pub fn name_to_string(value: u64) -> String {
    let mut out = [b'.'; NAME_MAX_LEN];
    let mut tmp = value;

    for i in 0..NAME_MAX_LEN {
        let (mask, width) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
        out[NAME_MAX_LEN - 1 - i] = NAME_CHARMAP[(tmp & mask) as usize];
        tmp >>= width;
    }

    let len = out.iter().rposition(|&c| c != b'.').map_or(0, |i| i + 1);
    out[..len].iter().map(|&c| char::from(c)).collect()
}

fn name_digit(c: char) -> Result<u64, NameError> {
    match c {
        '.' => Ok(0),
        '1'..='5' => Ok(c as u64 - '1' as u64 + 1),
        'a'..='z' => Ok(c as u64 - 'a' as u64 + 6),
        _ => Err(NameError::InvalidNameChar(c)),
    }
}

/// Packs `s` into a name value.
pub fn string_to_name(s: &str) -> Result<u64, NameError> {
    if s.chars().count() > NAME_MAX_LEN {
        return Err(NameError::NameTooLong);
    }

    let mut value = 0u64;
    for (i, c) in s.chars().enumerate() {
        let digit = name_digit(c)?;
        if i < NAME_MAX_LEN - 1 {
            value |= digit << (64 - 5 * (i + 1));
        } else if digit > 0x0f {
            return Err(NameError::InvalidLastChar(c));
        } else {
            value |= digit;
        }
    }

    Ok(value)
}

/// Decodes a symbol code (a symbol value with the precision byte removed).
pub fn symbol_code_to_string(mut code: u64) -> String {
    let mut out = String::new();
    while code > 0 {
        out.push(char::from((code & 0xff) as u8));
        code >>= 8;
    }
    out
}

pub fn string_to_symbol_code(s: &str) -> Result<u64, NameError> {
    if s.is_empty() || s.len() > SYMBOL_CODE_MAX_LEN {
        return Err(NameError::InvalidSymbolLength);
    }

    let mut code = 0u64;
    for c in s.chars().rev() {
        if !c.is_ascii_uppercase() {
            return Err(NameError::InvalidSymbolChar(c));
        }
        code = (code << 8) | c as u64;
    }

    Ok(code)
}

/// A name value. Displays as its decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Name(pub u64);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&name_to_string(self.0))
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        string_to_name(s).map(Name)
    }
}

/// Token symbol: decimal precision plus symbol code.
///
/// Packed as `code << 8 | precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub precision: u8,
    pub code: u64,
}

impl Symbol {
    pub fn new(precision: u8, code: &str) -> Result<Self, NameError> {
        Ok(Self {
            precision,
            code: string_to_symbol_code(code)?,
        })
    }

    pub fn from_raw(raw: u64) -> Self {
        Self {
            precision: (raw & 0xff) as u8,
            code: raw >> 8,
        }
    }

    pub fn to_raw(self) -> u64 {
        (self.code << 8) | u64::from(self.precision)
    }

    pub fn code_string(&self) -> String {
        symbol_code_to_string(self.code)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code_string())
    }
}

impl FromStr for Symbol {
    type Err = NameError;

    /// Parses `"<precision>,<CODE>"`, e.g. `"4,EOS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| NameError::InvalidSymbol(s.to_string()))?;
        let precision = precision
            .trim()
            .parse::<u8>()
            .map_err(|_| NameError::InvalidSymbol(s.to_string()))?;

        Symbol::new(precision, code.trim())
    }
}
