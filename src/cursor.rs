//! Bounds-checked byte cursor over the upstream binary encoding.
//!
//! Integers are little-endian. Strings carry a varuint32 byte-length prefix.
//! A failed read leaves the position where it was before the read.

use crate::errors::ReadError;

pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ReadError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(ReadError::OutOfBounds {
                needed: n,
                remaining,
            });
        }

        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;

        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        let byte = *self.data.get(self.pos).ok_or(ReadError::OutOfBounds {
            needed: 1,
            remaining: 0,
        })?;

        let value = match byte {
            0 => false,
            1 => true,
            other => return Err(ReadError::InvalidBool(other)),
        };
        self.pos += 1;

        Ok(value)
    }

    pub fn read_u64(&mut self) -> Result<u64, ReadError> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a LEB128 unsigned integer of at most 5 bytes.
    pub fn read_varuint32(&mut self) -> Result<u32, ReadError> {
        let start = self.pos;
        let mut value = 0u64;
        let mut shift = 0;

        loop {
            if shift >= 35 {
                self.pos = start;
                return Err(ReadError::InvalidVarint);
            }

            let byte = match self.read_u8() {
                Ok(byte) => byte,
                Err(err) => {
                    self.pos = start;
                    return Err(err);
                }
            };

            value |= u64::from(byte & 0x7f) << shift;
            shift += 7;

            if byte & 0x80 == 0 {
                break;
            }
        }

        u32::try_from(value).map_err(|_| {
            self.pos = start;
            ReadError::InvalidVarint
        })
    }

    /// Reads a varuint32 length followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, ReadError> {
        let start = self.pos;

        let result = self.read_varuint32().and_then(|len| {
            let bytes = self.read_bytes(len as usize)?;
            std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| ReadError::InvalidUtf8)
        });

        if result.is_err() {
            self.pos = start;
        }

        result
    }
}
