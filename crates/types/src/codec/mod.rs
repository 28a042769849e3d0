// Path: crates/types/src/codec/mod.rs

//! The length-prefixed, little-endian binary codec used by governance storage records.
//!
//! Records are read with a single forward-only [`Reader`] cursor. The wire rules are:
//!
//! * unsigned integers are fixed-width little-endian;
//! * `Option<T>` is a `0x00`/`0x01` tag byte followed by `T` when present;
//! * strings are a `u32` byte length followed by UTF-8 bytes;
//! * maps are a `u32` entry count followed by the `(key, value)` pairs back to back;
//! * tagged unions are a single discriminant byte (the 0-based variant index)
//!   followed by the variant's payload;
//! * fixed-size byte arrays are written raw, with no length prefix.
//!
//! Trailing bytes after a successful decode are ignored so that older readers
//! keep working when the record schema grows new trailing fields.

use crate::error::{DecodeError, DecodeErrorKind};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A type that can be read from the binary record format.
pub trait BinaryDecode: Sized {
    /// Reads one value from the cursor, advancing it past the consumed bytes.
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

/// A type that can be written in the binary record format.
pub trait BinaryEncode {
    /// Appends the encoding of `self` to the writer.
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String>;
}

/// A forward-only cursor over an encoded buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    fn error(&self, kind: DecodeErrorKind, offset: usize) -> DecodeError {
        DecodeError::new(kind, offset)
    }

    /// Consumes exactly `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        let slice = self
            .pos
            .checked_add(n)
            .and_then(|end| self.buf.get(self.pos..end))
            .ok_or_else(|| {
                self.error(
                    DecodeErrorKind::TruncatedInput {
                        needed: n,
                        remaining,
                    },
                    self.pos,
                )
            })?;
        self.pos += n;
        Ok(slice)
    }

    /// Reads a fixed-size byte array with no length prefix.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Reads a tagged-union discriminant byte, returning it with the offset it was read from.
    pub fn read_tag(&mut self) -> Result<(usize, u8), DecodeError> {
        let offset = self.pos;
        Ok((offset, self.read_u8()?))
    }

    /// Reads a `u32` length prefix followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32()? as usize;
        let offset = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| self.error(DecodeErrorKind::InvalidUtf8, offset))
    }
}

/// An append-only output buffer for the binary record format.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the writer, returning the encoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Appends raw bytes with no prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    /// Appends a little-endian `u32`.
    pub fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Appends a little-endian `u64`.
    pub fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Appends a `u32` length or count prefix.
    pub fn write_len(&mut self, len: usize) -> Result<(), String> {
        let len = u32::try_from(len).map_err(|_| format!("length {} exceeds u32", len))?;
        self.write_u32(len);
        Ok(())
    }
}

impl BinaryDecode for u8 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_u8()
    }
}

impl BinaryEncode for u8 {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_u8(*self);
        Ok(())
    }
}

impl BinaryDecode for u32 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_u32()
    }
}

impl BinaryEncode for u32 {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_u32(*self);
        Ok(())
    }
}

impl BinaryDecode for u64 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_u64()
    }
}

impl BinaryEncode for u64 {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_u64(*self);
        Ok(())
    }
}

impl<const N: usize> BinaryDecode for [u8; N] {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_array()
    }
}

impl<const N: usize> BinaryEncode for [u8; N] {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_bytes(self);
        Ok(())
    }
}

impl BinaryDecode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_string()
    }
}

impl BinaryEncode for String {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_len(self.len())?;
        writer.write_bytes(self.as_bytes());
        Ok(())
    }
}

impl<T: BinaryDecode> BinaryDecode for Option<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        match reader.read_tag()? {
            (_, 0) => Ok(None),
            (_, 1) => T::decode(reader).map(Some),
            (offset, found) => Err(DecodeError::invalid_discriminant("Option", found, 2, offset)),
        }
    }
}

impl<T: BinaryEncode> BinaryEncode for Option<T> {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        match self {
            None => {
                writer.write_u8(0);
                Ok(())
            }
            Some(v) => {
                writer.write_u8(1);
                v.encode_to(writer)
            }
        }
    }
}

impl<K, V> BinaryDecode for BTreeMap<K, V>
where
    K: BinaryDecode + Ord + Display,
    V: BinaryDecode,
{
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let count = reader.read_u32()?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let offset = reader.position();
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            if map.contains_key(&key) {
                return Err(DecodeError::new(
                    DecodeErrorKind::DuplicateMapKey {
                        key: key.to_string(),
                    },
                    offset,
                ));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K: BinaryEncode, V: BinaryEncode> BinaryEncode for BTreeMap<K, V> {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_len(self.len())?;
        for (k, v) in self {
            k.encode_to(writer)?;
            v.encode_to(writer)?;
        }
        Ok(())
    }
}

/// Encodes a value into its binary record representation.
pub fn to_bytes<T: BinaryEncode>(v: &T) -> Result<Vec<u8>, String> {
    let mut writer = Writer::new();
    v.encode_to(&mut writer)?;
    Ok(writer.into_inner())
}

/// Decodes a value from the front of `b`. Unconsumed trailing bytes are not an error.
pub fn from_bytes<T: BinaryDecode>(b: &[u8]) -> Result<T, DecodeError> {
    let mut reader = Reader::new(b);
    let value = T::decode(&mut reader)?;
    if reader.remaining() > 0 {
        tracing::debug!(
            consumed = reader.position(),
            trailing = reader.remaining(),
            "ignoring trailing bytes after record"
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
