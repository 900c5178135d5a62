//! In-memory store for synthetic targets and tests

use super::Store;
use std::io;

/// A growable byte-vector store.
///
/// Reads past the end are short or empty, like a file; writes past the end
/// extend the store with zero fill, like a sparse file.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    bytes: Vec<u8>,
}

impl MemStore {
    /// Creates an empty store
    pub fn new() -> Self {
        MemStore::default()
    }

    /// Creates a store holding `bytes`
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        MemStore {
            bytes: bytes.into(),
        }
    }

    /// Creates a zero-filled store of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        MemStore {
            bytes: vec![0; len],
        }
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the store holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Store for MemStore {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(0);
        };
        if offset >= self.bytes.len() {
            return Ok(0);
        }
        let available = &self.bytes[offset..];
        let n = buf.len().min(available.len());
        buf[..n].copy_from_slice(&available[..n]);
        Ok(n)
    }

    fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<usize> {
        let offset = usize::try_from(offset)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "offset out of range"))?;
        let end = offset + buf.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(buf);
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_bounds() {
        let mut store = MemStore::from_bytes(b"hello world".to_vec());
        let mut buf = [0u8; 5];
        assert_eq!(store.read_at(6, &mut buf).unwrap(), 5);
        assert_eq!(&buf, b"world");
    }

    #[test]
    fn test_read_short_at_end() {
        let mut store = MemStore::from_bytes(b"abc".to_vec());
        let mut buf = [0u8; 8];
        assert_eq!(store.read_at(1, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"bc");
        assert_eq!(store.read_at(3, &mut buf).unwrap(), 0);
        assert_eq!(store.read_at(100, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_write_extends_with_zero_fill() {
        let mut store = MemStore::new();
        assert_eq!(store.write_at(4, b"xy").unwrap(), 2);
        assert_eq!(store.as_bytes(), &[0, 0, 0, 0, b'x', b'y']);
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let mut store = MemStore::from_bytes(b"aaaa".to_vec());
        assert_eq!(store.write_at(1, b"bb").unwrap(), 2);
        assert_eq!(store.as_bytes(), b"abba");
        assert_eq!(store.len(), 4);
    }
}
