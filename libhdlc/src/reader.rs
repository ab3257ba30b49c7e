//! Read cursor over the raw bytes of a single frame.

use bytes::{Buf, Bytes};

use super::decoder::Error;


/// Sequential reader over a frame buffer.
///
/// The reader keeps the complete raw frame around so that checksums can be
/// computed over the original byte ranges after the fields have been read.
#[derive(Debug, Clone)]
pub struct Reader {
    data: Bytes,
    pos: usize,
}

impl Reader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into(), pos: 0 }
    }

    /// Decode a hex-encoded frame and create a reader over its bytes.
    pub fn from_hex(src: &str) -> Result<Self, Error> {
        let data = hex::decode(src.trim())?;
        Ok(Self::new(data))
    }

    pub fn read(&mut self, n: usize) -> Result<Bytes, Error> {
        if self.remaining() < n {
            return Err(Error::Underrun {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }

        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;

        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read(1)?.get_u8())
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(self.read(2)?.get_u16())
    }

    pub fn bytes_consumed(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Bytes consumed from `start` up to the current position.
    pub fn consumed_since(&self, start: usize) -> &[u8] {
        &self.data[start.min(self.pos)..self.pos]
    }

    pub fn raw(&self) -> &Bytes {
        &self.data
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read() {
        let mut reader = Reader::new(vec![0x7e, 0xa0, 0x11, 0x61]);

        assert_eq!(reader.read_u8(), Ok(0x7e));
        assert_eq!(reader.read_u16(), Ok(0xa011));
        assert_eq!(reader.bytes_consumed(), 3);
        assert_eq!(reader.consumed_since(1), &[0xa0, 0x11]);

        assert_eq!(reader.read(2), Err(Error::Underrun { offset: 3, needed: 2, remaining: 1 }));
        assert_eq!(reader.bytes_consumed(), 3);

        assert_eq!(&reader.read(1).unwrap()[..], &[0x61]);
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.read(0).unwrap().len(), 0);
    }

    #[test]
    fn test_from_hex() {
        let reader = Reader::from_hex("7ea011610330d3bee6e700c70181010052ab7e").unwrap();
        assert_eq!(reader.raw().len(), 19);
        assert_eq!(reader.bytes_consumed(), 0);

        assert!(matches!(Reader::from_hex("7ea"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(Reader::from_hex("7ezz"), Err(Error::InvalidEncoding(_))));
    }
}
