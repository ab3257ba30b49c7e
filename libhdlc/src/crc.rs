//! CRC-16/X-25 frame check sequence (FCS-16) as defined in ISO 13239.
//!
//! Reflected polynomial `0x8408`, initial value `0xFFFF`, final XOR `0xFFFF`.
//! The result is transmitted least significant octet first.

const POLY: u16 = 0x8408;
const INIT: u16 = 0xFFFF;
const XOR_OUT: u16 = 0xFFFF;

const TABLE: [u16; 256] = make_table();

const fn make_table() -> [u16; 256] {
    let mut table = [0; 256];

    let mut i = 0;
    while i < 256 {
        let mut crc = i as u16;

        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
            bit += 1;
        }

        table[i] = crc;
        i += 1;
    }

    table
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    state: u16,
}

impl Crc16 {
    pub fn new() -> Self {
        Self { state: INIT }
    }

    pub fn put_u8(&mut self, byte: u8) -> &mut Self {
        let idx = (self.state ^ byte as u16) & 0xFF;
        self.state = (self.state >> 8) ^ TABLE[idx as usize];
        self
    }

    pub fn put_bytes<'a, T: IntoIterator<Item = &'a u8>>(&mut self, bytes: T) -> &mut Self {
        for b in bytes.into_iter() {
            self.put_u8(*b);
        }
        self
    }

    pub fn value(&self) -> u16 {
        self.state ^ XOR_OUT
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}


pub fn crc16(data: &[u8]) -> u16 {
    Crc16::new().put_bytes(data).value()
}
