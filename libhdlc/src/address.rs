//! Destination and source address fields using HDLC extended addressing.
//!
//! An address spans one to four octets. The least significant bit of each
//! octet is cleared if another octet follows and set on the last octet.

use std::fmt;

use arrayvec::ArrayVec;

use super::consts;
use super::decoder::Error;
use super::reader::Reader;


#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Address {
    octets: ArrayVec<u8, { consts::address::MAX_LEN }>,
}

impl Address {
    pub fn from_octets(octets: &[u8]) -> Option<Self> {
        let octets = ArrayVec::try_from(octets).ok()?;
        Some(Self { octets })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.octets
    }

    pub fn len(&self) -> usize {
        self.octets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Whether the last octet carries the end-of-address bit.
    pub fn is_terminated(&self) -> bool {
        self.octets.last().is_some_and(|b| b & consts::address::END != 0)
    }

    /// Logical address, upper octet first, seven bits per octet.
    pub fn value(&self) -> u32 {
        self.octets.iter().fold(0, |acc, b| (acc << 7) | (b >> 1) as u32)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.octets))
    }
}


/// Read one address field.
///
/// Reading stops after the octet with the end-of-address bit set. If no such
/// octet is found within four octets, the four octets read so far are
/// returned as they are.
pub fn read(reader: &mut Reader) -> Result<Address, Error> {
    let mut octets = ArrayVec::new();

    for _ in 0..consts::address::MAX_LEN {
        let b = reader.read_u8()?;
        octets.push(b);

        if b & consts::address::END == consts::address::END {
            let address = Address { octets };
            tracing::trace!("address: {address}");
            return Ok(address);
        }
    }

    let address = Address { octets };
    tracing::warn!(
        "address field {address} not terminated within {} octets at offset {}",
        consts::address::MAX_LEN,
        reader.bytes_consumed(),
    );

    Ok(address)
}
