//! Header and frame check sequence validation, frame length cross-check.

use std::fmt;

use super::crc;
use super::decoder::Error;
use super::format::FrameFormat;
use super::reader::Reader;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    Hcs,
    Fcs,
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumKind::Hcs => f.write_str("HCS"),
            ChecksumKind::Fcs => f.write_str("FCS"),
        }
    }
}


pub fn validate_checksum(expected: u16, data: &[u8], kind: ChecksumKind) -> Result<(), Error> {
    let computed = crc::crc16(data);

    if expected != computed {
        return Err(Error::Checksum { kind, expected, computed });
    }

    tracing::debug!("{kind} valid: 0x{computed:04x}");
    Ok(())
}

/// Check the declared frame length against the number of bytes consumed,
/// the opening flag included.
pub fn validate_length(format: &FrameFormat, consumed: usize) -> Result<(), Error> {
    let expected = format.frame_len as usize;
    let actual = consumed.saturating_sub(1);

    if expected != actual {
        return Err(Error::Length { expected, actual });
    }

    Ok(())
}

/// Read a check sequence field and validate it against the bytes consumed
/// from `start` up to the field.
pub fn read(reader: &mut Reader, start: usize, kind: ChecksumKind) -> Result<u16, Error> {
    let end = reader.bytes_consumed();

    // transmitted low octet first
    let value = reader.read_u16()?.swap_bytes();

    let covered = reader.raw().get(start..end).unwrap_or_default();
    validate_checksum(value, covered, kind)?;

    Ok(value)
}
