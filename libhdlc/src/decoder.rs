use std::fmt;

use bytes::Bytes;

use super::address;
use super::check::{self, ChecksumKind};
use super::consts;
use super::control;
use super::format::{self, FrameFormat};
use super::reader::Reader;
use super::Frame;


#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidEncoding(hex::FromHexError),
    FrameGuard {
        offset: usize,
        found: u8,
    },
    Underrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    Checksum {
        kind: ChecksumKind,
        expected: u16,
        computed: u16,
    },
    Length {
        expected: usize,
        actual: usize,
    },
}

impl From<hex::FromHexError> for Error {
    fn from(value: hex::FromHexError) -> Self {
        Self::InvalidEncoding(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding(e) => {
                write!(f, "invalid hex encoding: {e}")
            },
            Error::FrameGuard { offset, found } => {
                write!(f, "wrong frame guard at offset {offset}: expected 0x7e, got 0x{found:02x}")
            },
            Error::Underrun { offset, needed, remaining } => {
                write!(f, "frame truncated at offset {offset}: need {needed} bytes, {remaining} left")
            },
            Error::Checksum { kind, expected, computed } => {
                write!(f, "{kind} checksum validation failed. Expected {expected}, got {computed}")
            },
            Error::Length { expected, actual } => {
                write!(f, "length validation failed. Expected {expected}, got {actual}")
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidEncoding(e) => Some(e),
            _ => None,
        }
    }
}


/// Decode a single hex-encoded frame.
pub fn decode(src: &str) -> Result<Frame, Error> {
    let mut reader = Reader::from_hex(src)?;
    decode_frame(&mut reader)
}

/// Decode a single frame from its raw bytes.
pub fn decode_bytes(data: impl Into<Bytes>) -> Result<Frame, Error> {
    let mut reader = Reader::new(data);
    decode_frame(&mut reader)
}

pub fn decode_frame(reader: &mut Reader) -> Result<Frame, Error> {
    let flag = read_flag(reader)?;

    // checksums cover everything after the opening flag
    let start = reader.bytes_consumed();

    let frame_format = format::read(reader)?;
    let dest_addr = address::read(reader)?;
    let src_addr = address::read(reader)?;
    let control = control::read(reader)?;
    let hcs = check::read(reader, start, ChecksumKind::Hcs)?;

    let (information, fcs) = if frame_format.frame_len as usize == reader.bytes_consumed() - consts::size::FLAG {
        (None, None)
    } else {
        let information = read_information(reader, &frame_format)?;
        let fcs = check::read(reader, start, ChecksumKind::Fcs)?;
        check::validate_length(&frame_format, reader.bytes_consumed())?;

        (Some(information), Some(fcs))
    };

    let flag_end = read_flag(reader)?;

    if reader.remaining() > 0 {
        tracing::debug!("ignoring {} trailing bytes after closing flag", reader.remaining());
    }

    Ok(Frame {
        flag,
        frame_format,
        dest_addr,
        src_addr,
        control,
        hcs,
        information,
        fcs,
        flag_end,
    })
}

pub fn read_flag(reader: &mut Reader) -> Result<u8, Error> {
    let offset = reader.bytes_consumed();
    let flag = reader.read_u8()?;

    if flag != consts::flags::FRAME {
        return Err(Error::FrameGuard { offset, found: flag });
    }

    Ok(flag)
}

/// Read the information field, spanning everything up to the FCS.
pub fn read_information(reader: &mut Reader, format: &FrameFormat) -> Result<Bytes, Error> {
    let consumed = reader.bytes_consumed();
    let frame_len = format.frame_len as usize;

    let len = frame_len
        .checked_sub(consts::size::FLAG + consumed)
        .ok_or(Error::Length {
            expected: frame_len,
            actual: consumed.saturating_sub(consts::size::FLAG),
        })?;

    let information = reader.read(len)?;

    tracing::trace!("information: {len} bytes");
    Ok(information)
}


#[cfg(test)]
mod test {
    use super::*;

    use crate::control::FrameType;

    #[test]
    fn test_read_flag() {
        let mut reader = Reader::new(vec![0x7e, 0x7f]);

        assert_eq!(read_flag(&mut reader), Ok(0x7e));
        assert_eq!(read_flag(&mut reader), Err(Error::FrameGuard { offset: 1, found: 0x7f }));
        assert!(matches!(read_flag(&mut reader), Err(Error::Underrun { .. })));
    }

    #[test]
    fn test_read_information() {
        let data = hex::decode("7ea0200361931b9f8180140502080006020800070400000007080400000007b3c67e").unwrap();
        let format = FrameFormat { frame_len: 32, segmentation: false, format_type: 3 };

        // flag, format, addresses, control and HCS already consumed
        let mut reader = Reader::new(data);
        reader.read(8).unwrap();

        let info = read_information(&mut reader, &format);
        assert_eq!(
            hex::encode(info.unwrap()),
            "8180140502080006020800070400000007080400000007",
        );
        assert_eq!(reader.bytes_consumed(), 31);
    }

    #[test]
    fn test_read_information_short_length() {
        let format = FrameFormat { frame_len: 5, segmentation: false, format_type: 3 };

        let mut reader = Reader::new(vec![0; 16]);
        reader.read(8).unwrap();

        assert_eq!(
            read_information(&mut reader, &format),
            Err(Error::Length { expected: 5, actual: 7 }),
        );
    }

    #[test]
    fn test_decode() {
        let frame = decode("7ea011610330d3bee6e700c70181010052ab7e").unwrap();

        assert_eq!(frame.flag, 0x7e);
        assert_eq!(frame.frame_format, FrameFormat { frame_len: 17, segmentation: false, format_type: 3 });
        assert_eq!(frame.dest_addr.to_string(), "61");
        assert_eq!(frame.src_addr.to_string(), "03");
        assert_eq!(frame.control.command_response, FrameType::I);
        assert_eq!(frame.hcs, 48851);
        assert_eq!(frame.information.as_deref(), Some(&[0xe6, 0xe7, 0x00, 0xc7, 0x01, 0x81, 0x01, 0x00][..]));
        assert_eq!(frame.fcs, Some(43858));
        assert_eq!(frame.flag_end, 0x7e);
    }

    #[test]
    fn test_decode_header_only() {
        let frame = decode("7ea00703413142e27e").unwrap();

        assert_eq!(frame.information, None);
        assert_eq!(frame.fcs, None);
        assert_eq!(frame.control.command_response, FrameType::Rr);
        assert_eq!(frame.hcs, 57922);
    }

    #[test]
    fn test_decode_errors() {
        // opening flag
        assert_eq!(
            decode("7fa011610330d3bee6e700c70181010052ab7e"),
            Err(Error::FrameGuard { offset: 0, found: 0x7f }),
        );

        // closing flag
        assert_eq!(
            decode("7ea011610330d3bee6e700c70181010052ab7f"),
            Err(Error::FrameGuard { offset: 18, found: 0x7f }),
        );

        // header checksum
        assert!(matches!(
            decode("7ea011610330d3bfe6e700c70181010052ab7e"),
            Err(Error::Checksum { kind: ChecksumKind::Hcs, .. }),
        ));

        // payload corruption
        assert!(matches!(
            decode("7ea011610330d3bee6e700c70181010152ab7e"),
            Err(Error::Checksum { kind: ChecksumKind::Fcs, expected: 43858, .. }),
        ));

        // truncated
        assert!(matches!(decode("7ea011610330d3bee6e700"), Err(Error::Underrun { .. })));
        assert!(matches!(decode(""), Err(Error::Underrun { offset: 0, .. })));

        // transport encoding
        assert!(matches!(decode("7ea0116"), Err(Error::InvalidEncoding(_))));
    }
}
