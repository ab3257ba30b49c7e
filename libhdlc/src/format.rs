//! Frame format field: frame length, segmentation bit and format type.

use super::consts;
use super::decoder::Error;
use super::reader::Reader;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameFormat {
    /// Number of bytes between the opening and closing flag.
    pub frame_len: u16,
    pub segmentation: bool,
    pub format_type: u16,
}

impl FrameFormat {
    pub fn from_value(value: u16) -> Self {
        Self {
            frame_len: length(value),
            segmentation: segmentation(value),
            format_type: format_type(value),
        }
    }
}


pub fn length(value: u16) -> u16 {
    value & consts::format::LENGTH
}

pub fn segmentation(value: u16) -> bool {
    value & consts::format::SEGMENTATION != 0
}

/// Format type of the frame.
///
/// Only the masked word of type 3 frames is reduced to its type number. Any
/// other type is returned as masked word, i.e. still in bits 12 to 15.
pub fn format_type(value: u16) -> u16 {
    match value & consts::format::TYPE {
        consts::format::TYPE_3 => 3,
        other => other,
    }
}

pub fn read(reader: &mut Reader) -> Result<FrameFormat, Error> {
    let value = reader.read_u16()?;
    let format = FrameFormat::from_value(value);

    tracing::trace!("frame format: 0x{value:04x} -> {format:?}");
    Ok(format)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bit_fields() {
        assert_eq!(length(40992), 32);
        assert!(!segmentation(40997));
        assert!(segmentation(0xa800));
        assert_eq!(format_type(40985), 3);

        assert_eq!(length(0xffff), 0x7ff);
        assert_eq!(format_type(0x9fa0), 0x9000);
        assert_eq!(format_type(0x0011), 0);
    }

    #[test]
    fn test_read() {
        let mut reader = Reader::new(vec![0xa0, 0x11]);

        assert_eq!(read(&mut reader), Ok(FrameFormat {
            frame_len: 17,
            segmentation: false,
            format_type: 3,
        }));
        assert_eq!(reader.bytes_consumed(), 2);
    }
}
