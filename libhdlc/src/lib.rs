//! Decoder for single High-level Data Link Control (HDLC) frames, as used by
//! the IEC 62056-46 data link layer (frame format type 3).
//!
//! A frame is decoded in one pass: flag, frame format, destination and
//! source address, control field and header check sequence, followed by the
//! optional information field with its frame check sequence and the closing
//! flag. Both check sequences and the declared frame length are validated.
//!
//! ```
//! let frame = hdlc::decode("7ea00703413142e27e").unwrap();
//!
//! assert_eq!(frame.control.command_response, hdlc::FrameType::Rr);
//! assert_eq!(frame.hcs, 57922);
//! assert!(frame.information.is_none());
//! ```

pub mod address;
pub mod check;
pub mod consts;
pub mod control;
pub mod crc;
pub mod decoder;
pub mod format;
pub mod frame;
pub mod reader;

pub use address::Address;
pub use check::ChecksumKind;
pub use control::{Control, FrameType};
pub use decoder::{decode, decode_bytes, Error};
pub use format::FrameFormat;
pub use frame::Frame;
pub use reader::Reader;
