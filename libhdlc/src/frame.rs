//! Decoded frame and its textual rendering.

use std::fmt;

use bytes::Bytes;

use super::address::Address;
use super::control::Control;
use super::format::FrameFormat;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub flag: u8,
    pub frame_format: FrameFormat,
    pub dest_addr: Address,
    pub src_addr: Address,
    pub control: Control,
    pub hcs: u16,
    pub information: Option<Bytes>,
    pub fcs: Option<u16>,
    pub flag_end: u8,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flag: {:02x}", self.flag)?;
        writeln!(f, "Frame format: {}", self.frame_format)?;
        writeln!(f, "Destination address: {}", self.dest_addr)?;
        writeln!(f, "Source address: {}", self.src_addr)?;
        writeln!(f, "Control: {}", self.control)?;
        writeln!(f, "Header check sequence: {}", self.hcs)?;

        match &self.information {
            Some(info) => writeln!(f, "Information: {}", hex::encode(info))?,
            None => writeln!(f, "Information: None")?,
        }

        match self.fcs {
            Some(fcs) => writeln!(f, "Frame check sequence: {fcs}")?,
            None => writeln!(f, "Frame check sequence: None")?,
        }

        writeln!(f, "Flag: {:02x}", self.flag_end)
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tFrame length: {}", self.frame_len)?;
        write!(f, "\n\tSegmentation bit: {}", self.segmentation)?;
        write!(f, "\n\tFormat type: {}", self.format_type)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tLSB: {}", self.lsb)?;
        write!(f, "\n\tCommand/Response: {}", self.command_response)?;
        write!(f, "\n\tReceive: {}", self.receive)?;
        write!(f, "\n\tSend: {}", self.send)?;
        write!(f, "\n\tPoll/Final: {}", self.poll_final)
    }
}
