//! Control field and classification of frame types.

use super::consts;
use super::decoder::Error;
use super::reader::Reader;


/// Command or response type encoded in the control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    /// Information transfer.
    I,
    /// Receive ready.
    Rr,
    /// Receive not ready.
    Rnr,
    /// Set normal response mode.
    Snrm,
    /// Disconnect.
    Disc,
    /// Unnumbered acknowledge.
    Ua,
    /// Disconnected mode.
    Dm,
    /// Frame reject.
    Frmr,
    /// Unnumbered information.
    Ui,
    Unclassified,
}

impl FrameType {
    pub fn name(&self) -> &'static str {
        match self {
            FrameType::I => "I",
            FrameType::Rr => "RR",
            FrameType::Rnr => "RNR",
            FrameType::Snrm => "SNRM",
            FrameType::Disc => "DISC",
            FrameType::Ua => "UA",
            FrameType::Dm => "DM",
            FrameType::Frmr => "FRMR",
            FrameType::Ui => "UI",
            FrameType::Unclassified => "",
        }
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Control {
    pub lsb: u8,
    pub command_response: FrameType,
    pub receive: u8,
    pub send: u8,
    pub poll_final: u8,
}

impl Control {
    pub fn from_value(value: u8) -> Self {
        let lsb = lsb(value);
        let receive = receive(value);
        let send = send(value);

        Self {
            lsb,
            command_response: classify(send, receive, lsb),
            receive,
            send,
            poll_final: poll_final(value),
        }
    }
}


pub fn lsb(value: u8) -> u8 {
    value & consts::control::LSB
}

pub fn poll_final(value: u8) -> u8 {
    match value & consts::control::POLL_FINAL {
        consts::control::POLL_FINAL => 1,
        other => other,
    }
}

/// Receive sequence number, left in place in bits 5 to 7.
pub fn receive(value: u8) -> u8 {
    value & consts::control::RECEIVE
}

/// Send sequence number, left in place in bits 1 to 3.
pub fn send(value: u8) -> u8 {
    value & consts::control::SEND
}

/// Classify the frame type from the masked control sub-fields.
///
/// Rules are checked in order, the first match wins.
pub fn classify(send: u8, receive: u8, lsb: u8) -> FrameType {
    match (lsb, receive, send) {
        (0x0, _, _) => FrameType::I,
        (_, 0x80, 0x2) => FrameType::Snrm,
        (_, 0x40, 0x2) => FrameType::Disc,
        (_, 0x60, 0x2) => FrameType::Ua,
        (_, 0x00, 0xe) => FrameType::Dm,
        (_, 0x80, 0x6) => FrameType::Frmr,
        (_, 0x00, 0x2) => FrameType::Ui,
        (_, _, 0x4) => FrameType::Rnr,
        (_, _, 0x0) => FrameType::Rr,
        (_, _, _) => FrameType::Unclassified,
    }
}

pub fn read(reader: &mut Reader) -> Result<Control, Error> {
    let value = reader.read_u8()?;
    let control = Control::from_value(value);

    tracing::trace!("control: 0x{value:02x} -> {control:?}");
    Ok(control)
}
