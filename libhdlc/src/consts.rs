//! Flag bytes and bit masks used in the HDLC frame layout.

pub mod flags {
    pub const FRAME: u8 = 0x7E;
}

pub mod format {
    pub const LENGTH: u16 = 0x07FF;
    pub const SEGMENTATION: u16 = 0x0800;
    pub const TYPE: u16 = 0xF000;

    /// Masked format word of a frame format type 3 frame.
    pub const TYPE_3: u16 = 0xA000;
}

pub mod address {
    pub const END: u8 = 0x01;
    pub const MAX_LEN: usize = 4;
}

pub mod control {
    pub const LSB: u8 = 0x01;
    pub const SEND: u8 = 0x0E;
    pub const POLL_FINAL: u8 = 0x10;
    pub const RECEIVE: u8 = 0xE0;
}

pub mod size {
    pub const FLAG: usize = 1;
}
