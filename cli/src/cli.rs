use std::path::PathBuf;

use clap::Parser;


/// Decode HDLC frames given as hex strings
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hex-encoded frames to decode ('-' or none to read from stdin)
    pub frames: Vec<String>,

    /// Read frames from file, one frame per line
    ///
    /// Empty lines and lines starting with '#' are skipped. Whitespace
    /// inside a frame is ignored.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print a hex dump of the raw frame bytes
    #[arg(short, long)]
    pub dump: bool,

    /// Continue with the next frame after a decoding error
    #[arg(short, long)]
    pub keep_going: bool,
}

impl Args {
    pub fn reads_stdin(&self) -> bool {
        (self.frames.is_empty() && self.file.is_none())
            || self.frames.iter().any(|f| f == "-")
    }
}
