//! Simple example for decoding a single frame and printing its fields.
//!
//! Usage:
//!   cargo run --example decode_frame -- <hex-encoded-frame>

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    // handle command line arguments
    let data = std::env::args().nth(1)
        .unwrap_or_else(|| "7ea011610330d3bee6e700c70181010052ab7e".to_string());

    let frame = hdlc::decode(&data)?;

    println!("Frame:");
    println!("  length:      {}", frame.frame_format.frame_len);
    println!("  segmented:   {}", frame.frame_format.segmentation);
    println!("  format type: {}", frame.frame_format.format_type);
    println!("  destination: {} (0x{:x})", frame.dest_addr, frame.dest_addr.value());
    println!("  source:      {} (0x{:x})", frame.src_addr, frame.src_addr.value());
    println!("  control:");
    println!("    type:      {:?}", frame.control.command_response);
    println!("    receive:   {}", frame.control.receive >> 5);
    println!("    send:      {}", frame.control.send >> 1);
    println!("    poll/fin:  {}", frame.control.poll_final);
    println!("  hcs:         0x{:04x}", frame.hcs);

    if let (Some(info), Some(fcs)) = (&frame.information, frame.fcs) {
        println!("  fcs:         0x{:04x}", fcs);
        println!("  information:");

        let data = pretty_hex::config_hex(
            info,
            pretty_hex::HexConfig {
                title: false,
                ..Default::default()
            },
        );

        for line in data.lines() {
            println!("    {}", line);
        }
    }

    Ok(())
}
