mod cli;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use cli::*;


#[derive(Debug, Clone, PartialEq, Eq)]
struct Input {
    origin: String,
    data: String,
}


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let inputs = collect_inputs(&args)?;

    tracing::debug!("decoding {} frames", inputs.len());

    let mut failed = 0;
    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            println!();
        }

        match cmd_decode(&input.data, args.dump) {
            Ok(()) => {},
            Err(e) if args.keep_going => {
                eprintln!("{}: {e:#}", input.origin);
                failed += 1;
            },
            Err(e) => return Err(e.context(input.origin.clone())),
        }
    }

    if failed > 0 {
        anyhow::bail!("failed to decode {failed} of {} frames", inputs.len());
    }

    Ok(())
}

fn cmd_decode(data: &str, dump: bool) -> Result<()> {
    let mut reader = hdlc::Reader::from_hex(data)?;

    if dump {
        let hex = pretty_hex::config_hex(
            reader.raw(),
            pretty_hex::HexConfig {
                title: false,
                ..Default::default()
            },
        );

        println!("Raw:");
        for line in hex.lines() {
            println!("  {}", line);
        }
    }

    let frame = hdlc::decoder::decode_frame(&mut reader)?;
    print!("{frame}");

    Ok(())
}

fn collect_inputs(args: &Args) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    for (i, frame) in args.frames.iter().enumerate() {
        if frame == "-" {
            continue;
        }

        inputs.push(Input {
            origin: format!("argument {}", i + 1),
            data: normalize(frame),
        });
    }

    if let Some(path) = &args.file {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        inputs.extend(read_lines(BufReader::new(file), &path.display().to_string())?);
    }

    if args.reads_stdin() {
        inputs.extend(read_lines(io::stdin().lock(), "stdin")?);
    }

    Ok(inputs)
}

fn read_lines<R: BufRead>(reader: R, name: &str) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {name}"))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        inputs.push(Input {
            origin: format!("{name}:{}", i + 1),
            data: normalize(line),
        });
    }

    Ok(inputs)
}

fn normalize(frame: &str) -> String {
    frame.split_whitespace().collect()
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_lines() {
        let src = "\
            # captured frames\n\
            7ea00703413142e27e\n\
            \n\
            7e a0 07 03 41 51 44 81 7e\n";

        let inputs = read_lines(src.as_bytes(), "frames.txt").unwrap();

        assert_eq!(inputs, vec![
            Input { origin: "frames.txt:2".into(), data: "7ea00703413142e27e".into() },
            Input { origin: "frames.txt:4".into(), data: "7ea00703415144817e".into() },
        ]);
    }

    #[test]
    fn test_decode() {
        assert!(cmd_decode("7ea00703413142e27e", false).is_ok());
        assert!(cmd_decode("7ea00703413142e37e", false).is_err());
    }
}
