//! b32: streaming Base32 encoder/decoder between files or stdio.
//!
//! Input is read in fixed-size chunks and pushed through the streaming
//! adapters, so arbitrarily large files are transformed without being
//! buffered whole.

mod config;

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};

use base32_codec_core::codec::{DecodeOptions, EncodeOptions};
use base32_codec_core::stream::{StreamDecoder, StreamEncoder};

use config::Config;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(message) = run(&config) {
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    let mut input: Box<dyn Read> = match &config.input_file {
        Some(path) => Box::new(
            File::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let encode_to_tty = !config.decode && config.output_file.is_none() && io::stdout().is_terminal();
    let mut output: Box<dyn Write> = match &config.output_file {
        Some(path) => Box::new(
            File::create(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut buf = vec![0u8; config.chunk_bytes];
    let mut bytes_in: u64 = 0;
    let mut bytes_out: u64 = 0;

    if config.decode {
        let mut stream = StreamDecoder::new(DecodeOptions {
            variant: config.variant,
        });
        loop {
            let n = input.read(&mut buf).map_err(|e| format!("read failed: {}", e))?;
            if n == 0 {
                break;
            }
            bytes_in += n as u64;
            let decoded = stream.push(&buf[..n]).map_err(|e| e.to_string())?;
            bytes_out += decoded.len() as u64;
            output
                .write_all(&decoded)
                .map_err(|e| format!("write failed: {}", e))?;
        }
        let tail = stream.finish().map_err(|e| e.to_string())?;
        bytes_out += tail.len() as u64;
        output
            .write_all(&tail)
            .map_err(|e| format!("write failed: {}", e))?;
    } else {
        let mut stream = StreamEncoder::new(EncodeOptions {
            variant: config.variant,
            padding: config.padding,
        });
        loop {
            let n = input.read(&mut buf).map_err(|e| format!("read failed: {}", e))?;
            if n == 0 {
                break;
            }
            bytes_in += n as u64;
            let encoded = stream.push(&buf[..n]);
            bytes_out += encoded.len() as u64;
            output
                .write_all(&encoded)
                .map_err(|e| format!("write failed: {}", e))?;
        }
        let tail = stream.finish();
        bytes_out += tail.len() as u64;
        output
            .write_all(&tail)
            .map_err(|e| format!("write failed: {}", e))?;

        // Keep the shell prompt off the encoded line; pipes and files get
        // the exact byte stream.
        if encode_to_tty {
            writeln!(output).map_err(|e| format!("write failed: {}", e))?;
        }
    }

    output.flush().map_err(|e| format!("flush failed: {}", e))?;

    if config.print_summary {
        eprintln!(
            "{} {} bytes -> {} bytes ({})",
            if config.decode { "decoded" } else { "encoded" },
            bytes_in,
            bytes_out,
            config.variant
        );
    }

    Ok(())
}
