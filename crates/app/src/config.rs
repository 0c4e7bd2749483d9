//! Configuration for the b32 command-line tool.
//!
//! Handles parsing command-line arguments and providing sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then Base32-encodes stdin
//! to stdout with the standard variant. Everything else is a flag.

use std::path::PathBuf;

use base32_codec_core::variant::Variant;

/// Complete configuration for one encode/decode run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Decode instead of encode
    pub decode: bool,

    /// Which Base32 variant to use
    pub variant: Variant,

    /// Padding override (encode only); None = variant default
    pub padding: Option<bool>,

    /// Input file path (None = stdin)
    pub input_file: Option<PathBuf>,

    /// Output file path (None = stdout)
    pub output_file: Option<PathBuf>,

    /// Read granularity in bytes
    pub chunk_bytes: usize,

    /// Whether to print a byte-count summary to stderr
    pub print_summary: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut decode = false;
        let mut variant: Option<Variant> = None;
        let mut padding: Option<bool> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut chunk_bytes: Option<usize> = None;
        let mut print_summary = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--decode" | "-d" => {
                    decode = true;
                }
                "--variant" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--variant requires an identifier".to_string());
                    }
                    variant = Some(Variant::from_name(&args[i]).map_err(|e| e.to_string())?);
                }
                "--pad" => {
                    padding = Some(true);
                }
                "--no-pad" => {
                    padding = Some(false);
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--chunk-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--chunk-bytes requires a number".to_string());
                    }
                    let n: usize = args[i].parse().map_err(|_| "invalid chunk-bytes")?;
                    if n == 0 {
                        return Err("--chunk-bytes must be at least 1".to_string());
                    }
                    chunk_bytes = Some(n);
                }
                "--quiet" | "-q" => {
                    print_summary = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        Ok(Config {
            decode,
            variant: variant.unwrap_or_default(),
            padding,
            input_file,
            output_file,
            chunk_bytes: chunk_bytes.unwrap_or(65536), // 64 KiB
            print_summary,
        })
    }
}

/// Print usage information.
pub fn print_help() {
    println!("b32 - streaming Base32 encoder/decoder");
    println!();
    println!("USAGE:");
    println!("    b32 [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --decode           decode instead of encode");
    println!("        --variant NAME     Base32 variant (default: standard)");
    println!("                           one of: {}", Variant::valid_names());
    println!("        --pad              force `=` padding on encode");
    println!("        --no-pad           suppress `=` padding on encode");
    println!("        --in PATH          read from PATH instead of stdin");
    println!("        --out PATH         write to PATH instead of stdout");
    println!("        --chunk-bytes N    read granularity (default: 65536)");
    println!("    -q, --quiet            suppress the stderr summary");
    println!("    -h, --help             show this help");
}
