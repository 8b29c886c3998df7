//! # tensor-cli
//!
//! Command-line tool for working with serialized tensors and compact float
//! codes.
//!
//! Tensors are stored as JSON documents of a `TensorBuffer`; element values
//! are read from and written to flat JSON arrays.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tensor_codec::prelude::*;

mod values;

#[derive(Parser)]
#[command(
    name = "tensor-cli",
    version,
    about = "Command-line tool for tensors and compact float codes",
    long_about = "Encode flat JSON values into typed tensors, decode tensors back into values, \
                  and convert numbers to and from BFloat16, Float16 and Float8 codes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging, overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the compact float formats and their layouts
    Formats {
        /// Print the layouts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Round numbers into a compact float format and print the codes
    EncodeFloat {
        /// Format name (bf16, f16, e4m3, e5m2)
        #[arg(short, long)]
        format: String,

        /// Values to encode ("nan", "inf" and "-inf" are accepted)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<f32>,
    },

    /// Decode compact float codes to their float32 values
    DecodeFloat {
        /// Format name (bf16, f16, e4m3, e5m2)
        #[arg(short, long)]
        format: String,

        /// Codes, decimal or 0x-prefixed hexadecimal
        #[arg(required = true, value_parser = parse_code)]
        codes: Vec<u32>,
    },

    /// Encode a JSON array of values into a tensor file
    Encode {
        /// JSON file holding a flat array of values in row-major order
        input: PathBuf,

        /// Element kind (float32, int8, bfloat16, float8_e4m3fn, str, ...)
        #[arg(short, long)]
        dtype: String,

        /// Comma-separated dimensions; defaults to a 1-D shape of all values
        #[arg(short, long, value_delimiter = ',', conflicts_with = "scalar")]
        shape: Option<Vec<usize>>,

        /// Encode a single value as a zero-dimensional tensor
        #[arg(long)]
        scalar: bool,

        /// Tensor name
        #[arg(short, long, default_value = "tensor")]
        name: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a tensor file into its shape and JSON values
    Decode {
        /// Path to the tensor file
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display information about a tensor file
    Inspect {
        /// Path to the tensor file
        file: PathBuf,

        /// Number of payload bytes to preview
        #[arg(short, long, default_value_t = 16)]
        bytes: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize colored output
    #[cfg(feature = "color")]
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Formats { json } => formats_command(json),
        Commands::EncodeFloat { format, values } => encode_float_command(&format, &values),
        Commands::DecodeFloat { format, codes } => decode_float_command(&format, &codes),
        Commands::Encode { input, dtype, shape, scalar, name, output } => {
            encode_command(&input, &dtype, shape, scalar, &name, output.as_deref())
        }
        Commands::Decode { file, output } => decode_command(&file, output.as_deref()),
        Commands::Inspect { file, bytes } => inspect_command(&file, bytes),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_code(s: &str) -> std::result::Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid code '{}': {}", s, e))
}

fn lookup_format(name: &str) -> Result<CompactFormat> {
    CompactFormat::by_name(name).with_context(|| {
        format!("Unknown float format '{}' (expected bf16, f16, e4m3 or e5m2)", name)
    })
}

fn heading(text: &str) -> String {
    #[cfg(feature = "color")]
    {
        colored::Colorize::bold(text).to_string()
    }
    #[cfg(not(feature = "color"))]
    {
        text.to_string()
    }
}

fn formats_command(json: bool) -> Result<()> {
    let layouts: Vec<FloatFormat> = CompactFormat::ALL.iter().map(|f| f.layout()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&layouts)?);
        return Ok(());
    }

    println!(
        "{}",
        heading(&format!(
            "{:<14} {:>5} {:>4} {:>5} {:>5} {:>12} {:>6} {:>9}",
            "Format", "Width", "Exp", "Mant", "Bias", "Max", "NaN", "Infinity"
        ))
    );
    for layout in layouts {
        let width_hex = (layout.width() / 4) as usize;
        println!(
            "{:<14} {:>5} {:>4} {:>5} {:>5} {:>12} {:>6} {:>9}",
            layout.name,
            layout.width(),
            layout.exponent_bits,
            layout.mantissa_bits,
            layout.bias,
            layout.max_value,
            format!("0x{:0w$X}", layout.nan_code, w = width_hex),
            layout
                .infinity_code
                .map(|code| format!("0x{:0w$X}", code, w = width_hex))
                .unwrap_or_else(|| "none".to_string()),
        );
    }
    Ok(())
}

fn encode_float_command(format: &str, values: &[f32]) -> Result<()> {
    let format = lookup_format(format)?;
    let width_hex = (format.layout().width() / 4) as usize;

    for &value in values {
        let code = format.encode(value);
        println!(
            "{} -> 0x{:0w$X} ({})",
            value,
            code,
            format.decode(code),
            w = width_hex
        );
    }
    Ok(())
}

fn decode_float_command(format: &str, codes: &[u32]) -> Result<()> {
    let format = lookup_format(format)?;
    let layout = format.layout();
    let width_hex = (layout.width() / 4) as usize;
    let mask = if layout.width() >= 32 { u32::MAX } else { (1u32 << layout.width()) - 1 };

    for &code in codes {
        if code & !mask != 0 {
            tracing::warn!(code, format = %format, "code wider than the format, high bits ignored");
        }
        println!("0x{:0w$X} -> {}", code & mask, format.decode(code), w = width_hex);
    }
    Ok(())
}

fn encode_command(
    input: &Path,
    dtype: &str,
    shape: Option<Vec<usize>>,
    scalar: bool,
    name: &str,
    output: Option<&Path>,
) -> Result<()> {
    let kind: ElementKind = dtype.parse()?;
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read values from {}", input.display()))?;
    let elements: Vec<serde_json::Value> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array", input.display()))?;

    let shape = match (scalar, shape) {
        (true, _) => Vec::new(),
        (false, Some(shape)) => shape,
        (false, None) => vec![elements.len()],
    };

    let array = values::array_from_json(kind, shape, &elements)?;
    let tensor = array.to_tensor(name).context("Failed to encode tensor")?;
    write_output(output, &serde_json::to_string_pretty(&tensor)?)
}

fn decode_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let tensor = read_tensor(file)?;
    let array = tensor.to_array().context("Failed to decode tensor")?;

    let document = serde_json::json!({
        "name": tensor.name(),
        "dtype": array.element_kind().name(),
        "shape": array.shape(),
        "values": values::array_to_json(&array),
    });
    write_output(output, &serde_json::to_string_pretty(&document)?)
}

fn inspect_command(file: &Path, preview_bytes: usize) -> Result<()> {
    let tensor = read_tensor(file)?;
    let element_type = tensor.element_type();

    println!("{}", heading("Tensor Information"));
    println!("==================");
    println!("File: {}", file.display());
    println!("Name: {}", tensor.name());
    println!("Element type: {} (code {})", element_type, element_type.code());
    match element_type.element_size() {
        Some(size) => println!("Element size: {} bytes", size),
        None => println!("Element size: variable"),
    }
    println!("Shape: {}", tensor.shape());
    println!("Elements: {}", tensor.element_count());
    println!("Payload: {} bytes", tensor.data().byte_len());
    println!("Preview: {}", tensor.data().hex_preview(preview_bytes));

    if let Some(format) = element_type.compact_format() {
        println!("Float format: {}", format.layout());
    }
    Ok(())
}

fn read_tensor(file: &Path) -> Result<TensorBuffer> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read tensor file {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid tensor file {}", file.display()))
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
