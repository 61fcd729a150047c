//! CLI for pnghex: dump PNG (or any binary) files as hex, and recover PNG files from hex dumps.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Args, Parser, Subcommand};
use indexmap::IndexMap;
use pnghex::fsio::{read_binary, write_payload, write_text, DecodeSource};
use pnghex::{decode, encode, DecodeReport, HexError, Style, PNG_SIGNATURE};
use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "pnghex", version)]
#[command(
    about = "Convert PNG files to hex dumps and hex dumps (xxd or raw hex) back to PNG files",
    long_about = None
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recover a PNG file from a hexdump (xxd-style or raw hex)
    Decode(DecodeArgs),
    /// Write a hexdump of a PNG (or any binary) file
    Encode(EncodeArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "text"])))]
struct DecodeArgs {
    /// Path to a hexdump text file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Hexdump text given directly (raw hex or xxd format)
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Output PNG file. A bare file name is placed next to the input file
    /// (or in the current directory for --text)
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long, requires = "json")]
    pretty: bool,
}

#[derive(Args)]
struct EncodeArgs {
    /// Input PNG or binary file
    input: PathBuf,

    /// Output text file (prints to stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output style
    #[arg(short, long, value_enum, default_value_t = Style::Plain)]
    style: Style,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(logging::level_for(cli.verbose, cli.quiet)) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let outcome = match &cli.command {
        Command::Decode(args) => run_decode(args, cli.quiet),
        Command::Encode(args) => run_encode(args, cli.quiet),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<HexError>() {
        Some(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("\n{}", hint);
            }
        }
        None => eprintln!("Error: Unexpected error - {:#}", err),
    }
}

fn run_decode(args: &DecodeArgs, quiet: bool) -> anyhow::Result<()> {
    let source = DecodeSource::from_args(args.file.clone(), args.text.clone())?;
    let output = source.resolve_output(&args.output)?;
    let text = source.read()?;
    tracing::info!(output = %output.display(), "decoding hexdump");

    let report = decode(&text)?;
    let written = write_payload(&output, &report.payload)?;

    if !report.payload.starts_with(PNG_SIGNATURE) {
        tracing::warn!("Output file does not have a valid PNG signature");
    }

    if args.json {
        print_json(&written, &report, args.pretty)?;
    } else if !quiet {
        println!("PNG successfully written to: {}", written.display());
        println!("File size: {} bytes", group_thousands(report.size_bytes()));
        println!("PNG signature verified: {}", report.signature_hex());
    }
    Ok(())
}

fn print_json(path: &Path, report: &DecodeReport, pretty: bool) -> anyhow::Result<()> {
    let mut out = IndexMap::<String, serde_json::Value>::new();
    out.insert("path".to_string(), serde_json::Value::String(path.display().to_string()));
    out.insert("size_bytes".to_string(), serde_json::to_value(report.size_bytes())?);
    out.insert("sha256".to_string(), serde_json::Value::String(sha256_hex(&report.payload)));
    out.insert("signature".to_string(), serde_json::Value::String(report.signature_hex()));
    out.insert("completeness".to_string(), serde_json::to_value(report.completeness)?);
    out.insert("leading_padding".to_string(), serde_json::to_value(report.leading_padding)?);
    out.insert("trailing_padding".to_string(), serde_json::to_value(report.trailing_padding)?);
    out.insert("offset_lines".to_string(), serde_json::to_value(report.offset_lines)?);
    out.insert("plain_lines".to_string(), serde_json::to_value(report.plain_lines)?);
    out.insert("chunks".to_string(), serde_json::to_value(&report.chunks)?);
    out.insert("warnings".to_string(), serde_json::to_value(&report.warnings)?);
    let json_str = if pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{}", json_str);
    Ok(())
}

fn run_encode(args: &EncodeArgs, quiet: bool) -> anyhow::Result<()> {
    let bytes = read_binary(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        size = bytes.len(),
        style = %args.style,
        "encoding"
    );
    let text = encode(&bytes, args.style);

    match &args.output {
        Some(path) => {
            write_text(path, &text)?;
            if !quiet {
                println!("Hexdump written to: {}", path.display());
            }
        }
        None => {
            if text.ends_with('\n') {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
        }
    }
    Ok(())
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
