//! Convert a BMFont XML file to a Lua table literal
//!
//! Prints the literal on stdout; status, warnings and errors go to stderr.
//!
//! Usage:
//!   fnt2lua <FILE> [--json] [--strict] [--indent <N>] [--verbose]
//!
//! Options:
//!   --json        Print the extracted font and its warnings as JSON instead of a Lua literal
//!   --strict      Treat a font without any glyphs as an error
//!   --indent <N>  Indent with N spaces instead of tabs
//!   --verbose     Debug logging (RUST_LOG overrides)

use fnt_oxide::document::FontDocument;
use fnt_oxide::{BmFont, Diagnostic, ExtractOptions, LiteralOptions};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::process;

const USAGE: &str = "Usage: fnt2lua <FILE> [--json] [--strict] [--indent <N>] [--verbose]";

#[derive(Debug, PartialEq)]
struct CliConfig {
    input: PathBuf,
    json: bool,
    strict: bool,
    indent: Option<usize>,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    fn parse(args: &[String]) -> Result<Self, String> {
        let mut input = None;
        let mut json = false;
        let mut strict = false;
        let mut indent = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--json" => json = true,
                "--strict" => strict = true,
                "--verbose" | "-v" => verbose = true,
                "--indent" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| "--indent requires a value".to_string())?;
                    let width: usize = value
                        .parse()
                        .map_err(|_| format!("Invalid indent width: {}", value))?;
                    indent = Some(width);
                },
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option: {}", flag));
                },
                path => {
                    if input.is_some() {
                        return Err(format!("Unexpected argument: {}", path));
                    }
                    input = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(|| "No file selected.".to_string())?,
            json,
            strict,
            indent,
            verbose,
        })
    }

    fn extract_options(&self) -> ExtractOptions {
        if self.strict {
            ExtractOptions::strict()
        } else {
            ExtractOptions::lenient()
        }
    }

    fn literal_options(&self) -> LiteralOptions {
        match self.indent {
            Some(width) => LiteralOptions::new().with_spaces(width),
            None => LiteralOptions::new(),
        }
    }
}

/// `--json` payload: the font's `metadata` and `glyphs` next to the extraction warnings.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    font: &'a BmFont,
    diagnostics: &'a [Diagnostic],
}

/// Human-readable byte count using 1024 steps, e.g. `1.5 KB`.
fn format_bytes(bytes: u64, decimals: usize) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.*}", decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    format!("{} {}", trimmed, UNITS[unit])
}

fn describe_file(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match std::fs::metadata(path) {
        Ok(meta) => format!("Selected file: {} ({})", name, format_bytes(meta.len(), 2)),
        Err(_) => format!("Selected file: {}", name),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown failure".to_string()
    }
}

fn run(config: &CliConfig) -> i32 {
    eprintln!("{}", describe_file(&config.input));

    let doc = match FontDocument::open(&config.input) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("Failed to load {}: {}", config.input.display(), e);
            eprintln!("Error: {}", e);
            return 1;
        },
    };

    let extract_options = config.extract_options();
    let literal_options = config.literal_options();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        doc.to_lua(&extract_options, &literal_options)
    }));

    let conversion = match outcome {
        Ok(Ok(conversion)) => conversion,
        Ok(Err(e)) => {
            eprintln!("Error: {}", e);
            return 1;
        },
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            log::error!("Conversion panicked: {}", msg);
            eprintln!(
                "Error during conversion: {}. Check logs for details (RUST_LOG=debug).",
                msg
            );
            return 2;
        },
    };

    for diagnostic in &conversion.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if config.json {
        let report = JsonReport {
            font: &conversion.font,
            diagnostics: &conversion.diagnostics,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to encode JSON: {}", e);
                return 1;
            },
        }
    } else {
        println!("{}", conversion.literal);
    }

    eprintln!("Conversion successful!");
    0
}

fn main() {
    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("{}", USAGE);
            process::exit(1);
        },
    };

    let default_level = if config.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    process::exit(run(&config));
}
