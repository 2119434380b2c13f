//! Command-line interface for uplcfile

use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  uplcfile validator.uplc \"(program 1.0.0 (lam x x))\"
  uplcfile test.uplc \"(program 1.0.0 (con integer 42))\"";

/// Create a UPLC file with proper UTF-8 encoding (no BOM).
///
/// Works on Windows, macOS, and Linux, with or without PowerShell or Bash.
#[derive(Parser, Debug)]
#[command(name = "uplcfile", after_help = AFTER_HELP)]
pub struct Cli {
    /// Path and filename for the UPLC file
    pub filename: String,

    /// UPLC program content, written verbatim
    pub content: String,
}
