use anyhow::Result;
use colored::*;

use crate::writer;

/// Run a single write and print the status lines.
///
/// All outcomes, success and failure alike, go to stdout; the returned
/// result only tells the caller which exit code to use.
pub fn handle_write(filename: &str, content: &str) -> Result<()> {
    match writer::write(filename, content) {
        Ok(report) => {
            println!(
                "{} Created UPLC file: {}",
                "✓".green(),
                report.path.display()
            );
            println!("{} File size: {} bytes", "✓".green(), report.bytes);
            println!("{} Content preview: {}", "✓".green(), report.preview);
            Ok(())
        }
        Err(err) => {
            println!("{} Error creating file: {err}", "✗".red());
            Err(err.into())
        }
    }
}
