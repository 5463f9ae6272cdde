//! Basic usage of the line scanner

use linesift_api::{scan_file, scan_text, Pattern, Substring};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: substring predicate over in-memory text
    println!("=== Method 1: Substring ===");
    for line in scan_text("apple\nbanana\ncherry", Substring::new("an"))? {
        println!("matched: {}", line?);
    }

    // Method 2: closure predicate
    println!("\n=== Method 2: Closure ===");
    let log = "INFO started\nERROR disk full\nINFO done\nERROR no space";
    for line in scan_text(log, |l: &str| l.starts_with("ERROR"))? {
        println!("matched: {}", line?);
    }

    // Method 3: regex predicate over a file, stopping at the first hit
    println!("\n=== Method 3: Regex over a file, early stop ===");
    let mut tmp = tempfile::NamedTempFile::new()?;
    writeln!(tmp, "alpha\nbeta 42\ngamma\nbeta 7")?;

    let first = scan_file(tmp.path(), Pattern::new(r"beta \d+")?)?.next();
    match first {
        Some(line) => println!("first match: {}", line?),
        None => println!("no match"),
    }
    // Dropping the iterator above released the file handle even though
    // the remaining lines were never read.

    Ok(())
}
