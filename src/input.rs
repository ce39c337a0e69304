// 📂 Input loading - staff file → trimmed lines

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Read every line of `path`, trimmed, blank lines included
///
/// Bytes that are not UTF-8 are replaced, so a bad line still reaches the
/// parser on its own. A read failure mid-file keeps the lines read so far.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => lines.push(String::from_utf8_lossy(&buf).trim().to_string()),
            Err(e) => {
                warn!(
                    error = %e,
                    line = lines.len() + 1,
                    path = %path.display(),
                    "read failed, keeping lines read so far"
                );
                break;
            }
        }
    }

    Ok(lines)
}
