//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod connections;
pub mod info;
pub mod word;

/// Read a lyric file and validate its size against the configured limit.
///
/// Every analysis command funnels through here so the size check stays
/// consistent across subcommands.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
