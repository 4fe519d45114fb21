//! Reading request payloads and printing results.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Reads a JSON payload from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_payload(path: &Path) -> anyhow::Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("payload in {} is not valid JSON", path.display()))
}

/// Pretty-prints `value` to stdout. "No data" results print as `null`.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
