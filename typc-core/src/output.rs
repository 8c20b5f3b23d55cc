//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::catalog::FamilyRecord;

/// Write families as a prettified JSON array.
pub fn write_json_pretty(families: &[FamilyRecord], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(families)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write families as newline-delimited JSON (NDJSON).
pub fn write_ndjson(families: &[FamilyRecord], mut w: impl Write) -> Result<()> {
    for family in families {
        let line = serde_json::to_string(family)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
