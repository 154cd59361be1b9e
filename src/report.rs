use std::io::Write;

use anyhow::Result;

use crate::checker::ProbeResult;

/// Default report: one exposed URL per line, in input order. Writes nothing
/// at all when the slice is empty.
pub fn write_plain<W: Write>(mut out: W, exposed: &[String]) -> Result<()> {
    for url in exposed {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

/// Structured report: every target's classification as a JSON array.
pub fn write_json<W: Write>(mut out: W, results: &[ProbeResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, results)?;
    writeln!(out)?;
    Ok(())
}
