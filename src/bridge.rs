//! Process boundary to the der-ascii conversion tools.
//!
//! Structural edits are expressed as text transforms over the output of
//! Google's `der2ascii`, then converted back with `ascii2der`. The text
//! protocol is reversible: converting unmodified text back must reproduce
//! byte-identical DER, which is what the re-sign pipeline relies on for the
//! untouched parts of a structure.
//!
//! The tools are installed with:
//!
//! ```text
//! go install github.com/google/der-ascii/cmd/...@latest
//! ```
//!
//! and discovered on `PATH`. They are a best-effort collaborator: callers
//! should check [`available`] and treat mutation as an optional capability.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{CertMangleError, Result};

/// Name of the DER-to-text conversion tool.
pub const DER2ASCII: &str = "der2ascii";

/// Name of the text-to-DER conversion tool.
pub const ASCII2DER: &str = "ascii2der";

/// Returns true if both der-ascii tools are available on `PATH`.
pub fn available() -> bool {
    which::which(DER2ASCII).is_ok() && which::which(ASCII2DER).is_ok()
}

/// Converts DER bytes to the human-readable der-ascii form.
pub fn der_to_ascii(der: &[u8]) -> Result<String> {
    let output = run_tool(DER2ASCII, der)?;
    String::from_utf8(output).map_err(|e| {
        CertMangleError::BridgeFailure(format!("{DER2ASCII} produced invalid UTF-8: {e}"))
    })
}

/// Converts der-ascii text back to DER bytes.
pub fn ascii_to_der(ascii: &str) -> Result<Vec<u8>> {
    run_tool(ASCII2DER, ascii.as_bytes())
}

/// Runs one conversion tool with `input` on stdin and returns its stdout.
///
/// The child is always reaped, including when writing its stdin fails, so a
/// misbehaving tool cannot leak a process.
fn run_tool(tool: &str, input: &[u8]) -> Result<Vec<u8>> {
    let mut child = Command::new(tool)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| CertMangleError::BridgeFailure(format!("failed to spawn {tool}: {e}")))?;

    // Certificates and their text forms are far smaller than the pipe
    // buffers, so writing all of stdin before draining stdout cannot block.
    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input),
        None => Ok(()),
    };

    let output = child.wait_with_output().map_err(|e| {
        CertMangleError::BridgeFailure(format!("failed to collect {tool} output: {e}"))
    })?;

    write_result.map_err(|e| {
        CertMangleError::BridgeFailure(format!("failed to write {tool} stdin: {e}"))
    })?;

    if !output.status.success() {
        return Err(CertMangleError::BridgeFailure(format!(
            "{tool} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    if output.stdout.is_empty() {
        return Err(CertMangleError::BridgeFailure(format!(
            "{tool} produced no output"
        )));
    }

    Ok(output.stdout)
}
