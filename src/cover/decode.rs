use crate::error::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;

/// Decode a base64 cover payload.
///
/// Whitespace (line wrapping, the trailing newline of a process' stdout) is
/// dropped before decoding. Any other non-alphabet byte is an error.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

/// Write decoded cover bytes verbatim, truncating any existing file.
pub fn write_cover(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
