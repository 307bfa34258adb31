//! Script file reading

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::SqlScanError;

/// Read a script as a string, trying UTF-8 first, then Windows-1252 as fallback.
/// A leading UTF-8 BOM is removed.
pub fn read_script(path: &Path) -> Result<String, SqlScanError> {
    let bytes = std::fs::read(path).map_err(|e| SqlScanError::ScriptReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = decode_script(bytes).map_err(|e| SqlScanError::ScriptReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

fn decode_script(bytes: Vec<u8>) -> std::io::Result<String> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(err) => {
            // Fall back to Windows-1252 (common for dumps created on Windows)
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ))
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}
