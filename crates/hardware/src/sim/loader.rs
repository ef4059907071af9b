//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** One byte per line, written as up to eight binary digits.
//! 2. **Comments:** Everything after `#` is ignored; blank lines are skipped.
//! 3. **Validation:** Rejects non-binary tokens, values wider than a byte and oversize programs.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::common::constants::MEMORY_SIZE;

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line holds something other than a binary byte and a comment.
    #[error("line {line}: malformed instruction byte '{text}'")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending text, comment removed.
        text: String,
    },

    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    TooLarge {
        /// Number of bytes in the program.
        len: usize,
        /// Memory size.
        capacity: usize,
    },
}

/// Parses program text into bytes.
///
/// # Errors
///
/// * `LoadError::Malformed` for a line whose token is not 1-8 binary digits.
/// * `LoadError::TooLarge` if the program exceeds memory.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let bytes = parse_program("10000010 # LDI\n\n00000000\n00001000\n").unwrap();
/// assert_eq!(bytes, vec![0x82, 0x00, 0x08]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let code = raw.split('#').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        bytes.push(parse_byte(code).ok_or_else(|| LoadError::Malformed {
            line: idx + 1,
            text: code.to_string(),
        })?);
    }

    if bytes.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: bytes.len(),
            capacity: MEMORY_SIZE,
        });
    }

    Ok(bytes)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_program(&text)?;
    debug!(path = %path.display(), len = bytes.len(), "program parsed");
    Ok(bytes)
}

/// Parses a single token of 1-8 binary digits.
fn parse_byte(token: &str) -> Option<u8> {
    if token.len() > 8 || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
