//! Input helpers for command logs.
//!
//! - Reading from stdin when no file is given
//! - Reading text files with automatic .zst decompression
//!
//! Errors are returned as `String` so handlers can wrap them with the path.

use std::io::Read;

/// Read a whole stream as UTF-8 text, stripping a leading BOM.
///
/// # Example
///
/// ```rust
/// # use hanabi_cli::io_utils::read_all;
/// let mut input = "\u{feff}Play card 0\n".as_bytes();
/// assert_eq!(read_all(&mut input).unwrap(), "Play card 0\n");
/// ```
pub fn read_all(reader: &mut dyn Read) -> Result<String, String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| e.to_string())?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed using Zstandard.
/// A UTF-8 BOM is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use hanabi_cli::io_utils::read_text_auto;
/// let content = read_text_auto("game.log").unwrap();
/// let compressed = read_text_auto("games.log.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
