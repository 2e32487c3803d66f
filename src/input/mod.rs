//! Reading input documents from bytes
//!
//! Documents are JSON, optionally gzip or Zstandard compressed. A ZIP
//! archive holds several documents and is unpacked to a directory first.
pub mod archive;
pub mod compression;

// Re-export commonly used items
pub use archive::{extract_zip_to_directory, find_json_files, is_zip_container, scene_output_path};
pub use compression::{decompress, detect_compression, Compression};

use crate::error::Result;
use serde_json::Value as JsonValue;

/// Parse a document, decompressing it first when needed
///
/// # Examples
/// ```
/// use json2fig::input::load_document;
///
/// let json = load_document(br#"{"type": "div"}"#).unwrap();
/// assert_eq!(json["type"], "div");
/// ```
pub fn load_document(bytes: &[u8]) -> Result<JsonValue> {
    let compression = detect_compression(bytes);
    if compression != Compression::None {
        log::debug!("Input is {:?} compressed", compression);
    }
    let data = decompress(bytes)?;
    Ok(serde_json::from_slice(&data)?)
}
