use crate::error::{ConvertError, Result};
use flate2::read::GzDecoder;
use std::io::Read;

/// gzip magic signature (first two bytes: 0x1f, 0x8b)
const GZIP_MAGIC: &[u8; 2] = &[0x1f, 0x8b];

/// Zstandard frame magic number, little-endian
const ZSTD_MAGIC: &[u8; 4] = &[0x28, 0xb5, 0x2f, 0xfd];

/// Compression wrapped around a JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
}

/// Detect the compression of a document from its magic bytes
///
/// # Arguments
/// * `bytes` - Raw document bytes
///
/// # Returns
/// * `Compression::Gzip` - If data starts with `1f 8b`
/// * `Compression::Zstd` - If data starts with `28 b5 2f fd`
/// * `Compression::None` - Otherwise
///
/// # Examples
/// ```
/// use json2fig::input::compression::{detect_compression, Compression};
///
/// assert_eq!(detect_compression(&[0x1f, 0x8b, 8, 0]), Compression::Gzip);
/// assert_eq!(detect_compression(&[0x28, 0xb5, 0x2f, 0xfd, 0]), Compression::Zstd);
/// assert_eq!(detect_compression(b"{\"type\": \"div\"}"), Compression::None);
/// ```
pub fn detect_compression(bytes: &[u8]) -> Compression {
    if bytes.starts_with(GZIP_MAGIC) {
        Compression::Gzip
    } else if bytes.starts_with(ZSTD_MAGIC) {
        Compression::Zstd
    } else {
        Compression::None
    }
}

/// Decompress a document if it is gzip or Zstandard compressed
///
/// Uncompressed data is returned as-is.
///
/// # Arguments
/// * `bytes` - Raw document bytes
///
/// # Returns
/// * `Ok(Vec<u8>)` - Decompressed data
/// * `Err(ConvertError::Decompression)` - If the data carries a magic number but is corrupt
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    match detect_compression(bytes) {
        Compression::None => Ok(bytes.to_vec()),
        Compression::Gzip => decompress_gzip(bytes),
        Compression::Zstd => decompress_zstd(bytes),
    }
}

fn decompress_gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| ConvertError::Decompression(format!("gzip: {}", e)))?;
    Ok(decompressed)
}

fn decompress_zstd(bytes: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(bytes).map_err(|e| ConvertError::Decompression(format!("Zstandard: {}", e)))
}
