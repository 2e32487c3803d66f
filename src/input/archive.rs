use crate::error::Result;
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// ZIP magic signature (first two bytes)
const ZIP_MAGIC: &[u8; 2] = b"PK";

/// Suffix of converted documents, skipped when collecting inputs
pub const SCENE_SUFFIX: &str = ".scene.json";

/// Check if the input is a ZIP archive
///
/// # Examples
/// ```
/// use json2fig::input::is_zip_container;
///
/// assert!(is_zip_container(b"PK\x03\x04..."));
/// assert!(!is_zip_container(b"{\"type\": \"CANVAS\"}"));
/// ```
pub fn is_zip_container(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC)
}

/// Extract every entry of a ZIP archive under `dir`
///
/// Entries whose path would escape `dir` (absolute paths, `..`) are skipped.
///
/// # Arguments
/// * `bytes` - Raw ZIP archive bytes
/// * `dir` - Destination directory, created if missing
///
/// # Returns
/// * `Ok(usize)` - Number of files written
/// * `Err(ConvertError)` - If the archive is invalid or a file cannot be written
pub fn extract_zip_to_directory(bytes: &[u8], dir: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    fs::create_dir_all(dir)?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            log::warn!("Skipping ZIP entry with unsafe path: {}", entry.name());
            continue;
        };
        let target = dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&target)?;
        io::copy(&mut entry, &mut file)?;
        written += 1;
    }

    Ok(written)
}

/// Recursively find the JSON documents under `dir`, sorted by path
///
/// Previously converted `*.scene.json` files are not returned.
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    fn visit_dir(dir: &Path, json_files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                visit_dir(&path, json_files)?;
            } else if is_json_document(&path) {
                json_files.push(path);
            }
        }
        Ok(())
    }

    let mut json_files = Vec::new();
    if dir.is_dir() {
        visit_dir(dir, &mut json_files)?;
    }
    json_files.sort();
    Ok(json_files)
}

/// Output path of a converted document: `name.json` -> `name.scene.json`
pub fn scene_output_path(path: &Path) -> PathBuf {
    path.with_extension("scene.json")
}

fn is_json_document(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".json") && !name.ends_with(SCENE_SUFFIX)
}
