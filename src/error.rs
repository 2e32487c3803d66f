use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No JSON data provided")]
    MissingInput,

    #[error("Unsupported JSON format: {0}")]
    UnsupportedFormat(String),

    #[error("No nodes were created from the JSON data")]
    NoNodesProduced,

    #[error("Node {child:?} cannot be placed under {parent_kind} node {parent:?}")]
    ChildUnderLeaf {
        parent: String,
        parent_kind: &'static str,
        child: String,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to decompress input: {0}")]
    Decompression(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ZIP library error: {0}")]
    ZipLibraryError(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
