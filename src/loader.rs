use std::{fs, path::{Path, PathBuf}};

use tracing::debug;

use crate::error::{Error, Result};

/// A document read fully into memory
///
/// Holds the path it came from (as given by the caller) and its UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read the whole file and decode it as UTF-8
    ///
    /// BOM は削除しない
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        // fs::read は戻る前にハンドルを閉じる
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(Self::new(path, text))
    }
}

/// Load the original and the suspect document, in that order
pub fn load_pair<P, Q>(original: P, suspect: Q) -> Result<(Document, Document)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let original = Document::load(original)?;
    let suspect = Document::load(suspect)?;
    Ok((original, suspect))
}
