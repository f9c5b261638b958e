use std::path::PathBuf;

use thiserror::Error;

/// Errors raised anywhere in the similarity pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// file is missing or unreadable
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// file content is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// both documents produced no terms
    #[error("empty vocabulary; perhaps the documents only contain stop words or punctuation")]
    EmptyVocabulary,

    /// user dictionary could not be opened or parsed
    #[error("failed to load user dictionary {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: jieba_rs::Error,
    },

    /// report line could not be appended
    #[error("failed to write report to {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
