use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::vectorizer::analyzer::TermPattern;

/// Settings for building a [`Checker`](crate::Checker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Extra jieba dictionaries, loaded in order on top of the built-in one
    pub user_dicts: Vec<PathBuf>,
    /// HMM discovery of words missing from the dictionary
    pub hmm: bool,
    pub term_pattern: TermPattern,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            user_dicts: Vec::new(),
            hmm: true,
            term_pattern: TermPattern::Whitespace,
        }
    }
}
