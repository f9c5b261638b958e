use serde::{Deserialize, Serialize};

use super::term::TermFrequency;

/// How a normalized string is split into vocabulary terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermPattern {
    /// Maximal runs of non-whitespace characters
    #[default]
    Whitespace,
    /// Lowercase, then maximal runs of word characters (alphanumeric or `_`)
    /// at least two characters long
    ///
    /// This matches the default analyzer of common TF-IDF libraries,
    /// which drops single-character words such as `是` or `的`.
    WordRun,
}

impl TermPattern {
    /// Split `text` into terms, in order
    pub fn terms(&self, text: &str) -> Vec<String> {
        match self {
            TermPattern::Whitespace => text.split_whitespace().map(str::to_string).collect(),
            TermPattern::WordRun => {
                let lowered = text.to_lowercase();
                lowered
                    .split(|c: char| !is_word_char(c))
                    .filter(|run| run.chars().nth(1).is_some())
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    /// Count the terms of `text`
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        self.terms(text).into_iter().collect()
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
