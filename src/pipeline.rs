use std::path::Path;

use tracing::debug;

use crate::{
    config::CheckerConfig,
    error::Result,
    loader::load_pair,
    tokenizer::{join_tokens, normalize, JiebaTokenizer, Tokenizer},
    vectorizer::{analyzer::TermPattern, evaluate::scoring::cosine_percentage, TfIdfVectorizer},
};

/// read → tokenize/clean → vectorize → score
///
/// The scoring half ([`similarity_of_texts`](Self::similarity_of_texts)) does
/// no I/O and can be tested against plain strings.
pub struct Checker {
    tokenizer: Box<dyn Tokenizer>,
    vectorizer: TfIdfVectorizer<f64>,
}

impl Checker {
    /// Jieba over the built-in dictionary, whitespace terms
    pub fn new() -> Self {
        Self::with_tokenizer(JiebaTokenizer::new(), TermPattern::default())
    }

    pub fn with_tokenizer<T>(tokenizer: T, pattern: TermPattern) -> Self
    where
        T: Tokenizer + 'static,
    {
        Self {
            tokenizer: Box::new(tokenizer),
            vectorizer: TfIdfVectorizer::new(pattern),
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Result<Self> {
        let tokenizer = JiebaTokenizer::with_user_dicts(&config.user_dicts)?.with_hmm(config.hmm);
        Ok(Self::with_tokenizer(tokenizer, config.term_pattern))
    }

    /// Segment, strip ASCII punctuation, and join with single spaces
    pub fn normalize_text(&self, text: &str) -> String {
        let tokens = normalize(self.tokenizer.as_ref(), text);
        debug!(chars = text.chars().count(), tokens = tokens.len(), "normalized text");
        join_tokens(&tokens)
    }

    /// Similarity of two texts as a percentage in [0, 100]
    ///
    /// # Errors
    /// [`Error::EmptyVocabulary`](crate::Error::EmptyVocabulary) when both texts
    /// yield no terms.
    pub fn similarity_of_texts(&self, original: &str, suspect: &str) -> Result<f64> {
        let docs = [self.normalize_text(original), self.normalize_text(suspect)];
        let matrix = self.vectorizer.fit_transform(docs)?;
        let similarity = cosine_percentage(&matrix);
        debug!(similarity, "scored pair");
        Ok(similarity)
    }

    /// Load both files and score them
    pub fn calculate_similarity<P, Q>(&self, original: P, suspect: Q) -> Result<f64>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (original, suspect) = load_pair(original, suspect)?;
        self.similarity_of_texts(&original.text, &suspect.text)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Checker::similarity_of_texts`] with the default checker
pub fn similarity_of_texts(original: &str, suspect: &str) -> Result<f64> {
    Checker::new().similarity_of_texts(original, suspect)
}

/// [`Checker::calculate_similarity`] with the default checker
pub fn calculate_similarity<P, Q>(original: P, suspect: Q) -> Result<f64>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Checker::new().calculate_similarity(original, suspect)
}
