use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Document frequencies over the documents of one comparison
///
/// Stores no text; only the number of documents and, for each term,
/// how many of those documents contain it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    doc_num: u64,
    #[serde(with = "indexmap::map::serde_seq")]
    term_doc_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_doc_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Add a document by its term frequency
    #[inline]
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn term_doc_count(&self, term: &str) -> u64 {
        self.term_doc_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_doc_counts.len()
    }

    /// Distinct terms sorted lexicographically
    pub fn sorted_vocabulary(&self) -> Vec<Box<str>> {
        let mut vocab: Vec<Box<str>> = self.term_doc_counts.keys().cloned().collect();
        vocab.sort_unstable();
        vocab
    }
}
