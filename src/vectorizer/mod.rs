pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use indexmap::IndexSet;
use num::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    utils::math::vector::ZeroSpVec,
    vectorizer::{analyzer::TermPattern, corpus::Corpus, term::TermFrequency, tfidf::{DefaultTfIdfEngine, TfIdfEngine}},
};

/// Pair-local TF-IDF vectorizer
///
/// Holds no corpus statistics between calls; every [`fit_transform`](Self::fit_transform)
/// derives vocabulary and IDF from exactly the two documents it is given.
///
/// `TfIdfVectorizer<N, E>` has the following generic parameters:
/// - `N`: float type of the matrix (f32 or f64)
/// - `E`: TF-IDF calculation engine (e.g., DefaultTfIdfEngine)
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer<N = f64, E = DefaultTfIdfEngine>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    pub pattern: TermPattern,
    _marker: PhantomData<(N, E)>,
}

impl<N, E> Default for TfIdfVectorizer<N, E>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    fn default() -> Self {
        Self::new(TermPattern::default())
    }
}

impl<N, E> TfIdfVectorizer<N, E>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    pub fn new(pattern: TermPattern) -> Self {
        Self {
            pattern,
            _marker: PhantomData,
        }
    }

    /// Fit vocabulary and IDF on the two documents and weight both
    ///
    /// # Errors
    /// [`Error::EmptyVocabulary`] when neither document yields a term.
    pub fn fit_transform<S>(&self, docs: [S; 2]) -> Result<TfIdfMatrix<N>>
    where
        S: AsRef<str>,
    {
        let [a, b] = docs;
        let freqs = [
            self.pattern.term_frequency(a.as_ref()),
            self.pattern.term_frequency(b.as_ref()),
        ];
        Self::fit_transform_freq(freqs)
    }

    /// [`fit_transform`](Self::fit_transform) on already counted terms
    pub fn fit_transform_freq(freqs: [TermFrequency; 2]) -> Result<TfIdfMatrix<N>> {
        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }
        if corpus.vocab_size() == 0 {
            return Err(Error::EmptyVocabulary);
        }
        // 列順を決定的にするため語彙はソート済み
        let vocabulary: IndexSet<Box<str>> = corpus.sorted_vocabulary().into_iter().collect();
        let idf = E::idf_vec(&corpus, &vocabulary);
        let [a, b] = &freqs;
        let rows = [
            E::tfidf_vec(a, &vocabulary, &idf),
            E::tfidf_vec(b, &vocabulary, &idf),
        ];
        debug!(
            vocab = vocabulary.len(),
            nnz_a = rows[0].nnz(),
            nnz_b = rows[1].nnz(),
            "fitted tf-idf matrix"
        );
        Ok(TfIdfMatrix { vocabulary, idf, rows })
    }
}

/// 2×V TF-IDF matrix, one L2-normalized sparse row per document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfMatrix<N>
where
    N: Float,
{
    vocabulary: IndexSet<Box<str>>,
    idf: Vec<N>,
    rows: [ZeroSpVec<N>; 2],
}

impl<N> TfIdfMatrix<N>
where
    N: Float,
{
    /// Terms in column order
    #[inline]
    pub fn vocabulary(&self) -> &IndexSet<Box<str>> {
        &self.vocabulary
    }

    /// IDF per column
    #[inline]
    pub fn idf(&self) -> &[N] {
        &self.idf
    }

    /// Row of document `i` (0 or 1)
    ///
    /// # Panics
    /// If `i > 1`.
    #[inline]
    pub fn row(&self, i: usize) -> &ZeroSpVec<N> {
        &self.rows[i]
    }

    #[inline]
    pub fn rows(&self) -> &[ZeroSpVec<N>; 2] {
        &self.rows
    }

    /// Weight of `term` in document `i`, zero if the term is unknown
    pub fn weight(&self, i: usize, term: &str) -> N {
        self.vocabulary
            .get_index_of(term)
            .map_or_else(N::zero, |idx| self.rows[i].get(idx))
    }
}
