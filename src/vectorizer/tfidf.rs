use indexmap::IndexSet;
use num::{Float, NumCast};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

/// TF-IDF calculation strategy
///
/// `vocab` is the column order of the matrix; each term sits at its index in the set.
pub trait TfIdfEngine<N>
where
    N: Float,
{
    /// IDFベクトルを生成する
    /// # Arguments
    /// * `corpus` - コーパス
    /// * `vocab` - トークンの次元サンプル
    fn idf_vec(corpus: &Corpus, vocab: &IndexSet<Box<str>>) -> Vec<N>;

    /// TFベクトルを生成する
    fn tf_vec(freq: &TermFrequency, vocab: &IndexSet<Box<str>>) -> ZeroSpVec<N>;

    /// Weighted and L2-normalized row for one document
    fn tfidf_vec(freq: &TermFrequency, vocab: &IndexSet<Box<str>>, idf: &[N]) -> ZeroSpVec<N> {
        let tf = Self::tf_vec(freq, vocab);
        let entries = tf.raw_iter().map(|(idx, tf)| (idx, tf * idf[idx])).collect();
        let mut row = ZeroSpVec::from_entries(vocab.len(), entries);
        row.l2_normalize();
        row
    }
}

/// デフォルトのTF-IDFエンジン
///
/// - tf(t, d) = raw count of t in d
/// - idf(t) = ln((1 + n) / (1 + df(t))) + 1
///
/// This is the smoothed IDF used by the common TF-IDF libraries;
/// scores stay comparable with them as long as the terms are the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl DefaultTfIdfEngine {
    /// Smoothed IDF for a term found in `doc_freq` of `doc_num` documents
    #[inline]
    pub fn smooth_idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocab: &IndexSet<Box<str>>) -> Vec<N> {
        let doc_num = corpus.doc_num();
        vocab
            .iter()
            .map(|term| cast(Self::smooth_idf(doc_num, corpus.term_doc_count(term))))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &IndexSet<Box<str>>) -> ZeroSpVec<N> {
        let entries = freq
            .iter()
            .filter_map(|(term, count)| vocab.get_index_of(term).map(|idx| (idx, cast(count as f64))))
            .collect();
        ZeroSpVec::from_entries(vocab.len(), entries)
    }
}

#[inline]
fn cast<N: Float>(value: f64) -> N {
    // f32 / f64 への変換は失敗しない
    <N as NumCast>::from(value).unwrap_or_else(N::nan)
}
