//! This crate scores how similar two Chinese documents are, for plagiarism checks.
//! Text is segmented with jieba, ASCII punctuation is stripped, and the pair is
//! compared by cosine similarity of pair-local TF-IDF vectors.

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod tokenizer;
pub mod utils;
pub mod vectorizer;

/// Similarity Checker
/// The top-level struct of this crate, running the whole pipeline:
/// read → tokenize/clean → vectorize → score.
///
/// It holds:
/// - A word segmenter (`Tokenizer`, jieba by default)
/// - A pair-local TF-IDF vectorizer
///
/// `similarity_of_texts` does no I/O, so the scoring logic can be used
/// without files. `calculate_similarity` reads both files first.
pub use pipeline::{calculate_similarity, similarity_of_texts, Checker};

/// Checker Configuration
/// User dictionaries, HMM switch, and term pattern for building a `Checker`.
pub use config::CheckerConfig;

/// Error type of every fallible operation in this crate
pub use error::{Error, Result};

/// Document loaded from disk
/// Holds the path it was read from and its full UTF-8 text.
pub use loader::Document;

/// Word segmentation
/// `Tokenizer` is the seam; `JiebaTokenizer` is the default implementation.
pub use tokenizer::{JiebaTokenizer, Tokenizer};

/// TF-IDF Vectorizer
/// Fits vocabulary and smoothed IDF on exactly two documents and returns a
/// 2×V matrix of L2-normalized sparse rows.
///
/// `TfIdfVectorizer<N, E>` has the following generic parameters:
/// - `N`: float type (f32, f64)
/// - `E`: TF-IDF calculation engine (e.g., DefaultTfIdfEngine)
pub use vectorizer::{TfIdfMatrix, TfIdfVectorizer};

/// TF IDF Calculation Engine Trait
/// Defines how TF and IDF vectors are computed.
/// `DefaultTfIdfEngine` uses raw counts and idf(t) = ln((1+n)/(1+df(t))) + 1.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Term splitting of normalized text
/// - Whitespace: every whitespace-delimited field
/// - WordRun: lowercased word-character runs of length two or more
pub use vectorizer::analyzer::TermPattern;

/// Term Frequency structure
/// Counts of each term in one document.
pub use vectorizer::term::TermFrequency;

/// Corpus for TF-IDF Vectorizer
/// Document frequency of each term over the compared pair.
pub use vectorizer::corpus::Corpus;
