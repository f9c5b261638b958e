pub mod jieba;

pub use jieba::JiebaTokenizer;

/// Word segmentation seam
///
/// Implementations must be deterministic for a given input and keep
/// the left-to-right order of the source text.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Remove the 32 ASCII punctuation characters from a token
///
/// Full-width punctuation such as `。` or `，` is left untouched.
#[inline]
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Segment `text` and strip ASCII punctuation from every token
///
/// Tokens that become empty are kept in place.
pub fn normalize<T>(tokenizer: &T, text: &str) -> Vec<String>
where
    T: Tokenizer + ?Sized,
{
    if text.is_empty() {
        return Vec::new();
    }
    tokenizer
        .tokenize(text)
        .iter()
        .map(|token| strip_punctuation(token))
        .collect()
}

/// Join tokens with single spaces
#[inline]
pub fn join_tokens<T>(tokens: &[T]) -> String
where
    T: AsRef<str>,
{
    let mut out = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}
