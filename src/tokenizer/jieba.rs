use std::{fs::File, io::BufReader, path::Path, sync::OnceLock};

use jieba_rs::Jieba;
use tracing::debug;

use crate::error::{Error, Result};

use super::Tokenizer;

/// 組み込み辞書だけの共有インスタンス (遅延初期化)
static DEFAULT_JIEBA: OnceLock<Jieba> = OnceLock::new();

fn default_jieba() -> &'static Jieba {
    DEFAULT_JIEBA.get_or_init(Jieba::new)
}

enum Dict {
    Shared(&'static Jieba),
    Custom(Box<Jieba>),
}

/// Chinese word segmenter backed by jieba
///
/// Uses jieba's accurate mode. HMM discovery of unknown words is on
/// unless disabled with [`JiebaTokenizer::with_hmm`].
pub struct JiebaTokenizer {
    dict: Dict,
    hmm: bool,
}

impl JiebaTokenizer {
    /// Tokenizer over the built-in dictionary
    pub fn new() -> Self {
        Self {
            dict: Dict::Shared(default_jieba()),
            hmm: true,
        }
    }

    /// Tokenizer over the built-in dictionary extended by user dictionaries
    ///
    /// Each file uses jieba's `word [freq] [tag]` line format.
    pub fn with_user_dicts<P>(paths: &[P]) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        if paths.is_empty() {
            return Ok(Self::new());
        }
        let mut jieba = Jieba::new();
        for path in paths {
            let path = path.as_ref();
            let file = File::open(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            jieba
                .load_dict(&mut BufReader::new(file))
                .map_err(|source| Error::Dictionary {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!(path = %path.display(), "loaded user dictionary");
        }
        Ok(Self {
            dict: Dict::Custom(Box::new(jieba)),
            hmm: true,
        })
    }

    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    #[inline]
    fn jieba(&self) -> &Jieba {
        match &self.dict {
            Dict::Shared(jieba) => *jieba,
            Dict::Custom(jieba) => jieba.as_ref(),
        }
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba()
            .cut(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
