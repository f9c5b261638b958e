use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use plagiarism_checker::{CheckerConfig, TermPattern};

/// Estimate how much of a suspect document is copied from an original.
///
/// Appends `{文件<ORIGINAL>和文件<SUSPECT>的相似度为:<score>}` to OUTPUT.
#[derive(Debug, Parser)]
#[command(name = "plagiarism-checker", version, about)]
pub struct Cli {
    /// Original document (UTF-8)
    pub original: PathBuf,

    /// Suspected copy (UTF-8)
    pub suspect: PathBuf,

    /// File the result line is appended to
    pub output: PathBuf,

    /// Extra jieba dictionary, `word [freq] [tag]` per line (repeatable)
    #[arg(long = "user-dict", value_name = "FILE")]
    pub user_dicts: Vec<PathBuf>,

    /// Disable HMM discovery of words missing from the dictionary
    #[arg(long)]
    pub no_hmm: bool,

    /// How normalized text is split into terms
    #[arg(long, value_enum, default_value_t = TermPatternArg::Whitespace)]
    pub term_pattern: TermPatternArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TermPatternArg {
    /// Every whitespace-delimited token
    Whitespace,
    /// Lowercased word runs of two or more characters
    WordRun,
}

impl From<TermPatternArg> for TermPattern {
    fn from(arg: TermPatternArg) -> Self {
        match arg {
            TermPatternArg::Whitespace => TermPattern::Whitespace,
            TermPatternArg::WordRun => TermPattern::WordRun,
        }
    }
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            user_dicts: self.user_dicts.clone(),
            hmm: !self.no_hmm,
            term_pattern: self.term_pattern.into(),
        }
    }
}
