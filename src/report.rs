use std::{fs::OpenOptions, io::Write, path::Path};

use crate::error::{Error, Result};

/// One report line, without the trailing newline
///
/// `{文件<original>和文件<suspect>的相似度为:<similarity>}` with two decimals.
pub fn format_line(original: &str, suspect: &str, similarity: f64) -> String {
    format!("{{文件{original}和文件{suspect}的相似度为:{similarity:.2}}}")
}

/// Append `line` and a newline to `output`, creating the file if needed
pub fn append_line<P: AsRef<Path>>(output: P, line: &str) -> Result<()> {
    let path = output.as_ref();
    let to_err = |source| Error::Output {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_err)?;
    writeln!(file, "{line}").map_err(to_err)?;
    file.flush().map_err(to_err)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn line_format_uses_two_decimals() {
        assert_eq!(
            format_line("orig.txt", "orig_add.txt", 75.1234),
            "{文件orig.txt和文件orig_add.txt的相似度为:75.12}"
        );
        assert_eq!(format_line("a", "b", 100.0), "{文件a和文件b的相似度为:100.00}");
        assert_eq!(format_line("a", "b", 0.0), "{文件a和文件b的相似度为:0.00}");
    }

    #[test]
    fn append_preserves_prior_lines() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        append_line(&out, "first").unwrap();
        append_line(&out, "second").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn unwritable_output_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.txt");
        assert!(matches!(append_line(&out, "x"), Err(Error::Output { .. })));
    }
}
