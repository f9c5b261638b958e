// Runs the built binary and checks what a caller observes.

use std::{fs, process::Command};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plagiarism-checker"))
}

#[test]
fn appends_result_and_prints_timer() {
    let dir = TempDir::new().unwrap();
    let orig = dir.path().join("orig.txt");
    let copy = dir.path().join("orig_add.txt");
    let out = dir.path().join("ans.txt");
    fs::write(&orig, "这是一个测试文本。今天天气很好。").unwrap();
    fs::write(&copy, "这是一个测试文本。今天下雨了。").unwrap();

    for _ in 0..2 {
        let output = bin().arg(&orig).arg(&copy).arg(&out).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("程序执行时间: "), "{stdout}");
        assert!(stdout.trim_end().ends_with('秒'), "{stdout}");
    }

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let prefix = format!("{{文件{}和文件{}的相似度为:", orig.display(), copy.display());
    for line in lines {
        let score = line
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or_else(|| panic!("unexpected line {line}"));
        let (_, decimals) = score.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2);
        let value: f64 = score.parse().unwrap();
        assert!(value > 0.0 && value < 100.0);
    }
}

#[test]
fn failures_print_generic_message_and_exit_cleanly() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ans.txt");
    let output = bin()
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("also_missing.txt"))
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "系统正在升级中...........");
    assert!(!out.exists());
}

#[test]
fn missing_arguments_print_generic_message() {
    let output = bin().arg("only_one.txt").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "系统正在升级中...........");
}

#[test]
fn empty_documents_print_generic_message() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "").unwrap();
    fs::write(&b, "").unwrap();
    let out = dir.path().join("ans.txt");
    let output = bin().arg(&a).arg(&b).arg(&out).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "系统正在升级中...........");
    assert!(!out.exists());
}

#[test]
fn cause_is_logged_to_stderr() {
    let dir = TempDir::new().unwrap();
    let output = bin()
        .env("RUST_LOG", "plagiarism_checker=error")
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("b.txt"))
        .arg(dir.path().join("ans.txt"))
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"), "{stderr}");
}

#[test]
fn version_and_help_print_normally() {
    let output = bin().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("plagiarism-checker "), "{stdout}");

    let output = bin().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--no-hmm"), "{stdout}");
    assert!(!stdout.contains("系统正在升级中"));
}

#[test]
fn stderr_is_quiet_without_rust_log() {
    let dir = TempDir::new().unwrap();
    let output = bin()
        .env_remove("RUST_LOG")
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("b.txt"))
        .arg(dir.path().join("ans.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}
