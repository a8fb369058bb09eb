mod common;

use common::{encrypt, PERM, TARGET};
use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    cipher_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        Self::with_plaintext(TARGET)
    }

    fn with_plaintext(plain: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cipher_path = dir.path().join("message.txt");
        let mut f = File::create(&cipher_path).unwrap();
        writeln!(f, "{}", encrypt(plain, PERM)).unwrap();
        Self { dir, cipher_path }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cipher(&self) -> &str {
        self.cipher_path.to_str().unwrap()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cipherforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn parse_score(stdout: &str) -> f32 {
    let re = Regex::new(r"Score: ([0-9.]+)").unwrap();
    re.captures(stdout)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or_else(|| panic!("no score in output:\n{}", stdout))
}

#[test]
fn test_crack_prints_final_result() {
    let ctx = TestContext::new();
    let out = run(&["crack", ctx.cipher()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FINAL RESULT"));
    assert!(stdout.contains(TARGET));
    assert!(stdout.contains("Very high confidence"));
    assert!(parse_score(&stdout) > 500.0);
}

#[test]
fn test_crack_json_report() {
    let ctx = TestContext::new();
    let out = run(&["crack", ctx.cipher(), "--json"]);
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["plaintext"].as_str().map(str::trim), Some(TARGET));
    assert_eq!(report["confidence"], "very_high");
    assert_eq!(report["key"].as_str().map(str::len), Some(26));
    assert!(report["stages"].as_array().unwrap().len() == 5);
}

#[test]
fn test_disabling_phrase_lowers_score() {
    let ctx = TestContext::new();
    let with_phrase = parse_score(&String::from_utf8_lossy(
        &run(&["crack", ctx.cipher()]).stdout,
    ));
    let out = run(&["crack", ctx.cipher(), "--calibration-phrase", ""]);
    assert!(out.status.success());
    let without = parse_score(&String::from_utf8_lossy(&out.stdout));
    assert!(without < with_phrase);
}

#[test]
fn test_decrypt_with_known_key() {
    let ctx = TestContext::new();
    let out = run(&["decrypt", ctx.cipher(), "--key", PERM]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(TARGET));
}

#[test]
fn test_decrypt_rejects_bad_key() {
    let ctx = TestContext::new();
    let out = run(&["decrypt", ctx.cipher(), "--key", "ABC"]);
    assert!(!out.status.success());
}

#[test]
fn test_missing_input_fails() {
    let out = run(&["crack", "/no/such/ciphertext.txt"]);
    assert!(!out.status.success());
}

#[test]
fn test_config_file_with_cli_override() {
    let ctx = TestContext::new();
    let config = ctx.write(
        "config.json",
        r#"{ "search": { "calibration_phrase": "" }, "thresholds": { "very_high": 100000.0, "high": 90000.0, "medium": 80000.0 } }"#,
    );
    let out = run(&[
        "crack",
        ctx.cipher(),
        "--config",
        config.to_str().unwrap(),
        "--calibration-phrase",
        "SEND THE MONEY TO ALICE",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    // Phrase restored from the CLI, thresholds kept from the file.
    assert!(stdout.contains(TARGET));
    assert!(stdout.contains("Low confidence"));
}

#[test]
fn test_invalid_config_fails() {
    let ctx = TestContext::new();
    let config = ctx.write("bad.json", r#"{ "weights": { "vowel_heavy_ratio": 3.0 } }"#);
    let out = run(&["crack", ctx.cipher(), "--config", config.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn test_custom_language_table() {
    let ctx = TestContext::with_plaintext("the cat sat");
    let table = ctx.write(
        "lang.tsv",
        "letter\tT\t30\nletter\tA\t30\nletter\tE\t10\nletter\tC\t10\nletter\tH\t10\nletter\tS\t10\nword\tTHE\nword\tCAT\nword\tSAT\n",
    );
    let out = run(&["crack", ctx.cipher(), "-l", table.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let bad = ctx.write("bad.tsv", "word\tTHE\n");
    let out = run(&["crack", ctx.cipher(), "-l", bad.to_str().unwrap()]);
    assert!(!out.status.success());
}
