use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const MAX_SIZE_MESSAGE: &str = "The max_size argument must be an integer number greater than zero.";

fn cmd() -> Command {
    Command::cargo_bin("sea-username").unwrap()
}

fn walrus_words(tmp: &TempDir) -> std::path::PathBuf {
    let file = tmp.child("words.toml");
    file.write_str(
        r#"descriptors = ["cute"]
creature_descriptors = []
colors = ["red"]
sea_objects = ["walrus"]
sea_creatures = []
"#,
    )
    .unwrap();
    file.path().to_path_buf()
}

fn stdout_of(args: &[&str]) -> String {
    let output = cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn bare_invocation_prints_one_name() {
    let out = stdout_of(&[]);
    let name = out.trim_end();
    assert!(!name.is_empty());
    assert!(!name.contains(char::is_whitespace));
    assert!(name.chars().filter(|c| c.is_ascii_uppercase()).count() >= 3);
}

#[test]
fn seed_makes_output_reproducible() {
    let first = stdout_of(&["generate", "--seed", "7", "--count", "5"]);
    let second = stdout_of(&["generate", "--seed", "7", "--count", "5"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 5);
}

#[test]
fn json_output_is_an_array() {
    let out = stdout_of(&["generate", "--count", "3", "--json"]);
    let names: Vec<String> = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(names.len(), 3);
}

#[test]
fn max_size_tiers_with_word_file() {
    let tmp = TempDir::new().unwrap();
    let words = walrus_words(&tmp);
    let words = words.to_str().unwrap();

    for (max, expected) in [
        ("100", "CuteRedWalrus"),
        ("15", "CuteRedWalrus"),
        ("12", "CuteWalrus"),
        ("9", "RedWalrus"),
        ("5", "Walru"),
    ] {
        cmd()
            .args(["generate", "--words", words, "--max-size", max])
            .assert()
            .success()
            .stdout(format!("{}\n", expected));
    }
}

#[test]
fn default_lists_respect_max_size() {
    let out = stdout_of(&["generate", "--max-size", "10", "--count", "50", "--seed", "3"]);
    for name in out.lines() {
        assert!(!name.is_empty());
        assert!(name.chars().count() <= 10, "{} is too long", name);
    }
}

#[test]
fn invalid_max_size_is_rejected() {
    for bad in ["--max-size=-99", "--max-size=0", "--max-size=abc"] {
        cmd()
            .args(["generate", bad])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(MAX_SIZE_MESSAGE));
    }
}

#[test]
fn zero_count_is_rejected() {
    cmd().args(["generate", "--count", "0"]).assert().failure();
}

#[test]
fn missing_word_file_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["generate", "--words"])
        .arg(tmp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn empty_colors_in_word_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("words.toml");
    file.write_str("colors = []\n").unwrap();
    cmd()
        .args(["generate", "--words"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Word list is empty: colors"));
}

#[test]
fn partial_word_file_overrides_only_its_lists() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("words.toml");
    file.write_str("colors = [\"blue\"]\n").unwrap();
    cmd()
        .args(["generate", "--count", "10", "--words"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines().all(|name| name.contains("Blue"))
        }));
}

#[test]
fn seed_maps_to_fixed_names() {
    cmd()
        .args(["generate", "--seed", "0"])
        .assert()
        .success()
        .stdout("TinyGrayRay\n");
    cmd()
        .args(["--seed", "2"])
        .assert()
        .success()
        .stdout("SwimmingElectricBlueUrchin\n");
}

#[test]
fn generate_flags_work_without_subcommand() {
    let tmp = TempDir::new().unwrap();
    let words = walrus_words(&tmp);

    cmd()
        .args(["--max-size", "12", "--words"])
        .arg(&words)
        .assert()
        .success()
        .stdout("CuteWalrus\n");
}

#[test]
fn huge_max_size_keeps_full_name() {
    let tmp = TempDir::new().unwrap();
    let words = walrus_words(&tmp);

    cmd()
        .args(["generate", "--max-size", "18446744073709551616", "--words"])
        .arg(&words)
        .assert()
        .success()
        .stdout("CuteRedWalrus\n");
}

#[test]
fn top_level_invalid_max_size_is_rejected() {
    cmd()
        .arg("--max-size=abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains(MAX_SIZE_MESSAGE));
}
