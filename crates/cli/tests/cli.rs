use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_extract-timings"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("extract-timings-{}-{}", process::id(), name))
}

#[test]
fn test_prints_final_timings_in_order() {
    let path = temp_path("time.txt");
    fs::write(
        &path,
        "Run Time (s): real 0.5, user ...\n\
         v1,v2\n\
         (result row)\n\
         Run Time (s): real 1.234, user ...\n\
         v3\n\
         (result row)\n\
         Run Time (s): real 2.0, user ...\n",
    )
    .unwrap();

    let output = bin().arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.234\n2.0\n");
}

#[test]
fn test_no_blocks_exits_zero_with_empty_output() {
    let path = temp_path("no-blocks.txt");
    fs::write(&path, "Run Time (s): real 0.5\nv1\n").unwrap();

    let output = bin().arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_exits_one_naming_path() {
    let path = temp_path("missing.txt");

    let output = bin().arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(&format!("Error: File '{}' not found.", path.display())));
}

#[test]
fn test_default_input_is_time_txt() {
    let dir = temp_path("default-dir");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("time.txt"), "v1\nrow\nRun Time (s): real 7.5 user 1.0\n").unwrap();

    let output = bin().current_dir(&dir).output().unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "7.5\n");
}

#[test]
fn test_unreadable_input_exits_one() {
    let output = bin().arg(env::temp_dir()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().starts_with("Error: "));
}

#[test]
fn test_carriage_return_line_endings() {
    let path = temp_path("cr-only.txt");
    fs::write(&path, "v1\r(row)\rRun Time (s): real 1.5\r").unwrap();

    let output = bin().arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.5\n");
}

#[test]
fn test_small_timing_uses_signed_exponent() {
    let path = temp_path("small.txt");
    fs::write(&path, "v1\n(row)\nRun Time (s): real 0.00001 user 0.0\n").unwrap();

    let output = bin().arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1e-05\n");
}
