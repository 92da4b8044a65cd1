//! End-to-end runs of the casecheck binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn casecheck(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_casecheck"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run casecheck")
}

fn write(dir: &Path, relative: &str, source: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).unwrap();
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_conforming_tree_passes_silently() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/main/java/com/example/App.java",
        "package com.example;\npublic class App { public static void main(String[] args) {} }\n",
    );
    write(
        dir.path(),
        "src/main/java/com/example/Greeter.java",
        "package com.example;\nclass Greeter { String greet_user(String userName) { return userName; } }\n",
    );

    let output = casecheck(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_empty_directory_passes() {
    let dir = TempDir::new().unwrap();
    let output = casecheck(dir.path(), &["check"]);
    assert!(output.status.success());
}

#[test]
fn test_violation_fails_with_message_and_location() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Foo.java", "class Foo {\n    void doWork() {}\n}\n");

    let output = casecheck(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.contains(
            "Code style violated in method 'doWork' of class 'Foo'. Method names should only use snake_case."
        ),
        "stderr: {err}"
    );
    assert!(err.contains("Foo.java:2:10"), "stderr: {err}");
}

#[test]
fn test_only_first_file_in_order_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.java", "class A { void firstBad() {} }");
    write(dir.path(), "B.java", "class b {}");

    let output = casecheck(dir.path(), &["--no-color"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("method 'firstBad' of class 'A'"), "stderr: {err}");
    assert!(!err.contains("class 'b'"), "stderr: {err}");
}

#[test]
fn test_parse_error_uses_distinct_exit_code() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Broken.java", "class Broken { void x( ");

    let output = casecheck(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to parse Java file: "), "stderr: {err}");
    assert!(err.contains("Broken.java"), "stderr: {err}");
}

#[test]
fn test_explicit_root_argument() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "module/Widget.java", "class Widget { int Size; }");
    write(dir.path(), "Other.java", "class Other {}");

    let output = casecheck(dir.path(), &["check", "module"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("variable 'Size' of class 'Widget'"));
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = casecheck(dir.path(), &["check", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_declarations_lists_names_and_verdicts() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Foo.java",
        "class Foo {\n    int count;\n    void doWork(int times) {}\n}\n",
    );

    let output = casecheck(dir.path(), &["declarations", "Foo.java"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("primary type: Foo"), "stdout: {out}");
    let do_work = out
        .lines()
        .find(|line| line.contains("doWork"))
        .expect("doWork should be listed");
    assert!(do_work.contains("method"));
    assert!(do_work.contains("snake_case"));
    assert!(do_work.contains("violation"));
    let count = out.lines().find(|line| line.contains("count")).unwrap();
    assert!(count.trim_end().ends_with("ok"), "line: {count}");
}

#[test]
fn test_verbose_logs_checked_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Foo.java", "class Foo {}");

    let output = casecheck(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("checking file"));
}
