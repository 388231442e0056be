use crate::common::{TempWorkspace, count_rows};
use predicates::prelude::*;

#[test]
fn skips_named_directory() {
    let ws = TempWorkspace::new();
    ws.create_lines("file1.txt", 3);
    ws.create_lines("skip/file2.txt", 10);

    count_rows()
        .arg("-d")
        .arg(ws.path())
        .args(["-esc", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file1.txt | Rows: 3"))
        .stdout(predicate::str::contains("file2.txt").not())
        .stdout(predicate::str::ends_with("Total count: 3\n"));
}

#[test]
fn counts_nested_files_and_sums_total() {
    let ws = TempWorkspace::new();
    ws.create_lines("a.txt", 2);
    ws.create_lines("src/lib.rs", 5);
    ws.create_file("src/deep/tail.txt", "one\ntwo\nno newline");
    ws.create_file("empty.txt", "");

    let output = count_rows().arg("-d").arg(ws.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().any(|l| l.ends_with("tail.txt | Rows: 2")));
    assert!(lines.iter().any(|l| l.ends_with("empty.txt | Rows: 0")));
    assert_eq!(lines.last(), Some(&"Total count: 9"));
}

#[test]
fn skip_applies_at_any_depth() {
    let ws = TempWorkspace::new();
    ws.create_lines("keep.txt", 1);
    ws.create_lines("a/b/node_modules/pkg/index.js", 100);
    ws.create_lines("a/b/main.js", 4);

    count_rows()
        .arg("-d")
        .arg(ws.path())
        .args(["--esc", " node_modules , .git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.js").not())
        .stdout(predicate::str::contains("Total count: 5"));
}

#[test]
fn empty_directory_reports_zero() {
    let ws = TempWorkspace::new();
    ws.create_dir("nothing/here");

    count_rows()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .success()
        .stdout("Total count: 0\n");
}

#[test]
fn missing_root_fails_with_diagnostic() {
    let ws = TempWorkspace::new();

    let output = count_rows()
        .arg("-d")
        .arg(ws.path().join("does-not-exist"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Total count"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "{stderr}");
    assert!(lines[0].contains("does-not-exist"));
    assert_eq!(lines[0].matches("(os error").count(), 1, "{stderr}");
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_reported_and_skipped() {
    let ws = TempWorkspace::new();
    ws.create_lines("ok.txt", 2);
    std::os::unix::fs::symlink(ws.path().join("gone"), ws.path().join("broken")).unwrap();

    count_rows()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok.txt | Rows: 2"))
        .stdout(predicate::str::contains("Total count: 2"))
        .stderr(predicate::str::contains("broken"));
}

#[cfg(unix)]
#[test]
fn dot_root_prints_paths_without_prefix() {
    let ws = TempWorkspace::new();
    ws.create_lines("a.txt", 2);
    ws.create_lines("sub/b.txt", 1);

    count_rows()
        .current_dir(ws.path())
        .args(["-d", "."])
        .assert()
        .success()
        .stdout(
            "File: a.txt | Rows: 2\n\
             File: sub/b.txt | Rows: 1\n\
             Total count: 3\n",
        );
}

#[test]
fn dot_root_can_be_skipped_by_name() {
    let ws = TempWorkspace::new();
    ws.create_lines("a.txt", 2);

    count_rows()
        .current_dir(ws.path())
        .args(["-d", ".", "-esc", "."])
        .assert()
        .success()
        .stdout("Total count: 0\n");
}

#[cfg(unix)]
#[test]
fn relative_root_is_cleaned() {
    let ws = TempWorkspace::new();
    ws.create_lines("sub/b.txt", 4);

    count_rows()
        .current_dir(ws.path())
        .args(["-d", "./sub/../sub/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File: sub/b.txt | Rows: 4"));
}
