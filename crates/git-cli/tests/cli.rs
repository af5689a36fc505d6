use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn gitr(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("gitr").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn hash_object_writes_the_expected_blob_oid() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();

    gitr(dir.path())
        .args(["hash-object", "hello.txt", "-w"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3b18e512dba79e4c8300dd08aeb37f8e728b8dad",
        ));
}

#[test]
fn write_tree_matches_the_expected_payload() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    gitr(dir.path())
        .args(["hash-object", "hello.txt", "-w"])
        .assert()
        .success();

    gitr(dir.path())
        .arg("write-tree")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{40}\n$").unwrap());
}

#[test]
fn commit_has_no_parents_and_moves_head_and_master() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();

    let commit_out = gitr(dir.path())
        .args(["commit", "-m", "first"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let commit_oid = String::from_utf8(commit_out).unwrap().trim().to_string();

    gitr(dir.path())
        .args(["cat-file", "-p", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tree ").and(predicate::str::contains("first")));

    gitr(dir.path())
        .args(["cat-file", "-p", "refs/heads/master"])
        .assert()
        .success()
        .stdout(predicate::str::contains(commit_oid));
}

#[test]
fn log_and_diff_see_the_second_commit() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "first"]).assert().success();

    fs::write(dir.path().join("hello.txt"), b"bye\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "second"]).assert().success();

    gitr(dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("second").and(predicate::str::contains("first")));

    fs::write(dir.path().join("hello.txt"), b"bye\n").unwrap();
    gitr(dir.path())
        .args(["diff", "HEAD"])
        .assert()
        .success();
}

#[test]
fn merge_of_a_diverged_branch_sets_merge_head_and_produces_a_two_parent_commit() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "base"]).assert().success();

    gitr(dir.path()).args(["branch", "feature"]).assert().success();
    gitr(dir.path()).args(["checkout", "feature"]).assert().success();
    fs::write(dir.path().join("hello.txt"), b"f\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "on feature"]).assert().success();

    gitr(dir.path()).args(["checkout", "master"]).assert().success();
    assert_eq!(fs::read(dir.path().join("hello.txt")).unwrap(), b"hi\n");
    fs::write(dir.path().join("hello.txt"), b"bye\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "on master"]).assert().success();

    gitr(dir.path()).args(["merge", "feature"]).assert().success();

    gitr(dir.path())
        .args(["cat-file", "-p", "MERGE_HEAD"])
        .assert()
        .success();

    let merge_oid = gitr(dir.path())
        .args(["commit", "-m", "merge feature"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let merge_oid = String::from_utf8(merge_oid).unwrap().trim().to_string();

    gitr(dir.path())
        .args(["cat-file", "-p", &merge_oid])
        .assert()
        .success()
        .stdout(predicate::function(|s: &str| s.matches("commit ").count() == 2));

    gitr(dir.path())
        .args(["cat-file", "-t", "MERGE_HEAD"])
        .assert()
        .failure();
}

#[test]
fn get_oid_resolves_every_spelling_to_the_same_commit() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    let commit_oid = gitr(dir.path())
        .args(["commit", "-m", "first"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let commit_oid = String::from_utf8(commit_oid).unwrap().trim().to_string();

    for rev in ["HEAD", "master", "refs/heads/master", commit_oid.as_str()] {
        gitr(dir.path())
            .args(["cat-file", "-t", rev])
            .assert()
            .success()
            .stdout("commit\n");
    }

    gitr(dir.path())
        .args(["cat-file", "-t", "does-not-exist-xyz"])
        .assert()
        .failure();
}

#[test]
fn show_ref_lists_head_and_branches() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "first"]).assert().success();

    gitr(dir.path())
        .arg("show-ref")
        .assert()
        .success()
        .stdout(predicate::str::contains("refs/heads/master"));
}

#[test]
fn status_reports_a_clean_tree_and_then_a_modification() {
    let dir = tempfile::tempdir().unwrap();
    gitr(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("hello.txt"), b"hi\n").unwrap();
    gitr(dir.path()).args(["commit", "-m", "first"]).assert().success();

    gitr(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("working tree clean"));

    fs::write(dir.path().join("hello.txt"), b"bye\n").unwrap();
    gitr(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("modified"));
}
