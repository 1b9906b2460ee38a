#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `jfill` with HOME pointed into the temp dir so `~/templates` is isolated.
fn jfill_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("jfill"));
    cmd.env("HOME", home)
        .env_remove("JFILL_USER_TEMPLATES")
        .env_remove("RUST_LOG");
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("tpl")).unwrap();
    fs::write(
        temp.path().join("tpl/greet.j2"),
        "Hello {{ name }}!\n{% for t in tags %}\n- {{ t }}\n{% endfor %}\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("vars.yaml"),
        "name: ada\ntags:\n  - one\n  - two\n",
    )
    .unwrap();
    temp
}

#[test]
fn test_no_arguments_prints_help() {
    let temp = TempDir::new().unwrap();
    jfill_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_render_to_stdout() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "vars.yaml"])
        .assert()
        .success()
        .stdout("Hello ada!\n- one\n- two\n\n");
}

#[test]
fn test_render_with_altdir() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["greet.j2", "vars.yaml", "--altdir", "tpl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello ada!"));
}

#[test]
fn test_home_templates_fallback() {
    let temp = setup();
    fs::create_dir_all(temp.path().join("templates")).unwrap();
    fs::write(temp.path().join("templates/shared.j2"), "shared {{ name }}").unwrap();

    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/shared.j2", "vars.yaml"])
        .assert()
        .success()
        .stdout("shared ada\n");
}

#[test]
fn test_write_append_and_safe() {
    let temp = setup();
    let out = temp.path().join("out/result.txt");

    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "vars.yaml", "--of", "out/result.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Hello ada!\n- one\n- two\n"
    );

    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "vars.yaml", "--of", "out/result.txt", "--append"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Hello ada!\n- one\n- two\nHello ada!\n- one\n- two\n"
    );

    fs::write(&out, "previous").unwrap();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "vars.yaml", "--of", "out/result.txt", "--safe"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Backed up"));

    let backups: Vec<_> = fs::read_dir(temp.path().join("out"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("result.txt."))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(backups[0].path()).unwrap(), "previous");
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Hello ada!\n- one\n- two\n"
    );
}

#[test]
fn test_list_templates() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "--lt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("greet.j2"));
}

#[test]
fn test_list_templates_ignores_datafile_and_outfile() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "vars.yaml", "--lt", "--of", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("greet.j2"));

    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn test_missing_template_lists_and_fails() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/nope.j2", "vars.yaml"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Available templates:"))
        .stderr(predicate::str::contains("greet.j2"))
        .stderr(predicate::str::contains("Template not found: nope.j2"));
}

#[test]
fn test_missing_data_file_fails() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2", "missing.yaml"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Data file not found"));
}

#[test]
fn test_datafile_required_without_lt() {
    let temp = setup();
    jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/greet.j2"])
        .assert()
        .code(2);
}

#[test]
fn test_random_token_in_template() {
    let temp = setup();
    fs::write(temp.path().join("tpl/secret.j2"), "{{ random_token(12) }}").unwrap();

    let output = jfill_cmd(temp.path())
        .current_dir(temp.path())
        .args(["tpl/secret.j2", "vars.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').len(), 12);
}
