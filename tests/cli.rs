use std::io::Write;
use std::process::Output;

use assert_cmd::Command;

/// The binary with user configuration pointed somewhere empty.
fn dealias() -> Command {
    let mut cmd = Command::cargo_bin("tcsh-dealias").unwrap();
    cmd.env("TCSH_DEALIAS_CONFIG", "/nonexistent/tcsh-dealias/config.toml");
    cmd
}

fn alias_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn no_arguments_prints_usage() {
    let out = dealias().output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("usage:"));
    assert!(stderr(&out).contains("alias > alias.txt"));
}

#[test]
fn noalias_passes_command_through() {
    dealias()
        .args(["-noalias", "ls", "-l"])
        .assert()
        .success()
        .stdout("ls -l\n");
}

#[test]
fn alias_file_expansion() {
    let file = alias_file("ll\t(ls -l)\n");
    dealias()
        .arg(file.path())
        .args(["ll", "/tmp"])
        .assert()
        .success()
        .stdout("ls -l /tmp\n");
}

#[test]
fn quoted_command_is_unwrapped() {
    dealias()
        .args(["-noalias", "\"echo a; echo b\""])
        .assert()
        .success()
        .stdout("echo a;echo b\n");
}

#[test]
fn missing_alias_file_warns_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let out = dealias()
        .arg(dir.path().join("missing.txt"))
        .arg("ll")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ll\n");
    assert!(stderr(&out).contains("Unable to open file"));
}

#[test]
fn malformed_line_warns() {
    let file = alias_file("lonely\nll\tls -l\n");
    let out = dealias().arg(file.path()).arg("ll").output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ls -l\n");
    assert!(stderr(&out).contains("Ignoring unexpected entry in alias table: lonely"));
}

#[test]
fn backticks_and_escaped_bang() {
    let file = alias_file("ls\tls -la\n");
    dealias()
        .arg(file.path())
        .args(["echo", "`ls`", "\\!"])
        .assert()
        .success()
        .stdout("echo `ls -la` !\n");
}

#[test]
fn dump_config_prints_defaults() {
    let out = dealias().arg("--dump-config").output().unwrap();
    assert!(out.status.success());
    assert!(stdout(&out).contains("max_depth = 20"));
    assert!(stdout(&out).contains("level = \"warn\""));
}

#[test]
fn user_config_sets_depth_ceiling() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "[expansion]\nmax_depth = 1\n").unwrap();
    let file = alias_file("a\tb\nb\ta\n");
    dealias()
        .env("TCSH_DEALIAS_CONFIG", config.path())
        .arg(file.path())
        .arg("a")
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn oversized_depth_ceiling_is_clamped() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "[expansion]\nmax_depth = 5000000\n").unwrap();
    let file = alias_file("a\tb\nb\ta\n");
    let out = dealias()
        .env("TCSH_DEALIAS_CONFIG", config.path())
        .arg(file.path())
        .arg("a")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "a\n");
    assert!(stderr(&out).contains("exceeds 256"));
}

#[test]
fn warnings_survive_quiet_log_level() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "[logging]\nlevel = \"off\"\n").unwrap();
    let file = alias_file("lonely\nll\tls -l\n");
    let out = dealias()
        .env("TCSH_DEALIAS_CONFIG", config.path())
        .arg(file.path())
        .arg("ll")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ls -l\n");
    assert!(stderr(&out).contains("Ignoring unexpected entry in alias table: lonely"));
}
