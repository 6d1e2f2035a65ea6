// synmark/tests/cli_integration_tests.rs
//! Command-line integration tests for the `synmark` binary.
//!
//! The binary is run through `assert_cmd`; rule files, inputs and outputs live
//! in `tempfile` directories so tests leave no artifacts.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn synmark() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("synmark"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn annotates_stdin_to_stdout() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "if|else\tbold\n%d+\tcolor:FF0000,italic\n")?;

    synmark()
        .args(["--format", &path_arg(&rules)])
        .write_stdin("if 1 else 22")
        .assert()
        .success()
        .stdout("<b>if</b> <font color=#FF0000><i>1</i></font> <b>else</b> <font color=#FF0000><i>22</i></font>");
    Ok(())
}

#[test]
fn output_has_no_trailing_newline_added() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "x\tunderline")?;

    synmark()
        .arg(format!("--format={}", path_arg(&rules)))
        .write_stdin("x")
        .assert()
        .success()
        .stdout("<u>x</u>");
    Ok(())
}

#[test]
fn reads_input_file_and_writes_output_file() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "%L%w*\tteletype,size:3\n")?;
    let input = write_file(&dir, "in.txt", "call Foo now\n")?;
    let output = dir.path().join("out.html");

    synmark()
        .args(["--format", &path_arg(&rules)])
        .args(["--input", &path_arg(&input)])
        .args(["--output", &path_arg(&output)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output)?, "call <tt><font size=3>Foo</font></tt> now\n");
    Ok(())
}

#[test]
fn br_flag_marks_newlines() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "b\tbold\n")?;

    synmark()
        .args(["--format", &path_arg(&rules), "--br"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("a<br />\n<b>b</b><br />\n");
    Ok(())
}

#[test]
fn missing_rule_file_passes_input_through() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.fmt");

    synmark()
        .args(["--format", &path_arg(&missing)])
        .write_stdin("plain <text>")
        .assert()
        .success()
        .stdout("plain <text>")
        .stderr(predicate::str::contains("continuing without rules"));
    Ok(())
}

#[test]
fn no_format_flag_passes_input_through_silently() {
    synmark()
        .arg("--br")
        .write_stdin("x\ny")
        .assert()
        .success()
        .stdout("x<br />\ny")
        .stderr(predicate::str::is_empty());
}

#[test]
fn non_utf8_input_is_annotated_bytewise() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "a\tbold\n")?;

    synmark()
        .args(["--format", &path_arg(&rules)])
        .write_stdin(&b"a c\xe9f"[..])
        .assert()
        .success()
        .stdout(b"<b>a</b> c\xe9f".to_vec());
    Ok(())
}

#[test]
fn undecodable_rule_file_exits_4() -> Result<()> {
    let dir = tempdir()?;
    let rules = dir.path().join("latin1.fmt");
    fs::write(&rules, b"a\tbold\ncaf\xe9\titalic\n")?;

    synmark()
        .args(["--format", &path_arg(&rules)])
        .write_stdin("a b")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Rule line 2 is not valid UTF-8"));
    Ok(())
}

#[test]
fn invalid_pattern_exits_4_without_output() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "ok\tbold\n(a\titalic\n")?;

    synmark()
        .args(["--format", &path_arg(&rules)])
        .write_stdin("ok a")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Rule line 2"));
    Ok(())
}

#[test]
fn invalid_style_token_exits_4() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "a\tsize:8\n")?;

    synmark()
        .args(["--format", &path_arg(&rules)])
        .write_stdin("a")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("size:8"));
    Ok(())
}

#[test]
fn compile_failure_leaves_output_file_empty() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "a\tblink\n")?;
    let output = dir.path().join("out.html");

    synmark()
        .args(["--format", &path_arg(&rules), "--output", &path_arg(&output)])
        .write_stdin("a")
        .assert()
        .code(4);

    assert_eq!(fs::read_to_string(&output)?, "");
    Ok(())
}

#[test]
fn unreadable_input_exits_2() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.txt");

    synmark()
        .args(["--input", &path_arg(&missing)])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot read input"));
    Ok(())
}

#[test]
fn uncreatable_output_exits_3() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("no-such-dir").join("out.html");

    synmark()
        .args(["--output", &path_arg(&output)])
        .write_stdin("x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot open output"));
    Ok(())
}

#[test]
fn bad_arguments_exit_1() {
    synmark().arg("--bogus").write_stdin("").assert().code(1);
    synmark().args(["--br", "--br"]).write_stdin("").assert().code(1);
    synmark()
        .args(["--format", "a", "--format", "b"])
        .write_stdin("")
        .assert()
        .code(1);
    synmark().arg("--format").write_stdin("").assert().code(1);
}

#[test]
fn help_with_other_arguments_exits_1() {
    synmark().args(["--help", "--br"]).assert().code(1);
    synmark().args(["--format", "rules.fmt", "--help"]).assert().code(1);
    synmark().args(["--version", "-q"]).assert().code(1);
}

#[test]
fn help_and_version_exit_0() {
    synmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"));
    synmark()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn debug_flag_logs_pipeline() -> Result<()> {
    let dir = tempdir()?;
    let rules = write_file(&dir, "rules.fmt", "a\tbold\n")?;

    synmark()
        .args(["-d", "--format", &path_arg(&rules)])
        .write_stdin("a")
        .assert()
        .success()
        .stdout("<b>a</b>")
        .stderr(predicate::str::contains("Starting synmark operation."))
        .stderr(predicate::str::contains("synmark_core::compiler"));
    Ok(())
}

#[test]
fn quiet_flag_silences_warnings() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.fmt");

    synmark()
        .args(["-q", "--format", &path_arg(&missing)])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("x")
        .stderr(predicate::str::is_empty());
    Ok(())
}
