use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_loxscan"))
}

fn make_temp_dir() -> Result<PathBuf, String> {
    let base = std::env::temp_dir().join("loxscan_cli_tests");
    fs::create_dir_all(&base).map_err(|e| e.to_string())?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_nanos();
    let dir = base.join(format!("run_{}_{}", std::process::id(), now));
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

struct CommandResult {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn run_cmd(args: &[&str], input: Option<&str>) -> Result<CommandResult, String> {
    let mut cmd = Command::new(bin_path());
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| e.to_string())?;

    if let Some(mut handle) = child.stdin.take() {
        if let Some(data) = input {
            handle
                .write_all(data.as_bytes())
                .map_err(|e| e.to_string())?;
        }
    }

    let output = child.wait_with_output().map_err(|e| e.to_string())?;
    Ok(CommandResult {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

#[test]
fn file_mode_prints_tokens() -> Result<(), String> {
    let dir = make_temp_dir()?;
    let file = dir.join("ok.lox");
    fs::write(&file, "print 1 != 2;\n").map_err(|e| e.to_string())?;

    let result = run_cmd(&[file.to_str().ok_or("bad path")?], None)?;
    if result.code != Some(0) {
        return Err(result.stderr);
    }
    let expected = "6\nPrint print nil\nNumber 1 1\nBangEqual != nil\nNumber 2 2\nSemicolon ; nil\nEOF  nil\n";
    if result.stdout != expected {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn file_mode_lex_error_exit_code() -> Result<(), String> {
    let dir = make_temp_dir()?;
    let file = dir.join("bad.lox");
    fs::write(&file, "var a = 1;\n/* open").map_err(|e| e.to_string())?;

    let result = run_cmd(&[file.to_str().ok_or("bad path")?], None)?;
    if result.code != Some(65) {
        return Err(format!("expected exit code 65, got {:?}", result.code));
    }
    if !result
        .stderr
        .contains("Error near line 2: Unterminated block comment")
    {
        return Err(format!("unexpected diagnostic: {}", result.stderr));
    }
    if !result.stdout.is_empty() {
        return Err(format!("expected no tokens, got: {}", result.stdout));
    }
    Ok(())
}

#[test]
fn file_mode_missing_file() -> Result<(), String> {
    let dir = make_temp_dir()?;
    let file = dir.join("missing.lox");

    let result = run_cmd(&[file.to_str().ok_or("bad path")?], None)?;
    if result.code != Some(66) {
        return Err(format!("expected exit code 66, got {:?}", result.code));
    }
    if !result.stderr.contains("failed to read") {
        return Err(format!("unexpected stderr: {}", result.stderr));
    }
    Ok(())
}

#[test]
fn too_many_arguments() -> Result<(), String> {
    let result = run_cmd(&["a.lox", "b.lox"], None)?;
    if result.code != Some(64) {
        return Err(format!("expected exit code 64, got {:?}", result.code));
    }
    if result.stderr != "Usage: lox [--verbose] [script]\n" {
        return Err(format!("expected usage, got: {}", result.stderr));
    }
    Ok(())
}

#[test]
fn prompt_mode_quits_on_empty_line() -> Result<(), String> {
    let result = run_cmd(&[], Some("true\n#\n\nfalse\n"))?;
    if result.code != Some(0) {
        return Err(result.stderr);
    }
    if result.stdout != "> 2\nTrue true nil\nEOF  nil\n> > Quitting...\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    if !result.stderr.contains("Error near line 1: Unexpected character.") {
        return Err(format!("unexpected stderr: {}", result.stderr));
    }
    Ok(())
}

#[test]
fn help_flag_prints_usage_to_stdout() -> Result<(), String> {
    let result = run_cmd(&["--help"], None)?;
    if result.code != Some(0) {
        return Err(format!("expected exit code 0, got {:?}", result.code));
    }
    if result.stdout != "Usage: lox [--verbose] [script]\n" {
        return Err(format!("unexpected usage output: {:?}", result.stdout));
    }
    if !result.stderr.is_empty() {
        return Err(format!("expected empty stderr, got: {}", result.stderr));
    }
    Ok(())
}

#[test]
fn version_flag() -> Result<(), String> {
    let result = run_cmd(&["--version"], None)?;
    if !result.stdout.starts_with("lox ") {
        return Err(format!("unexpected version output: {}", result.stdout));
    }
    Ok(())
}
