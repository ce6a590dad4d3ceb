#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Build a `file://` base URL for a directory.
pub fn file_url(dir: &Path) -> String {
    format!("file://{}", dir.display())
}

/// Run the CLI with an isolated HOME so stored settings never leak between
/// tests. `base_url` is passed through `MAHASISWA_BASE_URL` when given.
pub fn run_cli_with_env(args: &[&str], home: &Path, base_url: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mahasiswa"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    match base_url {
        Some(url) => cmd.env("MAHASISWA_BASE_URL", url),
        None => cmd.env_remove("MAHASISWA_BASE_URL"),
    };
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, base_url: Option<&str>) -> String {
    let output = run_cli_with_env(args, home, base_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_with_env_failure(args: &[&str], home: &Path, base_url: Option<&str>) -> String {
    let output = run_cli_with_env(args, home, base_url);
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("CLI command unexpectedly succeeded: {:?}\nstdout: {}", args, stdout);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn create_args<'a>(nim: &'a str, name: &'a str) -> Vec<&'a str> {
    vec![
        "create", "--nim", nim, "--nama", name, "--alamat", "Jl. A", "--jenis-kelamin", "F",
        "--kelas", "TI-1", "--angkatan", "2021",
    ]
}
