//! Build script for the FreshGuard alert service
//!
//! Captures build metadata (timestamp, git hash, toolchain) into
//! compile-time environment variables consumed by `freshguard::build_info`.

use std::process::Command;

fn main() {
    let build_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git_hash().unwrap_or_else(|| "unknown".to_string())
    );
    println!(
        "cargo:rustc-env=RUST_VERSION={}",
        rust_version().unwrap_or_else(|| "unknown".to_string())
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=Cargo.lock");
}

/// Short hash of the current commit, if the tree is a git checkout
fn git_hash() -> Option<String> {
    // docs.rs builds have no git metadata
    if std::env::var("DOCS_RS").is_ok() {
        return Some("docs-rs-build".to_string());
    }
    command_stdout("git", &["rev-parse", "--short", "HEAD"])
}

/// Version string of the compiling toolchain
fn rust_version() -> Option<String> {
    if std::env::var("DOCS_RS").is_ok() {
        return Some("stable".to_string());
    }
    command_stdout("rustc", &["--version"])
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_string())
}
