//! Embeds the version reported by `friends --version`.
//!
//! Packagers can pin it with `FRIENDS_VERSION`. Otherwise tagged checkouts
//! report their tag and other checkouts the short commit hash, marked
//! `-dirty` when the tree has local changes. Builds from a source tarball
//! fall back to the crate version.

use std::env;
use std::process::Command;

const VERSION_VAR: &str = "FRIENDS_VERSION";

fn main() {
    // The crate sits two levels below the repository root
    for path in ["../../.git/HEAD", "../../.git/refs/tags", "../../.git/index"] {
        println!("cargo:rerun-if-changed={path}");
    }
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");

    let version = env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env={VERSION_VAR}={version}");
}

fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
