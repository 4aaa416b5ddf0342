//! Embeds the git revision into the `nanofin --version` string.

use std::path::Path;
use std::process::Command;

fn git_short_sha(repo_root: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let workspace_root = Path::new(&manifest_dir).join("..");

    let sha = git_short_sha(&workspace_root).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=NANOFIN_BUILD_SHA={sha}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
