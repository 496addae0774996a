//! Build-time information
//!
//! Build metadata captured by `build.rs` at compile time. Git details are
//! optional because the crate may be built outside a repository.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Placeholder vergen emits when git metadata cannot be read
const IDEMPOTENT_OUTPUT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Git commit SHA, if built from a checkout
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| *sha != IDEMPOTENT_OUTPUT)
}

/// Git branch, if built from a checkout
pub fn git_branch() -> Option<&'static str> {
    option_env!("VERGEN_GIT_BRANCH").filter(|branch| *branch != IDEMPOTENT_OUTPUT)
}

/// Short form of the commit SHA, or "unknown"
pub fn git_sha_short() -> &'static str {
    match git_sha() {
        Some(sha) if sha.len() >= 7 => &sha[..7],
        Some(sha) => sha,
        None => "unknown",
    }
}

/// Returns a formatted build version string
///
/// Format: `{crate_version}+{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{}-opt{}",
        env!("CARGO_PKG_VERSION"),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

/// Returns a detailed build info string
pub fn detailed_info() -> String {
    format!(
        "Version: {}\nGit: {}@{}\nBuilt: {}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        env!("CARGO_PKG_VERSION"),
        git_branch().unwrap_or("unknown"),
        git_sha_short(),
        BUILD_TIMESTAMP,
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}
