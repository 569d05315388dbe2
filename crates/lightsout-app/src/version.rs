//! Version string reported by `lightsout --version` and logged at startup.

/// Returns `<package version> (<commit sha>)`.
///
/// The sha is embedded by the build script; builds outside a git checkout
/// report `unknown`.
#[must_use]
pub fn build_version() -> String {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!("{} ({sha})", env!("CARGO_PKG_VERSION"))
}
