//! Path normalization.
//!
//! Admission decisions key on a canonical form of each requested path.
//! Normalization expands home-directory shorthand (`~`, `~/...`, and the
//! Windows-style `%userprofile%` token) and collapses `.`/`..` segments
//! lexically. It never touches the filesystem: symlinks are not resolved
//! and existence is not checked, so the same input always yields the
//! same output.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The Windows user-profile shorthand, matched case-insensitively.
const USERPROFILE_TOKEN: &str = "%userprofile%";

/// A canonical-form path, the sole key for trust lookups and workspace
/// membership.
///
/// Produced by [`normalize`] (or deserialized from a source that stored
/// a normalized form). Whitespace-only input normalizes to the empty
/// path; callers filter those before admission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPath(PathBuf);

impl NormalizedPath {
    /// Borrow the underlying path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// True when normalization produced an empty path (blank input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Normalize a raw path string using the current user's home directory.
///
/// Convenience wrapper over [`normalize_with_home`]. When no home
/// directory can be determined, shorthand forms are left unexpanded and
/// only lexical normalization applies.
#[must_use]
pub fn normalize(raw: &str) -> NormalizedPath {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    normalize_with_home(raw, home.as_deref())
}

/// Normalize a raw path string against an explicit home directory.
///
/// Pure and deterministic: the only input besides `raw` is `home`.
/// Blank input yields the empty path; this function never fails.
/// Idempotent: normalizing an already-normalized path is a no-op.
#[must_use]
pub fn normalize_with_home(raw: &str, home: Option<&Path>) -> NormalizedPath {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedPath(PathBuf::new());
    }

    let expanded = expand_home(trimmed, home);
    NormalizedPath(collapse(&expanded))
}

/// Substitute home-directory shorthand at the start of a path.
fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    let lowered = path.to_lowercase();
    if lowered.starts_with(USERPROFILE_TOKEN) {
        let rest = &path[USERPROFILE_TOKEN.len()..];
        return join_remainder(home, rest);
    }
    if path == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Append the remainder after a shorthand token, tolerating a leading
/// separator in the remainder.
fn join_remainder(home: &Path, rest: &str) -> PathBuf {
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}

/// Lexically collapse `.` and `..` segments and redundant separators.
///
/// A `..` at the root is dropped; a `..` that cannot be matched against
/// a preceding normal segment in a relative path is kept. A relative
/// path that collapses to nothing becomes `.`, matching the behavior of
/// mainstream path-normalization routines.
fn collapse(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                },
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let mut out = PathBuf::new();
    for part in parts {
        out.push(part.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        PathBuf::from("/home/tester")
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert!(normalize_with_home("", Some(&home())).is_empty());
        assert!(normalize_with_home("   ", Some(&home())).is_empty());
        assert!(normalize_with_home("\t\n", Some(&home())).is_empty());
    }

    #[test]
    fn expands_tilde_alone() {
        let normalized = normalize_with_home("~", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("/home/tester"));
    }

    #[test]
    fn expands_tilde_prefix() {
        let normalized = normalize_with_home("~/projects/demo", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("/home/tester/projects/demo"));
    }

    #[test]
    fn tilde_expansion_matches_explicit_home() {
        let shorthand = normalize_with_home("~/foo", Some(&home()));
        let explicit = normalize_with_home("/home/tester/foo", Some(&home()));
        assert_eq!(shorthand, explicit);
    }

    #[test]
    fn expands_userprofile_token_case_insensitively() {
        let lower = normalize_with_home("%userprofile%/docs", Some(&home()));
        let upper = normalize_with_home("%USERPROFILE%/docs", Some(&home()));
        assert_eq!(lower.as_path(), Path::new("/home/tester/docs"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn collapses_dot_segments() {
        let normalized = normalize_with_home("/a/./b/../c", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("/a/c"));
    }

    #[test]
    fn parent_at_root_is_dropped() {
        let normalized = normalize_with_home("/../etc", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("/etc"));
    }

    #[test]
    fn relative_collapse_to_nothing_yields_dot() {
        let normalized = normalize_with_home("a/..", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("."));
    }

    #[test]
    fn unmatched_parent_in_relative_path_is_kept() {
        let normalized = normalize_with_home("../a", Some(&home()));
        assert_eq!(normalized.as_path(), Path::new("../a"));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["~/x/./y", "/a/b/../c", "  /spaced/path  ", "rel/./dir"] {
            let once = normalize_with_home(raw, Some(&home()));
            let twice = normalize_with_home(&once.to_string(), Some(&home()));
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn no_home_leaves_shorthand_unexpanded() {
        let normalized = normalize_with_home("~/foo", None);
        assert_eq!(normalized.as_path(), Path::new("~/foo"));
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let normalized = normalize_with_home("/a/b", Some(&home()));
        let json = serde_json::to_string(&normalized).unwrap();
        assert_eq!(json, "\"/a/b\"");
        let back: NormalizedPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, normalized);
    }
}
