//! Small system helpers: glob matching and PATH lookup.

use std::fs;
use std::path::{Path, PathBuf};

/// Match a file name against a glob pattern.
///
/// Supports `*` (any run of characters) and `?` (exactly one character).
/// Everything else matches literally. Matching is case-sensitive.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_n = 0;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_n = n;
            p += 1;
        } else if let Some(s) = star {
            p = s + 1;
            star_n += 1;
            n = star_n;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}

/// Check whether `dir` contains a regular file whose name matches `pattern`.
///
/// Unreadable directories count as "no match".
pub fn dir_has_matching_file(dir: &Path, pattern: &str) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.filter_map(|e| e.ok()).any(|entry| {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        is_file && glob_match(pattern, &entry.file_name().to_string_lossy())
    })
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command; its behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in executable_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn executable_names(tool: &str) -> Vec<String> {
    if Path::new(tool).extension().is_some() {
        return vec![tool.to_string()];
    }
    ["exe", "cmd", "bat"]
        .iter()
        .map(|ext| format!("{}.{}", tool, ext))
        .collect()
}

#[cfg(not(windows))]
fn executable_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}
