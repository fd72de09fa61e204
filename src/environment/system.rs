//! The real environment: local filesystem, PATH and processes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{CommandError, Environment};
use crate::cache::Cache;
use crate::sys::{dir_has_matching_file, parse_system_path, resolve_tool_path};

/// Environment backed by the host system.
pub struct SystemEnvironment {
    pwd: PathBuf,
    home: PathBuf,
    path_entries: Vec<PathBuf>,
    resolved: RefCell<HashMap<String, Option<PathBuf>>>,
    cache: Box<dyn Cache>,
}

impl SystemEnvironment {
    /// Create an environment rooted at `pwd` using the given cache.
    pub fn new(pwd: impl Into<PathBuf>, cache: Box<dyn Cache>) -> Self {
        Self {
            pwd: absolute_path(pwd.into()),
            home: absolute_path(dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))),
            path_entries: parse_system_path(),
            resolved: RefCell::new(HashMap::new()),
            cache,
        }
    }

    /// Override the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = absolute_path(home.into());
        self
    }

    /// Override the PATH entries used for command lookup.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = entries;
        self.resolved.borrow_mut().clear();
        self
    }

    fn lookup(&self, name: &str) -> Option<PathBuf> {
        if let Some(hit) = self.resolved.borrow().get(name) {
            return hit.clone();
        }

        let found = if name.contains(std::path::MAIN_SEPARATOR) {
            let path = PathBuf::from(name);
            path.is_file().then_some(path)
        } else {
            resolve_tool_path(name, &self.path_entries)
        };

        self.resolved
            .borrow_mut()
            .insert(name.to_string(), found.clone());
        found
    }
}

impl Environment for SystemEnvironment {
    fn has_files(&self, pattern: &str) -> bool {
        dir_has_matching_file(&self.pwd, pattern)
    }

    fn has_folder(&self, name: &str) -> bool {
        self.pwd.join(name).is_dir()
    }

    fn has_files_in_dir(&self, dir: &Path, pattern: &str) -> bool {
        dir_has_matching_file(dir, pattern)
    }

    fn has_command(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn run_command(&self, name: &str, args: &[String]) -> Result<String, CommandError> {
        let program = self.lookup(name).unwrap_or_else(|| PathBuf::from(name));

        tracing::debug!("Running {} {:?}", program.display(), args);

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.pwd)
            .output()
            .map_err(|e| {
                CommandError::new(
                    format!("failed to start {}: {}", name, e),
                    CommandError::SPAWN_FAILED,
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CommandError::new(
                format!("{} failed: {}", name, stderr.trim()),
                output.status.code().unwrap_or(-1),
            ));
        }

        // Some tools (java -version) report on stderr only.
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !stdout.is_empty() {
            return Ok(stdout);
        }
        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }

    fn pwd(&self) -> PathBuf {
        self.pwd.clone()
    }

    fn home(&self) -> PathBuf {
        self.home.clone()
    }

    fn file_content(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn cache(&self) -> &dyn Cache {
        self.cache.as_ref()
    }
}

/// Resolve `path` so that relative project paths compare equal to home.
fn absolute_path(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path)
        .or_else(|_| std::path::absolute(&path))
        .unwrap_or(path)
}
