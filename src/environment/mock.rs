//! Mock environment for testing.
//!
//! `MockEnvironment` implements the [`Environment`] trait from canned
//! answers and records every command invocation for later assertion.
//!
//! # Example
//!
//! ```
//! use langver::environment::{Environment, MockEnvironment};
//!
//! let env = MockEnvironment::new()
//!     .with_files("*.uni")
//!     .with_command("unicorn", &["--version"], "1.3.307");
//!
//! assert!(env.has_files("*.uni"));
//! assert!(env.has_command("unicorn"));
//! assert_eq!(
//!     env.run_command("unicorn", &["--version".to_string()]).unwrap(),
//!     "1.3.307"
//! );
//! assert_eq!(env.invocations().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::{CommandError, Environment};
use crate::cache::{Cache, MemoryCache};

type Invocation = (String, Vec<String>);

/// Canned-answer environment.
///
/// Defaults: working directory `/usr/home/project`, home `/usr/home`, no
/// files, no commands, an empty [`MemoryCache`].
pub struct MockEnvironment {
    pwd: PathBuf,
    home: PathBuf,
    files: HashSet<String>,
    folders: HashSet<String>,
    files_in_dir: HashSet<(PathBuf, String)>,
    installed: HashSet<String>,
    outputs: HashMap<Invocation, Result<String, CommandError>>,
    contents: HashMap<PathBuf, String>,
    env_vars: HashMap<String, String>,
    cache: Box<dyn Cache>,
    invocations: RefCell<Vec<Invocation>>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    /// Create a mock with the default directories.
    pub fn new() -> Self {
        Self {
            pwd: PathBuf::from("/usr/home/project"),
            home: PathBuf::from("/usr/home"),
            files: HashSet::new(),
            folders: HashSet::new(),
            files_in_dir: HashSet::new(),
            installed: HashSet::new(),
            outputs: HashMap::new(),
            contents: HashMap::new(),
            env_vars: HashMap::new(),
            cache: Box::new(MemoryCache::new()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Set the working directory.
    pub fn with_pwd(mut self, pwd: impl Into<PathBuf>) -> Self {
        self.pwd = pwd.into();
        self
    }

    /// Set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = home.into();
        self
    }

    /// Place the working directory at the home directory.
    pub fn in_home(mut self) -> Self {
        self.pwd = self.home.clone();
        self
    }

    /// Make `has_files(pattern)` report a match.
    pub fn with_files(mut self, pattern: &str) -> Self {
        self.files.insert(pattern.to_string());
        self
    }

    /// Make `has_folder(name)` report a match.
    pub fn with_folder(mut self, name: &str) -> Self {
        self.folders.insert(name.to_string());
        self
    }

    /// Make `has_files_in_dir(dir, pattern)` report a match.
    pub fn with_files_in_dir(mut self, dir: impl Into<PathBuf>, pattern: &str) -> Self {
        self.files_in_dir.insert((dir.into(), pattern.to_string()));
        self
    }

    /// Mark an executable as present without configuring any output.
    pub fn with_installed(mut self, executable: &str) -> Self {
        self.installed.insert(executable.to_string());
        self
    }

    /// Install `executable` and make `executable args` print `output`.
    pub fn with_command(mut self, executable: &str, args: &[&str], output: &str) -> Self {
        self.installed.insert(executable.to_string());
        self.outputs
            .insert(invocation(executable, args), Ok(output.to_string()));
        self
    }

    /// Install `executable` and make `executable args` exit with `exit_code`.
    pub fn with_failing_command(mut self, executable: &str, args: &[&str], exit_code: i32) -> Self {
        self.installed.insert(executable.to_string());
        self.outputs.insert(
            invocation(executable, args),
            Err(CommandError::new(
                format!("{} exited with {}", executable, exit_code),
                exit_code,
            )),
        );
        self
    }

    /// Serve `content` for `file_content(path)`.
    pub fn with_file_content(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.contents.insert(path.into(), content.to_string());
        self
    }

    /// Set an environment variable.
    pub fn with_env_var(mut self, name: &str, value: &str) -> Self {
        self.env_vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Replace the cache.
    pub fn with_cache(mut self, cache: Box<dyn Cache>) -> Self {
        self.cache = cache;
        self
    }

    /// Every `run_command` call made so far, in order.
    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations.borrow().clone()
    }
}

fn invocation(executable: &str, args: &[&str]) -> Invocation {
    (
        executable.to_string(),
        args.iter().map(|a| a.to_string()).collect(),
    )
}

impl Environment for MockEnvironment {
    fn has_files(&self, pattern: &str) -> bool {
        self.files.contains(pattern)
    }

    fn has_folder(&self, name: &str) -> bool {
        self.folders.contains(name)
    }

    fn has_files_in_dir(&self, dir: &Path, pattern: &str) -> bool {
        self.files_in_dir
            .contains(&(dir.to_path_buf(), pattern.to_string()))
    }

    fn has_command(&self, name: &str) -> bool {
        self.installed.contains(name)
    }

    fn run_command(&self, name: &str, args: &[String]) -> Result<String, CommandError> {
        let key = (name.to_string(), args.to_vec());
        self.invocations.borrow_mut().push(key.clone());

        self.outputs.get(&key).cloned().unwrap_or_else(|| {
            Err(CommandError::new(
                format!("no canned output for {}", name),
                CommandError::SPAWN_FAILED,
            ))
        })
    }

    fn pwd(&self) -> PathBuf {
        self.pwd.clone()
    }

    fn home(&self) -> PathBuf {
        self.home.clone()
    }

    fn file_content(&self, path: &Path) -> Option<String> {
        self.contents.get(path).cloned()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env_vars.get(name).cloned()
    }

    fn cache(&self) -> &dyn Cache {
        self.cache.as_ref()
    }
}
