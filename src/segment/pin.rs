//! Expected-version reconciliation.
//!
//! A [`VersionPin`] reports the version a project asks for. The segment
//! stores it as `expected` and flags `mismatch` when the pin says the
//! detected version differs.

use super::command::Version;
use crate::environment::Environment;

/// Outcome of a pin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCheck {
    /// The version the project asks for.
    pub expected: String,
    /// Whether the detected version satisfies it.
    pub matches: bool,
}

/// Source of an expected version.
pub trait VersionPin {
    /// Check `detected` against the pin. `None` means the pin has nothing
    /// to say (e.g. the pin file is absent).
    fn check(&self, env: &dyn Environment, detected: &Version) -> Option<PinCheck>;
}

/// A pin backed by a closure returning `(expected, matches)`.
pub struct FnPin<F>(F);

/// Wrap a closure as a [`VersionPin`].
///
/// ```
/// use langver::segment::pin_fn;
///
/// let pin = pin_fn(|_version| ("1.2.009".to_string(), false));
/// # let _ = pin;
/// ```
pub fn pin_fn<F>(f: F) -> FnPin<F>
where
    F: Fn(&Version) -> (String, bool),
{
    FnPin(f)
}

impl<F> VersionPin for FnPin<F>
where
    F: Fn(&Version) -> (String, bool),
{
    fn check(&self, _env: &dyn Environment, detected: &Version) -> Option<PinCheck> {
        let (expected, matches) = (self.0)(detected);
        Some(PinCheck { expected, matches })
    }
}

/// A pin file in the working directory, such as `.nvmrc`.
///
/// The first non-empty line is the expected version; a leading `v` is
/// ignored. Comparison is plain string equality against the detected
/// version. With nothing detected there is nothing to compare, so the
/// check reports a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinFile {
    file_name: String,
}

impl PinFile {
    /// Pin to the contents of `file_name`.
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// The pin file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl VersionPin for PinFile {
    fn check(&self, env: &dyn Environment, detected: &Version) -> Option<PinCheck> {
        let content = env.file_content(&env.pwd().join(&self.file_name))?;
        let line = content.lines().map(str::trim).find(|l| !l.is_empty())?;
        let expected = line.strip_prefix('v').unwrap_or(line).to_string();

        let matches = detected.is_empty() || detected.full == expected;
        Some(PinCheck { expected, matches })
    }
}
