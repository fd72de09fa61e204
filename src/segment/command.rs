//! Version command candidates and the versions they produce.

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::CommandConfig;

/// Structured version fields.
///
/// Every field is empty when no version was resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Version {
    pub full: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: String,
    pub build_metadata: String,
}

impl Version {
    /// Whether a version was resolved.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

/// One executable to probe for a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCommand {
    /// Binary to look up on PATH. Also the name reported as the segment's
    /// executable.
    pub executable: String,
    /// Arguments passed when invoking it.
    pub args: Vec<String>,
    /// Pattern with a `version` named group and optional `major`, `minor`,
    /// `patch`, `prerelease` and `buildmetadata` groups.
    pub regex: String,
    /// Link template used when this command produced the version.
    pub url_template: Option<String>,
    /// Read the version from `node_modules/<package>/package.json` instead
    /// of running the executable.
    pub node_package: Option<String>,
}

impl VersionCommand {
    /// Create a command candidate.
    pub fn new(executable: &str, args: &[&str], regex: &str) -> Self {
        Self {
            executable: executable.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            regex: regex.to_string(),
            url_template: None,
            node_package: None,
        }
    }

    /// Create a candidate that reads a node package's manifest.
    pub fn node_package(package: &str, regex: &str) -> Self {
        Self {
            node_package: Some(package.to_string()),
            ..Self::new(package, &[], regex)
        }
    }

    /// Set the per-command link template.
    pub fn with_url_template(mut self, template: &str) -> Self {
        self.url_template = Some(template.to_string());
        self
    }

    /// Deterministic cache key for this command's output.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.executable.as_bytes());
        for arg in &self.args {
            hasher.update([0u8]);
            hasher.update(arg.as_bytes());
        }
        let hash = hasher.finalize();
        format!("version_{}", hex::encode(&hash[..16]))
    }

    /// Apply the pattern to raw command output.
    ///
    /// Returns `None` when the pattern does not compile, does not match, or
    /// matches with an empty `version` group.
    pub fn parse(&self, output: &str) -> Option<Version> {
        let re = match Regex::new(&self.regex) {
            Ok(re) => re,
            Err(e) => {
                tracing::debug!("Invalid version pattern for {}: {}", self.executable, e);
                return None;
            }
        };

        let caps = re.captures(output)?;
        let full = caps.name("version")?.as_str();
        if full.is_empty() {
            return None;
        }

        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Some(Version {
            full: full.to_string(),
            major: group("major"),
            minor: group("minor"),
            patch: group("patch"),
            prerelease: group("prerelease"),
            build_metadata: group("buildmetadata"),
        })
    }
}

impl From<&CommandConfig> for VersionCommand {
    fn from(config: &CommandConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            args: config.args.clone(),
            regex: config.regex.clone(),
            url_template: config.url_template.clone(),
            node_package: config.node_package.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEMVER: &str =
        r"(?P<version>((?P<major>[0-9]+).(?P<minor>[0-9]+).(?P<patch>[0-9]+)))";

    #[test]
    fn parse_catch_all() {
        let cmd = VersionCommand::new("unicorn", &["--version"], "(?P<version>.*)");
        let version = cmd.parse("1.3.307").unwrap();

        assert_eq!(version.full, "1.3.307");
        assert!(version.major.is_empty());
    }

    #[test]
    fn parse_components() {
        let cmd = VersionCommand::new("uni", &["--version"], SEMVER);
        let version = cmd.parse("uni 1.3.307").unwrap();

        assert_eq!(version.full, "1.3.307");
        assert_eq!(version.major, "1");
        assert_eq!(version.minor, "3");
        assert_eq!(version.patch, "307");
    }

    #[test]
    fn parse_prerelease_and_build() {
        let cmd = VersionCommand::new(
            "deno",
            &["--version"],
            r"(?P<version>(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<prerelease>[\w.]+))?(?:\+(?P<buildmetadata>[\w.]+))?)",
        );
        let version = cmd.parse("2.0.0-rc.1+abc").unwrap();

        assert_eq!(version.prerelease, "rc.1");
        assert_eq!(version.build_metadata, "abc");
    }

    #[test]
    fn parse_no_match() {
        let cmd = VersionCommand::new("corn", &["--version"], "wrong");
        assert!(cmd.parse("1.3.307").is_none());
    }

    #[test]
    fn parse_without_version_group() {
        let cmd = VersionCommand::new("corn", &["--version"], r"(?P<major>\d+)");
        assert!(cmd.parse("1.3.307").is_none());
    }

    #[test]
    fn parse_empty_version_group() {
        let cmd = VersionCommand::new("corn", &["--version"], "(?P<version>.*)");
        assert!(cmd.parse("").is_none());
    }

    #[test]
    fn parse_invalid_pattern() {
        let cmd = VersionCommand::new("corn", &["--version"], "(?P<version>");
        assert!(cmd.parse("1.3.307").is_none());
    }

    #[test]
    fn cache_key_is_deterministic() {
        let a = VersionCommand::new("uni", &["--version"], SEMVER);
        let b = VersionCommand::new("uni", &["--version"], "(?P<version>.*)");

        assert_eq!(a.cache_key(), b.cache_key());
        assert!(a.cache_key().starts_with("version_"));
    }

    #[test]
    fn cache_key_separates_args() {
        let joined = VersionCommand::new("go", &["envGOVERSION"], SEMVER);
        let split = VersionCommand::new("go", &["env", "GOVERSION"], SEMVER);
        let other = VersionCommand::new("corn", &["--version"], SEMVER);
        let uni = VersionCommand::new("uni", &["--version"], SEMVER);

        assert_ne!(joined.cache_key(), split.cache_key());
        assert_ne!(other.cache_key(), uni.cache_key());
    }

    #[test]
    fn node_package_candidate() {
        let cmd = VersionCommand::node_package("nx", SEMVER);
        assert_eq!(cmd.executable, "nx");
        assert_eq!(cmd.node_package.as_deref(), Some("nx"));
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn from_config() {
        let config = CommandConfig {
            executable: "uni".into(),
            args: vec!["--version".into()],
            regex: SEMVER.into(),
            url_template: Some("https://uni.org/{{ .Full }}".into()),
            node_package: None,
        };
        let cmd = VersionCommand::from(&config);

        assert_eq!(cmd.executable, "uni");
        assert_eq!(
            cmd.url_template.as_deref(),
            Some("https://uni.org/{{ .Full }}")
        );
    }
}
