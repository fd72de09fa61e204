//! Running version commands and parsing their output.

use super::command::{Version, VersionCommand};
use super::node::node_package_version;
use super::ResolveError;
use crate::cache::CacheDuration;
use crate::environment::Environment;

/// Runs a resolved command and turns its output into a [`Version`].
///
/// Successful command output is stored in the environment's cache under
/// [`VersionCommand::cache_key`]. Failures are never cached and never
/// retried.
pub struct VersionExtractor<'a> {
    env: &'a dyn Environment,
    cache_duration: CacheDuration,
}

impl<'a> VersionExtractor<'a> {
    /// Create an extractor.
    pub fn new(env: &'a dyn Environment, cache_duration: CacheDuration) -> Self {
        Self {
            env,
            cache_duration,
        }
    }

    /// Resolve the version reported by `command`.
    pub fn extract(&self, command: &VersionCommand) -> Result<Version, ResolveError> {
        let output = self.output(command)?;

        command
            .parse(&output)
            .ok_or_else(|| ResolveError::ParseFailed {
                executable: command.executable.clone(),
                output,
            })
    }

    fn output(&self, command: &VersionCommand) -> Result<String, ResolveError> {
        if let Some(package) = &command.node_package {
            return node_package_version(self.env, package).map_err(|source| {
                ResolveError::PackageUnreadable {
                    package: package.clone(),
                    source,
                }
            });
        }

        let key = command.cache_key();
        let ttl = self.cache_duration.ttl();

        if ttl.is_some() {
            if let Some(hit) = self.env.cache().get(&key) {
                tracing::debug!("Cache hit for {} ({})", command.executable, key);
                return Ok(hit);
            }
        }

        let output = self
            .env
            .run_command(&command.executable, &command.args)
            .map_err(|e| {
                tracing::debug!("{} failed: {}", command.executable, e);
                ResolveError::CommandFailed {
                    executable: command.executable.clone(),
                    args: command.args.clone(),
                    exit_code: e.exit_code,
                }
            })?;

        if let Some(ttl) = ttl {
            self.env.cache().set(&key, &output, ttl);
        }

        Ok(output)
    }
}
