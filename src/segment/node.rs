//! Versions of packages installed under `node_modules`.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::environment::Environment;

/// Why a package version could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodePackageError {
    /// No `package.json` for the package.
    #[error("{path} not found")]
    NotFound { path: String },

    /// The manifest is not valid JSON or has no version.
    #[error("invalid manifest {path}: {message}")]
    Invalid { path: String, message: String },
}

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Directory holding `package`'s manifest, relative to the working directory.
pub fn package_dir(env: &dyn Environment, package: &str) -> PathBuf {
    env.pwd().join("node_modules").join(package)
}

/// Whether `package` is installed in the working directory.
pub fn node_package_installed(env: &dyn Environment, package: &str) -> bool {
    env.has_files_in_dir(&package_dir(env, package), "package.json")
}

/// Read the `version` field of `node_modules/<package>/package.json`.
pub fn node_package_version(
    env: &dyn Environment,
    package: &str,
) -> Result<String, NodePackageError> {
    let dir = package_dir(env, package);
    let manifest = dir.join("package.json");
    let display = manifest.display().to_string();

    if !env.has_files_in_dir(&dir, "package.json") {
        return Err(NodePackageError::NotFound { path: display });
    }

    let content = env
        .file_content(&manifest)
        .ok_or_else(|| NodePackageError::NotFound {
            path: display.clone(),
        })?;

    let parsed: PackageManifest =
        serde_json::from_str(&content).map_err(|e| NodePackageError::Invalid {
            path: display.clone(),
            message: e.to_string(),
        })?;

    parsed
        .version
        .filter(|v| !v.is_empty())
        .ok_or(NodePackageError::Invalid {
            path: display,
            message: "missing version field".to_string(),
        })
}
