//! Project detection: does the working directory look like a project of
//! this language?

use crate::environment::Environment;

/// Whether any extension glob matches a file in the working directory.
///
/// Stops at the first hit.
pub fn matches_extensions(env: &dyn Environment, extensions: &[String]) -> bool {
    extensions.iter().any(|pattern| env.has_files(pattern))
}

/// Whether any marker folder exists in the working directory.
pub fn matches_folders(env: &dyn Environment, folders: &[String]) -> bool {
    folders.iter().any(|folder| env.has_folder(folder))
}

/// Whether any of the context variables is set.
pub fn in_context(env: &dyn Environment, variables: &[String]) -> bool {
    variables.iter().any(|var| env.env_var(var).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MockEnvironment;

    fn globs(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn first_extension_matches() {
        let env = MockEnvironment::new().with_files("*.uni");
        assert!(matches_extensions(&env, &globs(&["*.uni", "*.corn"])));
    }

    #[test]
    fn second_extension_matches() {
        let env = MockEnvironment::new().with_files("*.corn");
        assert!(matches_extensions(&env, &globs(&["*.uni", "*.corn"])));
    }

    #[test]
    fn no_extension_matches() {
        let env = MockEnvironment::new().with_files("*.rs");
        assert!(!matches_extensions(&env, &globs(&["*.uni", "*.corn"])));
        assert!(!matches_extensions(&env, &[]));
    }

    #[test]
    fn folder_matches() {
        let env = MockEnvironment::new().with_folder(".venv");
        assert!(matches_folders(&env, &globs(&["venv", ".venv"])));
        assert!(!matches_folders(&env, &globs(&["node_modules"])));
    }

    #[test]
    fn context_variables() {
        let env = MockEnvironment::new().with_env_var("VIRTUAL_ENV", "/p/.venv");
        assert!(in_context(&env, &globs(&["CONDA_DEFAULT_ENV", "VIRTUAL_ENV"])));
        assert!(!in_context(&env, &globs(&["CONDA_DEFAULT_ENV"])));
    }
}
