//! Command selection.

use super::command::VersionCommand;
use super::node::node_package_installed;
use crate::environment::Environment;

/// Whether a candidate can be used on this system.
pub fn is_available(env: &dyn Environment, command: &VersionCommand) -> bool {
    match &command.node_package {
        Some(package) => node_package_installed(env, package),
        None => env.has_command(&command.executable),
    }
}

/// Return the first candidate, in declaration order, that is available.
///
/// An empty list resolves to `None`.
pub fn resolve_command<'c>(
    env: &dyn Environment,
    commands: &'c [VersionCommand],
) -> Option<&'c VersionCommand> {
    let found = commands.iter().find(|c| is_available(env, c));

    match found {
        Some(command) => tracing::debug!("Resolved version command {}", command.executable),
        None => tracing::debug!("None of {} candidates is installed", commands.len()),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MockEnvironment;

    fn candidates(names: &[&str]) -> Vec<VersionCommand> {
        names
            .iter()
            .map(|n| VersionCommand::new(n, &["--version"], "(?P<version>.*)"))
            .collect()
    }

    #[test]
    fn first_present_wins() {
        let env = MockEnvironment::new()
            .with_installed("uni")
            .with_installed("corn");
        let commands = candidates(&["uni", "corn"]);

        assert_eq!(resolve_command(&env, &commands).unwrap().executable, "uni");
    }

    #[test]
    fn skips_missing_candidates() {
        let env = MockEnvironment::new().with_installed("corn");
        let commands = candidates(&["uni", "corn"]);

        assert_eq!(resolve_command(&env, &commands).unwrap().executable, "corn");
    }

    #[test]
    fn none_present() {
        let env = MockEnvironment::new();
        assert!(resolve_command(&env, &candidates(&["uni", "corn"])).is_none());
    }

    #[test]
    fn empty_list() {
        let env = MockEnvironment::new().with_installed("uni");
        assert!(resolve_command(&env, &[]).is_none());
    }

    #[test]
    fn node_package_availability() {
        let env = MockEnvironment::new()
            .with_installed("nx")
            .with_files_in_dir("/usr/home/project/node_modules/nx", "package.json");
        let nx = VersionCommand::node_package("nx", "(?P<version>.*)");
        assert!(is_available(&env, &nx));

        let bare = MockEnvironment::new().with_installed("nx");
        assert!(!is_available(&bare, &nx));
    }
}
