//! Built-in language presets.
//!
//! Each preset bundles the project markers, version commands, link
//! template and pin file for one runtime. Config segments may start from a
//! preset and override any part of it.

use super::command::VersionCommand;
use super::definition::SegmentDefinition;
use crate::config::properties::Properties;

const SEMVER: &str = r"(?P<version>((?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)))";

/// Names of all built-in presets, in display order.
pub fn names() -> Vec<&'static str> {
    vec!["node", "python", "go", "rust", "ruby", "java", "deno", "nx"]
}

/// Every built-in preset, in display order.
pub fn all() -> Vec<SegmentDefinition> {
    names().into_iter().filter_map(builtin).collect()
}

/// Look up a preset by name.
pub fn builtin(name: &str) -> Option<SegmentDefinition> {
    let definition = match name {
        "node" => preset(
            "node",
            &["*.js", "*.ts", "*.mjs", "*.cjs", "package.json", ".nvmrc", ".node-version"],
            &["node_modules"],
            vec![VersionCommand::new(
                "node",
                &["--version"],
                &format!("(?:v{})", SEMVER),
            )],
        )
        .url("https://github.com/nodejs/node/blob/main/doc/changelogs/CHANGELOG_V{{ .Major }}.md#{{ .Full }}")
        .pin(".nvmrc"),

        "python" => preset(
            "python",
            &["*.py", "*.ipynb", "pyproject.toml", "requirements.txt", "Pipfile"],
            &[".venv", "venv"],
            ["python", "python3", "py"]
                .iter()
                .map(|exe| {
                    VersionCommand::new(exe, &["--version"], &format!("(?:Python {})", SEMVER))
                })
                .collect(),
        )
        .context(&["VIRTUAL_ENV", "CONDA_ENV_PATH", "CONDA_DEFAULT_ENV"])
        .url("https://docs.python.org/release/{{ .Major }}.{{ .Minor }}.{{ .Patch }}/whatsnew/changelog.html")
        .pin(".python-version"),

        "go" => preset(
            "go",
            &["*.go", "go.mod", "go.sum", "go.work"],
            &[],
            vec![VersionCommand::new(
                "go",
                &["version"],
                r"(?:go(?P<version>((?P<major>[0-9]+)\.(?P<minor>[0-9]+)(\.(?P<patch>[0-9]+))?)))",
            )],
        )
        .url("https://golang.org/doc/go{{ .Major }}.{{ .Minor }}"),

        "rust" => preset(
            "rust",
            &["*.rs", "Cargo.toml", "Cargo.lock"],
            &[],
            vec![VersionCommand::new(
                "rustc",
                &["--version"],
                &format!(r"(?:rustc {}(-(?P<prerelease>[a-z]+))?)", SEMVER),
            )],
        )
        .url("https://doc.rust-lang.org/{{ .Full }}/std/")
        .pin("rust-toolchain"),

        "ruby" => preset(
            "ruby",
            &["*.rb", "Rakefile", "Gemfile"],
            &[],
            vec![
                VersionCommand::new("rbenv", &["version-name"], &format!("^{}", SEMVER)),
                VersionCommand::new("ruby", &["--version"], &format!(r"(?:ruby\s+{})", SEMVER)),
            ],
        )
        .url("https://ruby-doc.org/core-{{ .Full }}/")
        .pin(".ruby-version"),

        "java" => preset(
            "java",
            &["pom.xml", "build.gradle", "build.gradle.kts", "*.java", "*.jar", ".java-version"],
            &[],
            vec![VersionCommand::new(
                "java",
                &["-version"],
                r#"version "(?P<version>(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+))?(?:\.(?P<patch>[0-9]+))?)"#,
            )],
        )
        .url("https://docs.oracle.com/en/java/javase/{{ .Major }}/")
        .pin(".java-version"),

        "deno" => preset(
            "deno",
            &["*.js", "*.ts", "deno.json", "deno.jsonc"],
            &[],
            vec![VersionCommand::new(
                "deno",
                &["--version"],
                &format!("(?:deno {})", SEMVER),
            )],
        )
        .url("https://github.com/denoland/deno/releases/tag/v{{ .Full }}"),

        "nx" => preset(
            "nx",
            &["workspace.json", "nx.json"],
            &[],
            vec![VersionCommand::node_package("nx", SEMVER)],
        )
        .url("https://github.com/nrwl/nx/releases/tag/{{ .Full }}"),

        _ => return None,
    };

    Some(definition)
}

fn preset(
    name: &str,
    extensions: &[&str],
    folders: &[&str],
    commands: Vec<VersionCommand>,
) -> SegmentDefinition {
    SegmentDefinition {
        name: name.to_string(),
        extensions: extensions.iter().map(|e| e.to_string()).collect(),
        folders: folders.iter().map(|f| f.to_string()).collect(),
        context_env: Vec::new(),
        commands,
        version_url_template: None,
        version_file: None,
        properties: Properties::new(),
    }
}

impl SegmentDefinition {
    fn url(mut self, template: &str) -> Self {
        self.version_url_template = Some(template.to_string());
        self
    }

    fn pin(mut self, file_name: &str) -> Self {
        self.version_file = Some(file_name.to_string());
        self
    }

    fn context(mut self, variables: &[&str]) -> Self {
        self.context_env = variables.iter().map(|v| v.to_string()).collect();
        self
    }
}
