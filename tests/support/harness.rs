use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated skill package in a temporary directory.
/// The package lives at `<tmp>/<name>/`; the config directory is pointed at
/// `<tmp>/config` so a developer's own settings never leak into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub package_dir: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates an empty package directory named `my-skill`.
    pub fn new() -> Self {
        Self::named("my-skill")
    }

    /// Creates an empty package directory with the given name.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let package_dir = dir.path().join(name);
        fs::create_dir_all(&package_dir).expect("Failed to create package dir");

        TestHarness {
            dir,
            package_dir,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_skillcheck")),
        }
    }

    /// Creates a package whose SKILL.md has the given content.
    pub fn with_skill(content: &str) -> Self {
        let harness = Self::new();
        harness.write_skill(content);
        harness
    }

    /// Returns the temp root (parent of the package).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrites SKILL.md.
    pub fn write_skill(&self, content: &str) {
        self.write_file("SKILL.md", content);
    }

    /// Writes a file relative to the package root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.package_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write package file");
    }

    /// Runs the binary with the given arguments from the temp root.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("SKILLCHECK_CONFIG")
            .env_remove("SKILLCHECK_QUIET")
            .env_remove("SKILLCHECK_LOG")
            .output()
            .expect("Failed to run skillcheck")
    }

    /// Validates the harness package with extra flags placed before the path.
    pub fn validate(&self, flags: &[&str]) -> Output {
        let package = self.package_dir.to_string_lossy().to_string();
        let mut args: Vec<&str> = flags.to_vec();
        args.push(&package);
        self.run(&args)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
