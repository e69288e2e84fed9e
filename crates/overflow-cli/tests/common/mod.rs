use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// An isolated HOME and data directory for one test.
pub struct Sandbox {
    _dir: TempDir,
    home: PathBuf,
    data: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let home = dir.path().join("home");
        let data = dir.path().join("site");
        std::fs::create_dir_all(&home).unwrap();
        Self {
            _dir: dir,
            home,
            data,
        }
    }

    /// The isolated HOME directory.
    #[allow(dead_code)]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Run the CLI binary with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_overflow"));
        cmd.args(args);
        cmd.env("HOME", &self.home);
        cmd.env("XDG_DATA_HOME", self.home.join("data"));
        cmd.env("OVERFLOW_DATA_DIR", &self.data);
        cmd.env("OVERFLOW_BCRYPT_COST", "4");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("OVERFLOW_MAX_LIMIT");
        cmd.env_remove("RUST_LOG");
        cmd.output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure, returning stderr.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "CLI command unexpectedly succeeded: {:?}\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run a listing command and parse its JSON output.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(stdout.trim()).expect("Output is not JSON")
    }

    /// Sign up and log in as `username`.
    pub fn login_as(&self, username: &str) {
        self.run_success(&["user", "signup", username, "--password", "password1"]);
        self.run_success(&[
            "user",
            "login",
            "--username",
            username,
            "--password",
            "password1",
        ]);
    }
}

/// Pull the value of a `Label: value` line out of command output.
pub fn field(stdout: &str, label: &str) -> String {
    let prefix = format!("{}: ", label);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .unwrap_or_else(|| panic!("No '{}' field in output:\n{}", label, stdout))
        .trim()
        .to_string()
}
