use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

mod data;

pub use data::{
    generate_random_data, generate_random_data_with_seed, reference_xor, strip_trailing_zeros,
    BINARY_DATA,
};

/// Path to the xor binary built by cargo for this test run.
pub fn xor_binary() -> &'static str {
    env!("CARGO_BIN_EXE_xor")
}

/// Output from running the xor binary.
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Process exit code, or -1 when the process died without one.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }
}

/// Shared test fixture keeping filesystem interactions isolated.
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple files.
    ///
    /// # Panics
    ///
    /// Panics if any fixture file cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let fixture = Self::new();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        }
        fixture
    }

    /// Create fixture with a single file.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture.
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Write (or overwrite) a file in the fixture.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run the xor binary with the specified arguments.
    pub async fn run_xor(&self, args: &[&str]) -> Output {
        self.run_xor_with_stdin(args, None).await
    }

    /// Run the xor binary, feeding raw bytes to its stdin.
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub async fn run_xor_with_stdin(&self, args: &[&str], stdin_bytes: Option<Vec<u8>>) -> Output {
        let mut child = tokio::process::Command::new(xor_binary())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        if let Some(stdin_bytes) = stdin_bytes {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(&stdin_bytes).await.unwrap_or_else(|err| {
                    // Some runs intentionally exit early (e.g. usage errors),
                    // closing their stdin before we finish writing.
                    if err.kind() == std::io::ErrorKind::BrokenPipe {
                        return;
                    }
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                });
            }
        }

        // Drop stdin to send EOF to the child process.
        drop(child.stdin.take());

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout_raw: raw_output.stdout.clone(),
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
