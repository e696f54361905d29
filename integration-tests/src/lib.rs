use std::path::{Path, PathBuf};

mod test_binary;
pub use test_binary::test_binary_main;

// Adapted from
// https://github.com/rust-lang/cargo/blob/485670b3983b52289a2f353d589c57fae2f60f82/tests/testsuite/support/mod.rs#L507
// https://github.com/assert-rs/assert_cmd/blob/3ae01c9cf76e8b652c8ed4d2d64ff53149096339/src/cargo.rs#L192
fn target_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .map(|mut path| {
            path.pop();
            if path.ends_with("deps") {
                path.pop();
            }
            path
        })
        .unwrap()
}

fn exe_name(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

fn cargo_bin(name: &str) -> PathBuf {
    target_dir().join(exe_name(name))
}

/// A temporary directory holding a copy of the fake converter and the files that control it.
///
/// The binary has to be a copy, not a symlink: it finds its control files next to its resolved
/// executable path.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    const TARGET_BINARY_NAME: &'static str = "test-binary";

    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::copy(
            cargo_bin(Self::TARGET_BINARY_NAME),
            dir.path().join(exe_name(Self::TARGET_BINARY_NAME)),
        )
        .unwrap();
        Self { dir }
    }

    pub fn with_exit_status(self, exit_status: i32) -> Self {
        std::fs::write(self.path().join("exit-status"), exit_status.to_string()).unwrap();
        self
    }

    /// Makes every invocation that has `arg` among its arguments fail.
    pub fn failing_on(self, arg: &str) -> Self {
        std::fs::write(self.path().join("fail-on"), arg).unwrap();
        self
    }

    pub fn with_stdout(self, stdout: impl AsRef<[u8]>) -> Self {
        std::fs::write(self.path().join("stdout"), stdout.as_ref()).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn test_binary(&self) -> PathBuf {
        self.dir.path().join(exe_name(Self::TARGET_BINARY_NAME))
    }

    pub fn invocations(&self) -> Invocations {
        Invocations::new(&self.path().join("invocations")).unwrap()
    }
}

impl Default for Workdir {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Invocations {
    invocations: Vec<Vec<String>>,
}

impl Invocations {
    fn new(invocations_file: &Path) -> std::io::Result<Invocations> {
        let contents = match std::fs::read_to_string(invocations_file) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err),
        };
        let mut invocations = Vec::new();
        let mut current = Vec::new();
        for line in contents.lines() {
            if line.is_empty() {
                invocations.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_owned());
            }
        }
        Ok(Invocations { invocations })
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    pub fn assert_args(&self, index: usize, args: &[impl AsRef<str>]) -> &Self {
        let args = args.iter().map(|s| s.as_ref()).collect::<Vec<_>>();
        assert_eq!(self.invocations[index], args);
        self
    }
}
