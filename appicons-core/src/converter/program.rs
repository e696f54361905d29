use super::Error;
use std::{ffi::OsStr, path::PathBuf};
use xshell::{Cmd, Shell};

/// An external program, run synchronously through a fresh shell.
#[derive(Debug, Clone)]
pub struct Program {
    name: &'static str,
    path: PathBuf,
}

impl Program {
    pub fn new(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Program {
            name,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the program with its output suppressed and only checks that it exits successfully.
    pub fn check(&self, args: &[impl AsRef<OsStr>]) -> Result<(), Error> {
        let sh = self.shell()?;
        let cmd = self.cmd(&sh, args).ignore_stdout().ignore_stderr();
        tracing::debug!("probing: {}", cmd);
        cmd.run().map_err(|source| Error::Unavailable {
            program: self.name,
            source,
        })
    }

    /// Runs the program and returns its standard output.
    pub fn read(&self, args: &[impl AsRef<OsStr>]) -> Result<String, Error> {
        let sh = self.shell()?;
        let cmd = self.cmd(&sh, args).ignore_stderr();
        tracing::debug!("reading: {}", cmd);
        cmd.read().map_err(|source| Error::Unavailable {
            program: self.name,
            source,
        })
    }

    /// Runs the program with inherited output.
    pub fn run(&self, args: &[impl AsRef<OsStr>]) -> Result<(), Error> {
        let sh = self.shell()?;
        let cmd = self.cmd(&sh, args);
        tracing::debug!("running: {}", cmd);
        cmd.run().map_err(|source| Error::Failed {
            program: self.name,
            source,
        })
    }

    fn shell(&self) -> Result<Shell, Error> {
        Shell::new().map_err(Error::Shell)
    }

    fn cmd<'a>(&self, sh: &'a Shell, args: &[impl AsRef<OsStr>]) -> Cmd<'a> {
        sh.cmd(&self.path)
            .args(args.iter().map(|arg| arg.as_ref()))
            .quiet()
    }
}

pub(super) fn version_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| !line.is_empty())
}
