use super::{program::version_line, Converter, Error, Program};
use std::{ffi::OsString, path::Path};

/// `rsvg-convert` from librsvg. Renders with a transparent background unless told otherwise.
#[derive(Debug, Clone)]
pub struct Rsvg {
    program: Program,
}

impl Rsvg {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Rsvg {
            program: Program::new("librsvg", path.as_ref()),
        }
    }

    fn args(&self, source: &Path, output: &Path, size: u32) -> Vec<OsString> {
        let size = size.to_string();
        vec![
            "-w".into(),
            size.clone().into(),
            "-h".into(),
            size.into(),
            "-o".into(),
            output.into(),
            source.into(),
        ]
    }
}

impl Converter for Rsvg {
    fn name(&self) -> &'static str {
        self.program.name()
    }

    fn probe(&self) -> Result<(), Error> {
        self.program.check(&["--version"])
    }

    fn version_string(&self) -> Result<String, Error> {
        let output = self.program.read(&["--version"])?;
        version_line(&output)
            .map(str::to_owned)
            .ok_or(Error::NoVersion {
                program: self.name(),
            })
    }

    fn convert(&self, source: &Path, output: &Path, size: u32) -> Result<(), Error> {
        self.program.run(&self.args(source, output, size))
    }
}
