use super::{program::version_line, Converter, Error, Program};
use std::{ffi::OsString, path::Path};

#[derive(Debug, Clone)]
pub struct ImageMagick {
    program: Program,
    density: u32,
}

impl ImageMagick {
    pub fn new(path: impl AsRef<Path>, density: u32) -> Self {
        ImageMagick {
            program: Program::new("ImageMagick", path.as_ref()),
            density,
        }
    }

    fn args(&self, source: &Path, output: &Path, size: u32) -> Vec<OsString> {
        vec![
            "-background".into(),
            "transparent".into(),
            "-density".into(),
            self.density.to_string().into(),
            source.into(),
            "-resize".into(),
            format!("{size}x{size}").into(),
            output.into(),
        ]
    }
}

impl Converter for ImageMagick {
    fn name(&self) -> &'static str {
        self.program.name()
    }

    fn probe(&self) -> Result<(), Error> {
        self.program.check(&["-version"])
    }

    fn version_string(&self) -> Result<String, Error> {
        let output = self.program.read(&["-version"])?;
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
