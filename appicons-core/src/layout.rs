use std::path::{Path, PathBuf};

/// Where icon assets live inside a project.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    const ICONS_DIR: [&'static str; 2] = ["assets", "icons"];
    const SOURCE_FILENAME: &'static str = "icon.svg";
    const CONTAINER_FILENAME: &'static str = "icon.ico";
    const CONFIG_FILENAME: &'static str = "appicons.toml";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn icons_dir(&self) -> PathBuf {
        Self::ICONS_DIR
            .iter()
            .fold(self.root.clone(), |path, component| path.join(component))
    }

    pub fn source(&self) -> PathBuf {
        self.icons_dir().join(Self::SOURCE_FILENAME)
    }

    pub fn raster(&self, filename: &str) -> PathBuf {
        self.icons_dir().join(filename)
    }

    pub fn container(&self) -> PathBuf {
        self.icons_dir().join(Self::CONTAINER_FILENAME)
    }

    /// Config file picked up when none is given explicitly.
    pub fn default_config_file(&self) -> PathBuf {
        self.root.join(Self::CONFIG_FILENAME)
    }
}
