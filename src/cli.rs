use std::path::PathBuf;

/// Generates application icons from a single SVG.
#[derive(Debug, clap::Parser)]
#[command(name = "appicons")]
pub struct Cli {
    /// Sets the project root; icons live in assets/icons below it [default: current directory]
    #[arg(long, env = "APPICONS_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Sets a custom configuration file path [default: appicons.toml in the project root]
    #[arg(short, long, env = "APPICONS_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Prints debug output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Renders icon.svg into PNG icons of every size
    Rasterize,

    /// Packs the PNG icons into icon.ico
    Pack,

    /// Prints the active configuration
    Config,

    /// Prints version information
    Version,
}
