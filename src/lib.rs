use appicons_core::{config::AppConfig, layout::Layout};
use clap::Parser;
use cli::{Cli, Cmd};
use eyre::WrapErr;

pub mod cli;
pub mod commands;

fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn layout(cli: &Cli) -> eyre::Result<Layout> {
    let root = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().wrap_err("failed to get current directory")?,
    };
    Ok(Layout::new(root))
}

pub fn run() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    setup_logger(cli.verbose)?;

    let layout = layout(&cli)?;
    tracing::debug!("project root: {}", layout.root().display());
    let maybe_config: eyre::Result<AppConfig> =
        AppConfig::load(cli.config_file.as_deref(), &layout).map_err(Into::into);

    match cli.subcommand {
        Cmd::Rasterize => commands::rasterize(&layout, maybe_config),
        Cmd::Pack => commands::pack(&layout),
        Cmd::Config => commands::config(maybe_config),
        Cmd::Version => commands::version(maybe_config),
    }
}
