use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use profile_card::{
    AssetResolver, BundledAssets, DirectoryAssets, Profile, ProfileCard, Theme, ThemeMode,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with display_name, student_id and question_text
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Directory to resolve assets such as avatar.png from
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Colour scheme
    #[arg(short, long, value_enum, default_value_t = ThemeMode::Light)]
    theme: ThemeMode,

    /// Log file (defaults to the local data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profile-card")
        .join("logs")
        .join("profile-card.log")
}

fn setup_logging(path: PathBuf, verbose: bool) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    // The UI owns the terminal, so logs only go to the file
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!(log = %path.display(), verbose, "logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_file.clone().unwrap_or_else(default_log_path), args.verbose)?;

    let resolver: Box<dyn AssetResolver> = match &args.assets {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => Box::new(BundledAssets),
    };
    let theme = Theme::new(args.theme);

    let card = match &args.profile {
        Some(path) => ProfileCard::from_json(path, theme, resolver.as_ref())
            .with_context(|| format!("Failed to load profile from {}", path.display()))?,
        None => ProfileCard::new(&Profile::default(), theme, resolver.as_ref()),
    };

    card.run().context("Error running profile card")
}
