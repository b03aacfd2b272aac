use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the composed card as a PNG at a chosen path.
    Render(RenderArgs),
    /// Render and export under a timestamped `vitrine-<millis>.png` name.
    Export(ExportArgs),
    /// Write a fresh settings file with the default scene and sample spec.
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Settings snapshot JSON.
    #[arg(long)]
    settings: PathBuf,

    /// Directory probed for bg/logo/font assets.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Settings snapshot JSON.
    #[arg(long)]
    settings: PathBuf,

    /// Directory probed for bg/logo/font assets.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Output directory for the timestamped file.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Where to write the settings file.
    #[arg(long)]
    settings: PathBuf,

    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
        Command::Init(args) => cmd_init(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = vitrine::ComposerSession::bootstrap(&args.assets, &args.settings)
        .with_context(|| format!("load session from '{}'", args.settings.display()))?;
    let frame = session.render()?;
    tracing::info!(width = frame.width, height = frame.height, "frame rendered");

    vitrine::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut session = vitrine::ComposerSession::bootstrap(&args.assets, &args.settings)
        .with_context(|| format!("load session from '{}'", args.settings.display()))?;
    let path = session
        .export_png(&args.dir)
        .with_context(|| format!("export into '{}'", args.dir.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    if args.settings.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists (pass --force to overwrite)",
            args.settings.display()
        );
    }

    let store = vitrine::SettingsStore::new(&args.settings);
    store
        .save(&vitrine::SettingsSnapshot::default())
        .with_context(|| format!("write settings '{}'", args.settings.display()))?;

    eprintln!("wrote {}", args.settings.display());
    Ok(())
}
