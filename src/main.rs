use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber;

use minvid::{
    config::Config,
    convert::{collect_image_paths, extract_frames, video_from_images},
    format::Video,
};

#[derive(Parser)]
#[command(
    name = "minvid",
    version,
    about = "Minimal uncompressed raster-video container tool",
    long_about = "Packs image sequences into the minvid container format, unpacks container files back into PNG frames, and inspects existing files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dimensions and frame count of a container file
    Info {
        /// Container file path
        path: PathBuf,
    },

    /// Pack an image sequence into a container file
    Pack {
        /// Directory containing the image frames, packed in lexicographic order
        #[arg(short, long)]
        input: PathBuf,

        /// Output container file path
        #[arg(short, long)]
        output: PathBuf,

        /// Target frame width (overrides the configuration)
        #[arg(long)]
        width: Option<u32>,

        /// Target frame height (overrides the configuration)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Unpack a container file into PNG frames
    Unpack {
        /// Container file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the PNG frames
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };
    config.validate()?;

    match cli.command {
        Command::Info { path } => info_command(&path),
        Command::Pack {
            input,
            output,
            width,
            height,
        } => pack_command(&config, &input, &output, width, height),
        Command::Unpack { input, output } => unpack_command(&input, &output),
    }
}

fn info_command(path: &Path) -> Result<()> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let video = Video::decode(&data)?;

    println!("Size:   {}x{}", video.width(), video.height());
    println!("Frames: {}", video.frame_count());
    println!("Bytes:  {}", data.len());

    Ok(())
}

fn pack_command(
    config: &Config,
    input: &Path,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let paths = collect_image_paths(input)?;
    if paths.is_empty() {
        bail!("No image files found in {}", input.display());
    }

    let target = match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        (None, None) if config.pack.resize => Some((config.pack.width, config.pack.height)),
        (None, None) => None,
        _ => bail!("--width and --height must be given together"),
    };

    info!("Packing {} frames from {:?}", paths.len(), input);
    let video = video_from_images(&paths, target)?;

    fs::write(output, video.encode())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Wrote {}x{} video with {} frames to {:?}",
        video.width(),
        video.height(),
        video.frame_count(),
        output
    );
    Ok(())
}

fn unpack_command(input: &Path, output: &Path) -> Result<()> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let video = Video::decode(&data)?;

    info!(
        "Unpacking {} frames ({}x{}) to {:?}",
        video.frame_count(),
        video.width(),
        video.height(),
        output
    );

    let written = extract_frames(&video, output)?;
    info!("Wrote {} frames", written.len());
    Ok(())
}
