//! thumbnailer: generate EXIF-corrected thumbnails for JPEG and PNG files.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thumbnailer_core::decode::read_dimensions;
use thumbnailer_core::{
    create_thumbnail, read_orientation, ContentType, Image, Scaler, Thumbnail, ThumbnailConfig,
    DEFAULT_SIDE,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thumbnailer")]
#[command(about = "Generate EXIF-corrected JPEG and PNG thumbnails")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the sniffed type, EXIF orientation and size of an image
    Inspect {
        /// Path to image file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Images to thumbnail
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Baseline width; the output width follows the source aspect ratio
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    width: u32,

    /// Output height
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    height: u32,

    /// NearestNeighbor, ApproxBiLinear, BiLinear or CatmullRom
    #[arg(short, long, default_value = "CatmullRom")]
    scaler: String,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = 75)]
    quality: u8,

    /// Directory for thumbnails [default: next to each input]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Prefix added to each thumbnail file name
    #[arg(long, default_value = "thumb_")]
    prefix: String,

    /// Print one JSON report per thumbnail
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn config(&self) -> anyhow::Result<ThumbnailConfig> {
        let scaler: Scaler = self.scaler.parse()?;
        Ok(ThumbnailConfig::from_scaler(scaler)
            .with_size(self.width, self.height)?
            .with_jpeg_quality(self.quality))
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct Report {
    input: PathBuf,
    output: PathBuf,
    mime_type: &'static str,
    width: u32,
    height: u32,
    source_width: u32,
    source_height: u32,
    orientation: u32,
    bytes: usize,
}

impl Report {
    fn new(input: &Path, output: PathBuf, thumb: &Thumbnail) -> Self {
        Self {
            input: input.to_path_buf(),
            output,
            mime_type: thumb.format.mime_type(),
            width: thumb.dimensions.width,
            height: thumb.dimensions.height,
            source_width: thumb.source.width,
            source_height: thumb.source.height,
            orientation: thumb.orientation,
            bytes: thumb.bytes.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Inspection {
    path: PathBuf,
    content_type: String,
    orientation: u32,
    width: Option<u32>,
    height: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Inspect { path, json }) => inspect(&path, json),
        None => generate(&cli.generate),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "thumbnailer=debug"
    } else {
        "thumbnailer=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Thumbnail every input, continuing past failures.
fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    debug!(?config, "using configuration");

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut failed = 0usize;
    for input in &args.inputs {
        match process(input, args, &config) {
            Ok(report) => {
                if args.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!(
                        "{} -> {} ({}x{})",
                        report.input.display(),
                        report.output.display(),
                        report.width,
                        report.height
                    );
                }
            }
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    info!(
        total = args.inputs.len(),
        failed,
        "processed {} file(s)",
        args.inputs.len()
    );
    if failed > 0 {
        bail!("{} of {} file(s) failed", failed, args.inputs.len());
    }
    Ok(())
}

fn process(input: &Path, args: &GenerateArgs, config: &ThumbnailConfig) -> anyhow::Result<Report> {
    let data =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let image = Image::from_bytes(data, config).with_path(input);

    let thumb = create_thumbnail(&image, config)
        .with_context(|| format!("failed to thumbnail {}", input.display()))?;

    let output = destination(input, args.out_dir.as_deref(), &args.prefix)?;
    std::fs::write(&output, &thumb.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(Report::new(input, output, &thumb))
}

/// `<dir>/<prefix><file name>`, where `dir` defaults to the input's directory.
fn destination(input: &Path, out_dir: Option<&Path>, prefix: &str) -> anyhow::Result<PathBuf> {
    let Some(name) = input.file_name() else {
        bail!("{} has no file name", input.display());
    };

    let mut file_name = std::ffi::OsString::from(prefix);
    file_name.push(name);

    let dir = out_dir.or_else(|| input.parent()).unwrap_or(Path::new(""));
    Ok(dir.join(file_name))
}

fn inspect(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let content_type = ContentType::sniff(&data);
    let dimensions = match content_type.output_format() {
        Some(format) => Some(
            read_dimensions(&data, format)
                .with_context(|| format!("failed to read the header of {}", path.display()))?,
        ),
        None => None,
    };

    let inspection = Inspection {
        path: path.to_path_buf(),
        content_type: content_type.mime_type().to_string(),
        orientation: read_orientation(&data),
        width: dimensions.map(|d| d.width),
        height: dimensions.map(|d| d.height),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&inspection)?);
    } else {
        println!("Content type: {}", inspection.content_type);
        println!("Orientation: {}", inspection.orientation);
        if let Some(d) = dimensions {
            println!("Dimensions: {}x{}", d.width, d.height);
        }
    }
    Ok(())
}
