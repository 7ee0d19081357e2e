use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use instruction_sheet::{
    DEFAULT_OUTPUT_NAME, Error, FieldRecord, ImageAsset, LayoutConfig, write_instruction_pdf,
};

/// Upstream caps on reference images.
const MAX_IMAGES: usize = 4;
const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(
    name = "instruction-sheet",
    version,
    about = "Lay out an instruction sheet (details table + reference images) as PDF"
)]
struct Cli {
    /// Record JSON: the analysis object, or the `{"analysis": {...}}` response
    #[arg(short, long)]
    record: PathBuf,

    /// Reference image (PNG or JPEG); repeat up to four times
    #[arg(short, long = "image")]
    images: Vec<PathBuf>,

    /// Override the record's aspect ratio (1:1, 3:4, 4:3, 9:16, 16:9, 21:9)
    #[arg(short, long)]
    aspect_ratio: Option<String>,

    /// JSON file overriding layout defaults
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_images(paths: &[PathBuf]) -> Result<Vec<ImageAsset>, Error> {
    if paths.len() > MAX_IMAGES {
        return Err(Error::DocumentBuild(format!(
            "at most {MAX_IMAGES} images allowed, got {}",
            paths.len()
        )));
    }
    paths
        .iter()
        .map(|path| {
            let size = std::fs::metadata(path)?.len();
            if size > MAX_IMAGE_BYTES {
                return Err(Error::DocumentBuild(format!(
                    "{} is {size} bytes; images must be under 10MB",
                    path.display()
                )));
            }
            let bytes = std::fs::read(path)?;
            ImageAsset::from_encoded(bytes).map_err(|e| Error::ImageDecode {
                reason: format!("{}: {e}", path.display()),
            })
        })
        .collect()
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.layout {
        Some(path) => LayoutConfig::from_json_file(path)?,
        None => LayoutConfig::default(),
    };
    let record = FieldRecord::from_json_str(&std::fs::read_to_string(&cli.record)?)?;
    let images = load_images(&cli.images)?;
    let aspect = cli
        .aspect_ratio
        .clone()
        .unwrap_or_else(|| record.aspect_ratio().to_string());

    write_instruction_pdf(&record, &images, &aspect, config, &cli.output).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = cli.output.clone();
    match run(cli).await {
        Ok(()) => {
            println!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
