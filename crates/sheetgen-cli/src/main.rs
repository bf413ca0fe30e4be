use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use image::ImageReader;
use sheetgen_core::config::{Heuristic, PackerConfig};
use sheetgen_core::pipeline::{pack_images, InputImage};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sheetgen",
    about = "Pack a folder of images into a sprite sheet",
    version
)]
struct Cli {
    /// Input directory of images (png/jpg)
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "sheets", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Sheet base name (writes name.png and name.json)
    #[arg(short, long, default_value = "sheet", help_heading = "Input/Output")]
    name: String,
    /// Write only the JSON descriptor, skip the PNG
    #[arg(long, default_value_t = false, help_heading = "Input/Output")]
    layout_only: bool,

    /// Sheet width
    #[arg(long, default_value_t = 512, help_heading = "Layout")]
    width: u32,
    /// Sheet height
    #[arg(long, default_value_t = 512, help_heading = "Layout")]
    height: u32,
    /// Heuristic: auto|baf|bssf|blsf|bl|cp
    #[arg(long, default_value = "auto", help_heading = "Layout")]
    heuristic: String,
    /// Allow 90deg rotation
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "Layout")]
    allow_rotation: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging")]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_images(dir: &Path) -> anyhow::Result<Vec<InputImage>> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if !matches!(ext.as_deref(), Some("png" | "jpg" | "jpeg")) {
            continue;
        }
        let image = ImageReader::open(path)
            .with_context(|| format!("opening {}", path.display()))?
            .decode()
            .with_context(|| format!("decoding {}", path.display()))?;
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();
        inputs.push(InputImage { key, image });
    }
    // stable order for deterministic packing
    inputs.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(inputs)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let heuristic = match cli.heuristic.as_str() {
        "auto" => None,
        s => Some(
            s.parse::<Heuristic>()
                .map_err(|_| anyhow::anyhow!("unknown heuristic: {s}"))?,
        ),
    };

    let inputs = load_images(&cli.input)?;
    info!(count = inputs.len(), input = %cli.input.display(), "loaded images");

    let cfg = PackerConfig::builder()
        .with_dimensions(cli.width, cli.height)
        .allow_rotation(cli.allow_rotation)
        .heuristic(heuristic)
        .build();

    let out = pack_images(inputs, cfg).context("packing failed")?;
    for key in &out.unplaced {
        error!(key = %key, "image did not fit on the sheet");
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let png_name = format!("{}.png", cli.name);

    if !cli.layout_only {
        let png_path = cli.out_dir.join(&png_name);
        out.rgba
            .save(&png_path)
            .with_context(|| format!("writing {}", png_path.display()))?;
        info!(path = %png_path.display(), "wrote sheet image");
    }

    let doc = sheetgen_core::export::to_json(&out.sheet, &png_name);
    let json_path = cli.out_dir.join(format!("{}.json", cli.name));
    fs::write(&json_path, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    info!(
        path = %json_path.display(),
        frames = out.sheet.frames.len(),
        occupancy = format!("{:.1}%", out.sheet.occupancy * 100.0),
        "wrote sheet descriptor"
    );

    Ok(())
}
