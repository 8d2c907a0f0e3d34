use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use earthflag::config::{FlagConfig, RenderConfig};
use earthflag::FlagDimensions;

mod render_pdf;
mod render_png;

/// Height used when neither `--height` nor a config file gives one.
const DEFAULT_HEIGHT: u32 = 120;

/// Earth flag grid sizing and rendering CLI
#[derive(Parser)]
#[command(name = "earthflag", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Where the flag height comes from.
#[derive(Args, Debug, Default)]
struct FlagArgs {
    /// Flag height in cells (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
    /// Path to a .toml flag config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dimensions derived from a flag height
    Dims {
        #[command(flatten)]
        flag: FlagArgs,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the composed flag as text
    Show {
        #[command(flatten)]
        flag: FlagArgs,
        /// Glyph for circle cells
        #[arg(long)]
        circle: Option<String>,
        /// Glyph for blank cells
        #[arg(long)]
        blank: Option<String>,
    },
    /// List rasterized circle coordinates for any grid and diameter
    Points {
        /// Grid height in cells
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
        /// Circle diameter in cells
        #[arg(long)]
        diameter: u32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the flag as PNG or PDF
    Render {
        #[command(flatten)]
        flag: FlagArgs,
        /// Output format
        #[arg(long, default_value = "png")]
        format: String,
        /// Pixels per cell (PNG)
        #[arg(long)]
        scale: Option<usize>,
        /// Millimetres per cell (PDF)
        #[arg(long)]
        cell_mm: Option<f32>,
        /// Output file path (default: flag_<height>.<format>)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Tabulate derived dimensions for a range of heights
    Table {
        /// First height
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        from: u32,
        /// Last height (inclusive)
        #[arg(long, default_value = "20")]
        to: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Dims { flag, json } => cmd_dims(&flag, json),
        Command::Show {
            flag,
            circle,
            blank,
        } => cmd_show(&flag, circle, blank),
        Command::Points {
            height,
            diameter,
            json,
        } => cmd_points(height, diameter, json),
        Command::Render {
            flag,
            format,
            scale,
            cell_mm,
            output,
        } => cmd_render(&flag, &format, scale, cell_mm, output),
        Command::Table { from, to } => cmd_table(from, to),
    }
}

/// Read a config file, then apply command-line overrides.
fn load_config(args: &FlagArgs) -> Result<FlagConfig> {
    let file = match &args.config {
        Some(path) => Some(read_config(path)?),
        None => None,
    };

    let config = match (file, args.height) {
        (Some(mut config), Some(height)) => {
            config.height = height;
            config
        }
        (Some(config), None) => config,
        (None, height) => FlagConfig {
            height: height.unwrap_or(DEFAULT_HEIGHT),
            render: RenderConfig::default(),
        },
    };
    log::info!("flag height {}", config.height);
    Ok(config)
}

fn read_config(path: &Path) -> Result<FlagConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    FlagConfig::from_toml(&toml_str).with_context(|| format!("parsing {}", path.display()))
}

fn cmd_dims(args: &FlagArgs, json: bool) -> Result<()> {
    let dims = load_config(args)?.dimensions()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dims)?);
    } else {
        print!("{}", format_dims(&dims));
    }
    Ok(())
}

fn format_dims(dims: &FlagDimensions) -> String {
    format!(
        "Flag height:   {}\nFlag length:   {}\nCircle size:   {}\nPadding:       {}\n",
        dims.height, dims.length, dims.circle_size, dims.padding
    )
}

fn cmd_show(args: &FlagArgs, circle: Option<String>, blank: Option<String>) -> Result<()> {
    let config = load_config(args)?;
    let flag = config.dimensions()?.render();

    let circle = circle.unwrap_or(config.render.circle);
    let blank = blank.unwrap_or(config.render.blank);
    print!("{}", flag.to_text(&circle, &blank));
    Ok(())
}

fn cmd_points(height: u32, diameter: u32, json: bool) -> Result<()> {
    let points = earthflag::rasterize(height, diameter);

    if json {
        println!("{}", serde_json::to_string(&points)?);
    } else {
        for p in &points {
            println!("{},{}", p.x, p.y);
        }
    }
    log::info!("{} points", points.len());
    Ok(())
}

fn cmd_render(
    args: &FlagArgs,
    format: &str,
    scale: Option<usize>,
    cell_mm: Option<f32>,
    output: Option<String>,
) -> Result<()> {
    let config = load_config(args)?;
    let dims = config.dimensions()?;
    let flag = dims.render();
    let path = output.unwrap_or_else(|| format!("flag_{}.{}", dims.height, format));

    match format {
        "png" => {
            let scale = scale.unwrap_or(config.render.scale);
            render_png::write_flag_png(&flag, scale, Path::new(&path))?;
        }
        "pdf" => {
            let cell_mm = cell_mm.unwrap_or(config.render.cell_mm);
            let title = format!("Earth flag {}x{}", dims.length, dims.height);
            render_pdf::write_flag_pdf(&flag, cell_mm, &title, &path)?;
        }
        _ => anyhow::bail!("unknown format '{}', use 'png' or 'pdf'", format),
    }
    println!("wrote {}", path);
    Ok(())
}

fn cmd_table(from: u32, to: u32) -> Result<()> {
    anyhow::ensure!(from <= to, "--from {} is greater than --to {}", from, to);

    println!(
        "{:>7} {:>7} {:>7} {:>8} {:>8}",
        "Height", "Length", "Circle", "Padding", "Cells"
    );
    println!("{}", "-".repeat(41));
    for height in from..=to {
        let dims = FlagDimensions::from_height(height)?;
        println!(
            "{:>7} {:>7} {:>7} {:>8} {:>8}",
            dims.height,
            dims.length,
            dims.circle_size,
            dims.padding,
            dims.render().circle_count(),
        );
    }
    Ok(())
}
