// 生命週曆產生器 - 主程式

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use life_calendar::config::{Config, ConfigBuilder, Orientation};
use life_calendar::interface::{WallpaperOutcome, WallpaperSetter};
use life_calendar::utils::logger;
use life_calendar::Generator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a \"life in weeks\" grid and optionally set it as the desktop background")]
struct Args {
    /// TOML config file ([profile], [video], [palette], [system])
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Birthdate, YYYY-MM-DD
    #[arg(long)]
    birthdate: Option<NaiveDate>,

    /// Expected lifespan in years
    #[arg(long)]
    lifespan: Option<u32>,

    /// Canvas resolution, e.g. 2560x1664
    #[arg(long, value_parser = parse_resolution)]
    resolution: Option<(u32, u32)>,

    /// Grid orientation
    #[arg(long, value_enum)]
    orientation: Option<Orientation>,

    /// Output image path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not try to set the desktop background
    #[arg(long)]
    no_wallpaper: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Show the rendered image in a window
    #[cfg(feature = "preview")]
    #[arg(long)]
    preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_resolution(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

fn load_config(args: &Args) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::new(),
    };

    let mut builder = ConfigBuilder::from_config(base);
    if let Some(date) = args.birthdate {
        builder = builder.birthdate(date);
    }
    if let Some(years) = args.lifespan {
        builder = builder.lifespan_years(years);
    }
    if let Some((w, h)) = args.resolution {
        builder = builder.resolution(w, h);
    }
    if let Some(orientation) = args.orientation {
        builder = builder.orientation(orientation);
    }
    if let Some(path) = &args.output {
        builder = builder.output_path(path.clone());
    }
    if args.no_wallpaper {
        builder = builder.set_wallpaper(false);
    }
    Ok(builder.build()?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let level = config.system.log_level.raised_by(args.verbose);
    logger::init(level.to_filter(), config.system.log_file.as_deref())
        .context("Failed to open log file")?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let generator = Generator::new(&config);
    let report = generator
        .generate(today)
        .with_context(|| format!("Failed to write image: {}", config.output_path().display()))?;

    println!("Saved → {}", report.path.display());
    println!("{}", report.stats.summary());

    match generator.apply_wallpaper(&report, &WallpaperSetter::default()) {
        Some(WallpaperOutcome::Applied(_)) => println!("Wallpaper set."),
        Some(WallpaperOutcome::AllFailed) => {
            println!("Could not auto-set wallpaper — set it manually in System Settings > Wallpaper");
            println!("File is at: {}", report.path.display());
        }
        None => {}
    }

    #[cfg(feature = "preview")]
    if args.preview {
        let (canvas, _) = generator.render(today)?;
        life_calendar::interface::video::preview(&canvas, &config.video.title)?;
    }

    Ok(())
}
