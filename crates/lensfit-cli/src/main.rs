use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use clap::Parser;
use lensfit_pipeline::{
    format_summary, run_lens_fit, write_report_plot, LensFitConfig, LensFitInput, LensFitReport,
};
use log::{info, warn};

const DEFAULT_PLOT_PATH: &str = "magnification_fit.svg";

/// Focal length and radius of curvature from signed magnification vs image distance.
#[derive(Debug, Parser)]
#[command(name = "lensfit", version, about = "Fit M = a*d_i + b and derive f = -1/a, R = 2f")]
struct Args {
    /// Path to JSON file containing LensFitInput. The reference bench dataset is used if omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Optional path to JSON LensFitConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the plot (.svg, or .png with the `png` feature).
    #[arg(long, default_value = DEFAULT_PLOT_PATH, conflicts_with = "no_plot")]
    plot: PathBuf,

    /// Skip writing the plot.
    #[arg(long)]
    no_plot: bool,

    /// Open the written plot with the platform viewer.
    #[arg(long, conflicts_with = "no_plot")]
    show: bool,

    /// Also write the full report as pretty JSON.
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load input and config (falling back to defaults) and run the fit.
fn run_from_files(
    input_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(LensFitReport, LensFitConfig)> {
    let input = match input_path {
        Some(path) => load_json_file::<LensFitInput>(path)?,
        None => LensFitInput::default(),
    };
    let config = match config_path {
        Some(path) => load_json_file::<LensFitConfig>(path)?,
        None => LensFitConfig::default(),
    };

    let report = run_lens_fit(&input, &config)?;
    Ok((report, config))
}

fn write_report_json(report: &LensFitReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn open_in_viewer(path: &Path) {
    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").arg("/C").arg("start").arg("").arg(path).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else {
        Command::new("xdg-open").arg(path).status()
    };
    match status {
        Ok(s) if s.success() => {}
        Ok(s) => warn!("viewer exited with {s} for {}", path.display()),
        Err(err) => warn!("could not open {}: {err}", path.display()),
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    let (report, config) = run_from_files(args.input.as_deref(), args.config.as_deref())?;
    println!("{}", format_summary(&report));

    if let Some(path) = &args.report_json {
        write_report_json(&report, path)?;
        info!("report written to {}", path.display());
    }

    if !args.no_plot {
        write_report_plot(&report, &config, &args.plot)?;
        if args.show {
            open_in_viewer(&args.plot);
        }
    }
    Ok(())
}
