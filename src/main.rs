//! # Nolat Toolkit Demo
//!
//! Prints a random angle in degrees and a random blend between two colors.

use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use nolat_toolkit::{
    angle_to_vector2, color_lerp, to_degrees, Color, Toolkit, ToolkitResult, Vector2,
};
use serde::Serialize;
use std::io::Write;
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for the toolkit demo.
#[derive(Parser, Debug)]
#[command(name = "nolat-demo")]
#[command(about = "A simple example of some of the things the toolkit can do")]
#[command(version)]
struct Args {
    /// Random seed; omit to seed from entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color to blend from (RRGGBB or RRGGBBAA)
    #[arg(long, default_value = "#ff0000", value_parser = parse_color)]
    from: Color,

    /// Color to blend toward (RRGGBB or RRGGBBAA)
    #[arg(long, default_value = "#0000ff", value_parser = parse_color)]
    to: Color,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Everything the demo draws, in one serializable record.
#[derive(Debug, Serialize)]
struct DemoReport {
    seed: Option<u64>,
    angle_radians: f32,
    angle_degrees: f32,
    direction: Vector2,
    blend_amount: f32,
    from: Color,
    to: Color,
    blended: Color,
}

fn parse_color(text: &str) -> Result<Color, String> {
    Color::from_hex(text).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let level = log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info);

        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    debug!("Logging initialized at {}", log_level);
}

fn run(args: &Args) -> ToolkitResult<()> {
    info!("Starting nolat toolkit demo v{}", nolat_toolkit::VERSION);

    let mut toolkit = match args.seed {
        Some(seed) => Toolkit::seeded(seed),
        None => Toolkit::new(),
    };

    let report = build_report(&mut toolkit, args.seed, args.from, args.to);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Text => write_text(&mut out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn build_report(
    toolkit: &mut Toolkit,
    seed: Option<u64>,
    from: Color,
    to: Color,
) -> DemoReport {
    let angle_radians = toolkit.random_angle();
    let blend_amount = toolkit.random_range(0.0, 1.0);

    DemoReport {
        seed,
        angle_radians,
        angle_degrees: to_degrees(angle_radians),
        direction: angle_to_vector2(angle_radians),
        blend_amount,
        from,
        to,
        blended: color_lerp(from, to, blend_amount),
    }
}

fn write_text(out: &mut impl Write, report: &DemoReport) -> ToolkitResult<()> {
    writeln!(
        out,
        "This is a simple example of some of the things the toolkit can do."
    )?;
    writeln!(
        out,
        "{} radians in degrees is {}",
        report.angle_radians, report.angle_degrees
    )?;
    writeln!(out, "As a direction that is {}", report.direction)?;
    writeln!(
        out,
        "The color {:.1}% between {} and {} is {}, {}, {}",
        report.blend_amount * 100.0,
        report.from,
        report.to,
        report.blended.red(),
        report.blended.green(),
        report.blended.blue()
    )?;
    Ok(())
}
