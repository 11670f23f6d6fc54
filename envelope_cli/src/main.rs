//! # Cooper E-80 Envelope CLI
//!
//! Terminal front end for the moving-load envelope engine. Collects numeric
//! inputs as flags, resolves span fractions and inch increments, and prints a
//! human report followed by the JSON result.
//!
//! ```text
//! envelope_cli point --span 100 -x 0.5 --fraction --impact 0.3
//! envelope_cli profile --span 100 -n 10 --kind moment
//! ```
//!
//! Defaults come from `--config <settings.json>` when given; explicit flags
//! win. Set `RUST_LOG=debug` to see train extension and sweep sizes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use envelope_core::calculations::{GoverningPlacement, ProfileResult};
use envelope_core::{AnalysisSettings, CalcError, CalcResult, EvaluationPoint, MovingLoadAnalysis};

#[derive(Parser, Debug)]
#[command(name = "envelope_cli", version, about = "Cooper E-80 max shear/moment calculator")]
struct Cli {
    /// Settings file supplying defaults (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Maximum moment and shear at one point, with governing train positions
    Point {
        #[command(flatten)]
        common: CommonArgs,

        /// Evaluation point: feet from the left support, or a fraction with --fraction
        #[arg(short = 'x', long = "x-location", allow_negative_numbers = true)]
        x_location: f64,

        /// Treat the x-location as a fraction of the span
        #[arg(long)]
        fraction: bool,

        /// List the axles on the span at each governing position
        #[arg(long)]
        show_train: bool,
    },
    /// Maximum moment or shear at nth points along the span
    Profile {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of span divisions (n + 1 points are evaluated)
        #[arg(short = 'n', long)]
        nth_points: Option<usize>,

        /// Which response to profile
        #[arg(long, value_enum, default_value_t = ProfileKind::Both)]
        kind: ProfileKind,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Span length (ft)
    #[arg(short, long)]
    span: f64,

    /// Train position increment (inches)
    #[arg(long)]
    increment_in: Option<f64>,

    /// Impact factor
    #[arg(long)]
    impact: Option<f64>,

    /// Distribution factor
    #[arg(long)]
    distribution: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProfileKind {
    Moment,
    Shear,
    Both,
}

#[derive(Serialize)]
struct PointReport<'a> {
    span_ft: f64,
    settings: &'a AnalysisSettings,
    moment: &'a GoverningPlacement,
    shear: &'a GoverningPlacement,
}

#[derive(Serialize)]
struct ProfileReport<'a> {
    span_ft: f64,
    settings: &'a AnalysisSettings,
    moment: Option<&'a ProfileResult>,
    shear: Option<&'a ProfileResult>,
}

fn load_settings(config: Option<&PathBuf>, common: &CommonArgs) -> CalcResult<AnalysisSettings> {
    let mut settings = match config {
        Some(path) => AnalysisSettings::load(path)?,
        None => AnalysisSettings::default(),
    };
    if let Some(increment_in) = common.increment_in {
        settings.increment_in = increment_in;
    }
    if let Some(impact) = common.impact {
        settings.impact_factor = impact;
    }
    if let Some(distribution) = common.distribution {
        settings.distribution_factor = distribution;
    }
    settings.validate()?;
    Ok(settings)
}

fn run(cli: Cli) -> CalcResult<()> {
    match cli.command {
        Command::Point {
            common,
            x_location,
            fraction,
            show_train,
        } => {
            let settings = load_settings(cli.config.as_ref(), &common)?;
            let point = if fraction {
                EvaluationPoint::SpanFraction(x_location)
            } else {
                EvaluationPoint::Absolute(x_location)
            };
            run_point(common.span, point, &settings, show_train)
        }
        Command::Profile {
            common,
            nth_points,
            kind,
        } => {
            let mut settings = load_settings(cli.config.as_ref(), &common)?;
            if let Some(n) = nth_points {
                settings.nth_points = n;
            }
            settings.validate()?;
            run_profile(common.span, kind, &settings)
        }
    }
}

fn run_point(
    span_ft: f64,
    point: EvaluationPoint,
    settings: &AnalysisSettings,
    show_train: bool,
) -> CalcResult<()> {
    let x_ft = point.resolve(span_ft);
    let factors = settings.dynamic_factors();

    info!("point query: span {} ft, x {} ft", span_ft, x_ft);
    let analysis = MovingLoadAnalysis::from_settings(span_ft, settings)?;
    let moment = analysis.moment_train_position(x_ft, factors)?;
    let shear = analysis.shear_train_position(x_ft, factors)?;

    println!("═══════════════════════════════════════");
    println!("  COOPER E-80 ENVELOPE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:         {:.2} ft", span_ft);
    println!("  x-Location:   {:.2} ft", x_ft);
    println!("  Increment:    {:.2} in", settings.increment_in);
    println!("  Impact:       {:.3}", settings.impact_factor);
    println!("  Distribution: {:.3}", settings.distribution_factor);
    println!(
        "  Train:        {} axles ({} trailing), {:.1} ft",
        analysis.train().axle_count(),
        analysis.train().appended_axles(),
        analysis.train().total_length_ft()
    );
    println!();
    println!(
        "The maximum moment {:.2} kip-ft occurs when the front of the train is {:.2} feet past the last support.",
        moment.envelope.max_value, moment.envelope.position_ft
    );
    println!(
        "The maximum shear {:.2} kips occurs when the front of the train is {:.2} feet past the last support.",
        shear.envelope.max_value, shear.envelope.position_ft
    );

    if show_train {
        print_axles("Moment", &moment);
        print_axles("Shear", &shear);
    }

    print_json(&PointReport {
        span_ft,
        settings,
        moment: &moment,
        shear: &shear,
    });
    Ok(())
}

fn run_profile(span_ft: f64, kind: ProfileKind, settings: &AnalysisSettings) -> CalcResult<()> {
    let factors = settings.dynamic_factors();
    let n = settings.nth_points;

    info!("profile query: span {} ft, n = {}", span_ft, n);
    let analysis = MovingLoadAnalysis::from_settings(span_ft, settings)?;
    let moment = match kind {
        ProfileKind::Moment | ProfileKind::Both => Some(analysis.moment_profile(n, factors)?),
        ProfileKind::Shear => None,
    };
    let shear = match kind {
        ProfileKind::Shear | ProfileKind::Both => Some(analysis.shear_profile(n, factors)?),
        ProfileKind::Moment => None,
    };

    println!("═══════════════════════════════════════");
    println!("  MAXIMUM RESPONSE AT {}TH POINTS", n);
    println!("═══════════════════════════════════════");
    println!();
    println!("  {:>12}  {:>16}  {:>14}", "Span Pos, ft", "Max Moment, k-ft", "Max Shear, k");

    for i in 0..=n {
        let x = moment
            .as_ref()
            .or(shear.as_ref())
            .map(|p| p.points[i].x_ft)
            .unwrap_or_default();
        let m = moment
            .as_ref()
            .map(|p| format!("{:.2}", p.points[i].max_value))
            .unwrap_or_else(|| "-".to_string());
        let v = shear
            .as_ref()
            .map(|p| format!("{:.2}", p.points[i].max_value))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>12.2}  {:>16}  {:>14}", x, m, v);
    }

    print_json(&ProfileReport {
        span_ft,
        settings,
        moment: moment.as_ref(),
        shear: shear.as_ref(),
    });
    Ok(())
}

fn print_axles(label: &str, placement: &GoverningPlacement) {
    println!();
    println!(
        "{} train position ({:.2} ft):",
        label, placement.envelope.position_ft
    );
    for axle in placement.on_span() {
        println!(
            "  axle {:>3}  {:>5.1} k  at {:>8.2} ft",
            axle.index + 1,
            axle.load_kips,
            axle.coordinate_ft
        );
    }
}

fn print_json<T: Serialize>(report: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{}", json);
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
