// rectgrid CLI - wall-clearance grid generation for rectangles

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rectgrid::query::parse_query;
use rectgrid::{ErrorKind, GenerateGrid, GridParams, LayoutVariant, RectGridError, Rectangle};

const EXIT_SUCCESS: u8 = 0;
/// Geometry or layout failure.
const EXIT_ERROR: u8 = 1;
/// Bad arguments, unreadable config, or an unparseable query.
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "rectgrid")]
#[command(about = "Generate grid points inside a rectangle with wall clearance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: GridOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a grid from a free-text query
    #[command(after_help = "\
Examples:
  rectgrid query '(0,0) (0,10) (30,10) (30,0) spacing: 1.8'
  rectgrid --variant search query 'room (0,0) (0,4) (6,4) (6,0) Vspacing=0.5'")]
    Query {
        /// Text containing four (x, y) pairs and `spacing: <value>`
        text: String,
    },

    /// Generate a grid from explicit corners
    #[command(after_help = "\
Examples:
  rectgrid generate -c 0,0 -c 0,10 -c 30,10 -c 30,0 -s 1.8
  rectgrid --wall-offset 0.5 --pretty generate -c 0,0 -c 0,4 -c 6,4 -c 6,0 -s 1")]
    Generate {
        /// Corner as `x,y`; give exactly four, LL, UL, UR, LR
        #[arg(
            long = "corner",
            short = 'c',
            value_parser = parse_corner,
            num_args = 1,
            allow_hyphen_values = true
        )]
        corners: Vec<(f64, f64)>,

        /// Distance between adjacent points
        #[arg(long, short = 's')]
        spacing: f64,
    },
}

#[derive(clap::Args)]
struct GridOptions {
    /// Layout algorithm
    #[arg(long, global = true, value_enum, default_value_t = VariantArg::ClosedForm)]
    variant: VariantArg,

    /// JSON file with grid parameters, applied before the flags below
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum distance from every point to every wall
    #[arg(long, global = true)]
    wall_offset: Option<f64>,

    /// Vertical nudge between search attempts
    #[arg(long, global = true)]
    zy_step: Option<f64>,

    /// Decimal places for emitted coordinates
    #[arg(long, global = true)]
    precision: Option<u32>,

    /// Maximum number of points
    #[arg(long, global = true)]
    max_points: Option<usize>,

    /// Indent the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Search,
    ClosedForm,
}

impl From<VariantArg> for LayoutVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Search => LayoutVariant::Search,
            VariantArg::ClosedForm => LayoutVariant::ClosedForm,
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: message.into(),
        }
    }
}

impl From<RectGridError> for CliError {
    fn from(err: RectGridError) -> Self {
        let code = match err.kind() {
            ErrorKind::Parse => EXIT_USAGE,
            _ => EXIT_ERROR,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

fn parse_corner(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok((x, y))
}

fn load_params(options: &GridOptions) -> Result<GridParams, CliError> {
    let mut params = match &options.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::usage(format!("cannot read {}: {e}", path.display())))?;
            serde_json::from_str(&text)
                .map_err(|e| CliError::usage(format!("invalid config {}: {e}", path.display())))?
        }
        None => GridParams::default(),
    };

    if let Some(wall_offset) = options.wall_offset {
        params.wall_offset = wall_offset;
    }
    if let Some(zy_step) = options.zy_step {
        params.zy_step = zy_step;
    }
    if let Some(precision) = options.precision {
        params.display_precision = Some(precision);
    }
    if let Some(max_points) = options.max_points {
        params.max_points = max_points;
    }
    Ok(params)
}

fn run(cli: Cli) -> Result<String, CliError> {
    let params = load_params(&cli.options)?;

    let (rectangle, spacing) = match cli.command {
        Commands::Query { text } => {
            let query = parse_query(&text).map_err(RectGridError::from)?;
            (query.rectangle, query.spacing)
        }
        Commands::Generate { corners, spacing } => {
            let corners: [(f64, f64); 4] = corners.try_into().map_err(|c: Vec<_>| {
                CliError::usage(format!("expected 4 corners, got {}", c.len()))
            })?;
            (Rectangle::from_pairs(corners), spacing)
        }
    };

    let result = GenerateGrid::new(rectangle, spacing)
        .with_variant(cli.options.variant.into())
        .with_params(params)
        .execute()?;

    let json = if cli.options.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    Ok(json)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::from(err.code)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn corner_parsing() {
        assert_eq!(parse_corner("1.5, -2").unwrap(), (1.5, -2.0));
        assert!(parse_corner("1.5").is_err());
        assert!(parse_corner("a,2").is_err());
    }

    #[test]
    fn generate_command() {
        let cli = Cli::try_parse_from([
            "rectgrid", "generate", "-c", "0,0", "-c", "0,10", "-c", "30,10", "-c", "30,0", "-s",
            "1.8",
        ])
        .unwrap();
        let json = run(cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Details"]["num_points"], 102);
    }

    #[test]
    fn query_command_with_flags() {
        let cli = Cli::try_parse_from([
            "rectgrid",
            "--variant",
            "search",
            "--wall-offset",
            "0.5",
            "query",
            "(0,0) (0,3) (10,3) (10,0) spacing: 1",
        ])
        .unwrap();
        let json = run(cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Details"]["num_points"], 30);
        assert_eq!(value["Grid"][0], serde_json::json!([0.5, 0.5]));
    }

    #[test]
    fn negative_corners_accepted() {
        let cli = Cli::try_parse_from([
            "rectgrid", "generate", "-c", "-4,-1", "-c", "-4,1", "-c", "-1,1", "-c", "-1,-1",
            "-s", "0.5",
        ])
        .unwrap();
        let json = run(cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Rectangle"][0], serde_json::json!([-4.0, -1.0]));
        // Usable 2.6 x 1.6 holds 6 columns and 4 rows.
        assert_eq!(value["Details"]["num_points"], 24);
    }

    #[test]
    fn wrong_corner_count_is_usage_error() {
        let cli = Cli::try_parse_from([
            "rectgrid", "generate", "-c", "0,0", "-c", "0,1", "-c", "1,1", "-s", "0.1",
        ])
        .unwrap();
        let err = run(cli).err().unwrap();
        assert_eq!(err.code, EXIT_USAGE);
    }

    #[test]
    fn degenerate_geometry_exit_code() {
        let cli = Cli::try_parse_from(["rectgrid", "query", "(0,0) (0,0.3) (1,0.3) (1,0) spacing: 0.1"])
            .unwrap();
        let err = run(cli).err().unwrap();
        assert_eq!(err.code, EXIT_ERROR);
    }
}
