use clap::{Args, Parser, Subcommand, ValueEnum};
use drift_ballistics::output::{self, OutputFormat};
use drift_ballistics::server::{self, ServerConfig};
use drift_ballistics::{
    SolverOptions, TrajectoryInput, TrajectorySolver, UnitConverter, UnitSystem, ZeroRangePolicy,
};
use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drift-ballistics")]
#[command(version)]
#[command(about = "Small-arms trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a trajectory table
    Trajectory(TrajectoryArgs),

    /// Serve the calculator API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "DRIFT_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short = 'p', long, env = "PORT", default_value_t = 8080)]
        port: u16,

        /// Largest accepted target or zero distance (meters)
        #[arg(long, env = "DRIFT_MAX_DISTANCE", default_value_t = 5000.0)]
        max_distance: f64,
    },

    /// Display model information
    Info,
}

#[derive(Args)]
struct TrajectoryArgs {
    /// Muzzle velocity (m/s, or fps with --units imperial)
    #[arg(short = 'v', long)]
    velocity: f64,

    /// G1 ballistic coefficient
    #[arg(short = 'b', long)]
    bc: f64,

    /// Bullet weight (grams, or grains)
    #[arg(short = 'w', long)]
    weight: f64,

    /// Zero range (meters, or yards)
    #[arg(short = 'z', long, default_value = "100", allow_negative_numbers = true)]
    zero: f64,

    /// Target distance (meters, or yards)
    #[arg(short = 'd', long, default_value = "500")]
    distance: f64,

    /// Wind speed (m/s, or mph)
    #[arg(long, default_value = "0")]
    wind_speed: f64,

    /// Wind angle (degrees, 0 = headwind, 90 = full value)
    #[arg(long, default_value = "90", allow_negative_numbers = true)]
    wind_angle: f64,

    /// Sight height above bore (mm, or inches)
    #[arg(long, default_value = "38", allow_negative_numbers = true)]
    sight_height: f64,

    /// Temperature (Celsius, or Fahrenheit)
    #[arg(long, default_value = "15", allow_negative_numbers = true)]
    temperature: f64,

    /// Altitude (meters, or feet)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    altitude: f64,

    /// Unit system for inputs and the printed table
    #[arg(short = 'u', long, value_enum, default_value = "metric")]
    units: Units,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    output: Format,

    /// Fail instead of assuming a parallel sight line when the zero range is not positive
    #[arg(long)]
    strict_zero: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trajectory(args) => run_trajectory(args)?,

        Commands::Serve {
            host,
            port,
            max_distance,
        } => {
            let config = ServerConfig {
                addr: SocketAddr::new(host, port),
                solver: SolverOptions {
                    max_distance: Some(max_distance),
                    ..Default::default()
                },
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      DRIFT BALLISTICS v{:<16}║", env!("CARGO_PKG_VERSION"));
            println!("╠════════════════════════════════════════╣");
            println!("║ Metric point-mass trajectory tables.   ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Model:                                 ║");
            println!("║ • Simplified G1 retardation            ║");
            println!("║ • Barometric air density correction    ║");
            println!("║ • Zero angle from a no-wind pass       ║");
            println!("║ • Lag-time wind drift                  ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn run_trajectory(args: TrajectoryArgs) -> Result<(), Box<dyn Error>> {
    let units = UnitSystem::from(args.units);
    let given = TrajectoryInput {
        muzzle_velocity: args.velocity,
        bullet_weight: args.weight,
        ballistic_coefficient: args.bc,
        zero_range: args.zero,
        target_distance: args.distance,
        wind_speed: args.wind_speed,
        wind_angle: args.wind_angle,
        sight_height: args.sight_height,
        temperature: args.temperature,
        altitude: args.altitude,
    };
    let input = UnitConverter::input_to_metric(&given, units);

    let options = SolverOptions {
        zero_policy: if args.strict_zero {
            ZeroRangePolicy::Reject
        } else {
            ZeroRangePolicy::Parallel
        },
        max_distance: None,
    };
    let samples = TrajectorySolver::with_options(input, options).solve()?;

    let rendered = output::render(&samples, args.output.into(), units)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
