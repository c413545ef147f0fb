use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use projectile_engine::{
    downsample, estimate, solve_launch, FlightSummary, LaunchSolution, ProjectileParams,
    Simulation, TrajectoryEstimate, TrajectoryPoint, Vector2D, VelocitySample, WindConvention,
    DEFAULT_MAX_STEPS,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version)]
#[command(about = "2D projectile motion with drag, wind and autopilot targeting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a launch until it lands
    Simulate {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,

        /// Show all trajectory points
        #[arg(long)]
        full: bool,

        /// Maximum number of integration steps
        #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,
    },

    /// Analytic apex height and range, without stepping
    Estimate {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Find the slowest drag-free launch that hits a target
    Solve {
        /// Target distance (m)
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        target_x: f64,

        /// Target height (m)
        #[arg(short = 'y', long, default_value = "0.0", allow_hyphen_values = true)]
        target_y: f64,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

/// Launch parameters; flags override values from `--config`
///
/// Values are merged here and validated by the command that uses them.
#[derive(Args, Debug, Clone)]
struct LaunchArgs {
    /// Parameter file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Initial velocity (m/s)
    #[arg(short = 'v', long)]
    velocity: Option<f64>,

    /// Launch angle (degrees)
    #[arg(short = 'a', long)]
    angle: Option<f64>,

    /// Mass (kg)
    #[arg(short = 'm', long)]
    mass: Option<f64>,

    /// Enable air resistance
    #[arg(long)]
    drag: bool,

    /// Drag coefficient (0 selects the sphere default)
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Wind speed (m/s)
    #[arg(long)]
    wind_speed: Option<f64>,

    /// Wind direction (degrees, 0 = toward +x, 180 = toward -x)
    #[arg(long, allow_hyphen_values = true)]
    wind_direction: Option<f64>,

    /// How the wind direction is interpreted
    #[arg(long, value_enum)]
    wind_convention: Option<WindArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindArg {
    Continuous,
    LeftRight,
}

impl From<WindArg> for WindConvention {
    fn from(arg: WindArg) -> Self {
        match arg {
            WindArg::Continuous => WindConvention::Continuous,
            WindArg::LeftRight => WindConvention::LeftRight,
        }
    }
}

impl LaunchArgs {
    fn resolve(&self) -> Result<ProjectileParams, Box<dyn Error>> {
        let mut params = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading parameters");
                ProjectileParams::from_toml_file(path)?
            }
            None => ProjectileParams::default(),
        };

        if let Some(v) = self.velocity {
            params.initial_velocity = v;
        }
        if let Some(a) = self.angle {
            params.angle = a;
        }
        if let Some(m) = self.mass {
            params.mass = m;
        }
        if self.drag {
            params.air_resistance = true;
        }
        if let Some(cd) = self.drag_coefficient {
            params.drag_coefficient = cd;
        }
        if let Some(speed) = self.wind_speed {
            params.wind_speed = speed;
        }
        if let Some(direction) = self.wind_direction {
            params.wind_direction = direction;
        }
        if let Some(convention) = self.wind_convention {
            params.wind_convention = convention.into();
        }

        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    params: ProjectileParams,
    summary: FlightSummary,
    estimate: TrajectoryEstimate,
    steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Vec<TrajectoryPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    velocities: Option<Vec<VelocitySample>>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { launch, output, full, max_steps } => {
            let params = launch.resolve()?;
            let mut sim = Simulation::launch(params)?;
            let summary = sim.run_to_landing(max_steps)?;
            info!(
                time_of_flight = summary.time_of_flight,
                range = summary.range,
                "simulation finished"
            );

            let report = SimulationReport {
                estimate: estimate(sim.params()),
                params: sim.params().clone(),
                summary,
                steps: sim.state().trajectory.len() - 1,
                trajectory: full.then(|| sim.state().trajectory.clone()),
                velocities: full.then(|| sim.velocity_profile()),
            };
            display_simulation(&report, &sim, output, full)?;
        }

        Commands::Estimate { launch, output } => {
            let params = launch.resolve()?;
            params.validate()?;
            let result = estimate(&params);
            display_estimate(&result, output)?;
        }

        Commands::Solve { target_x, target_y, output } => {
            let solution = solve_launch(Some(Vector2D::new(target_x, target_y)));
            display_solution(solution, target_x, target_y, output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      PROJECTILE ENGINE v{:<15}║", env!("CARGO_PKG_VERSION"));
            println!("╠════════════════════════════════════════╣");
            println!("║ 2D projectile motion under gravity     ║");
            println!("║ with optional drag and wind.           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Semi-implicit Euler, 16 ms step      ║");
            println!("║ • Reynolds-banded sphere drag          ║");
            println!("║ • Analytic apex/range estimate         ║");
            println!("║ • Autopilot launch solver              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_simulation(
    report: &SimulationReport,
    sim: &Simulation,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y,vx,vy,speed");
            let trajectory = &sim.state().trajectory;
            for (p, v) in trajectory.iter().zip(sim.velocity_profile()) {
                println!("{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}", p.t, p.x, p.y, v.vx, v.vy, v.speed);
            }
        }

        OutputFormat::Table => {
            let s = &report.summary;
            println!("╔════════════════════════════════════════╗");
            println!("║         TRAJECTORY RESULTS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Time of Flight:    {:>8.2} s          ║", s.time_of_flight);
            println!("║ Max Height:        {:>8.2} m          ║", s.max_height);
            println!("║ Range:             {:>8.2} m          ║", s.range);
            println!("║ Steps:             {:>8}            ║", report.steps);
            println!("╠════════════════════════════════════════╣");
            println!("║ Estimated Height:  {:>8.2} m          ║", report.estimate.max_height);
            println!("║ Estimated Range:   {:>8.2} m          ║", report.estimate.range);
            println!("╚════════════════════════════════════════╝");

            let points = &sim.state().trajectory;
            let velocities = sim.velocity_profile();
            let rows: Vec<(TrajectoryPoint, VelocitySample)> = if full {
                points.iter().copied().zip(velocities).collect()
            } else {
                let paired: Vec<_> = points.iter().copied().zip(velocities).collect();
                let mut thinned = downsample(&paired, 10);
                if let (Some(last), Some(end)) = (paired.last(), thinned.last()) {
                    if last.0.t != end.0.t {
                        thinned.push(*last);
                    }
                }
                thinned
            };

            println!("\nTrajectory Points:");
            println!("┌──────────┬──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │ Vel(m/s) │");
            println!("├──────────┼──────────┼──────────┼──────────┤");
            for (p, v) in rows {
                println!("│ {:>8.3} │ {:>8.2} │ {:>8.2} │ {:>8.2} │", p.t, p.x, p.y, v.speed);
            }
            println!("└──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_estimate(result: &TrajectoryEstimate, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => {
            println!("metric,value");
            println!("max_height,{:.3}", result.max_height);
            println!("range,{:.3}", result.range);
        }
        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         TRAJECTORY ESTIMATE            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Max Height:        {:>8.2} m          ║", result.max_height);
            println!("║ Range:             {:>8.2} m          ║", result.range);
            println!("╚════════════════════════════════════════╝");
        }
    }
    Ok(())
}

fn display_solution(
    solution: Option<LaunchSolution>,
    target_x: f64,
    target_y: f64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Csv => {
            println!("target_x,target_y,velocity,angle");
            match solution {
                Some(s) => println!("{:.3},{:.3},{:.4},{:.2}", target_x, target_y, s.velocity, s.angle),
                None => println!("{:.3},{:.3},,", target_x, target_y),
            }
        }
        OutputFormat::Table => match solution {
            Some(s) => {
                println!("╔════════════════════════════════════════╗");
                println!("║         AUTOPILOT SOLUTION             ║");
                println!("╠════════════════════════════════════════╣");
                println!("║ Target:      ({:>8.2}, {:>8.2}) m    ║", target_x, target_y);
                println!("║ Velocity:          {:>8.2} m/s        ║", s.velocity);
                println!("║ Angle:             {:>8.2} deg        ║", s.angle);
                println!("╚════════════════════════════════════════╝");
            }
            None => println!("No solution for target ({:.2}, {:.2})", target_x, target_y),
        },
    }
    Ok(())
}
