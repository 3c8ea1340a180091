use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_planar3r_kinematics::kinematic_traits::{Kinematics, Point, J1, J2, J3};
use rs_planar3r_kinematics::kinematics_impl::Planar3RKinematics;
use rs_planar3r_kinematics::parameters::planar3r::Parameters;
use rs_planar3r_kinematics::path_io::{read_path_file, read_trajectory_file, write_trajectory_file};
use rs_planar3r_kinematics::reach::ReachOptions;
use rs_planar3r_kinematics::trajectory::{Trajectory, TrajectoryGenerator, DEFAULT_STEP};
use rs_planar3r_kinematics::utils::format_joints_degrees;

/// Joint trajectories for a planar 3R arm following a Cartesian path.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the joint trajectory for a path (default).
    Generate(GenerateArgs),

    /// Report limit compliance and tip extent of an existing trajectory.
    Inspect(InspectArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Robot description
    #[arg(long, default_value = "Robot.par")]
    robot: PathBuf,

    /// Cartesian path, two columns x y
    #[arg(long, default_value = "Trajet.xy")]
    path: PathBuf,

    /// Joint trajectory to write, three columns
    #[arg(long, default_value = "Trajet.trj")]
    output: PathBuf,

    /// Cartesian distance between consecutive targets
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,

    /// Do not pull the joints towards the middle of their ranges
    #[arg(long)]
    no_avoidance: bool,

    /// Do not saturate the joints at their limits
    #[arg(long)]
    no_clamp: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        GenerateArgs {
            robot: PathBuf::from("Robot.par"),
            path: PathBuf::from("Trajet.xy"),
            output: PathBuf::from("Trajet.trj"),
            step: DEFAULT_STEP,
            no_avoidance: false,
            no_clamp: false,
        }
    }
}

#[derive(Args)]
struct InspectArgs {
    /// Robot description
    #[arg(long, default_value = "Robot.par")]
    robot: PathBuf,

    /// Joint trajectory to inspect
    #[arg(long, default_value = "Trajet.trj")]
    trajectory: PathBuf,
}

fn read_robot(path: &Path) -> Result<Parameters> {
    Parameters::from_par_file(path)
        .with_context(|| format!("Failed to read robot description {}", path.display()))
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let parameters = read_robot(&args.robot)?;
    let path = read_path_file(&args.path)
        .with_context(|| format!("Failed to read path {}", args.path.display()))?;

    let robot = Planar3RKinematics::new(parameters);
    let options = ReachOptions::new(!args.no_avoidance, !args.no_clamp);
    info!(waypoints = path.len(), step = args.step, ?options, "generating joint trajectory");

    let generator = TrajectoryGenerator::new(&robot, args.step, options);
    let trajectory = generator.generate(&path).context("Failed to generate joint trajectory")?;

    write_trajectory_file(&args.output, &trajectory.joints())
        .with_context(|| format!("Failed to write trajectory {}", args.output.display()))?;

    println!(
        "Joint trajectory generated (avoidance={}, clamp={}), {} samples -> {}",
        if options.avoidance { "ON" } else { "OFF" },
        if options.clamp { "ON" } else { "OFF" },
        trajectory.len(),
        args.output.display()
    );
    Ok(())
}

fn inspect(args: &InspectArgs) -> Result<()> {
    let parameters = read_robot(&args.robot)?;
    let joints = read_trajectory_file(&args.trajectory)
        .with_context(|| format!("Failed to read trajectory {}", args.trajectory.display()))?;
    let robot = Planar3RKinematics::new(parameters);
    let trajectory = Trajectory::from_joints(joints);

    let violations = trajectory.limit_violations(robot.constraints());
    let tips: Vec<Point> = trajectory
        .samples()
        .iter()
        .map(|s| robot.forward_with_link_positions(&s.joints, &parameters.base)[3])
        .collect();
    let (min, max) = tips.iter().fold(
        (Point::repeat(f64::INFINITY), Point::repeat(f64::NEG_INFINITY)),
        |(min, max), tip| (min.inf(tip), max.sup(tip)),
    );
    let outside = tips.iter().filter(|tip| !parameters.workspace.contains(tip)).count();

    println!("Samples: {}", trajectory.len());
    if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
        println!("First:   {}", format_joints_degrees(&first.joints));
        println!("Last:    {}", format_joints_degrees(&last.joints));
    }
    println!(
        "Outside joint limits: J1 {}, J2 {}, J3 {}",
        violations[J1], violations[J2], violations[J3]
    );
    println!(
        "Tip extent: x [{:.4}, {:.4}], y [{:.4}, {:.4}], {} samples outside the workspace",
        min.x, max.x, min.y, max.y, outside
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Generate(args)) => generate(&args),
        Some(Command::Inspect(args)) => inspect(&args),
        None => generate(&GenerateArgs::default()),
    }
}
