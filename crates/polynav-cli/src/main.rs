//! CLI utility for polynav path search and agent simulation
//!
//! Meshes are generated on the fly as a grid of triangulated cells, with
//! optional blocked cells to carve out obstacles.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use glam::Vec3;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use polynav::{NavMesh, PathSearchConfig};
use polynav_agent::{AgentParams, NavAgent};

/// A CLI utility for polygon navigation mesh path search
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

/// Grid mesh parameters shared by every subcommand
#[derive(ClapArgs, Debug, Clone)]
struct GridArgs {
    /// Number of grid cells along X
    #[clap(long, default_value = "10")]
    cols: usize,

    /// Number of grid cells along Y
    #[clap(long, default_value = "10")]
    rows: usize,

    /// Side length of a grid cell
    #[clap(long, default_value = "1.0")]
    cell_size: f32,

    /// Cell to leave out of the mesh (col,row); may be repeated
    #[clap(long = "block", value_parser = parse_cell)]
    blocked: Vec<(usize, usize)>,

    /// Maximum number of A* iterations per search (default scales with the mesh)
    #[clap(long)]
    max_iterations: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find a path on a grid navigation mesh
    Path {
        #[clap(flatten)]
        grid: GridArgs,

        /// Start position (x,y,z)
        #[clap(long, value_parser = parse_vector)]
        start: Vec3,

        /// End position (x,y,z)
        #[clap(long, value_parser = parse_vector)]
        end: Vec3,

        /// Output path file
        #[clap(long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Walk an agent across a grid navigation mesh
    Simulate {
        #[clap(flatten)]
        grid: GridArgs,

        /// Start position (x,y,z)
        #[clap(long, value_parser = parse_vector)]
        start: Vec3,

        /// Destination (x,y,z)
        #[clap(long, value_parser = parse_vector)]
        end: Vec3,

        /// Agent speed in units per second
        #[clap(long, default_value = "3.5")]
        speed: f32,

        /// Agent radius
        #[clap(long, default_value = "0.6")]
        radius: f32,

        /// Frame time step in seconds
        #[clap(long, default_value = "0.016")]
        dt: f32,

        /// Give up after this many frames
        #[clap(long, default_value = "10000")]
        max_frames: usize,

        /// Print the agent position every N frames (0 disables)
        #[clap(long, default_value = "30")]
        report_every: usize,
    },
}

/// Parse a comma-separated vector
fn parse_vector(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();

    if parts.len() != 3 {
        return Err(format!(
            "Vector must have 3 components, got {}",
            parts.len()
        ));
    }

    let x = parts[0].trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = parts[1].trim().parse::<f32>().map_err(|e| e.to_string())?;
    let z = parts[2].trim().parse::<f32>().map_err(|e| e.to_string())?;

    Ok(Vec3::new(x, y, z))
}

/// Parse a comma-separated grid cell coordinate
fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("Cell must be col,row, got {}", s))?;

    let col = col.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let row = row.trim().parse::<usize>().map_err(|e| e.to_string())?;

    Ok((col, row))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Commands::Path {
            grid,
            start,
            end,
            output,
        } => find_path(&grid, start, end, output.as_deref()),
        Commands::Simulate {
            grid,
            start,
            end,
            speed,
            radius,
            dt,
            max_frames,
            report_every,
        } => {
            let params = AgentParams::default()
                .with_speed(speed)
                .with_radius(radius);
            simulate(&grid, start, end, params, dt, max_frames, report_every)
        }
    }
}

/// Builds a grid mesh of triangulated cells, skipping blocked ones
fn build_grid_mesh(grid: &GridArgs) -> Result<NavMesh> {
    if grid.cols == 0 || grid.rows == 0 {
        bail!("Grid must have at least one column and one row");
    }
    if grid.cell_size <= 0.0 {
        bail!("Cell size must be positive");
    }

    let config = match grid.max_iterations {
        Some(max_iterations) => PathSearchConfig::new().with_max_iterations(max_iterations),
        None => PathSearchConfig::new(),
    };
    let mut mesh = NavMesh::with_config(config).context("Invalid search configuration")?;

    for row in 0..=grid.rows {
        for col in 0..=grid.cols {
            mesh.add_vertex(Vec3::new(
                col as f32 * grid.cell_size,
                row as f32 * grid.cell_size,
                0.0,
            ));
        }
    }

    let blocked: HashSet<(usize, usize)> = grid.blocked.iter().copied().collect();
    let stride = grid.cols + 1;
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if blocked.contains(&(col, row)) {
                continue;
            }
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            for tri in [[a, b, c], [a, c, d]] {
                mesh.add_polygon(&tri)
                    .with_context(|| format!("Failed to add cell ({}, {})", col, row))?;
            }
        }
    }

    log::info!(
        "Built grid mesh: {} vertices, {} polygons ({} cells blocked)",
        mesh.vertex_count(),
        mesh.polygon_count(),
        blocked.len()
    );

    Ok(mesh)
}

/// Find a path on a grid navigation mesh
fn find_path(grid: &GridArgs, start: Vec3, end: Vec3, output: Option<&Path>) -> Result<()> {
    let nav_mesh = build_grid_mesh(grid)?;

    println!("Finding path from {:?} to {:?}...", start, end);

    let corridor = nav_mesh
        .find_polygon_path(start, end)
        .ok_or_else(|| anyhow!("No path from {:?} to {:?}", start, end))?;
    println!("Found path through {} polygons", corridor.len());

    let path = nav_mesh.corridor_waypoints(start, end, &corridor);

    if let Some(output_path) = output {
        println!("Saving path to {}...", output_path.display());

        let mut file = File::create(output_path)
            .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

        writeln!(file, "# Path from {:?} to {:?}", start, end)?;
        writeln!(file, "# {} waypoints", path.len())?;

        for waypoint in &path {
            writeln!(file, "{},{},{}", waypoint.x, waypoint.y, waypoint.z)?;
        }
    } else {
        println!("Path:");
        for (i, waypoint) in path.iter().enumerate() {
            println!("{}: {},{},{}", i, waypoint.x, waypoint.y, waypoint.z);
        }
    }

    Ok(())
}

/// Walk an agent across a grid navigation mesh
fn simulate(
    grid: &GridArgs,
    start: Vec3,
    end: Vec3,
    params: AgentParams,
    dt: f32,
    max_frames: usize,
    report_every: usize,
) -> Result<()> {
    params.validate().context("Invalid agent parameters")?;
    if dt <= 0.0 {
        bail!("Time step must be positive");
    }

    let nav_mesh = build_grid_mesh(grid)?;
    if nav_mesh.find_polygon_at(start).is_none() {
        bail!("Start {:?} is not on the mesh", start);
    }

    let mut agent = NavAgent::new(start, params);
    agent.set_destination(end);

    for frame in 1..=max_frames {
        agent.update(dt, &nav_mesh);

        if report_every > 0 && frame % report_every == 0 {
            let p = agent.position();
            println!("frame {}: {},{},{}", frame, p.x, p.y, p.z);
        }

        if agent.reached_destination() {
            let p = agent.position();
            println!(
                "Reached destination after {} frames ({:.2}s) at {},{},{}",
                frame,
                frame as f32 * dt,
                p.x,
                p.y,
                p.z
            );
            return Ok(());
        }
    }

    bail!(
        "Agent did not reach {:?} within {} frames (stopped at {:?})",
        end,
        max_frames,
        agent.position()
    )
}
