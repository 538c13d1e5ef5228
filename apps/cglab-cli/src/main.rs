use anyhow::{Context, bail};
use cglab_common::FrameClock;
use cglab_render::{DebugTextRenderer, Renderer};
use cglab_scene::block_map::{BlockMap, Cell};
use cglab_scene::vectors::{self, VectorOp};
use cglab_scene::{DemoConfig, DemoKind, build_demo};
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cglab-cli", about = "Headless tool for the graphics coursework demos")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the available demos
    Info,
    /// Evaluate one vector canvas operation
    Vector {
        /// First vector as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        v1: Vec2,
        /// Second vector as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true, default_value = "0,0")]
        v2: Vec2,
        /// add, sub, mul, div, angle, area, magnitude, normalize
        #[arg(long)]
        op: VectorOp,
        /// Scalar for mul and div
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        scalar: f32,
    },
    /// Build one frame of a demo and print it
    Frame {
        #[arg(long, default_value = "world")]
        demo: DemoKind,
        /// Seconds of animation to simulate
        #[arg(long, default_value = "0")]
        time: f32,
        /// YAML demo configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Edit and print the block world map
    Map {
        /// Map file: one row of 0/1/2 digits per line
        #[arg(long)]
        file: Option<PathBuf>,
        /// Place a block at cell x,z
        #[arg(long, value_parser = parse_cell)]
        add: Vec<(usize, usize)>,
        /// Clear cell x,z
        #[arg(long, value_parser = parse_cell)]
        remove: Vec<(usize, usize)>,
    },
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected x,y, got '{s}'"))
}

fn parse_pair(s: &str) -> Result<Vec2, String> {
    let (x, y) = split_pair(s)?;
    let num = |v: &str| v.parse::<f32>().map_err(|e| format!("'{v}': {e}"));
    Ok(Vec2::new(num(x)?, num(y)?))
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (x, z) = split_pair(s)?;
    let num = |v: &str| v.parse::<usize>().map_err(|e| format!("'{v}': {e}"));
    Ok((num(x)?, num(z)?))
}

fn fmt_vec(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

fn run_vector(v1: Vec2, v2: Vec2, op: VectorOp, scalar: f32) -> anyhow::Result<()> {
    let (v1, v2) = (v1.extend(0.0), v2.extend(0.0));
    let outcome = vectors::apply(op, v1, v2, scalar).with_context(|| format!("{op} failed"))?;
    println!("v1 = {}  v2 = {}", fmt_vec(v1), fmt_vec(v2));
    for v in &outcome.drawn {
        let end = vectors::canvas_endpoint(*v);
        println!("result {}  canvas end ({:.1}, {:.1})", fmt_vec(*v), end.x, end.y);
    }
    for line in &outcome.report {
        println!("{line}");
    }
    Ok(())
}

fn run_frame(
    demo: DemoKind,
    time: f32,
    config: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => DemoConfig::load(&path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => DemoConfig::default(),
    };
    config.demo = demo;

    let mut d = build_demo(demo, &config);
    d.update(&FrameClock::at(time));
    let frame = d.frame();
    tracing::debug!(demo = %demo, time, shapes = frame.shapes.len(), "frame built");

    if json {
        println!("{}", serde_json::to_string_pretty(&frame.summary())?);
    } else {
        print!("{}", DebugTextRenderer::new().render(&frame));
    }
    Ok(())
}

fn run_map(
    file: Option<PathBuf>,
    add: &[(usize, usize)],
    remove: &[(usize, usize)],
) -> anyhow::Result<()> {
    let mut map = match file {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read map {}", path.display()))?;
            BlockMap::parse(&text).with_context(|| format!("parse map {}", path.display()))?
        }
        None => BlockMap::default(),
    };

    let edits = add
        .iter()
        .map(|&c| (c, Cell::Block))
        .chain(remove.iter().map(|&c| (c, Cell::Empty)));
    for ((x, z), cell) in edits {
        if !map.set(x, z, cell) {
            bail!("cell ({x}, {z}) is outside the {}x{} map", map.width(), map.depth());
        }
        tracing::info!(x, z, ?cell, "cell set");
    }

    print!("{}", map.to_ascii());
    println!(
        "walls: {}  blocks: {}",
        map.count(Cell::Wall),
        map.count(Cell::Block)
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("cglab-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", cglab_render::crate_info());
            println!("demos:");
            for kind in DemoKind::ALL {
                println!("  {:<10} {}", kind.name(), kind.title());
            }
        }
        Commands::Vector { v1, v2, op, scalar } => run_vector(v1, v2, op, scalar)?,
        Commands::Frame {
            demo,
            time,
            config,
            json,
        } => run_frame(demo, time, config, json)?,
        Commands::Map { file, add, remove } => run_map(file, &add, &remove)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_parse_with_spaces_and_signs() {
        assert_eq!(parse_pair("1.5, -2").unwrap(), Vec2::new(1.5, -2.0));
        assert!(parse_pair("1.5").is_err());
        assert!(parse_pair("a,2").is_err());
    }

    #[test]
    fn cells_must_be_unsigned() {
        assert_eq!(parse_cell("3,31").unwrap(), (3, 31));
        assert!(parse_cell("-1,0").is_err());
    }

    #[test]
    fn cli_parses_every_subcommand() {
        let cli = Cli::try_parse_from(["cglab-cli", "vector", "--v1", "-1,2", "--op", "mag"]).unwrap();
        assert!(matches!(cli.command, Commands::Vector { op: VectorOp::Magnitude, .. }));

        let cli = Cli::try_parse_from(["cglab-cli", "frame", "--demo", "showcase", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Frame { demo: DemoKind::Showcase, json: true, .. }));

        let cli = Cli::try_parse_from(["cglab-cli", "map", "--add", "1,2", "--add", "3,4"]).unwrap();
        let Commands::Map { add, remove, .. } = cli.command else {
            panic!("expected map");
        };
        assert_eq!(add, vec![(1, 2), (3, 4)]);
        assert!(remove.is_empty());
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(run_vector(Vec2::ONE, Vec2::ZERO, VectorOp::Div, 0.0).is_err());
    }

    #[test]
    fn map_edits_outside_are_rejected() {
        assert!(run_map(None, &[(99, 0)], &[]).is_err());
        assert!(run_map(None, &[(16, 16)], &[(0, 0)]).is_ok());
    }
}
