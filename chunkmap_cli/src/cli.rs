// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Write;
use std::path::{Path, PathBuf};

use chunkmap::{DisplayList, Seed, Viewer, ViewerConfig};
use chunkmap_classify::TileClassifier;
use chunkmap_imaging::{DrawOp, ImagingOp};
use clap::{Args, Parser, Subcommand};
use kurbo::{Point, Size};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// Headless slime chunk map tools.
#[derive(Debug, Parser)]
#[command(name = "chunkmap", about = "Slime chunk map queries and frame summaries", version)]
pub struct Cli {
    /// JSON viewer configuration; unset fields keep their defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// World seed as a decimal integer. A random seed is used when omitted.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify one chunk.
    Classify(ClassifyArgs),

    /// Find the slime chunk nearest to a block position.
    Search(SearchArgs),

    /// Render one frame and summarize the recorded draw ops.
    Render(RenderArgs),
}

/// Arguments of `classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Chunk x.
    #[arg(long, allow_hyphen_values = true)]
    pub x: i32,

    /// Chunk z.
    #[arg(long, allow_hyphen_values = true)]
    pub z: i32,
}

/// Arguments of `search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Block x.
    #[arg(long, allow_hyphen_values = true)]
    pub x: i64,

    /// Block z.
    #[arg(long, allow_hyphen_values = true)]
    pub z: i64,

    /// Search radius in chunks; defaults to the configured radius.
    #[arg(long)]
    pub radius: Option<i32>,
}

/// Arguments of `render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// World x at the centre of the canvas.
    #[arg(long, allow_hyphen_values = true)]
    pub center_x: Option<f64>,

    /// World z at the centre of the canvas.
    #[arg(long, allow_hyphen_values = true)]
    pub center_z: Option<f64>,

    /// Pixels per world unit, clamped to the configured range.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Search from this block position first and highlight the result.
    #[arg(long, value_name = "X,Z", value_parser = parse_pair, allow_hyphen_values = true)]
    pub search: Option<(f64, f64)>,

    /// World point to add in point mode; may be repeated.
    #[arg(long = "point", value_name = "X,Z", value_parser = parse_pair, allow_hyphen_values = true)]
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    seed: i64,
    chunk: [i32; 2],
    slime: bool,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    seed: i64,
    from: [i64; 2],
    radius: i32,
    chunk: [i32; 2],
    center: [f64; 2],
}

#[derive(Debug, Default, Serialize)]
struct OpCounts {
    lines: usize,
    fill_rects: usize,
    stroke_rects: usize,
    circles: usize,
    texts: usize,
    state_changes: usize,
}

#[derive(Debug, Serialize)]
struct RenderReport {
    seed: i64,
    scale: f64,
    center: [f64; 2],
    selection: Option<String>,
    slime_chunks: usize,
    ops: OpCounts,
    texts: Vec<String>,
}

/// Parses the command line and runs it, writing the report to stdout.
pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Runs a parsed command line, writing one JSON document to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let canvas = match &cli.command {
        Commands::Render(args) => Size::new(args.width, args.height),
        _ => Size::ZERO,
    };
    let mut viewer = Viewer::new(config, canvas, Seed::default())?;
    let seed = match &cli.seed {
        Some(text) => viewer.set_seed_text(text)?,
        None => viewer.randomize_seed()?,
    };
    info!(%seed, "seed selected");

    match cli.command {
        Commands::Classify(args) => {
            let report = ClassifyReport {
                seed: seed.get(),
                chunk: [args.x, args.z],
                slime: viewer.classifier().classify(args.x, args.z),
            };
            write_json(out, &report)
        }
        Commands::Search(args) => {
            let radius = args.radius.unwrap_or(viewer.config().search_radius);
            let found = viewer.search_nearest(args.x, args.z, radius)?;
            let center = found.center(viewer.config().tile_size);
            let report = SearchReport {
                seed: seed.get(),
                from: [args.x, args.z],
                radius,
                chunk: [found.x, found.z],
                center: [center.x, center.y],
            };
            write_json(out, &report)
        }
        Commands::Render(args) => render(&mut viewer, &args, out),
    }
}

fn render(viewer: &mut Viewer, args: &RenderArgs, out: &mut dyn Write) -> Result<()> {
    if let Some((x, z)) = args.search {
        let radius = viewer.config().search_radius;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "saturating; out-of-range blocks are rejected by the search"
        )]
        let (x, z) = (x.floor() as i64, z.floor() as i64);
        viewer.search_nearest(x, z, radius)?;
    }
    if args.center_x.is_some() || args.center_z.is_some() {
        let current = viewer.viewport().center();
        viewer.center_on(
            args.center_x.unwrap_or(current.x),
            args.center_z.unwrap_or(current.y),
        );
    }
    if let Some(scale) = args.scale {
        let center = viewer.viewport().center();
        viewer.set_viewport(center.x, center.y, scale);
    }
    for &(x, z) in &args.points {
        viewer.add_point(Point::new(x, z));
    }

    let mut frame = DisplayList::new();
    viewer.render(&mut frame);
    debug!(ops = frame.len(), "frame recorded");

    let window = viewer.visible_window();
    let slime_chunks = viewer
        .chunks_in(&window)
        .iter()
        .filter(|c| c.is_match)
        .count();
    let center = viewer.viewport().center();
    let report = RenderReport {
        seed: viewer.seed().get(),
        scale: viewer.viewport().scale(),
        center: [center.x, center.y],
        selection: viewer.selection().map(|t| format!("{t:?}")),
        slime_chunks,
        ops: count_ops(&frame),
        texts: frame.texts().map(str::to_owned).collect(),
    };
    write_json(out, &report)
}

fn count_ops(frame: &DisplayList) -> OpCounts {
    let mut counts = OpCounts::default();
    for op in frame.ops() {
        match op {
            ImagingOp::State(_) => counts.state_changes += 1,
            ImagingOp::Draw(DrawOp::Line(_)) => counts.lines += 1,
            ImagingOp::Draw(DrawOp::FillRect(_)) => counts.fill_rects += 1,
            ImagingOp::Draw(DrawOp::StrokeRect(_)) => counts.stroke_rects += 1,
            ImagingOp::Draw(DrawOp::FillCircle(_)) => counts.circles += 1,
            ImagingOp::Draw(DrawOp::Text { .. }) => counts.texts += 1,
        }
    }
    counts
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "loading config");
    Ok(ViewerConfig::from_json(&text)?)
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn parse_pair(text: &str) -> core::result::Result<(f64, f64), String> {
    let (x, z) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Z but got {text:?}"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("not a finite number: {s:?}"))
    };
    Ok((parse(x)?, parse(z)?))
}
