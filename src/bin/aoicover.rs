//! Command-line front end: loads scenes and AOIs from CSV, runs the greedy selector
//! for each AOI, and writes one line of JSON per AOI to stdout.

use anyhow::Context;
use aoicover::coverage::{ContinuousCoverage, DiscreteCoverage};
use aoicover::grid::{DiscretizeMode, Discretizer};
use aoicover::model::{Aoi, Scene, SelectionResult};
use aoicover::result::write_jsonl;
use aoicover::selector::{select, Candidate};
use aoicover::{io, Mode};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;

/// Select a minimal-cost set of scenes covering each area of interest.
#[derive(Debug, Parser)]
#[command(name = "aoicover", version, about)]
struct Cli {
    /// CSV file of priced scenes: `id, price, polygon`.
    #[arg(long)]
    scenes: PathBuf,

    /// CSV file of areas of interest: `id, polygon, delta`.
    #[arg(long)]
    aois: PathBuf,

    /// Default grid cell edge length for the discrete regime, used when an AOI row
    /// leaves its `delta` column empty.
    #[arg(long, default_value_t = 1.0)]
    delta: f64,

    /// Coverage regime to run.
    #[arg(long, value_enum, default_value_t = Mode::Discrete)]
    mode: Mode,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let scenes = io::csv::read_scenes(&cli.scenes)
        .with_context(|| format!("reading scenes from {}", cli.scenes.display()))?;
    let aois = io::csv::read_aois(&cli.aois)
        .with_context(|| format!("reading AOIs from {}", cli.aois.display()))?;

    log::info!("loaded {} scenes and {} AOIs", scenes.len(), aois.len());

    let results: Vec<SelectionResult> = aois
        .par_iter()
        .map(|aoi| run_query(aoi, &scenes, cli.mode, cli.delta))
        .collect::<anyhow::Result<Vec<_>>>()?;

    write_jsonl(std::io::stdout().lock(), &results)?;
    Ok(())
}

fn run_query(aoi: &Aoi, scenes: &[Scene], mode: Mode, default_delta: f64) -> anyhow::Result<SelectionResult> {
    match mode {
        Mode::Discrete => run_discrete_query(aoi, scenes, default_delta),
        Mode::Continuous => run_continuous_query(aoi, scenes),
    }
}

fn run_discrete_query(aoi: &Aoi, scenes: &[Scene], default_delta: f64) -> anyhow::Result<SelectionResult> {
    let delta = aoi.delta.unwrap_or(default_delta);
    let discretizer = Discretizer::new(delta)?;
    let aoi_cells = discretizer.discretize(&aoi.polygon, DiscretizeMode::Inclusive)?;
    let aoi_measure = aoi_cells.len() as f64;

    let mut possible = Vec::new();
    let mut candidates = Vec::new();
    for scene in scenes {
        let state = DiscreteCoverage::for_scene(&scene.polygon, &aoi.polygon, &aoi_cells, &discretizer)?;
        if !state.cells().is_empty() {
            possible.push(scene.id.clone());
            candidates.push(Candidate {
                id: scene.id.clone(),
                price: scene.price,
                state,
            });
        }
    }

    let outcome = select(candidates, aoi_measure)?;
    Ok(SelectionResult::new(
        aoi.id.clone(),
        possible,
        outcome.chosen,
        outcome.total_price,
        aoi_measure,
        outcome.covered,
    ))
}

fn run_continuous_query(aoi: &Aoi, scenes: &[Scene]) -> anyhow::Result<SelectionResult> {
    let aoi_measure = aoi.polygon.area();

    let mut possible = Vec::new();
    let mut candidates = Vec::new();
    for scene in scenes {
        let state = ContinuousCoverage::for_scene(&scene.polygon, &aoi.polygon)?;
        if !state.polys().is_empty() {
            possible.push(scene.id.clone());
            candidates.push(Candidate {
                id: scene.id.clone(),
                price: scene.price,
                state,
            });
        }
    }

    let outcome = select(candidates, aoi_measure)?;
    Ok(SelectionResult::new(
        aoi.id.clone(),
        possible,
        outcome.chosen,
        outcome.total_price,
        aoi_measure,
        outcome.covered,
    ))
}
