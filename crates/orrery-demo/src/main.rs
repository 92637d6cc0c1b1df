//! Demo binary that assembles a space scene against the recording host and
//! reports what was built.
//!
//! Run with `cargo run -p orrery-demo` for the grand fly-by, or
//! `cargo run -p orrery-demo -- --preset orbital_showcase` for the ringed
//! planet scene. `--params scene.ron` loads a parameter file instead.

use std::path::PathBuf;

use clap::Parser;
use orrery_config::{ConfigError, SceneParams};
use orrery_host::RecordingHost;
use orrery_log::init_logging;
use orrery_scene::SceneAssembler;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "orrery-demo")]
#[command(about = "Assemble a procedural space scene and report what was built")]
struct Args {
    /// Built-in preset: grand_flyby or orbital_showcase.
    #[arg(long, default_value = "grand_flyby")]
    preset: String,

    /// Load scene parameters from a RON file instead of a preset.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the selected parameters to a RON file and exit.
    #[arg(long)]
    save_params: Option<PathBuf>,

    /// Directory for JSON log files in debug builds.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn select_params(args: &Args) -> Result<SceneParams, ConfigError> {
    if let Some(path) = &args.params {
        return SceneParams::load(path);
    }
    Ok(match args.preset.as_str() {
        "orbital_showcase" => SceneParams::orbital_showcase(),
        "grand_flyby" => SceneParams::grand_flyby(),
        other => {
            warn!("unknown preset '{other}', using grand_flyby");
            SceneParams::grand_flyby()
        }
    })
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), cfg!(debug_assertions), None);

    let params = match select_params(&args) {
        Ok(params) => params,
        Err(err) => {
            warn!("failed to load scene parameters: {err}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.save_params {
        if let Err(err) = params.save(path) {
            warn!("failed to save scene parameters: {err}");
            std::process::exit(1);
        }
        info!("wrote scene parameters to {}", path.display());
        return;
    }

    let mut host = RecordingHost::new().with_interpolation_modes(&["CONSTANT", "LINEAR", "BEZIER"]);
    let report = match SceneAssembler::new(&params, &mut host).assemble() {
        Ok(report) => report,
        Err(err) => {
            warn!("scene assembly failed: {err}");
            std::process::exit(1);
        }
    };

    info!(
        scene = %params.name,
        graphs = report.graphs_built,
        placements = report.placements.len(),
        curves = report.curves.len(),
        "scene assembled"
    );
    info!(
        "host saw {} containers, {} nodes, {} links, {} objects, {} keyframes",
        host.containers_created(),
        host.nodes_instantiated(),
        host.links_connected(),
        host.objects_created(),
        host.keyframes_inserted()
    );
    for curve in &report.curves {
        info!(
            "curve '{}' over frames {:?} uses {:?}",
            curve.property_path(),
            curve.frame_range(),
            curve.interpolation
        );
    }
    for err in &report.body_errors {
        warn!("body skipped: {err}");
    }
}
