//! Command-line entry point for the protein-stage viewer pipeline.

use std::path::Path;
use std::rc::Rc;

use protein_stage::config::ViewerConfiguration;
use protein_stage::host::Standalone;
use protein_stage::loader::FileAssets;
use protein_stage::options::Options;
use protein_stage::orchestrator::{
    CompositionOrchestrator, RunOutcome, ViewerContext,
};
use protein_stage::render_loop::{FrameInfo, FrameSink, RenderLoop};
use protein_stage::scene::Scene;
use protein_stage::surface::PreviewSurface;
use protein_stage::ui::LogUi;

/// Frame sink that reports what a renderer would draw.
struct LogSink;

impl FrameSink for LogSink {
    fn render(&mut self, scene: &Scene, frame: &FrameInfo) {
        let root = scene.root();
        match (root.active_model(), root.active_world_matrix()) {
            (Some(active), Some(world)) => log::info!(
                "frame {}: {} ({:?}), {} vertices, world {:?}",
                frame.index,
                active.identity,
                active.placement,
                root.node().total_vertices(),
                world.to_cols_array()
            ),
            _ => log::info!("frame {}: empty scene", frame.index),
        }
    }
}

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(query) = args.next() else {
        log::error!("Usage: protein-stage \"?molecule=<ID>[&noball][&noribbon]\" [options.toml]");
        std::process::exit(1);
    };
    let options = load_options(args.next().as_deref());
    let config = ViewerConfiguration::from_query(&query);

    let assets = FileAssets::new(options.assets.clone());
    let surface = PreviewSurface::new(options.preview.clone());
    let render_options = options.render.clone();
    let context = ViewerContext::new(options, Rc::new(LogUi));
    let orchestrator =
        CompositionOrchestrator::new(context, assets, surface, Standalone);

    match pollster::block_on(orchestrator.run(&config)) {
        Ok(RunOutcome::Skipped) => {}
        Ok(RunOutcome::Attached {
            identity,
            placement,
            ..
        }) => {
            log::info!("{identity} placed: {placement:?}");
            let mut render_loop =
                RenderLoop::new(orchestrator.scene(), &render_options);
            render_loop.render_frame(&mut LogSink);
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
