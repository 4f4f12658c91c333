//! Tactical Report
//!
//! Builds a scene from a scenario file, computes the tactical view of every
//! group, and prints what a renderer would receive.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tactical_overlay::core::error::Result;
use tactical_overlay::tactical::{
    catalog, compute_scene_with, config, set_catalog, set_config, Scenario, TacticalConfig,
    TacticalView, UnitCatalog,
};

/// Tactical Report - per-group metrics for a scenario
#[derive(Parser, Debug)]
#[command(name = "tactical_report")]
#[command(about = "Compute tactical views for every force group in a scenario")]
struct Args {
    /// Scenario TOML file (built-in demo scenario if omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Extra unit kinds to register on top of the built-ins
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Range profiles and layout config
    #[arg(long, default_value = "data/tactical.toml")]
    config: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.0)]
    canvas_width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800.0)]
    canvas_height: f32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let loaded_config = TacticalConfig::load(&args.config).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config {}: {}", args.config.display(), e);
        tracing::warn!("Using default config");
        TacticalConfig::default()
    });

    let unit_catalog = match &args.catalog {
        Some(path) => UnitCatalog::load_from_toml(path)?,
        None => UnitCatalog::with_defaults(),
    };

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default_scenario()?,
    };

    if set_config(loaded_config).is_err() {
        tracing::warn!("Global config already initialized");
    }
    if set_catalog(unit_catalog).is_err() {
        tracing::warn!("Global catalog already initialized");
    }

    // Everything below reads the installed globals
    let (grid, groups) = scenario.build(catalog(), config())?;
    tracing::info!(
        "Built {} groups on a {}x{} grid",
        groups.len(),
        grid.width(),
        grid.height()
    );

    let views = compute_scene_with(
        &groups,
        &grid,
        args.canvas_width,
        args.canvas_height,
        config(),
    )?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&views)?),
        "text" => print_text(&views),
        _ => {
            tracing::warn!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }

    Ok(())
}

fn print_text(views: &[TacticalView]) {
    for view in views {
        println!("{} ({})", view.name, view.force_type);
        println!("{}", "=".repeat(view.name.len() + view.force_type.to_string().len() + 3));
        println!(
            "Marker: ({:.1}, {:.1}) {}x{}",
            view.marker.origin.x, view.marker.origin.y, view.marker.width, view.marker.height
        );
        for summary in &view.summaries {
            println!("  {}", summary);
        }
        for stack in &view.stacks {
            println!(
                "  {} circles: view {:.1}px, fire {:.1}px",
                stack.name, stack.visibility_radius, stack.shooting_radius
            );
        }
        if view.overlay.shot_visible() {
            println!(
                "Max shot range: {} ({:.0}px)",
                view.overlay.max_shot_range, view.overlay.shot_radius
            );
        }
        if view.overlay.view_visible() {
            println!(
                "Max view range: {} ({:.0}px)",
                view.overlay.max_view_range, view.overlay.view_radius
            );
        }
        println!();
    }
}
