use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use tampopo_client::domains::search::{
    SearchCatalog, SearchOutcome, load_films_from_dir,
};
use tampopo_client::domains::ui::interaction::{
    self, InteractionController, InteractionMessage,
};
use tampopo_client::domains::ui::{MomentumStep, TargetRole};
use tampopo_client::infra::{
    ManualFrameScheduler, ScrollViewport, SimulatedViewport,
};
use tampopo_config::{ConfigLoader, InteractionConfig};

/// Upper bound on simulated frames, in case a tuning never settles.
const MAX_SIMULATED_FRAMES: usize = 10_000;

#[derive(Debug, Parser)]
#[command(name = "tampopo", version, about = "Tampopo interaction engine demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the bundled recipes and ingredients plus an optional film
    /// directory
    Search {
        query: String,
        /// Directory holding `index.json` and `<id>/film.json`
        #[arg(long)]
        films_dir: Option<PathBuf>,
    },
    /// Simulate the glide after a fling and print every frame
    Fling {
        /// Release velocity in px/ms; positive flings towards the top
        #[arg(long, allow_hyphen_values = true)]
        velocity: f32,
        #[arg(long, default_value_t = 6000.0)]
        content_height: f32,
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f32,
        /// Starting scroll offset
        #[arg(long, default_value_t = 3000.0)]
        scroll_top: f32,
        /// Display frame interval
        #[arg(long, default_value_t = 16.67)]
        frame_ms: f32,
    },
}

/// Warnings everywhere, info for this crate. Momentum and gesture debug
/// lines would interleave with the per-frame `fling` output.
fn default_logger() -> Builder {
    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("tampopo_client", LevelFilter::Info);
    builder
}

fn init_logger() {
    default_logger().init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let config = ConfigLoader::from_env()
        .load()
        .context("loading interaction config")?
        .config;

    match cli.command {
        Command::Search { query, films_dir } => {
            run_search(&config, &query, films_dir)
        }
        Command::Fling {
            velocity,
            content_height,
            viewport_height,
            scroll_top,
            frame_ms,
        } => {
            ensure!(
                frame_ms.is_finite() && frame_ms > 0.0,
                "--frame-ms must be a positive number, got {frame_ms}"
            );
            let viewport =
                SimulatedViewport::new(content_height, viewport_height)
                    .with_scroll_top(scroll_top);
            run_fling(&config, velocity, viewport, frame_ms);
            Ok(())
        }
    }
}

fn run_search(
    config: &InteractionConfig,
    query: &str,
    films_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut catalog =
        SearchCatalog::builtin().context("building the bundled catalog")?;

    if let Some(dir) = films_dir {
        // An unreadable film directory leaves the page without films.
        match load_films_from_dir(&dir) {
            Ok(films) => catalog.extend(films),
            Err(err) => {
                log::warn!("No films loaded from {}: {}", dir.display(), err)
            }
        }
    }

    let results = catalog.search(query, config.search.result_cap);
    match results.outcome() {
        SearchOutcome::Inactive => println!("Type something to search."),
        SearchOutcome::NoResults { .. } => {
            println!("No results for \u{201c}{}\u{201d}.", query.trim())
        }
        SearchOutcome::Sections(sections) => {
            for section in sections {
                println!("{}", section.category.section_title());
                for item in section.iter() {
                    match item.subtitle() {
                        Some(subtitle) => {
                            println!("  {}  ({})", item.title, subtitle)
                        }
                        None => println!("  {}", item.title),
                    }
                }
            }
        }
    }
    Ok(())
}

fn run_fling(
    config: &InteractionConfig,
    velocity: f32,
    mut viewport: SimulatedViewport,
    frame_ms: f32,
) {
    let mut scheduler = ManualFrameScheduler::new();
    let mut controller = InteractionController::new_with_config(config);
    let interval = Duration::from_secs_f32(frame_ms / 1000.0);
    let mut now = Instant::now();

    println!(
        "start offset {:.1} of {:.1}",
        viewport.scroll_top(),
        viewport.max_scroll()
    );
    if !controller.fling(velocity, now, &mut scheduler) {
        println!("velocity {velocity} px/ms is below the glide threshold");
        return;
    }

    let mut frame = 0;
    while scheduler.has_pending() && frame < MAX_SIMULATED_FRAMES {
        frame += 1;
        now += interval;
        for handle in scheduler.take_due() {
            let outcome = interaction::update(
                &mut controller,
                InteractionMessage::<TargetRole>::Frame(handle, now),
                &mut viewport,
                &mut scheduler,
            );
            if let Some(step) = outcome.momentum {
                print_step(frame, step);
            }
            if let Some(effects) = outcome.effects {
                println!(
                    "frame {frame:>4}  stroke {:.2}  hero opacity {:.2}",
                    effects.stroke_alpha(),
                    effects.hero_opacity()
                );
            }
        }
    }

    if scheduler.has_pending() {
        log::warn!("Stopped after {MAX_SIMULATED_FRAMES} frames");
        controller.shutdown(&mut scheduler);
    }
    println!("rest offset {:.1}", viewport.scroll_top());
}

fn print_step(frame: usize, step: MomentumStep) {
    match step {
        MomentumStep::Continued { offset, velocity } => println!(
            "frame {frame:>4}  offset {offset:>8.1}  v {velocity:+.3}"
        ),
        MomentumStep::Stopped { offset, reason } => println!(
            "frame {frame:>4}  offset {offset:>8.1}  stopped ({reason:?})"
        ),
        MomentumStep::Stale => {}
    }
}
