//! Blockfall entry point
//!
//! Builds the window, loads assets, and hands control to the event loop.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ggez::winit::event_loop::EventLoop;
use ggez::{Context, ContextBuilder, GameResult, conf, event};

use blockfall::app::MainState;
use blockfall::assets::Assets;
use blockfall::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use blockfall::sim::GameSession;
use blockfall::{Settings, StartupError};

pub fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match boot() {
        Ok((ctx, event_loop, state)) => event::run(ctx, event_loop, state),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

/// Assemble the context, assets, and initial state
fn boot() -> Result<(Context, EventLoop<()>, MainState), StartupError> {
    let settings = Settings::load();
    let seed = session_seed();
    log::info!("Blockfall starting with seed {seed}");

    let (mut ctx, event_loop) = ContextBuilder::new("blockfall", "blockfall")
        .window_setup(
            conf::WindowSetup::default()
                .title(WINDOW_TITLE)
                .vsync(settings.vsync),
        )
        .window_mode(conf::WindowMode::default().dimensions(SCREEN_WIDTH, SCREEN_HEIGHT))
        .add_resource_path(resource_dir())
        .build()?;

    let assets = Assets::load(&mut ctx)?;
    let state = MainState::new(GameSession::new(seed), assets, settings);

    Ok((ctx, event_loop, state))
}

/// Wall clock milliseconds so distinct runs get distinct block sequences
fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Resources live next to the manifest during development and next to the
/// executable in a packaged build
fn resource_dir() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        PathBuf::from("./resources")
    }
}
