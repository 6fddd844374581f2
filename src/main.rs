//! Tap counter main entry point.
//!
//! A small tap counter built with:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for resources, systems and event observers
//!
//! Every tap bumps the counter, floats a "+1" label up, bursts 20 particles,
//! flashes the counter panel and records a timestamped entry in the history
//! list. The animations run on independent fixed-interval ticks.
//!
//! # Project Structure
//!
//! - [`entities`] – labels, particles and history entries, and their tick rules
//! - [`events`] – tap, reset and debug toggle events with their observers
//! - [`game`] – resource setup, schedule wiring and teardown
//! - [`resources`] – the counter store, tick schedulers, config, input, layout
//! - [`systems`] – input, tick, layout and render systems
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or defaults) and apply CLI overrides
//! 2. Open the raylib window and set up the ECS world
//! 3. Each frame: update time, read input, dispatch events, run the ticks,
//!    render
//! 4. Tear the screen down when the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod entities;
mod events;
mod game;
mod palette;
mod resources;
mod systems;

use crate::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::resources::screensize::ScreenSize;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::input::{dispatch_input, update_input_state};
use crate::systems::render::{TITLE_TEXT, render_system};
use crate::systems::ticks::flash_tick_system;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Tap counter with floating labels, particle bursts and a tap history.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for the particle generator. Overrides the config file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Early-exit: write the config file and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(TITLE_TEXT)
        .build();
    // Escape resets the screen instead of closing the window
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup(&mut world, &config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes); // Applies fps/vsync on the first frame
    update.add_systems(update_input_state.before(dispatch_input));
    game::add_screen_systems(&mut update);
    update.add_systems(render_system.after(flash_tick_system));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        // Window may have been resized since the last frame
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen_size = world.resource_mut::<ScreenSize>();
            if screen_size.w != new_w || screen_size.h != new_h {
                screen_size.w = new_w;
                screen_size.h = new_h;
            }
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed resources for next frame
    }
    game::teardown(&mut world);
}
