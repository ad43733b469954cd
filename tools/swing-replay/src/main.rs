//! swing-replay: drive the traversal engine through a scripted run and print snapshots.
//!
//! Usage:
//!   swing-replay run [--config tuning.toml] [--seconds 6] [--every 5]
//!   swing-replay defaults > tuning.toml

use std::path::PathBuf;
use std::process;

use glam::Vec3;

use tether_core::commands::TraversalCommand;
use tether_core::config::TraversalConfig;
use tether_core::enums::OrbitDirection;
use tether_core::probe::SurfaceKind;
use tether_core::types::TetherSide;
use tether_scene::Scene;
use tether_sim::{KinematicBody, TraversalEngine};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn print_usage() {
    eprintln!(
        "swing-replay: scripted traversal run over a demo gap scene\n\
         \n\
         Commands:\n\
         \n\
         run       Run the scripted timeline, one JSON snapshot per line on stdout\n\
         \n\
           --config <path>    TOML tuning file (optional, default: built-in tuning)\n\
           --seconds <N>      Simulated duration (default: 6)\n\
           --every <K>        Print every Kth step plus every step with events (default: 5)\n\
         \n\
         defaults  Print the built-in tuning as TOML\n\
         \n\
         Examples:\n\
         \n\
           swing-replay defaults > tuning.toml\n\
           RUST_LOG=debug swing-replay run --config tuning.toml --seconds 10\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

// --- Defaults command ---

fn cmd_defaults() {
    match TraversalConfig::default().to_toml_string() {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = match parse_flag(args, "--config").map(PathBuf::from) {
        Some(path) => match TraversalConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => TraversalConfig::default(),
    };
    let seconds: f32 = parse_number(args, "--seconds", 6.0);
    let every = parse_number::<u64>(args, "--every", 5).max(1);

    let dt = config.clock.dt();
    let steps = (seconds.max(0.0) / dt).round() as u64;
    let scene = gap_scene();
    let mut body = KinematicBody::new(Vec3::ZERO);
    let mut engine = TraversalEngine::new(config);

    tracing::info!(steps, dt, colliders = scene.colliders().len(), "replay starting");

    for step in 0..steps {
        script(step, &mut engine, &mut body);
        engine.frame(dt);
        let snapshot = engine.physics_step(&mut body, &scene);
        body.integrate(dt);

        if step % every != 0 && snapshot.events.is_empty() {
            continue;
        }
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("Error: snapshot serialization failed: {err}");
                process::exit(1);
            }
        }
    }

    tracing::info!(
        fuel = engine.fuel(),
        energy = engine.energy(),
        position = ?body.position,
        "replay finished"
    );
}

/// Start platform, two grappleable pillars across a gap, an occluding wall behind them.
fn gap_scene() -> Scene {
    let mut scene = Scene::new();
    scene
        .add_floor(0.0, SurfaceKind::Occluder)
        .add_box(
            Vec3::new(-9.0, 0.0, 25.0),
            Vec3::new(-5.0, 35.0, 28.0),
            SurfaceKind::Grappleable,
        )
        .add_box(
            Vec3::new(5.0, 0.0, 25.0),
            Vec3::new(9.0, 35.0, 28.0),
            SurfaceKind::Grappleable,
        )
        .add_box(
            Vec3::new(-40.0, 0.0, 55.0),
            Vec3::new(40.0, 50.0, 56.0),
            SurfaceKind::Occluder,
        )
        .add_sphere(Vec3::new(0.0, 30.0, 70.0), 4.0, SurfaceKind::Grappleable);
    scene
}

/// Fixed command timeline, keyed by physics step.
fn script(step: u64, engine: &mut TraversalEngine, body: &mut KinematicBody) {
    match step {
        0 => {
            body.aim_forward = Vec3::new(0.0, 0.35, 1.0);
            engine.queue_commands([
                TraversalCommand::SetAimSeparation { value: 0.6 },
                TraversalCommand::FireTether {
                    side: TetherSide::Left,
                },
                TraversalCommand::FireTether {
                    side: TetherSide::Right,
                },
            ]);
        }
        40 => engine.queue_commands([
            TraversalCommand::BoostPressed,
            TraversalCommand::BoostReleased,
            TraversalCommand::BoostPressed,
        ]),
        55 => engine.queue_command(TraversalCommand::BoostReleased),
        80 => engine.queue_command(TraversalCommand::SetOrbit {
            direction: Some(OrbitDirection::Left),
        }),
        110 => engine.queue_command(TraversalCommand::SetOrbit { direction: None }),
        140 => engine.queue_commands([
            TraversalCommand::ReleaseTether {
                side: TetherSide::Left,
            },
            TraversalCommand::ReleaseTether {
                side: TetherSide::Right,
            },
        ]),
        150 => {
            body.movement_intent = Vec3::Z;
            engine.queue_command(TraversalCommand::Dash);
        }
        190 => engine.queue_command(TraversalCommand::FireTether {
            side: TetherSide::Left,
        }),
        230 => engine.queue_commands([
            TraversalCommand::BoostPressed,
            TraversalCommand::BoostReleased,
            TraversalCommand::BoostPressed,
        ]),
        240 => engine.queue_command(TraversalCommand::BoostReleased),
        _ => {}
    }
}
