// src/main.rs
// Headless demo driver. Owns everything the core leaves to the caller:
// logging setup, config and world loading, frame timing, and the scripted
// input that stands in for a window's event loop.

use anyhow::Context;
use log::{info, LevelFilter};

use mallard_engine::components::{Bullet, Camera, Light, Mesh, Primitive, Transform};
use mallard_engine::time::TimeManager;
use mallard_engine::{SimConfig, Simulation};

const FIXED_DT: f32 = 1.0 / 60.0;

/// Built-in arena used when no map path is given on the command line.
const DEFAULT_MAP: &str = "\
0000000000
0100000010
0000220000
0000220000
0100000010
0000000000
";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting mallard (headless)...");

    let mut args = std::env::args().skip(1);
    let map_path = args.next();
    let config = match args.next() {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(config);
    match &map_path {
        Some(path) => {
            sim.load_world(path, 1.0)
                .with_context(|| format!("loading world {path}"))?;
        }
        None => {
            mallard_engine::world::load_from_str(&mut sim.registry, DEFAULT_MAP, 1.0)?;
        }
    }
    // warm sun above the arena; a renderer would pick this up via views
    let light = sim.registry.create_entity();
    sim.registry.add_component(
        light,
        Transform::from_position(glam::Vec3::new(8.0, 8.0, 8.0)),
    );
    sim.registry.add_component(
        light,
        Light {
            color: glam::Vec3::new(1.0, 0.95, 0.8),
            intensity: 2.0,
        },
    );
    sim.registry.add_component(
        light,
        Mesh::new(Primitive::Cube { size: 0.6 }, glam::Vec3::ONE),
    );

    let player = sim.spawn_player();
    sim.registry
        .get_component_mut::<Camera>(player)
        .expect("player has a camera")
        .pos = glam::Vec3::new(0.0, 2.0, 0.0);

    // Scripted session: drop onto the ground, run forward for a while,
    // jump once, and fire a few shots at whatever is ahead.
    let mut time = TimeManager::new();
    for frame in 0..600u32 {
        let _ = time.update();

        sim.input.forward = (120..180).contains(&frame);
        sim.input.jump = frame == 240;
        sim.input.fire = frame % 90 == 0;

        // drive the fixed step directly; a windowed driver would use
        // time.fixed_timestep(FIXED_DT) against real elapsed time
        sim.step(FIXED_DT);

        if frame % 120 == 0 {
            let cam = sim
                .registry
                .get_component::<Camera>(player)
                .expect("player has a camera");
            info!(
                "frame {frame}: pos=({:.2}, {:.2}, {:.2}) bullets={}",
                cam.pos.x,
                cam.pos.y,
                cam.pos.z,
                sim.registry.count::<Bullet>()
            );
        }
    }

    info!("done after {} frames", time.frame());
    Ok(())
}
