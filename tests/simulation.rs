// tests/simulation.rs
// End-to-end frame-loop behavior: a real map file, the full system order,
// and the registry read back the way a renderer would.

use std::io::Write;

use glam::Vec3;
use mallard_engine::components::{Bullet, Camera, Mesh, Transform};
use mallard_engine::{SimConfig, Simulation};

const DT: f32 = 1.0 / 60.0;

fn sim_with_map(map: &str) -> Simulation {
    let mut file = tempfile::NamedTempFile::new().expect("temp map file");
    file.write_all(map.as_bytes()).expect("write map");

    let mut sim = Simulation::new(SimConfig::default());
    sim.load_world(file.path(), 1.0).expect("load world");
    sim
}

fn settle_player(sim: &mut Simulation, start: Vec3) -> mallard_engine::ecs::Entity {
    let p = sim.spawn_player();
    sim.registry.get_component_mut::<Camera>(p).unwrap().pos = start;
    for _ in 0..120 {
        sim.step(DT);
    }
    p
}

#[test]
fn player_walks_into_a_wall_and_slides_along_it() {
    // a solid pillar wall across the front row
    let mut sim = sim_with_map("111\n000\n");
    let p = settle_player(&mut sim, Vec3::new(0.0, 2.0, 0.8));

    let settled = sim.registry.get_component::<Camera>(p).unwrap().pos;
    assert!((settled.y - 1.0).abs() < 1e-4, "resting on the ground plane");

    // walk straight at the wall (default yaw faces -Z)
    sim.input.forward = true;
    for _ in 0..120 {
        sim.step(DT);
    }
    let blocked = sim.registry.get_component::<Camera>(p).unwrap().pos;
    assert!(
        blocked.z > 0.3 - 1e-4,
        "wall stops forward progress, got z = {}",
        blocked.z
    );
    assert_eq!(blocked.x, 0.0, "pure forward input has no sideways drift");

    // diagonal input keeps sliding sideways while z stays pinned; stop
    // before the end of the wall, where forward motion would free up again
    sim.input.right = true;
    for _ in 0..30 {
        sim.step(DT);
    }
    let slid = sim.registry.get_component::<Camera>(p).unwrap().pos;
    assert!(slid.x > 0.5, "slid along the wall, got x = {}", slid.x);
    assert!((slid.z - blocked.z).abs() < 0.05, "still pressed against the wall");
}

#[test]
fn bullet_fired_into_open_air_expires_by_ttl() {
    let mut sim = sim_with_map("000\n000\n000\n");
    let _p = settle_player(&mut sim, Vec3::new(0.0, 2.0, 0.0));

    sim.input.fire = true;
    sim.step(DT);
    assert_eq!(sim.registry.count::<Bullet>(), 1);

    // default ttl is 4 s; it already aged one frame when spawned
    for _ in 0..241 {
        sim.step(DT);
    }
    assert_eq!(sim.registry.count::<Bullet>(), 0);
}

#[test]
fn renderer_reads_stay_consistent_across_frames() {
    // pillar at (0, 1, -0.5); the player stands far enough back that a
    // fresh shot spawns in open air in front of it
    let mut sim = sim_with_map("010\n000\n");
    let _p = settle_player(&mut sim, Vec3::new(0.0, 2.0, 1.0));

    let meshes_before = sim.registry.count::<Mesh>();
    sim.input.fire = true;
    sim.step(DT);
    assert_eq!(sim.registry.count::<Mesh>(), meshes_before + 1, "bullet visual appeared");

    // every mesh a renderer would draw currently has a transform; a
    // renderer must tolerate entities gaining/losing components
    let orphans = sim
        .registry
        .view::<Mesh>()
        .filter(|(e, _)| sim.registry.get_component::<Transform>(*e).is_none())
        .count();
    assert_eq!(orphans, 0);

    // after the bullet is gone the visuals return to the static set
    for _ in 0..300 {
        sim.step(DT);
    }
    assert_eq!(sim.registry.count::<Mesh>(), meshes_before);
}

#[test]
fn spawned_entities_have_distinct_increasing_ids() {
    let mut sim = sim_with_map("000\n");
    let a = sim.registry.create_entity();
    let b = sim.spawn_player();
    let c = sim.registry.create_entity();
    assert!(a < b && b < c);
}
