// src/world.rs
// Text-grid world population. A map is rows of tile characters:
//   '1' = pillar (double-height cube with an AABB collider)
//   '2' = water tile (visual only)
// anything else is empty ground. The whole grid is centered on the origin
// and sits on one ground plane whose collider is deliberately thin, so it
// supports the player without ever blocking horizontal movement.

use std::path::Path;

use glam::Vec3;
use log::info;

use crate::components::{Collider, Mesh, Primitive, Transform};
use crate::ecs::Registry;
use crate::error::{Error, Result};

const GROUND_COLOR: Vec3 = Vec3::new(0.15, 0.8, 0.25);
const PILLAR_COLOR: Vec3 = Vec3::new(0.6, 0.4, 0.2);
const WATER_COLOR: Vec3 = Vec3::new(0.2, 0.5, 0.95);

/// Half-height of the ground plane's collider. Kept under the horizontal
/// blocking threshold of the movement system.
const GROUND_HALF_HEIGHT: f32 = 0.1;

/// Summary of what a map load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub rows: usize,
    pub cols: usize,
    pub pillars: usize,
    pub water_tiles: usize,
}

/// Reads a map file and populates the registry. See [`load_from_str`].
pub fn load_from_file(
    registry: &mut Registry,
    path: impl AsRef<Path>,
    tile_size: f32,
) -> Result<WorldStats> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).context(format!("reading world map {}", path.display())))?;
    let stats = load_from_str(registry, &text, tile_size)?;
    info!(
        "loaded world {}: {}x{} tiles, {} pillars, {} water",
        path.display(),
        stats.cols,
        stats.rows,
        stats.pillars,
        stats.water_tiles
    );
    Ok(stats)
}

/// Populates the registry from map text. Creates the ground plane plus one
/// entity per non-empty tile; all static geometry is in place before the
/// first simulation step.
pub fn load_from_str(registry: &mut Registry, text: &str, tile_size: f32) -> Result<WorldStats> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Err(Error::WorldMap("map is empty".into()));
    }

    let rows = lines.len();
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if cols == 0 {
        return Err(Error::WorldMap("map has no columns".into()));
    }

    let width = cols as f32 * tile_size;
    let depth = rows as f32 * tile_size;

    // ground plane spanning the grid
    let ground = registry.create_entity();
    registry.add_component(ground, Transform::default());
    registry.add_component(
        ground,
        Mesh::new(Primitive::Plane { width, depth }, GROUND_COLOR),
    );
    registry.add_component(
        ground,
        Collider::aabb(Vec3::new(width * 0.5, GROUND_HALF_HEIGHT, depth * 0.5)),
    );

    // center the grid around the origin
    let offset_x = (cols as f32 - 1.0) * tile_size * 0.5;
    let offset_z = (rows as f32 - 1.0) * tile_size * 0.5;

    let mut pillars = 0;
    let mut water_tiles = 0;
    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let x = c as f32 * tile_size - offset_x;
            let z = r as f32 * tile_size - offset_z;
            match ch {
                '1' => {
                    let e = registry.create_entity();
                    registry.add_component(
                        e,
                        Transform {
                            position: Vec3::new(x, tile_size, z),
                            rotation: Vec3::ZERO,
                            scale: Vec3::new(tile_size, tile_size * 2.0, tile_size),
                        },
                    );
                    registry.add_component(e, Mesh::new(Primitive::Cube { size: 1.0 }, PILLAR_COLOR));
                    registry.add_component(
                        e,
                        Collider::aabb(Vec3::new(
                            tile_size * 0.5,
                            tile_size,
                            tile_size * 0.5,
                        )),
                    );
                    pillars += 1;
                }
                '2' => {
                    // visual only: no collider, so bullets and the player
                    // pass straight over it
                    let e = registry.create_entity();
                    registry.add_component(
                        e,
                        Transform::from_position(Vec3::new(x, 0.01, z)),
                    );
                    registry.add_component(
                        e,
                        Mesh::new(
                            Primitive::Plane {
                                width: tile_size,
                                depth: tile_size,
                            },
                            WATER_COLOR,
                        ),
                    );
                    water_tiles += 1;
                }
                _ => {}
            }
        }
    }

    Ok(WorldStats {
        rows,
        cols,
        pillars,
        water_tiles,
    })
}
