//! Scene builder
//!
//! Constructs the full haunted house scene once at startup: the house
//! group, the procedurally scattered graveyard, the ground plane, and the
//! lights. Construction is unconditional; the random source is injected
//! so seeded runs produce identical layouts.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use rand::Rng;
use scene_engine::prelude::*;
use scene_engine::scene::SceneResult as Result;

use crate::config::SceneConfig;

/// Keys to the scene parts that get touched after construction
#[derive(Debug, Clone, Copy)]
pub struct SceneHandles {
    /// The house group
    pub house: NodeKey,

    /// The graveyard group
    pub graveyard: NodeKey,

    /// The three animated ghost lights, in path order
    pub ghosts: [NodeKey; 3],
}

/// Build the complete scene under the graph root
pub fn build_scene<R: Rng>(
    graph: &mut SceneGraph,
    config: &SceneConfig,
    rng: &mut R,
) -> Result<SceneHandles> {
    let root = graph.root();

    let house = build_house(graph, root)?;
    let graveyard = build_graveyard(graph, root, config, rng)?;
    build_ground(graph, root, config)?;
    let ghosts = build_lights(graph, root)?;

    Ok(SceneHandles {
        house,
        graveyard,
        ghosts,
    })
}

/// Scene fog; its color doubles as the host clear color
pub fn fog() -> Fog {
    Fog {
        color: Color::from_hex(0x262837),
        near: 1.0,
        far: 10.0,
    }
}

fn build_house(graph: &mut SceneGraph, root: NodeKey) -> Result<NodeKey> {
    let house = graph.add_group(root, "house")?;

    let walls = Node::mesh(
        "walls",
        Geometry::cuboid(4.0, 2.5, 4.0),
        Material::new().with_textures(TextureSet::from_dir("static/textures/bricks")),
    )
    .at(0.0, 1.24, 0.0)
    .casting_shadow();
    graph.attach(house, walls)?;

    // Four radial segments make the cone a pyramid; the quarter turn
    // lines its edges up with the wall corners.
    let roof = Node::mesh(
        "roof",
        Geometry::cone(3.5, 1.0, 4),
        Material::new().with_color(Color::from_hex(0xb35f45)),
    )
    .at(0.0, 2.5 + 0.5, 0.0)
    .rotated(0.0, FRAC_PI_4, 0.0);
    graph.attach(house, roof)?;

    // Slightly in front of the wall face to avoid z-fighting.
    let door = Node::mesh(
        "door",
        Geometry::plane(2.2, 2.2),
        Material::new()
            .with_textures(
                TextureSet::from_dir("static/textures/door")
                    .with_alpha("static/textures/door/alpha.jpg")
                    .with_displacement("static/textures/door/height.jpg")
                    .with_metalness("static/textures/door/metalness.jpg"),
            )
            .with_displacement_scale(0.1)
            .transparent(),
    )
    .at(0.0, 1.0, 2.001);
    graph.attach(house, door)?;

    let bush_material =
        Material::new().with_textures(TextureSet::from_dir("static/textures/grass"));
    let bushes = [
        (0.5, 0.8, 0.2, 2.2),
        (0.25, 1.4, 0.1, 2.1),
        (0.4, -1.0, 0.1, 2.2),
        (0.15, -1.0, 0.05, 2.6),
    ];
    for (index, (scale, x, y, z)) in bushes.into_iter().enumerate() {
        let bush = Node::mesh(
            &format!("bush-{index}"),
            Geometry::sphere(1.0, 16),
            bush_material.clone(),
        )
        .at(x, y, z)
        .scaled(scale)
        .casting_shadow();
        graph.attach(house, bush)?;
    }

    let door_light = Node::light(
        "door-light",
        Light::point(Color::from_hex(0xff7d46), 1.0, 7.0),
    )
    .at(0.0, 2.2, 2.7)
    .casting_shadow();
    graph.attach(house, door_light)?;

    Ok(house)
}

fn build_graveyard<R: Rng>(
    graph: &mut SceneGraph,
    root: NodeKey,
    config: &SceneConfig,
    rng: &mut R,
) -> Result<NodeKey> {
    let graveyard = graph.add_group(root, "graveyard")?;
    let material = Material::new().with_color(Color::from_hex(0x808080));

    for index in 0..config.grave_count {
        // Draw order matters for seeded reproducibility: angle, radius,
        // then the two tilts.
        let angle = rng.gen::<f32>() * TAU;
        let radius = config.grave_radius_min + rng.gen::<f32>() * config.grave_radius_span;
        let tilt_y = (rng.gen::<f32>() - 0.5) * config.grave_tilt;
        let tilt_z = (rng.gen::<f32>() - 0.5) * config.grave_tilt;

        let grave = Node::mesh(
            &format!("grave-{index}"),
            Geometry::cuboid(0.6, 0.8, 0.2),
            material.clone(),
        )
        .at(angle.sin() * radius, 0.3, angle.cos() * radius)
        .rotated(0.0, tilt_y, tilt_z)
        .casting_shadow();
        graph.attach(graveyard, grave)?;
    }

    Ok(graveyard)
}

fn build_ground(graph: &mut SceneGraph, root: NodeKey, config: &SceneConfig) -> Result<NodeKey> {
    let floor = Node::mesh(
        "floor",
        Geometry::plane(config.ground_size, config.ground_size),
        Material::new()
            .with_textures(TextureSet::from_dir("static/textures/grass").repeated(8.0, 8.0))
            .double_sided(),
    )
    .rotated(-FRAC_PI_2, 0.0, 0.0)
    .receiving_shadow();
    graph.attach(root, floor)
}

fn build_lights(graph: &mut SceneGraph, root: NodeKey) -> Result<[NodeKey; 3]> {
    let fill = Node::light(
        "ambient",
        Light::ambient(Color::from_hex(0xb9d5ff), 0.3),
    );
    graph.attach(root, fill)?;

    let moon = Node::light(
        "moon",
        Light::directional(Color::from_hex(0xb9d5ff), 0.3),
    )
    .at(4.0, 5.0, -2.0)
    .casting_shadow();
    graph.attach(root, moon)?;

    // Ghosts start at the origin; the animator positions them every frame.
    let colors = [0xff00ff, 0x00ffff, 0xffff00];
    let mut ghosts = [NodeKey::default(); 3];
    for (index, hex) in colors.into_iter().enumerate() {
        let ghost = Node::light(
            &format!("ghost-{}", index + 1),
            Light::point(Color::from_hex(hex), 2.0, 3.0),
        )
        .casting_shadow();
        ghosts[index] = graph.attach(root, ghost)?;
    }

    Ok(ghosts)
}
