//! Ghost light animation
//!
//! Each ghost light follows a fixed parametric path: an orbit in the XZ
//! plane with a sinusoidal bob in Y. Positions are a pure function of
//! elapsed time, recomputed from scratch every frame rather than
//! integrated, so a given time always yields the same layout.

use scene_engine::prelude::*;
use scene_engine::scene::SceneResult;

/// Compute the three ghost positions for a given elapsed time in seconds
///
/// Total over all finite non-negative inputs and fully deterministic.
/// Ghost 1 orbits at radius 4, ghost 2 counter-orbits at radius 5 with a
/// dual-frequency bob, and ghost 3 counter-orbits on a breathing radius
/// between 6 and 8.
pub fn ghost_positions(elapsed: f32) -> [Vec3; 3] {
    let angle1 = elapsed * 0.5;
    let ghost1 = Vec3::new(
        angle1.sin() * 4.0,
        (elapsed * 3.0).sin(),
        angle1.cos() * 4.0,
    );

    let angle2 = -elapsed * 0.32;
    let ghost2 = Vec3::new(
        angle2.sin() * 5.0,
        (elapsed * 4.0).sin() + (elapsed * 2.5).sin(),
        angle2.cos() * 5.0,
    );

    let angle3 = -elapsed * 0.18;
    let ghost3 = Vec3::new(
        angle3.sin() * (7.0 + (elapsed * 0.32).sin()),
        (elapsed * 5.0).sin() * (elapsed * 2.0).sin(),
        angle3.cos() * (7.0 + (elapsed * 0.5).sin()),
    );

    [ghost1, ghost2, ghost3]
}

/// Binds the three ghost path slots to light nodes in a scene graph
#[derive(Debug, Clone, Copy)]
pub struct GhostRig {
    keys: [NodeKey; 3],
}

impl GhostRig {
    /// Create a rig over three ghost light keys, in path order
    pub fn new(keys: [NodeKey; 3]) -> Self {
        Self { keys }
    }

    /// Write the positions for `elapsed` back into the scene graph
    ///
    /// Mutation goes through the graph's position setter; nothing else in
    /// the scene is touched.
    pub fn animate(&self, scene: &mut SceneGraph, elapsed: f32) -> SceneResult<()> {
        for (&key, position) in self.keys.iter().zip(ghost_positions(elapsed)) {
            scene.set_position(key, position)?;
        }
        Ok(())
    }
}
