use super::{Effect, FloatMotion};
use crate::constants::{
    LATTICE_LAYERS, LATTICE_LAYER_SPACING, LATTICE_NODES_PER_LAYER, LATTICE_NODE_SIZE,
    LATTICE_NODE_SPACING, LATTICE_SPIN_Y, MAGENTA,
};
use crate::draw::{rgba, DrawList};
use glam::{Mat4, Vec3};

/// Fixed grid of node positions, layer-major.
pub fn lattice_layout() -> Vec<Vec3> {
    let layer_mid = (LATTICE_LAYERS as f32 - 1.0) * 0.5;
    let node_mid = (LATTICE_NODES_PER_LAYER as f32 - 1.0) * 0.5;
    let mut nodes = Vec::with_capacity(LATTICE_LAYERS * LATTICE_NODES_PER_LAYER);
    for layer in 0..LATTICE_LAYERS {
        for node in 0..LATTICE_NODES_PER_LAYER {
            nodes.push(Vec3::new(
                (layer as f32 - layer_mid) * LATTICE_LAYER_SPACING,
                (node as f32 - node_mid) * LATTICE_NODE_SPACING,
                0.0,
            ));
        }
    }
    nodes
}

/// Layered node grid that turns as a single group.
pub struct NodeLattice {
    nodes: Vec<Vec3>,
    floats: Vec<FloatMotion>,
    time: f32,
    spin: f32,
}

impl NodeLattice {
    pub fn new() -> Self {
        let nodes = lattice_layout();
        let floats = (0..nodes.len())
            .map(|i| FloatMotion::new(0.5 + i as f32 * 0.1, 0.1, 1.0))
            .collect();
        Self {
            nodes,
            floats,
            time: 0.0,
            spin: 0.0,
        }
    }

    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    /// Group rotation about Y in radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }
}

impl Default for NodeLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for NodeLattice {
    fn name(&self) -> &'static str {
        "node-lattice"
    }

    fn advance(&mut self, elapsed: f32) {
        self.time = elapsed;
        self.spin = elapsed * LATTICE_SPIN_Y;
    }

    fn draw(&self, out: &mut DrawList) {
        let group = Mat4::from_rotation_y(self.spin);
        let color = rgba(MAGENTA, 1.0);
        for (node, float) in self.nodes.iter().zip(&self.floats) {
            let bobbed = *node + Vec3::new(0.0, float.lift(self.time), 0.0);
            out.push_sprite(group.transform_point3(bobbed), LATTICE_NODE_SIZE, color);
        }
    }
}
