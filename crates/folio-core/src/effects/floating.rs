use super::{Effect, FloatMotion};
use crate::constants::{
    CYAN, FLOATING_SHAPE_DEPTH, FLOATING_SHAPE_OPACITY, FLOATING_SHAPE_RADIUS,
    FLOATING_SHAPE_SPACING, MAGENTA,
};
use crate::draw::{rgba, DrawList};
use crate::geometry::{Polyhedron, Wireframe};
use glam::{Mat4, Vec3};

/// Row of small wireframe dodecahedra drifting behind the skills grid.
pub struct FloatingShapes {
    shape: Wireframe,
    anchors: Vec<Vec3>,
    floats: Vec<FloatMotion>,
    time: f32,
}

impl FloatingShapes {
    pub fn new(count: usize) -> Self {
        let mid = (count as f32 - 1.0) * 0.5;
        let anchors = (0..count)
            .map(|i| {
                Vec3::new(
                    (i as f32 - mid) * FLOATING_SHAPE_SPACING,
                    (i as f32).sin() * 2.0,
                    FLOATING_SHAPE_DEPTH,
                )
            })
            .collect();
        let floats = (0..count)
            .map(|i| FloatMotion::new(0.5 + i as f32 * 0.2, 0.3, 0.5))
            .collect();
        Self {
            shape: Polyhedron::Dodecahedron.wireframe(FLOATING_SHAPE_RADIUS),
            anchors,
            floats,
            time: 0.0,
        }
    }

    pub fn anchors(&self) -> &[Vec3] {
        &self.anchors
    }
}

impl Effect for FloatingShapes {
    fn name(&self) -> &'static str {
        "floating-shapes"
    }

    fn advance(&mut self, elapsed: f32) {
        self.time = elapsed;
    }

    fn draw(&self, out: &mut DrawList) {
        for (i, (anchor, float)) in self.anchors.iter().zip(&self.floats).enumerate() {
            let color = if i % 2 == 0 { CYAN } else { MAGENTA };
            let model = Mat4::from_translation(*anchor) * float.matrix(self.time);
            out.push_wireframe(
                &model,
                &self.shape.vertices,
                &self.shape.edges,
                rgba(color, FLOATING_SHAPE_OPACITY),
            );
        }
    }
}
