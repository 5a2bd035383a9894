use super::{euler_xyz, Effect, FloatMotion};
use crate::constants::{
    CYAN, MORPH_BOB_AMPLITUDE, MORPH_BOB_FREQ, MORPH_INTERVAL_SEC, MORPH_OPACITY, MORPH_SPIN_X,
    MORPH_SPIN_Y,
};
use crate::draw::{rgba, DrawList};
use crate::geometry::{Polyhedron, Wireframe};
use glam::{Mat4, Vec3};

/// Index into [`Polyhedron::CYCLE`] that is active at elapsed time `t`.
///
/// Negative times are treated as zero.
#[inline]
pub fn shape_index_at(t: f32) -> usize {
    let steps = (t.max(0.0) / MORPH_INTERVAL_SEC).floor() as usize;
    steps % Polyhedron::CYCLE.len()
}

#[inline]
pub fn shape_at(t: f32) -> Polyhedron {
    Polyhedron::CYCLE[shape_index_at(t)]
}

/// Centre-piece solid that swaps shape every few seconds while it spins and bobs.
pub struct MorphingSolid {
    shapes: [Wireframe; 3],
    current: usize,
    model: Mat4,
    inner: FloatMotion,
    outer: FloatMotion,
}

impl MorphingSolid {
    pub fn new(radius: f32) -> Self {
        Self {
            shapes: Polyhedron::CYCLE.map(|p| p.wireframe(radius)),
            current: 0,
            model: Mat4::IDENTITY,
            inner: FloatMotion::new(2.0, 0.5, 0.5),
            outer: FloatMotion::new(1.0, 0.2, 0.3),
        }
    }

    pub fn current_shape(&self) -> Polyhedron {
        Polyhedron::CYCLE[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Local transform of the solid itself (spin and bob), without the floats.
    pub fn local_matrix(t: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(
            0.0,
            (t * MORPH_BOB_FREQ).sin() * MORPH_BOB_AMPLITUDE,
            0.0,
        )) * euler_xyz(t * MORPH_SPIN_X, t * MORPH_SPIN_Y, 0.0)
    }
}

impl Effect for MorphingSolid {
    fn name(&self) -> &'static str {
        "morphing-solid"
    }

    fn advance(&mut self, elapsed: f32) {
        self.current = shape_index_at(elapsed);
        self.model =
            self.outer.matrix(elapsed) * self.inner.matrix(elapsed) * Self::local_matrix(elapsed);
    }

    fn draw(&self, out: &mut DrawList) {
        let shape = &self.shapes[self.current];
        out.push_wireframe(
            &self.model,
            &shape.vertices,
            &shape.edges,
            rgba(CYAN, MORPH_OPACITY),
        );
    }
}
