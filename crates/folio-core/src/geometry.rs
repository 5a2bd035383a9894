//! Wireframe geometry for the procedural effects.

use glam::Vec3;
use std::f32::consts::TAU;

/// Golden ratio.
const PHI: f32 = 1.618_034;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polyhedron {
    Dodecahedron,
    Icosahedron,
    Octahedron,
}

impl Polyhedron {
    /// Order in which the morphing solid cycles.
    pub const CYCLE: [Polyhedron; 3] = [
        Polyhedron::Dodecahedron,
        Polyhedron::Icosahedron,
        Polyhedron::Octahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Polyhedron::Dodecahedron => "dodecahedron",
            Polyhedron::Icosahedron => "icosahedron",
            Polyhedron::Octahedron => "octahedron",
        }
    }

    fn canonical_vertices(self) -> Vec<Vec3> {
        match self {
            Polyhedron::Dodecahedron => {
                let inv = 1.0 / PHI;
                let mut v = Vec::with_capacity(20);
                for x in [-1.0, 1.0] {
                    for y in [-1.0, 1.0] {
                        for z in [-1.0, 1.0] {
                            v.push(Vec3::new(x, y, z));
                        }
                    }
                }
                for a in [-1.0, 1.0] {
                    for b in [-1.0, 1.0] {
                        v.push(Vec3::new(0.0, a * inv, b * PHI));
                        v.push(Vec3::new(a * inv, b * PHI, 0.0));
                        v.push(Vec3::new(a * PHI, 0.0, b * inv));
                    }
                }
                v
            }
            Polyhedron::Icosahedron => {
                let mut v = Vec::with_capacity(12);
                for a in [-1.0, 1.0] {
                    for b in [-1.0, 1.0] {
                        v.push(Vec3::new(0.0, a, b * PHI));
                        v.push(Vec3::new(a, b * PHI, 0.0));
                        v.push(Vec3::new(b * PHI, 0.0, a));
                    }
                }
                v
            }
            Polyhedron::Octahedron => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
        }
    }

    /// Wireframe scaled so every vertex sits at `radius` from the origin.
    pub fn wireframe(self, radius: f32) -> Wireframe {
        let raw = self.canonical_vertices();
        let edges = edges_at_min_distance(&raw);
        let vertices = raw.iter().map(|v| v.normalize() * radius).collect();
        Wireframe { vertices, edges }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u16; 2]>,
}

impl Wireframe {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

// Platonic solids have a single edge length, so edges are exactly the vertex
// pairs at the minimum separation.
fn edges_at_min_distance(vertices: &[Vec3]) -> Vec<[u16; 2]> {
    let mut min_d = f32::MAX;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min_d = min_d.min(vertices[i].distance(vertices[j]));
        }
    }
    let limit = min_d * (1.0 + 1e-3);
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if vertices[i].distance(vertices[j]) <= limit {
                edges.push([i as u16, j as u16]);
            }
        }
    }
    edges
}

/// Open-ended cylinder drawn as the wireframe of its triangulated side.
///
/// Each segment contributes its top arc, bottom arc, vertical and diagonal.
pub fn open_cylinder(radius: f32, height: f32, segments: usize) -> Wireframe {
    let n = segments.max(3);
    let half = height * 0.5;
    let mut vertices = Vec::with_capacity(n * 2);
    for i in 0..n {
        let theta = i as f32 / n as f32 * TAU;
        let (s, c) = theta.sin_cos();
        vertices.push(Vec3::new(radius * s, half, radius * c));
        vertices.push(Vec3::new(radius * s, -half, radius * c));
    }
    let mut edges = Vec::with_capacity(n * 4);
    for i in 0..n {
        let top = (2 * i) as u16;
        let bottom = top + 1;
        let next_top = (2 * ((i + 1) % n)) as u16;
        let next_bottom = next_top + 1;
        edges.push([top, next_top]);
        edges.push([bottom, next_bottom]);
        edges.push([top, bottom]);
        edges.push([bottom, next_top]);
    }
    Wireframe { vertices, edges }
}
