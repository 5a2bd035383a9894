// Host-side tests for the procedural effects and their geometry.

use folio_core::effects::{
    lattice_layout, orbiter_layout, ring_opacity, shape_at, shape_index_at, wave_offset, Effect,
    FloatMotion, FloatingShapes, HoloRing, MorphingSolid, NodeLattice, ParticleField, Sparkles,
};
use folio_core::geometry::{open_cylinder, Polyhedron};
use folio_core::{hsl_to_rgb, DrawList};

#[test]
fn particle_field_is_seeded_and_in_bounds() {
    let a = ParticleField::new(500, 9);
    let b = ParticleField::new(500, 9);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.len(), 500);
    for (p, c) in a.positions().iter().zip(a.colors()) {
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0);
        assert!((0.5..=1.0).contains(&c[0]));
        assert!((0.7..=1.0).contains(&c[1]));
        assert_eq!(c[2], 1.0);
    }
}

#[test]
fn particle_advance_nudges_each_sample_by_the_wave() {
    let mut field = ParticleField::new(64, 3);
    let before = field.positions().to_vec();
    let t = 1.3;
    field.advance(t);
    for (old, new) in before.iter().zip(field.positions()) {
        let dy = new.y - old.y;
        assert!((dy - (t + old.x).sin() * 0.001).abs() < 1e-5);
        assert_eq!(new.x, old.x);
        assert_eq!(new.z, old.z);
    }
    assert!((field.rotation().x - 0.05 * t).abs() < 1e-6);
    assert!((field.rotation().y - 0.03 * t).abs() < 1e-6);
}

#[test]
fn particle_nudge_accumulates_across_ticks() {
    let mut field = ParticleField::new(1, 5);
    let start = field.positions()[0];
    field.advance(0.5);
    field.advance(0.5);
    let expected = start.y + 2.0 * wave_offset(0.5, start.x);
    assert!((field.positions()[0].y - expected).abs() < 1e-5);
}

#[test]
fn morph_shape_cycles_every_three_seconds() {
    assert_eq!(shape_index_at(0.0), 0);
    assert_eq!(shape_index_at(2.99), 0);
    assert_eq!(shape_index_at(3.0), 1);
    assert_eq!(shape_index_at(6.5), 2);
    assert_eq!(shape_index_at(9.0), 0);
    assert_eq!(shape_index_at(-4.0), 0);
    assert_eq!(shape_at(4.0), Polyhedron::Icosahedron);
    for i in 0..200 {
        let t = i as f32 * 0.37;
        assert!(shape_index_at(t) < 3);
        assert_eq!(shape_index_at(t), shape_index_at(t));
        assert_eq!(shape_index_at(t), ((t / 3.0).floor() as usize) % 3);
    }
}

#[test]
fn morphing_solid_tracks_shape_and_draws_its_edges() {
    let mut solid = MorphingSolid::new(1.0);
    let mut out = DrawList::default();
    solid.advance(7.0);
    assert_eq!(solid.current_shape(), Polyhedron::Octahedron);
    solid.draw(&mut out);
    assert_eq!(out.segment_count(), 12);
    assert!(out.lines.iter().all(|v| (v.color[3] - 0.6).abs() < 1e-6));
}

#[test]
fn lattice_layout_is_four_layers_of_five() {
    let nodes = lattice_layout();
    assert_eq!(nodes.len(), 20);
    let xs = [-3.0, -1.0, 1.0, 3.0];
    let ys = [-1.6, -0.8, 0.0, 0.8, 1.6];
    for (i, n) in nodes.iter().enumerate() {
        assert!((n.x - xs[i / 5]).abs() < 1e-6);
        assert!((n.y - ys[i % 5]).abs() < 1e-6);
        assert_eq!(n.z, 0.0);
    }
}

#[test]
fn lattice_spins_as_a_group() {
    let mut lattice = NodeLattice::new();
    lattice.advance(10.0);
    assert!((lattice.spin() - 1.0).abs() < 1e-6);
    let mut out = DrawList::default();
    lattice.draw(&mut out);
    assert_eq!(out.sprites.len(), 20);
}

#[test]
fn ring_opacity_stays_in_band() {
    for i in 0..1000 {
        let o = ring_opacity(i as f32 * 0.013);
        assert!((0.2 - 1e-6..=0.4 + 1e-6).contains(&o));
    }
    let mut ring = HoloRing::new();
    ring.advance(std::f32::consts::FRAC_PI_4);
    assert!((ring.opacity() - 0.4).abs() < 1e-6);
    assert!((ring.spin() - 0.2 * std::f32::consts::FRAC_PI_4).abs() < 1e-6);
}

#[test]
fn orbiters_sit_on_an_ellipse() {
    let anchors = orbiter_layout(8);
    assert_eq!(anchors.len(), 8);
    assert!((anchors[0].x - 6.0).abs() < 1e-5);
    assert!((anchors[2].y - 3.0).abs() < 1e-5);
    assert!((anchors[3].z - 3.0f32.sin() * 2.0).abs() < 1e-5);
}

#[test]
fn hsl_matches_css() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
    let c = hsl_to_rgb(180.0, 1.0, 0.5);
    assert!(c[0].abs() < 1e-6 && (c[1] - 1.0).abs() < 1e-6 && (c[2] - 1.0).abs() < 1e-6);
    let grey = hsl_to_rgb(45.0, 0.0, 0.6);
    assert!(grey.iter().all(|v| (v - 0.6).abs() < 1e-6));
}

#[test]
fn platonic_solids_have_expected_counts_and_radius() {
    for (shape, v, e) in [
        (Polyhedron::Dodecahedron, 20, 30),
        (Polyhedron::Icosahedron, 12, 30),
        (Polyhedron::Octahedron, 6, 12),
    ] {
        let w = shape.wireframe(1.0);
        assert_eq!(w.vertex_count(), v, "{}", shape.name());
        assert_eq!(w.edge_count(), e, "{}", shape.name());
        for p in &w.vertices {
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }
    let small = Polyhedron::Dodecahedron.wireframe(0.5);
    assert!(small.vertices.iter().all(|p| (p.length() - 0.5).abs() < 1e-5));
}

#[test]
fn open_cylinder_edges() {
    let ring = open_cylinder(1.5, 0.1, 32);
    assert_eq!(ring.vertex_count(), 64);
    assert_eq!(ring.edge_count(), 128);
    for p in &ring.vertices {
        assert!(((p.x * p.x + p.z * p.z).sqrt() - 1.5).abs() < 1e-5);
        assert!((p.y.abs() - 0.05).abs() < 1e-6);
    }
}

#[test]
fn float_motion_is_still_at_time_zero() {
    let f = FloatMotion::new(2.0, 0.5, 0.5);
    assert_eq!(f.lift(0.0), 0.0);
    let r = f.rotation(0.0);
    assert!((r.x - 0.5 / 8.0).abs() < 1e-6);
    assert_eq!(r.y, 0.0);
}

#[test]
fn floating_shapes_alternate_colours() {
    let mut shapes = FloatingShapes::new(6);
    assert!((shapes.anchors()[0].x + 7.5).abs() < 1e-6);
    assert_eq!(shapes.anchors()[5].z, -5.0);
    shapes.advance(1.0);
    let mut out = DrawList::default();
    shapes.draw(&mut out);
    assert_eq!(out.segment_count(), 6 * 30);
    let first = out.lines[0].color;
    let second = out.lines[60].color;
    assert_eq!(first, [0.0, 1.0, 1.0, 0.3]);
    assert_eq!(second, [1.0, 0.0, 1.0, 0.3]);
}

#[test]
fn sparkles_twinkle_within_unit_range() {
    let mut s = Sparkles::new(30, 10.0, 0.5, [0.0, 1.0, 1.0], 1);
    assert_eq!(s.len(), 30);
    for i in 0..50 {
        s.advance(i as f32 * 0.1);
        let a = s.twinkle(i as f32);
        assert!((0.0..=1.0).contains(&a));
    }
}
