//! Per-frame draw data collected from effects and uploaded by the renderer.

use glam::{Mat4, Vec3};

/// One camera-facing sprite. Layout matches the sprite pipeline's instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// One endpoint of a line segment in world space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub sprites: Vec<SpriteInstance>,
    pub lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.lines.clear();
    }

    #[inline]
    pub fn push_sprite(&mut self, pos: Vec3, size: f32, color: [f32; 4]) {
        self.sprites.push(SpriteInstance {
            pos: pos.to_array(),
            size,
            color,
        });
    }

    #[inline]
    pub fn push_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.lines.push(LineVertex {
            pos: a.to_array(),
            _pad: 0.0,
            color,
        });
        self.lines.push(LineVertex {
            pos: b.to_array(),
            _pad: 0.0,
            color,
        });
    }

    /// Push every edge of a wireframe after transforming its vertices by `model`.
    pub fn push_wireframe(
        &mut self,
        model: &Mat4,
        vertices: &[Vec3],
        edges: &[[u16; 2]],
        color: [f32; 4],
    ) {
        self.lines.reserve(edges.len() * 2);
        for [a, b] in edges {
            let pa = model.transform_point3(vertices[*a as usize]);
            let pb = model.transform_point3(vertices[*b as usize]);
            self.push_line(pa, pb, color);
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }
}

#[inline]
pub fn rgba(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// HSL (degrees, 0..1, 0..1) to linear-ish RGB, as CSS `hsl()` does.
pub fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}
