//! Geometry and fallback texture for the sphere.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed UV sphere with `segments` slices around Y and `rings` stacks.
///
/// The seam column is duplicated so texture coordinates wrap cleanly;
/// `u` runs from 0 at -X through +Z, `v` from 0 at the north pole.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> (Vec<Vertex>, Vec<u32>) {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let theta = v * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let phi = u * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let normal = [-cos_p * sin_t, cos_t, sin_p * sin_t];
            vertices.push(Vertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
                uv: [u, v],
            });
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            if r != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if r != rings - 1 {
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }
    (vertices, indices)
}

/// RGBA8 texture used until (or instead of) the background video: a soft
/// vertical gradient with latitude bands.
pub fn fallback_texture(size: u32) -> Vec<u8> {
    let size = size.max(1);
    let mut out = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        let v = y as f32 / size as f32;
        let band = 0.5 + 0.5 * (v * PI * 12.0).cos();
        for x in 0..size {
            let u = x as f32 / size as f32;
            let swirl = 0.5 + 0.5 * (u * TAU * 3.0 + v * 4.0).sin();
            let r = 0.20 + 0.35 * v + 0.10 * swirl;
            let g = 0.22 + 0.20 * band * swirl;
            let b = 0.45 + 0.40 * (1.0 - v) * (0.6 + 0.4 * band);
            out.extend_from_slice(&[to_u8(r), to_u8(g), to_u8(b), 255]);
        }
    }
    out
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
