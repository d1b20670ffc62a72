//! View-side math shared by the sphere animator and the web renderer.
//!
//! These types avoid referencing platform APIs; the web frontend builds them
//! from the current viewport and feeds pointer positions in normalised device
//! coordinates.

use crate::constants::{DESKTOP_MIN_WIDTH, REFERENCE_ASPECT};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Which responsive variant applies for a viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(width_px: f64) -> Self {
        if width_px < DESKTOP_MIN_WIDTH {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    #[inline]
    pub fn is_desktop(self) -> bool {
        self == Breakpoint::Desktop
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    pub fn looking_at_origin(distance: f32, fovy_radians: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalised device coordinates
    /// (x right, y up, both in \[-1, 1\]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize_or_zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Distance along the ray to the first hit with the sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        ray_sphere(self.origin, self.dir, center, radius)
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

#[inline]
pub fn horizontal_fov(fovy_radians: f32, aspect: f32) -> f32 {
    2.0 * ((fovy_radians / 2.0).tan() * aspect).atan()
}

#[inline]
pub fn vertical_fov(fovx_radians: f32, aspect: f32) -> f32 {
    2.0 * ((fovx_radians / 2.0).tan() / aspect).atan()
}

/// Vertical FOV that keeps the horizontal FOV a `fovy_radians` camera would
/// have at 16:9, so the scene keeps its apparent width in any window shape.
pub fn locked_vertical_fov(fovy_radians: f32, aspect: f32) -> f32 {
    let fovx = horizontal_fov(fovy_radians, REFERENCE_ASPECT);
    vertical_fov(fovx, aspect.max(1e-3))
}
