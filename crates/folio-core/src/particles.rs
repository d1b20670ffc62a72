//! Drifting particle network drawn behind the hero section.

use crate::constants::REFERENCE_FRAME_MS;
use crate::error::{FolioError, Result};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f32,    // px
    pub pointer_radius: f32,   // px
    pub repulsion: f32,        // px per reference frame at zero distance
    pub max_speed: f32,        // px per reference frame, per axis
    pub radius_range: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 60,
            link_distance: 150.0,
            pointer_radius: 200.0,
            repulsion: 5.0,
            max_speed: 0.25,
            radius_range: (1.0, 3.0),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.radius_range;
        if !(lo > 0.0 && hi >= lo) {
            return Err(FolioError::InvalidConfig("particle radius range must be positive and ordered"));
        }
        if !(self.link_distance > 0.0 && self.pointer_radius > 0.0) {
            return Err(FolioError::InvalidConfig("particle distances must be positive"));
        }
        if !(self.max_speed >= 0.0 && self.repulsion >= 0.0) {
            return Err(FolioError::InvalidConfig("particle speeds must not be negative"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Line between particles `a` and `b` (indices, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    size: Vec2,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            particles: Vec::new(),
            size: Vec2::ZERO,
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Replaces every particle with a fresh set inside `width × height`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        let (lo, hi) = self.config.radius_range;
        let speed = self.config.max_speed;
        let size = self.size;
        let rng = &mut self.rng;
        self.particles = (0..self.config.count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                vel: Vec2::new(
                    (rng.gen::<f32>() * 2.0 - 1.0) * speed,
                    (rng.gen::<f32>() * 2.0 - 1.0) * speed,
                ),
                radius: lo + rng.gen::<f32>() * (hi - lo),
            })
            .collect();
        log::debug!(
            "[particles] regenerated {} particles for {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Pointer position in canvas pixels, or `None` when it left the area.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Advances the field by `dt_ms`, measured in 60 Hz reference frames.
    pub fn step(&mut self, dt_ms: f64) {
        let frames = (dt_ms / REFERENCE_FRAME_MS).clamp(0.0, 4.0) as f32;
        let size = self.size;
        let radius = self.config.pointer_radius;
        let strength = self.config.repulsion;
        for p in &mut self.particles {
            p.pos += p.vel * frames;

            if p.pos.x < 0.0 || p.pos.x > size.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > size.y {
                p.vel.y = -p.vel.y;
            }

            if let Some(pointer) = self.pointer {
                let delta = pointer - p.pos;
                let dist = delta.length();
                if dist > f32::EPSILON && dist < radius {
                    let force = (radius - dist) / radius;
                    p.pos -= delta / dist * force * strength * frames;
                }
            }

            p.pos = p.pos.clamp(Vec2::ZERO, size);
        }
    }

    /// Every pair closer than the link distance, with fading alpha.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut out = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let d = pa.pos.distance(pb.pos);
                if d < max {
                    out.push(Link {
                        a,
                        b: a + 1 + offset,
                        alpha: 1.0 - d / max,
                    });
                }
            }
        }
        out
    }
}
