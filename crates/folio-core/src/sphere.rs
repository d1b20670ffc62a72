//! Lifecycle animator for the decorative sphere.
//!
//! One state machine serves every page variant; [`SphereConfig`] selects the
//! sizing and the [`Interaction`] model. The animator is driven by
//! [`SphereAnimator::tick`] once per frame with the current time, and each
//! timed phase is a pure function of elapsed time, so a late or skipped frame
//! lands on the same pose a smooth run would have produced.
//!
//! At most one move (wake/sleep), one jump and one spin are active at a time.
//! Starting a new move or jump replaces the previous one; a click during a
//! spin is ignored.

use crate::constants::*;
use crate::easing::{ease_out_cubic, Easing, Tween};
use crate::error::{FolioError, Result};
use crate::shared::SharedFlag;
use crate::state::{locked_vertical_fov, Camera, Ray};
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Yaw of the sphere at rest, so the texture seam faces away from the viewer.
pub const REST_YAW: f32 = -FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// Hidden until the pointer moves, follows the pointer, sleeps when idle.
    Pointer,
    /// Always centred; device orientation drives rotation, touch spins.
    Tilt,
    /// Spins on its own with a pause between spins.
    AutoSpin { pause_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleRule {
    Fixed(f32),
    /// `viewport_width * per_px + offset`
    Linear { per_px: f32, offset: f32 },
}

impl ScaleRule {
    pub fn scale_for(&self, viewport_width: f32) -> f32 {
        let s = match *self {
            ScaleRule::Fixed(s) => s,
            ScaleRule::Linear { per_px, offset } => viewport_width.max(0.0) * per_px + offset,
        };
        s.max(0.01)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    pub segments: u32,
    pub center_y: f32,
    pub hidden_y: f32,
    pub camera_z: f32,
    pub fovy_degrees: f32,
    pub lock_horizontal_fov: bool,
    pub scale: ScaleRule,
    pub float_speed: f32,
    pub float_amplitude: f32,
    pub follow_strength: f32,
    pub wobble: f32,
    pub inactivity_ms: f64,
    pub idle_jump_interval_ms: f64,
    pub interaction: Interaction,
}

impl SphereConfig {
    /// Pointer-driven sphere for desktop widths.
    pub fn desktop() -> Self {
        Self {
            radius: 0.7,
            segments: 64,
            center_y: 0.0,
            hidden_y: -7.0,
            camera_z: 9.0,
            fovy_degrees: 75.0,
            lock_horizontal_fov: true,
            scale: ScaleRule::Linear {
                per_px: 1.0 / 1600.0,
                offset: 0.25,
            },
            float_speed: 2.0,
            float_amplitude: 0.1,
            follow_strength: 0.5,
            wobble: 0.0,
            inactivity_ms: SPHERE_INACTIVITY_MS,
            idle_jump_interval_ms: SPHERE_IDLE_JUMP_INTERVAL_MS,
            interaction: Interaction::Pointer,
        }
    }

    /// Orientation-driven sphere for narrow screens.
    pub fn mobile() -> Self {
        Self {
            radius: 1.5,
            fovy_degrees: 85.0,
            lock_horizontal_fov: false,
            hidden_y: 0.0,
            scale: ScaleRule::Linear {
                per_px: 0.6 / 400.0,
                offset: 0.0,
            },
            float_speed: 1.5,
            follow_strength: 1.0,
            wobble: 0.05,
            interaction: Interaction::Tilt,
            ..Self::desktop()
        }
    }

    /// Small self-spinning sphere on the loading page.
    pub fn loading() -> Self {
        Self {
            radius: 0.5,
            lock_horizontal_fov: false,
            hidden_y: 0.0,
            scale: ScaleRule::Fixed(1.0),
            interaction: Interaction::AutoSpin { pause_ms: 600.0 },
            ..Self::desktop()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(FolioError::InvalidConfig("sphere radius must be positive"));
        }
        if self.segments < 3 {
            return Err(FolioError::InvalidConfig("sphere needs at least 3 segments"));
        }
        if !(self.camera_z > self.radius) {
            return Err(FolioError::InvalidConfig("camera must sit outside the sphere"));
        }
        if !(self.fovy_degrees > 0.0 && self.fovy_degrees < 180.0) {
            return Err(FolioError::InvalidConfig("field of view must be in (0, 180)"));
        }
        if !(self.inactivity_ms > 0.0 && self.idle_jump_interval_ms > 0.0) {
            return Err(FolioError::InvalidConfig("sphere timers must be positive"));
        }
        Ok(())
    }

    /// Camera for a viewport of the given CSS pixel size.
    pub fn camera(&self, width: f32, height: f32) -> Camera {
        let aspect = width / height.max(1.0);
        let fovy = self.fovy_degrees.to_radians();
        let fovy = if self.lock_horizontal_fov {
            locked_vertical_fov(fovy, aspect)
        } else {
            fovy
        };
        Camera::looking_at_origin(self.camera_z, fovy, aspect)
    }

    #[inline]
    pub fn scale_for(&self, viewport_width: f32) -> f32 {
        self.scale.scale_for(viewport_width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereState {
    Asleep,
    Waking,
    Awake,
    Sleeping,
    Spinning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Base {
    Asleep,
    Waking,
    Awake,
    Sleeping,
}

/// Transform to apply to the mesh this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpherePose {
    pub rotation: Vec3,
    pub position_y: f32,
}

#[derive(Clone, Copy, Debug)]
struct Jump {
    start_ms: f64,
    duration_ms: f64,
    height: f32,
}

impl Jump {
    fn new(start_ms: f64, duration_ms: f64, height: f32) -> Self {
        Self {
            start_ms,
            duration_ms,
            height,
        }
    }

    fn offset(&self, now_ms: f64) -> Option<f32> {
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t >= 1.0 {
            return None;
        }
        Some((t.max(0.0) as f32 * PI).sin() * self.height)
    }
}

#[derive(Clone, Copy, Debug)]
enum SpinStage {
    Accelerate,
    Decay,
    Bounce { from: f32 },
}

#[derive(Clone, Copy, Debug)]
struct Spin {
    origin_z: f32,
    stage: SpinStage,
    stage_start_ms: f64,
}

/// Reference frames the decay phase lasts before the speed drops under the
/// minimum.
pub fn spin_decay_frames() -> f32 {
    (SPIN_DECAY_MIN_SPEED / SPIN_DECAY_START_SPEED).ln() / SPIN_DECAY_FACTOR.ln()
}

/// Angle covered after `frames` reference frames of geometric decay.
fn decay_angle(frames: f32) -> f32 {
    SPIN_DECAY_START_SPEED * (1.0 - SPIN_DECAY_FACTOR.powf(frames)) / (1.0 - SPIN_DECAY_FACTOR)
}

/// Full length of one click spin, from first frame to rest.
pub fn spin_duration_ms() -> f64 {
    SPIN_ACCEL_MS + spin_decay_frames() as f64 * REFERENCE_FRAME_MS + SPIN_BOUNCE_MS
}

impl Spin {
    fn new(origin_z: f32, now_ms: f64) -> Self {
        Self {
            origin_z,
            stage: SpinStage::Accelerate,
            stage_start_ms: now_ms,
        }
    }

    /// Z rotation at `now_ms`, or `None` once the spin has settled.
    fn angle(&mut self, now_ms: f64) -> Option<f32> {
        let accel_total = TAU * SPIN_ACCEL_TURNS;
        loop {
            let elapsed = now_ms - self.stage_start_ms;
            match self.stage {
                SpinStage::Accelerate => {
                    let t = (elapsed / SPIN_ACCEL_MS) as f32;
                    if t < 1.0 {
                        return Some(self.origin_z + accel_total * ease_out_cubic(t.max(0.0)));
                    }
                    self.stage = SpinStage::Decay;
                    self.stage_start_ms += SPIN_ACCEL_MS;
                }
                SpinStage::Decay => {
                    let frames = (elapsed / REFERENCE_FRAME_MS) as f32;
                    let end = spin_decay_frames();
                    let base = self.origin_z + accel_total;
                    if frames < end {
                        return Some(base + decay_angle(frames.max(0.0)));
                    }
                    // Same visual angle, but the bounce unwinds less than a turn.
                    let settled = base + decay_angle(end);
                    let from = self.origin_z + (settled - self.origin_z).rem_euclid(TAU);
                    self.stage = SpinStage::Bounce { from };
                    self.stage_start_ms += end as f64 * REFERENCE_FRAME_MS;
                }
                SpinStage::Bounce { from } => {
                    let t = (elapsed / SPIN_BOUNCE_MS) as f32;
                    if t >= 1.0 {
                        return None;
                    }
                    let t = t.max(0.0);
                    let overshoot = self.origin_z + SPIN_BOUNCE_OVERSHOOT;
                    let z = if t < SPIN_BOUNCE_SPLIT {
                        from + (overshoot - from) * ease_out_cubic(t / SPIN_BOUNCE_SPLIT)
                    } else {
                        let tt = (t - SPIN_BOUNCE_SPLIT) / (1.0 - SPIN_BOUNCE_SPLIT);
                        overshoot + (self.origin_z - overshoot) * tt
                    };
                    return Some(z);
                }
            }
        }
    }
}

pub struct SphereAnimator {
    config: SphereConfig,
    hover: SharedFlag,
    alive: bool,
    base: Base,
    base_y: f32,
    move_tween: Option<Tween>,
    jump: Option<Jump>,
    spin: Option<Spin>,
    target_rotation: Vec2,
    smoothed_rotation: Vec2,
    last_interaction_ms: f64,
    last_idle_jump_ms: f64,
    last_tick_ms: f64,
    clock_origin_ms: f64,
    next_auto_spin_ms: Option<f64>,
    pose: SpherePose,
}

impl SphereAnimator {
    pub fn new(config: SphereConfig, now_ms: f64) -> Result<Self> {
        config.validate()?;
        let (base, base_y) = match config.interaction {
            Interaction::Pointer => (Base::Asleep, config.hidden_y),
            Interaction::Tilt | Interaction::AutoSpin { .. } => (Base::Awake, config.center_y),
        };
        let next_auto_spin_ms = match config.interaction {
            Interaction::AutoSpin { .. } => Some(now_ms),
            _ => None,
        };
        Ok(Self {
            hover: SharedFlag::default(),
            alive: true,
            base,
            base_y,
            move_tween: None,
            jump: None,
            spin: None,
            target_rotation: Vec2::ZERO,
            smoothed_rotation: Vec2::ZERO,
            last_interaction_ms: now_ms,
            last_idle_jump_ms: now_ms,
            last_tick_ms: now_ms,
            clock_origin_ms: now_ms,
            next_auto_spin_ms,
            pose: SpherePose {
                rotation: Vec3::new(0.0, REST_YAW, 0.0),
                position_y: base_y,
            },
            config,
        })
    }

    /// Publishes pointer-over-sphere into `flag` instead of a private one.
    pub fn with_hover_flag(mut self, flag: SharedFlag) -> Self {
        self.hover = flag;
        self
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn state(&self) -> SphereState {
        if self.spin.is_some() {
            return SphereState::Spinning;
        }
        match self.base {
            Base::Asleep => SphereState::Asleep,
            Base::Waking => SphereState::Waking,
            Base::Awake => SphereState::Awake,
            Base::Sleeping => SphereState::Sleeping,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn pose(&self) -> SpherePose {
        self.pose
    }

    #[inline]
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    /// Pointer moved to `ndc`; `hit` is the result of the hover ray test.
    pub fn pointer_moved(&mut self, ndc: Vec2, hit: bool, now_ms: f64) {
        if !self.alive {
            return;
        }
        self.hover.set(hit);
        if self.config.interaction != Interaction::Pointer {
            return;
        }
        self.target_rotation = Vec2::new(-ndc.y, ndc.x) * self.config.follow_strength;
        self.last_interaction_ms = now_ms;
        if matches!(self.base, Base::Asleep | Base::Sleeping) {
            self.wake(now_ms);
        }
    }

    /// Device orientation in degrees (front-back `beta`, left-right `gamma`).
    pub fn tilt(&mut self, beta_deg: f32, gamma_deg: f32) {
        if !self.alive || self.config.interaction != Interaction::Tilt {
            return;
        }
        let clamp = |v: f32| {
            if v.is_finite() {
                v.clamp(-TILT_LIMIT_DEGREES, TILT_LIMIT_DEGREES).to_radians()
            } else {
                0.0
            }
        };
        self.target_rotation =
            Vec2::new(clamp(beta_deg), clamp(gamma_deg)) * self.config.follow_strength;
    }

    /// Click or tap; starts a spin when `hit` and the sphere is not fully asleep.
    /// Returns whether a spin started.
    pub fn click(&mut self, hit: bool, now_ms: f64) -> bool {
        if !self.alive || !hit || self.spin.is_some() {
            return false;
        }
        match self.config.interaction {
            Interaction::AutoSpin { .. } => return false,
            Interaction::Pointer if self.base == Base::Asleep => return false,
            _ => {}
        }
        self.start_spin(now_ms);
        true
    }

    /// Whether `ray` hits the sphere at its current pose and `scale`.
    pub fn hit_test(&self, ray: &Ray, scale: f32) -> bool {
        let center = Vec3::new(0.0, self.pose.position_y, 0.0);
        ray.hit_sphere(center, self.config.radius * scale).is_some()
    }

    /// Stops every animation; later calls become no-ops and `tick` returns `None`.
    pub fn shutdown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.move_tween = None;
        self.jump = None;
        self.spin = None;
        self.next_auto_spin_ms = None;
        self.hover.set(false);
        log::info!("[sphere] animator shut down");
    }

    /// Advances every active animation to `now_ms` and returns the pose to draw.
    pub fn tick(&mut self, now_ms: f64) -> Option<SpherePose> {
        if !self.alive {
            return None;
        }
        let dt_ms = (now_ms - self.last_tick_ms).clamp(0.0, 250.0);
        self.last_tick_ms = now_ms;

        self.advance_lifecycle(now_ms);

        if let Some(tween) = self.move_tween {
            if tween.is_finished(now_ms) {
                self.base_y = tween.to;
                self.move_tween = None;
                self.finish_move(tween.end_ms());
            } else {
                self.base_y = tween.sample(now_ms);
            }
        }

        let jump_offset = match self.jump.and_then(|j| j.offset(now_ms)) {
            Some(offset) => offset,
            None => {
                self.jump = None;
                0.0
            }
        };

        let frames = (dt_ms / REFERENCE_FRAME_MS) as f32;
        let alpha = 1.0 - (1.0 - ROTATION_SMOOTHING_PER_FRAME).powf(frames);
        self.smoothed_rotation += (self.target_rotation - self.smoothed_rotation) * alpha;

        if let Interaction::AutoSpin { .. } = self.config.interaction {
            if self.spin.is_none() && self.next_auto_spin_ms.is_some_and(|at| now_ms >= at) {
                self.next_auto_spin_ms = None;
                self.start_spin(now_ms);
            }
        }

        let spin_z = self.spin.as_mut().map(|s| s.angle(now_ms));
        let rot_z = match spin_z {
            Some(Some(z)) => z,
            Some(None) => {
                self.spin = None;
                self.finish_spin(now_ms);
                0.0
            }
            None => 0.0,
        };

        let t_sec = ((now_ms - self.clock_origin_ms) / 1000.0) as f32;
        let wobble = self.config.wobble;
        let rot_x = self.smoothed_rotation.x + t_sec.sin() * wobble;
        let rot_y = REST_YAW + self.smoothed_rotation.y + (t_sec * 0.8).cos() * wobble;
        let float_y = (t_sec * self.config.float_speed).sin() * self.config.float_amplitude;

        self.pose = SpherePose {
            rotation: Vec3::new(rot_x, rot_y, rot_z),
            position_y: self.base_y + float_y + jump_offset,
        };
        Some(self.pose)
    }

    fn advance_lifecycle(&mut self, now_ms: f64) {
        if self.config.interaction != Interaction::Pointer {
            return;
        }
        match self.base {
            Base::Awake if now_ms - self.last_interaction_ms > self.config.inactivity_ms => {
                self.sleep(now_ms);
            }
            Base::Asleep if now_ms - self.last_idle_jump_ms > self.config.idle_jump_interval_ms => {
                self.jump = Some(Jump::new(now_ms, SPHERE_IDLE_JUMP_MS, SPHERE_IDLE_JUMP_HEIGHT));
                self.last_idle_jump_ms = now_ms;
            }
            _ => {}
        }
    }

    fn wake(&mut self, now_ms: f64) {
        log::debug!("[sphere] waking from y={:.2}", self.base_y);
        self.base = Base::Waking;
        self.jump = None;
        self.move_tween = Some(Tween::new(
            self.base_y,
            self.config.center_y,
            now_ms,
            SPHERE_WAKE_MS,
            Easing::OutCubic,
        ));
    }

    fn sleep(&mut self, now_ms: f64) {
        log::debug!("[sphere] going to sleep");
        self.base = Base::Sleeping;
        self.jump = None;
        self.move_tween = Some(Tween::new(
            self.base_y,
            self.config.hidden_y,
            now_ms,
            SPHERE_SLEEP_MS,
            Easing::InOutQuad,
        ));
    }

    fn finish_move(&mut self, end_ms: f64) {
        match self.base {
            Base::Waking => {
                self.base = Base::Awake;
                self.jump = Some(Jump::new(
                    end_ms,
                    SPHERE_ARRIVAL_JUMP_MS,
                    SPHERE_ARRIVAL_JUMP_HEIGHT,
                ));
            }
            Base::Sleeping => {
                self.base = Base::Asleep;
                self.last_idle_jump_ms = end_ms;
            }
            Base::Asleep | Base::Awake => {}
        }
    }

    fn start_spin(&mut self, now_ms: f64) {
        log::debug!("[sphere] spin");
        self.spin = Some(Spin::new(0.0, now_ms));
    }

    fn finish_spin(&mut self, now_ms: f64) {
        if let Interaction::AutoSpin { pause_ms } = self.config.interaction {
            self.next_auto_spin_ms = Some(now_ms + pause_ms);
        }
    }
}
