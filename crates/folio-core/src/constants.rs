// Shared timing and layout constants used by the models and the web frontend.

// Responsive layout
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0; // px; below this the mobile variants apply

// Frame pacing that the per-frame factors below are expressed in
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

// Sphere lifecycle (ms)
pub const SPHERE_WAKE_MS: f64 = 1200.0;
pub const SPHERE_SLEEP_MS: f64 = 1500.0;
pub const SPHERE_INACTIVITY_MS: f64 = 60_000.0;
pub const SPHERE_IDLE_JUMP_INTERVAL_MS: f64 = 4000.0;
pub const SPHERE_IDLE_JUMP_MS: f64 = 500.0;
pub const SPHERE_IDLE_JUMP_HEIGHT: f32 = 0.8;
pub const SPHERE_ARRIVAL_JUMP_MS: f64 = 600.0;
pub const SPHERE_ARRIVAL_JUMP_HEIGHT: f32 = 0.5;

// Sphere spin sequence
pub const SPIN_ACCEL_MS: f64 = 1000.0;
pub const SPIN_ACCEL_TURNS: f32 = 2.0; // full turns added during acceleration
pub const SPIN_DECAY_START_SPEED: f32 = 0.1; // rad per reference frame
pub const SPIN_DECAY_FACTOR: f32 = 0.93; // per reference frame
pub const SPIN_DECAY_MIN_SPEED: f32 = 0.003; // rad per reference frame
pub const SPIN_BOUNCE_MS: f64 = 500.0;
pub const SPIN_BOUNCE_OVERSHOOT: f32 = 0.25; // rad past rest
pub const SPIN_BOUNCE_SPLIT: f32 = 0.7; // fraction of the bounce spent reaching the overshoot

// Sphere rotation following
pub const ROTATION_SMOOTHING_PER_FRAME: f32 = 0.1;
pub const TILT_LIMIT_DEGREES: f32 = 45.0;

// Reference aspect for the fixed horizontal field of view
pub const REFERENCE_ASPECT: f32 = 16.0 / 9.0;

// Page-transition shutter
pub const SHUTTER_FALLBACK_MS: f64 = 2400.0;

// Menu hand-off
pub const MENU_CLOSE_DELAY_MS: f64 = 500.0;
pub const MENU_RESTORE_DELAY_MS: f64 = 1500.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f32 = 0.15;
pub const REVEAL_STAGGER_MS: f64 = 100.0;

// Navbar
pub const NAV_HIDE_MIN_SCROLL: f64 = 20.0;

// Cursor
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_PRESSED_SCALE: f32 = 0.6;
pub const CURSOR_EXPAND_MS: f64 = 800.0;
pub const CURSOR_SHRINK_MS: f64 = 800.0;

// Flip coin
pub const COIN_SHOW_SCROLL: f64 = 300.0; // px
pub const COIN_FLIP_MS: f64 = 1500.0;
pub const COIN_SETTLE_MS: f64 = 350.0;

// Uptime clock
pub const UPTIME_REFRESH_MS: i32 = 1000;

// Intro body classes, (delay ms, class)
pub const INTRO_PROJECT_STEPS: &[(f64, &str)] = &[(300.0, "animate"), (1100.0, "ready")];
pub const INTRO_WORK_STEPS: &[(f64, &str)] = &[(0.0, "loaded")];

// Scan line
pub const SCAN_LINE_PERIOD_MS: f64 = 180_000.0;

// Parallax
pub const PARALLAX_POINTER_SPEED: f32 = 10.0; // px per depth step across the full viewport
pub const PARALLAX_HERO_BASE_RATE: f32 = 0.1;
pub const PARALLAX_HERO_RATE_STEP: f32 = 0.05;
