//! Platform-free models behind the folio portfolio effects.
//!
//! Nothing in this crate touches the DOM. Every time-dependent operation takes
//! the current time in milliseconds so the web front-end can drive it from a
//! single frame tick and tests can drive it with a fake clock.

pub mod coin;
pub mod constants;
pub mod cursor;
pub mod decor;
pub mod easing;
pub mod error;
pub mod menu;
pub mod mesh;
pub mod particles;
pub mod reveal;
pub mod scramble;
pub mod scroll;
pub mod shared;
pub mod shutter;
pub mod sphere;
pub mod state;
pub mod storage;
pub mod theme;

pub static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");

pub use constants::*;
pub use easing::{CubicBezier, Easing, Tween};
pub use error::{FolioError, Result};
pub use shared::SharedFlag;
pub use state::{Breakpoint, Camera, Ray};
pub use storage::{KeyValueStore, MemoryStore};
