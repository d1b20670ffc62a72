use thiserror::Error;

/// Errors surfaced by the models. Most runtime paths are infallible; these
/// cover construction-time validation and storage access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("bezier control point x{index} = {value} lies outside [0, 1]")]
    ControlPointOutOfRange { index: u8, value: f32 },
    #[error("bezier control points must be finite")]
    NonFiniteControlPoint,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("storage access failed: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
