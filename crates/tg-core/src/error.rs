//! Gizmo error types

/// Errors surfaced by the gizmo pipeline
#[derive(Debug, Clone, thiserror::Error)]
pub enum GizmoError {
    /// No active camera; projection and ray casting are undefined
    #[error("no active camera available for projection")]
    MissingCamera,
    /// Config file IO error
    #[error("config IO error: {0}")]
    ConfigIo(String),
    /// Config (de)serialization error
    #[error("config format error: {0}")]
    ConfigFormat(String),
}
