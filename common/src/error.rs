use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiError {
    /// A consumer tried to delegate before anything was injected.
    #[error("no {capability} has been injected")]
    UnsetDependency { capability: &'static str },

    #[error("nothing is stored under `{name}`")]
    KeyNotFound { name: String },

    #[error("target ({x}, {y}) is out of reach")]
    Unreachable { x: f64, y: f64 },

    #[error("segment length must be positive, got {length}")]
    InvalidSegment { length: f64 },
}

impl DiError {
    pub fn unset(capability: &'static str) -> Self {
        Self::UnsetDependency { capability }
    }
}
