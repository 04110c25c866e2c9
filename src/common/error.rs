//! Error types for cone_path_planning

use thiserror::Error;

/// Main error type for the planner and its utilities
#[derive(Debug, Error)]
pub enum RoboticsError {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    VisualizationError(String),
}

/// Result type alias for robotics operations
pub type RoboticsResult<T> = Result<T, RoboticsError>;
