//! Error types for tessellation building and connectivity queries

use std::fmt;

/// Errors that can occur while building a cluster or addressing its nodes
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Requested node ID does not exist
    NodeNotFound(usize),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            MeshError::NodeNotFound(id) => write!(f, "node not found: {}", id),
        }
    }
}

impl std::error::Error for MeshError {}

/// Result type alias for mesh operations
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MeshError::InvalidConfig("radius must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: radius must be positive");
        assert_eq!(MeshError::NodeNotFound(7).to_string(), "node not found: 7");
    }
}
