//! # Error Types
//!
//! This module defines error types used throughout the lienzo library.

use thiserror::Error;

/// Main error type for lienzo operations
#[derive(Debug, Error)]
pub enum LienzoError {
    /// Pixel grid with invalid dimensions (empty, or ragged rows)
    #[error("Invalid pixel grid: {0}")]
    InvalidGrid(String),

    /// Unknown attractor name
    #[error("Unknown attractor: {0}")]
    UnknownAttractor(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
