//! Error types for the waveform rendering pipeline

use std::fmt;

/// Errors that can occur while preparing waveform geometry
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error in the downsample/merge/build stages
    ProcessingError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            RenderError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            RenderError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
