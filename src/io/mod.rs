//! Audio I/O modules
//!
//! Audio decoding to PCM channel buffers using Symphonia.

pub mod decoder;
