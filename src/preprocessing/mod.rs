//! Audio preprocessing modules
//!
//! Utilities for preparing downsampled audio for geometry building:
//! - Channel merging (stereo to mono)
//! - Peak measurement and normalization

pub mod channel_mixer;
pub mod normalization;
