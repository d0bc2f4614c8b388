//! Example: Render the waveform path for a single audio file
//!
//! Usage:
//!   cargo run --release --example render_waveform -- <audio-file>

use std::path::Path;

use kurbo::Rect;
use waverender::{render_file, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let file = std::env::args()
        .nth(1)
        .ok_or("usage: render_waveform <audio-file>")?;

    let bounds = Rect::new(0.0, 0.0, 1024.0, 256.0);
    let config = RenderConfig::default();

    let waveform = render_file(Path::new(&file), bounds, 1024, &config)?;

    // Print results
    println!("Waveform:");
    println!("  Output frames: {}", waveform.frame_count);
    println!("  Peak: {:.3}", waveform.peak);
    println!("  Downsample factor: {}", waveform.metadata.ds_factor);
    println!("  Path elements: {}", waveform.path.elements().len());
    println!(
        "  Processing time: {:.2} ms",
        waveform.metadata.processing_time_ms
    );

    Ok(())
}
