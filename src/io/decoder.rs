//! Audio decoding using Symphonia

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::RenderError;

/// Decoded PCM audio, split into channel buffers
///
/// Mono sources are duplicated into both channels so downstream stages can
/// assume two channels; sources with more than two channels keep the first
/// two.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Left channel samples, normalized to [-1.0, 1.0]
    pub left: Vec<f32>,
    /// Right channel samples, normalized to [-1.0, 1.0]
    pub right: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of frames per channel
    pub fn frame_count(&self) -> usize {
        self.left.len()
    }
}

/// Decode an audio file to PCM channel buffers
///
/// # Arguments
///
/// * `path` - Path to an audio file in any format Symphonia can probe
///
/// # Returns
///
/// `DecodedAudio` with per-channel f32 samples and the source sample rate
///
/// # Errors
///
/// Returns `RenderError::DecodingError` if the file cannot be opened, probed,
/// or decoded, or if it contains no audio frames. Corrupt packets inside an
/// otherwise decodable stream are skipped with a warning.
pub fn decode_audio(path: &Path) -> Result<DecodedAudio, RenderError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)
        .map_err(|e| RenderError::DecodingError(format!("open {}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| RenderError::DecodingError(format!("probe failed: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| RenderError::DecodingError("no supported audio track".to_string()))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| RenderError::DecodingError("missing sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| RenderError::DecodingError(format!("decoder init failed: {}", e)))?;

    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(RenderError::DecodingError(format!("read packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let channels = spec.channels.count();
                if channels == 0 {
                    return Err(RenderError::DecodingError("missing channels".to_string()));
                }

                let needs_realloc = sample_buf
                    .as_ref()
                    .map(|buf| buf.capacity() < decoded.capacity() * channels)
                    .unwrap_or(true);
                if needs_realloc {
                    sample_buf = Some(SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
                }
                let buf = sample_buf.as_mut().ok_or_else(|| {
                    RenderError::DecodingError("sample buffer unavailable".to_string())
                })?;
                buf.copy_interleaved_ref(decoded);

                let samples = buf.samples();
                match channels {
                    1 => {
                        left.extend_from_slice(samples);
                        right.extend_from_slice(samples);
                    }
                    _ => {
                        for frame in samples.chunks_exact(channels) {
                            left.push(frame[0]);
                            right.push(frame[1]);
                        }
                    }
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("skipping undecodable packet: {}", e);
                continue;
            }
            Err(e) => {
                return Err(RenderError::DecodingError(format!("decode packet: {}", e)));
            }
        }
    }

    if left.is_empty() {
        return Err(RenderError::DecodingError(
            "no audio frames decoded".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} frames at {} Hz from {}",
        left.len(),
        sample_rate,
        path.display()
    );

    Ok(DecodedAudio {
        left,
        right,
        sample_rate,
    })
}
