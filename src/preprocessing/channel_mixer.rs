//! Channel merging utilities (stereo to mono)

use crate::error::RenderError;

/// Merge stereo channels to mono
///
/// Produces the arithmetic mean of the two channels, `(l + r) * 0.5`, per
/// frame.
///
/// # Arguments
///
/// * `left` - Left channel samples
/// * `right` - Right channel samples
///
/// # Returns
///
/// Mono samples, same length as the inputs
///
/// # Errors
///
/// Returns `RenderError::InvalidInput` if the channel lengths differ
pub fn stereo_to_mono(left: &[f32], right: &[f32]) -> Result<Vec<f32>, RenderError> {
    if left.len() != right.len() {
        return Err(RenderError::InvalidInput(format!(
            "channel length mismatch: left={}, right={}",
            left.len(),
            right.len()
        )));
    }

    log::debug!("Merging {} stereo frames to mono", left.len());

    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(&l, &r)| (l + r) * 0.5)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_averages_channels() {
        let left = vec![1.0, 0.0, -1.0, 0.5];
        let right = vec![0.0, 0.0, -1.0, 0.25];

        let mono = stereo_to_mono(&left, &right).unwrap();

        assert_eq!(mono, vec![0.5, 0.0, -1.0, 0.375]);
    }

    #[test]
    fn test_merge_empty_channels() {
        let mono = stereo_to_mono(&[], &[]).unwrap();
        assert!(mono.is_empty());
    }

    #[test]
    fn test_merge_length_mismatch() {
        let result = stereo_to_mono(&[0.0, 1.0], &[0.0]);
        assert!(result.is_err());
    }
}
