use clap::ValueEnum;
use serde::Deserialize;

use super::segment::segments;

/// Waveform style. Selects both the per-segment descriptor and the
/// geometry it turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// RMS energy per segment, rendered as vertical bars
    #[default]
    Bars,
    /// Min/max peaks per segment, rendered as a filled silhouette
    Envelope,
}

impl Mode {
    /// A silhouette needs far more x-resolution than discrete bars to
    /// read as a waveform at preview size.
    pub fn default_resolution(self) -> usize {
        match self {
            Mode::Bars => 50,
            Mode::Envelope => 500,
        }
    }
}

/// Per-segment descriptors, one entry per segment in temporal order.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// Non-negative RMS energy per segment
    Energy(Vec<f32>),
    /// (max, min) sample pair per segment, max >= min by construction
    Peaks(Vec<(f32, f32)>),
}

/// Reduce `samples` to `resolution` descriptors. Each segment is
/// summarized independently; an empty segment yields 0 (or (0, 0)).
pub fn summarize(samples: &[f32], resolution: usize, mode: Mode) -> Summary {
    match mode {
        Mode::Bars => Summary::Energy(
            segments(samples.len(), resolution)
                .map(|r| rms(&samples[r]))
                .collect(),
        ),
        Mode::Envelope => Summary::Peaks(
            segments(samples.len(), resolution)
                .map(|r| peaks(&samples[r]))
                .collect(),
        ),
    }
}

fn rms(segment: &[f32]) -> f32 {
    if segment.is_empty() {
        return 0.0;
    }
    (segment.iter().map(|s| s * s).sum::<f32>() / segment.len() as f32).sqrt()
}

fn peaks(segment: &[f32]) -> (f32, f32) {
    if segment.is_empty() {
        return (0.0, 0.0);
    }
    let mut max = f32::NEG_INFINITY;
    let mut min = f32::INFINITY;
    for &s in segment {
        max = max.max(s);
        min = min.min(s);
    }
    (max, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_of_constant_signal() {
        let samples = vec![0.5f32; 100];
        let summary = summarize(&samples, 10, Mode::Bars);
        let Summary::Energy(values) = summary else {
            panic!("expected energy summary");
        };
        assert_eq!(values.len(), 10);
        for v in values {
            assert!((v - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn rms_is_non_negative_for_negative_samples() {
        let samples = vec![-0.8f32; 40];
        let Summary::Energy(values) = summarize(&samples, 4, Mode::Bars) else {
            panic!("expected energy summary");
        };
        assert!(values.iter().all(|&v| (v - 0.8).abs() < 1e-6));
    }

    #[test]
    fn peaks_track_sign() {
        let mut samples = vec![0.0f32; 100];
        samples[10] = 0.7;
        samples[60] = -0.4;
        let Summary::Peaks(pairs) = summarize(&samples, 2, Mode::Envelope) else {
            panic!("expected peaks summary");
        };
        assert_eq!(pairs[0], (0.7, 0.0));
        assert_eq!(pairs[1], (0.0, -0.4));
        for &(max, min) in &pairs {
            assert!(max >= min);
        }
    }

    #[test]
    fn short_buffer_pads_with_zero_descriptors() {
        // 7 samples, 10 segments: every segment is empty
        let samples = vec![0.9f32; 7];
        let Summary::Energy(values) = summarize(&samples, 10, Mode::Bars) else {
            panic!("expected energy summary");
        };
        assert_eq!(values, vec![0.0; 10]);

        let Summary::Peaks(pairs) = summarize(&samples, 10, Mode::Envelope) else {
            panic!("expected peaks summary");
        };
        assert_eq!(pairs, vec![(0.0, 0.0); 10]);
    }

    #[test]
    fn silence_yields_zero_descriptors() {
        let samples = vec![0.0f32; 1000];
        let Summary::Energy(values) = summarize(&samples, 10, Mode::Bars) else {
            panic!("expected energy summary");
        };
        assert_eq!(values, vec![0.0; 10]);
    }
}
