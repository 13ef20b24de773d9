pub mod normalize;
pub mod segment;
pub mod summary;

use crate::error::WavetraceError;
use crate::render::{geometry, svg};
use self::summary::Mode;

/// Pipeline configuration, resolved from CLI flags and config file
/// before any processing starts.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub mode: Mode,
    /// Segment count: bars in bars mode, envelope points in envelope mode
    pub resolution: usize,
    /// Canvas width:height ratio
    pub aspect_ratio: f32,
}

impl Options {
    pub fn validate(&self) -> Result<(), WavetraceError> {
        if self.resolution == 0 {
            return Err(WavetraceError::InvalidConfig(
                "resolution must be a positive integer".into(),
            ));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(WavetraceError::InvalidConfig(format!(
                "aspect ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }
}

/// Run the signal-to-geometry pipeline: segment, summarize, normalize,
/// build geometry, serialize. Each stage is a pure function of its
/// input, so identical samples and options produce identical output.
pub fn render_svg(samples: &[f32], opts: &Options) -> String {
    let mut summary = summary::summarize(samples, opts.resolution, opts.mode);
    normalize::normalize(&mut summary);
    let layout = geometry::build(&summary, opts.aspect_ratio);
    svg::render(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_is_idempotent() {
        let samples: Vec<f32> = (0..4410)
            .map(|i| (i as f32 * 0.01).sin() * 0.8)
            .collect();
        let opts = Options {
            mode: Mode::Bars,
            resolution: 50,
            aspect_ratio: 10.0,
        };
        assert_eq!(render_svg(&samples, &opts), render_svg(&samples, &opts));

        let opts = Options {
            mode: Mode::Envelope,
            resolution: 100,
            aspect_ratio: 10.0,
        };
        assert_eq!(render_svg(&samples, &opts), render_svg(&samples, &opts));
    }

    #[test]
    fn silence_renders_flat_bars() {
        let samples = vec![0.0f32; 1000];
        let opts = Options {
            mode: Mode::Bars,
            resolution: 10,
            aspect_ratio: 10.0,
        };
        let svg = render_svg(&samples, &opts);
        assert_eq!(svg.matches("<rect").count(), 10);
        assert_eq!(svg.matches("height=\"0.00\"").count(), 10);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let opts = Options {
            mode: Mode::Bars,
            resolution: 0,
            aspect_ratio: 10.0,
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn bad_aspect_ratio_is_rejected() {
        for bad in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let opts = Options {
                mode: Mode::Envelope,
                resolution: 100,
                aspect_ratio: bad,
            };
            assert!(opts.validate().is_err(), "accepted aspect ratio {bad}");
        }
    }
}
