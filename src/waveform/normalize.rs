use super::summary::Summary;

/// Rescale all descriptors by a single global factor so the largest
/// magnitude becomes exactly 1.0. Requires the full sequence: the scale
/// is derived from one pass over every value before any is emitted.
///
/// An all-zero summary (silence or empty input) is left untouched, so
/// there is never a division by zero.
pub fn normalize(summary: &mut Summary) {
    let peak = peak_magnitude(summary);
    if peak <= 0.0 {
        return;
    }
    match summary {
        Summary::Energy(values) => {
            for v in values.iter_mut() {
                *v /= peak;
            }
        }
        Summary::Peaks(pairs) => {
            for (max, min) in pairs.iter_mut() {
                *max /= peak;
                *min /= peak;
            }
        }
    }
}

fn peak_magnitude(summary: &Summary) -> f32 {
    match summary {
        Summary::Energy(values) => values.iter().map(|v| v.abs()).fold(0.0, f32::max),
        Summary::Peaks(pairs) => pairs
            .iter()
            .flat_map(|&(max, min)| [max.abs(), min.abs()])
            .fold(0.0, f32::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_becomes_exactly_one() {
        let mut summary = Summary::Energy(vec![0.1, 0.25, 0.05]);
        normalize(&mut summary);
        let Summary::Energy(values) = summary else {
            panic!("expected energy summary");
        };
        assert_eq!(values[1], 1.0);
        assert!(values.iter().all(|&v| v <= 1.0));
    }

    #[test]
    fn all_zero_stays_zero() {
        let mut summary = Summary::Energy(vec![0.0; 10]);
        normalize(&mut summary);
        assert_eq!(summary, Summary::Energy(vec![0.0; 10]));
    }

    #[test]
    fn peaks_scale_by_largest_magnitude() {
        // largest magnitude is the negative excursion
        let mut summary = Summary::Peaks(vec![(0.2, -0.5), (0.1, 0.0)]);
        normalize(&mut summary);
        let Summary::Peaks(pairs) = summary else {
            panic!("expected peaks summary");
        };
        assert_eq!(pairs[0].1, -1.0);
        assert!((pairs[0].0 - 0.4).abs() < 1e-6);
        for &(max, min) in &pairs {
            assert!(max >= min);
            assert!(max.abs() <= 1.0 && min.abs() <= 1.0);
        }
    }

    #[test]
    fn relative_proportions_are_preserved() {
        let mut summary = Summary::Energy(vec![0.2, 0.4]);
        normalize(&mut summary);
        let Summary::Energy(values) = summary else {
            panic!("expected energy summary");
        };
        assert!((values[0] - 0.5).abs() < 1e-6);
        assert_eq!(values[1], 1.0);
    }
}
