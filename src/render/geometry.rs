use crate::waveform::summary::Summary;

/// Base canvas dimension in abstract units. The other axis is derived
/// from the aspect ratio; consumers rescale via the viewBox.
pub const CANVAS_UNITS: f32 = 100.0;

/// Fraction of the canvas height a full-scale bar occupies.
pub const BAR_FILL: f32 = 0.9;

/// Fraction of the half-height a full-scale envelope excursion reaches.
pub const ENVELOPE_FILL: f32 = 0.95;

/// Abstract coordinate space all geometry is expressed in. Decoupled
/// from pixel output size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// One axis-aligned rectangle per segment, centered on the mid-line
    Bars(Vec<Bar>),
    /// One closed contour: upper envelope left to right, lower envelope
    /// right to left, 2N+1 vertices total
    Envelope(Vec<(f32, f32)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub canvas: Canvas,
    pub geometry: Geometry,
}

/// Map normalized descriptors to canvas coordinates.
pub fn build(summary: &Summary, aspect_ratio: f32) -> Layout {
    match summary {
        Summary::Energy(values) => build_bars(values, aspect_ratio),
        Summary::Peaks(pairs) => build_envelope(pairs, aspect_ratio),
    }
}

/// Bars and gaps alternate with equal width, so N bars plus N-1 gaps
/// span the full canvas width.
fn build_bars(values: &[f32], aspect_ratio: f32) -> Layout {
    let canvas = Canvas {
        width: CANVAS_UNITS * aspect_ratio,
        height: CANVAS_UNITS,
    };
    let center = canvas.height / 2.0;
    let slot = canvas.width / (2 * values.len() - 1) as f32;

    let bars = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = v * canvas.height * BAR_FILL;
            Bar {
                x: i as f32 * 2.0 * slot,
                y: center - height / 2.0,
                width: slot,
                height,
            }
        })
        .collect();

    Layout {
        canvas,
        geometry: Geometry::Bars(bars),
    }
}

/// Forward pass traces the max contour left to right, backward pass the
/// min contour right to left; the first vertex sits on the mid-line at
/// x=0 and the serializer closes the path back to it.
fn build_envelope(pairs: &[(f32, f32)], aspect_ratio: f32) -> Layout {
    let canvas = Canvas {
        width: CANVAS_UNITS,
        height: CANVAS_UNITS / aspect_ratio,
    };
    let center = canvas.height / 2.0;
    let step = canvas.width / pairs.len() as f32;

    let mut vertices = Vec::with_capacity(2 * pairs.len() + 1);
    vertices.push((0.0, center));
    for (i, &(max, _)) in pairs.iter().enumerate() {
        vertices.push(((i + 1) as f32 * step, center - max * center * ENVELOPE_FILL));
    }
    for (i, &(_, min)) in pairs.iter().enumerate().rev() {
        vertices.push((i as f32 * step, center - min * center * ENVELOPE_FILL));
    }

    Layout {
        canvas,
        geometry: Geometry::Envelope(vertices),
    }
}
