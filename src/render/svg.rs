use super::geometry::{Geometry, Layout};

/// Render a layout as a self-contained SVG document.
///
/// The root element declares only a viewBox, never pixel width/height:
/// the coordinate system is the contract and the consumer picks the
/// final presentation size. Fill is `currentColor` so the image inherits
/// the surrounding context's color.
pub fn render(layout: &Layout) -> String {
    let canvas = &layout.canvas;
    let mut svg = String::with_capacity(estimated_len(&layout.geometry));
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        canvas.width, canvas.height
    ));

    match &layout.geometry {
        Geometry::Bars(bars) => {
            for bar in bars {
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
                     fill=\"currentColor\" shape-rendering=\"crispEdges\"/>\n",
                    bar.x, bar.y, bar.width, bar.height
                ));
            }
        }
        Geometry::Envelope(vertices) => {
            svg.push_str("<path d=\"");
            for (i, &(x, y)) in vertices.iter().enumerate() {
                if i == 0 {
                    svg.push_str(&format!("M {:.1} {:.1}", x, y));
                } else {
                    svg.push_str(&format!(" L {:.1} {:.1}", x, y));
                }
            }
            svg.push_str(" Z\" fill=\"currentColor\"/>\n");
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn estimated_len(geometry: &Geometry) -> usize {
    match geometry {
        Geometry::Bars(bars) => 120 + bars.len() * 100,
        Geometry::Envelope(vertices) => 160 + vertices.len() * 16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::build;
    use crate::waveform::summary::Summary;

    #[test]
    fn root_declares_viewbox_without_pixel_size() {
        let layout = build(&Summary::Energy(vec![0.5; 4]), 10.0);
        let svg = render(&layout);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1000 100\">"
        ));
        assert!(!svg.contains("width=\"1000\""));
        assert!(!svg.contains("height=\"100\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn silence_emits_zero_height_rects() {
        let layout = build(&Summary::Energy(vec![0.0; 10]), 10.0);
        let svg = render(&layout);
        assert_eq!(svg.matches("<rect").count(), 10);
        assert_eq!(svg.matches("height=\"0.00\"").count(), 10);
        assert!(svg.contains("fill=\"currentColor\""));
        assert!(svg.contains("shape-rendering=\"crispEdges\""));
    }

    #[test]
    fn envelope_emits_one_closed_path() {
        let layout = build(&Summary::Peaks(vec![(0.5, -0.5); 8]), 10.0);
        let svg = render(&layout);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("d=\"M 0.0 5.0 L "));
        assert!(svg.contains(" Z\" fill=\"currentColor\"/>"));
    }

    #[test]
    fn output_is_deterministic() {
        let layout = build(&Summary::Peaks(vec![(1.0, -0.3), (0.2, -0.9)]), 5.0);
        assert_eq!(render(&layout), render(&layout));
    }
}
