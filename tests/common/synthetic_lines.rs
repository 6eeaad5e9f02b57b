use grid_extractor::PolarLine;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Hough-like candidates for a square board of `cells x cells` cells drawn
/// edge to edge inside a `size x size` image with a `margin` border.
///
/// Every grid line is reported three times: once exactly, once shifted by two
/// pixels, and once slightly rotated. A few near-diagonal detections are
/// mixed in as noise.
pub fn board_candidates(size: f64, margin: f64, cells: usize) -> Vec<PolarLine> {
    assert!(cells > 0, "board needs at least one cell");
    assert!(size > 2.0 * margin, "margin leaves no room for the board");

    let step = (size - 2.0 * margin) / cells as f64;
    let mut out = Vec::new();
    for i in 0..=cells {
        let offset = margin + step * i as f64;
        out.push(PolarLine::new(offset, 0.0));
        out.push(PolarLine::new(offset, FRAC_PI_2));
    }
    for i in 0..=cells {
        let offset = margin + step * i as f64;
        out.push(PolarLine::new(offset + 2.0, 0.0));
        out.push(PolarLine::new(offset - 2.0, FRAC_PI_2));
        out.push(PolarLine::new(offset, 0.008));
        out.push(PolarLine::new(offset, FRAC_PI_2 - 0.008));
    }
    for k in 0..3 {
        out.push(PolarLine::new(
            size * 0.3 * (k + 1) as f64,
            FRAC_PI_4 + 0.1 * k as f64,
        ));
    }
    out
}

/// Number of candidates in [`board_candidates`] that belong to a grid family.
pub fn board_family_candidates(cells: usize) -> usize {
    6 * (cells + 1)
}
