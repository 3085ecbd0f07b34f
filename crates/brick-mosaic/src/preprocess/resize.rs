//! Bilinear image resampling.
//!
//! Separable triangle-filter resampler. When minifying, the filter support
//! is widened by the shrink factor so every source pixel inside a
//! destination cell contributes to the result. The mosaic pipeline depends
//! on this: a grid cell's color must reflect the average of its source
//! area, not a single point-sampled pixel.

use crate::color::Rgb;

/// Per-output-coordinate filter: first contributing source index plus the
/// normalized weight of each contributing source sample.
struct FilterWeights {
    start: usize,
    weights: Vec<f32>,
}

/// Compute triangle-filter weights for one axis.
///
/// Coordinates use pixel-center convention: source sample `j` sits at
/// `j + 0.5`, destination sample `i` maps back to `(i + 0.5) * scale`.
/// Weights are normalized to sum to 1, so solid areas resample exactly.
fn triangle_weights(src_len: u32, dst_len: u32) -> Vec<FilterWeights> {
    let scale = src_len as f32 / dst_len as f32;
    // Widen the kernel when shrinking; keep radius 1.0 when enlarging
    let filter_scale = scale.max(1.0);
    let support = filter_scale;

    (0..dst_len)
        .map(|i| {
            let center = (i as f32 + 0.5) * scale;
            let start = (center - support).floor().max(0.0) as usize;
            let end = ((center + support).ceil() as usize).min(src_len as usize);

            let mut weights: Vec<f32> = (start..end)
                .map(|j| {
                    let t = ((j as f32 + 0.5) - center) / filter_scale;
                    (1.0 - t.abs()).max(0.0)
                })
                .collect();

            let sum: f32 = weights.iter().sum();
            // sum > 0 always holds: the sample nearest the center has a
            // positive weight. Guard anyway so a degenerate future edit
            // fails visibly instead of dividing by zero.
            debug_assert!(sum > 0.0, "empty filter window at output {i}");
            if sum > 0.0 {
                for w in &mut weights {
                    *w /= sum;
                }
            }

            FilterWeights { start, weights }
        })
        .collect()
}

/// Resample an image to new dimensions with a bilinear (triangle) filter.
///
/// Deterministic: identical inputs produce identical outputs. Accumulation
/// is f32 with round-to-nearest on output.
///
/// # Panics (debug only)
///
/// Debug-asserts that `pixels.len() == width * height` and that all four
/// dimensions are nonzero. Callers validate before invoking.
pub fn resize_bilinear(
    pixels: &[Rgb],
    width: u32,
    height: u32,
    new_width: u32,
    new_height: u32,
) -> Vec<Rgb> {
    debug_assert!(width > 0 && height > 0, "source dimensions must be nonzero");
    debug_assert!(
        new_width > 0 && new_height > 0,
        "target dimensions must be nonzero"
    );
    debug_assert_eq!(
        pixels.len(),
        width as usize * height as usize,
        "pixel buffer length must match dimensions"
    );

    let x_filters = triangle_weights(width, new_width);
    let y_filters = triangle_weights(height, new_height);

    // Horizontal pass: (width x height) -> (new_width x height), f32 planes
    let w = width as usize;
    let nw = new_width as usize;
    let mut horizontal = vec![[0.0f32; 3]; nw * height as usize];
    for y in 0..height as usize {
        let row = &pixels[y * w..y * w + w];
        for (x, filter) in x_filters.iter().enumerate() {
            let mut acc = [0.0f32; 3];
            for (k, &weight) in filter.weights.iter().enumerate() {
                let p = row[filter.start + k];
                acc[0] += weight * p.r as f32;
                acc[1] += weight * p.g as f32;
                acc[2] += weight * p.b as f32;
            }
            horizontal[y * nw + x] = acc;
        }
    }

    // Vertical pass: (new_width x height) -> (new_width x new_height)
    let mut out = Vec::with_capacity(nw * new_height as usize);
    for filter in &y_filters {
        for x in 0..nw {
            let mut acc = [0.0f32; 3];
            for (k, &weight) in filter.weights.iter().enumerate() {
                let p = horizontal[(filter.start + k) * nw + x];
                acc[0] += weight * p[0];
                acc[1] += weight * p[1];
                acc[2] += weight * p[2];
            }
            out.push(Rgb::new(
                acc[0].round().clamp(0.0, 255.0) as u8,
                acc[1].round().clamp(0.0, 255.0) as u8,
                acc[2].round().clamp(0.0, 255.0) as u8,
            ));
        }
    }

    out
}
