//! CIEDE2000 color difference
//!
//! The CIEDE2000 formula is the CIE-recommended perceptual color difference
//! metric. Unlike Euclidean distance in Lab space it corrects for the
//! nonuniform human sensitivity to lightness, chroma and hue, at the cost
//! of a substantially more expensive evaluation.
//!
//! # References
//!
//! Sharma, Wu, Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005). The guarded branches below (zero-chroma hue
//! fallback, hue difference wrapping, mean hue wrapping) follow that
//! formulation exactly; deviating from them produces wrong results for
//! near-neutral colors and hue angles near the 0/360 seam.

use super::lab::Lab;

// 25^7, the constant in the chroma attenuation terms.
const POW25_7: f32 = 6_103_515_625.0;

/// Hue angle of (a', b) in degrees, normalized to 0..360.
///
/// Defined as zero when both components are zero (achromatic input), per
/// the formula's convention.
#[inline]
fn hue_angle(b: f32, a_prime: f32) -> f32 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 difference between two Lab colors.
///
/// Uses unit parametric factors (kL = kC = kH = 1), matching graphic-arts
/// reference conditions. The result is symmetric in its arguments and zero
/// for identical inputs.
///
/// # Example
///
/// ```
/// use brick_mosaic::{delta_e_2000, Lab, Rgb};
///
/// let red = Lab::from(Rgb::new(255, 0, 0));
/// let dark_red = Lab::from(Rgb::new(180, 0, 0));
/// let blue = Lab::from(Rgb::new(0, 85, 191));
///
/// // Red is perceptually much closer to dark red than to blue
/// assert!(delta_e_2000(red, dark_red) < delta_e_2000(red, blue));
/// ```
pub fn delta_e_2000(lhs: Lab, rhs: Lab) -> f32 {
    let (l1, a1, b1) = (lhs.l, lhs.a, lhs.b);
    let (l2, a2, b2) = (rhs.l, rhs.a, rhs.b);

    // Step 1: a-axis rescaling based on mean chroma
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_mean = 0.5 * (c1 + c2);
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = (a1p * a1p + b1 * b1).sqrt();
    let c2p = (a2p * a2p + b2 * b2).sqrt();
    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    // Step 2: differences
    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;

    // Hue difference, undefined when either chroma is zero
    let delta_h_angle = if c1p * c2p == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d.abs() <= 180.0 {
            d
        } else if d > 180.0 {
            d - 360.0
        } else {
            d + 360.0
        }
    };
    let delta_h = 2.0 * (c1p * c2p).sqrt() * (0.5 * delta_h_angle.to_radians()).sin();

    // Step 3: means and weighting functions
    let l_mean = 0.5 * (l1 + l2);
    let cp_mean = 0.5 * (c1p + c2p);

    // Mean hue: when either chroma is zero the plain sum is used; otherwise
    // the average wraps around the 0/360 seam
    let h_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else {
        let sum = h1p + h2p;
        if (h1p - h2p).abs() <= 180.0 {
            0.5 * sum
        } else if sum < 360.0 {
            0.5 * (sum + 360.0)
        } else {
            0.5 * (sum - 360.0)
        }
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();

    let lm = l_mean - 50.0;
    let s_l = 1.0 + 0.015 * lm * lm / (20.0 + lm * lm).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    // Step 4: combine
    let l_term = delta_l / s_l;
    let c_term = delta_c / s_c;
    let h_term = delta_h / s_h;
    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term).sqrt()
}
