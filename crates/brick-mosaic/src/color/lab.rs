//! CIE L\*a\*b\* perceptual color space
//!
//! Lab is a perceptually oriented color space: numeric distances between Lab
//! coordinates approximate perceived color differences. It is the input
//! space for the CIEDE2000 difference formula used in accurate palette
//! matching.
//!
//! # References
//!
//! CIE 15:2004 Colorimetry; sRGB linearization per IEC 61966-2-1.

use super::rgb::Rgb;

/// A color in CIE L\*a\*b\* space, D65 reference white (2° observer).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// For colors converted from 8-bit sRGB, `a` and `b` stay roughly within
/// -128.0..=128.0. Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

// D65 reference white, XYZ normalized so Y = 1.0 for white.
const WHITE_X: f32 = 0.95047;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.08883;

// CIE constants: epsilon = (6/29)^3, kappa = (29/3)^3
const EPSILON: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

impl Lab {
    /// Create a new Lab color from raw components.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_mosaic::Lab;
    ///
    /// // Mid gray: L half way, no chroma
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(gray.l, 50.0);
    /// ```
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a^2 + b^2)`.
    ///
    /// Zero for achromatic (grey) colors.
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Decode one gamma-compressed sRGB channel to linear light.
///
/// Piecewise IEC 61966-2-1 curve. Computed directly rather than via a
/// lookup table: conversion runs once per palette match, not per pixel of a
/// full-resolution image.
#[inline]
fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// XYZ-to-Lab nonlinearity with the CIE guarded branch for small values.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit sRGB color to Lab.
    ///
    /// Pipeline: channel / 255, gamma decode, linear RGB -> XYZ (D65
    /// matrix), XYZ -> Lab. Every u8 input is valid; there are no failure
    /// modes.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_mosaic::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert!(white.a.abs() < 0.01);
    /// assert!(white.b.abs() < 0.01);
    /// ```
    fn from(rgb: Rgb) -> Self {
        // Step 1: gamma decode to linear light
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        // Step 2: linear sRGB to XYZ (D65)
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        // Step 3: XYZ to Lab relative to the reference white
        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
