//! The built-in LEGO brick color table.
//!
//! 44 officially produced brick colors with their published RGB values.
//! Declaration order matters: nearest-color searches resolve ties in favor
//! of the earliest entry, so reordering this table changes output for
//! equidistant inputs.

use super::palette::BrickColor;
use crate::color::Rgb;

/// The fixed LEGO brick palette, in canonical order.
pub const LEGO_COLORS: [BrickColor; 44] = [
    BrickColor::new("Brick Yellow", Rgb::new(236, 217, 185)),
    BrickColor::new("Nougat", Rgb::new(204, 142, 105)),
    BrickColor::new("Bright Red", Rgb::new(180, 0, 0)),
    BrickColor::new("Bright Blue", Rgb::new(0, 85, 191)),
    BrickColor::new("Bright Yellow", Rgb::new(255, 205, 0)),
    BrickColor::new("Black", Rgb::new(27, 42, 52)),
    BrickColor::new("Dark Green", Rgb::new(0, 69, 26)),
    BrickColor::new("Bright Green", Rgb::new(75, 151, 75)),
    BrickColor::new("Dark Orange", Rgb::new(160, 80, 0)),
    BrickColor::new("Medium Blue", Rgb::new(73, 138, 199)),
    BrickColor::new("Bright Orange", Rgb::new(255, 127, 0)),
    BrickColor::new("Bright Bluish Green", Rgb::new(0, 158, 143)),
    BrickColor::new("Bright Yellowish-Green", Rgb::new(193, 223, 0)),
    BrickColor::new("Bright Reddish Violet", Rgb::new(160, 0, 128)),
    BrickColor::new("Sand Blue", Rgb::new(100, 124, 162)),
    BrickColor::new("Sand Yellow", Rgb::new(170, 153, 114)),
    BrickColor::new("Earth Blue", Rgb::new(0, 32, 96)),
    BrickColor::new("Earth Green", Rgb::new(0, 50, 40)),
    BrickColor::new("Sand Green", Rgb::new(120, 144, 130)),
    BrickColor::new("Dark Red", Rgb::new(123, 0, 27)),
    BrickColor::new("Flame Yellowish Orange", Rgb::new(255, 176, 0)),
    BrickColor::new("Reddish Brown", Rgb::new(105, 64, 40)),
    BrickColor::new("Medium Stone Grey", Rgb::new(163, 162, 165)),
    BrickColor::new("Dark Stone Grey", Rgb::new(99, 95, 98)),
    BrickColor::new("Light Stone Grey", Rgb::new(229, 228, 223)),
    BrickColor::new("Light Royal Blue", Rgb::new(180, 210, 228)),
    BrickColor::new("Bright Purple", Rgb::new(123, 0, 123)),
    BrickColor::new("Light Purple", Rgb::new(220, 178, 229)),
    BrickColor::new("Cool Yellow", Rgb::new(255, 236, 108)),
    BrickColor::new("Dark Purple", Rgb::new(85, 0, 85)),
    BrickColor::new("Light Nougat", Rgb::new(255, 223, 196)),
    BrickColor::new("Dark Brown", Rgb::new(62, 32, 10)),
    BrickColor::new("Medium Nougat", Rgb::new(174, 122, 89)),
    BrickColor::new("Dark Azur", Rgb::new(32, 108, 137)),
    BrickColor::new("Medium Azur", Rgb::new(104, 195, 226)),
    BrickColor::new("Aqua", Rgb::new(175, 232, 225)),
    BrickColor::new("Medium Lavender", Rgb::new(180, 140, 200)),
    BrickColor::new("Lavender", Rgb::new(203, 153, 201)),
    BrickColor::new("White Glow", Rgb::new(247, 247, 247)),
    BrickColor::new("Spring Yellowish Green", Rgb::new(234, 255, 99)),
    BrickColor::new("Olive Green", Rgb::new(91, 110, 53)),
    BrickColor::new("Medium Yellowish Green", Rgb::new(170, 210, 60)),
    BrickColor::new("Vibrant Coral", Rgb::new(255, 115, 119)),
    BrickColor::new("Vibrant Yellow", Rgb::new(255, 239, 0)),
];
