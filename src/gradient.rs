//! Top-to-bottom linear gradient rasters.

use image::{Rgb, RgbImage};
use std::str::FromStr;

/// Default top color, #667eea.
pub const DEFAULT_FROM: Rgb<u8> = Rgb([102, 126, 234]);
/// Default bottom color, #764ba2.
pub const DEFAULT_TO: Rgb<u8> = Rgb([118, 75, 162]);

/// Parse a CSS color string, falling back to `default` when it doesn't parse.
pub fn parse_color(color: &str, default: Rgb<u8>) -> Rgb<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
            ])
        })
        .unwrap_or(default)
}

/// Render a `size` x `size` RGB raster where every pixel of row y has
/// `from + (to - from) * y / size` per channel, truncated to an integer.
///
/// The divisor is the full image height, so the last row stops one step
/// short of `to` rather than reaching it.
pub fn render(size: u32, from: Rgb<u8>, to: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(size, size, |_, y| row_color(y, size, from, to))
}

fn row_color(y: u32, size: u32, from: Rgb<u8>, to: Rgb<u8>) -> Rgb<u8> {
    let t = y as f32 / size as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        lerp(from[0], to[0]),
        lerp(from[1], to[1]),
        lerp(from[2], to[2]),
    ])
}
